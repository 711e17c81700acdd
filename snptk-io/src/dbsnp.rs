//! dbSNP VCF dumps.
//!
//! Only the `CHROM`, `POS` and `ID` columns are read. `ID` can list several
//! ids separated by `;`, and `.` means the variant has none.
use std::path::Path;

use anyhow::Result;
use fxhash::{FxHashMap, FxHashSet};
use log::info;
use snptk_core::models::coordinate_key;

use crate::chunked::for_each_parsed;
use crate::consts::DEFAULT_CHUNK_SIZE;
use crate::error::ParseError;
use crate::reader::get_dynamic_reader;

/// The fields of a VCF data line snptk cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbSnpEntry {
    pub chromosome: String,
    pub position: String,
    pub snp_ids: Vec<String>,
}

impl DbSnpEntry {
    pub fn coordinate(&self) -> String {
        coordinate_key(&self.chromosome, &self.position)
    }
}

///
/// Parse one VCF line. Header and blank lines give `Ok(None)`.
///
pub fn parse_vcf_line(line: &str) -> Result<Option<DbSnpEntry>, ParseError> {
    if line.trim().is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut fields = line.split('\t');
    let mut required = |field: &'static str| {
        fields
            .next()
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ParseError::MissingField {
                field,
                line: line.to_string(),
            })
    };

    let chromosome = required("CHROM")?;
    let position = required("POS")?;
    let ids = required("ID")?;

    let snp_ids = ids
        .split(';')
        .filter(|id| !id.is_empty() && *id != ".")
        .map(str::to_string)
        .collect();

    Ok(Some(DbSnpEntry {
        chromosome: chromosome.to_string(),
        position: position.to_string(),
        snp_ids,
    }))
}

///
/// Load the current coordinate of every id in `snp_ids`.
///
/// Ids outside the filter are never stored, so memory stays proportional to
/// the batch rather than to dbSNP. When an id occurs on several lines the
/// last one wins.
///
/// # Arguments
/// - path: path to the (optionally gzipped) dbSNP VCF
/// - snp_ids: the ids to keep
///
pub fn load_dbsnp_by_snp_id(
    path: &Path,
    snp_ids: &FxHashSet<String>,
) -> Result<FxHashMap<String, String>> {
    let reader = get_dynamic_reader(path)?;
    let mut coordinates: FxHashMap<String, String> = FxHashMap::default();

    for_each_parsed(
        reader,
        &path.display().to_string(),
        DEFAULT_CHUNK_SIZE,
        |line: &str| -> Result<Option<_>, ParseError> {
            let Some(entry) = parse_vcf_line(line)? else {
                return Ok(None);
            };
            let wanted: Vec<String> = entry
                .snp_ids
                .iter()
                .filter(|id| snp_ids.contains(*id))
                .cloned()
                .collect();

            Ok((!wanted.is_empty()).then(|| (wanted, entry.coordinate())))
        },
        |(wanted, coordinate)| {
            for snp_id in wanted {
                coordinates.insert(snp_id, coordinate.clone());
            }
        },
    )?;

    info!(
        "Found {} of {} ids in {:?}",
        coordinates.len(),
        snp_ids.len(),
        path
    );

    Ok(coordinates)
}

///
/// Load the ids recorded at every coordinate key in `coordinates`.
///
/// Ids accumulate in file order when a coordinate occurs on several lines.
///
/// # Arguments
/// - path: path to the (optionally gzipped) dbSNP VCF
/// - coordinates: the `<chromosome>:<position>` keys to keep
///
pub fn load_dbsnp_by_coordinate(
    path: &Path,
    coordinates: &FxHashSet<String>,
) -> Result<FxHashMap<String, Vec<String>>> {
    let reader = get_dynamic_reader(path)?;
    let mut index: FxHashMap<String, Vec<String>> = FxHashMap::default();

    for_each_parsed(
        reader,
        &path.display().to_string(),
        DEFAULT_CHUNK_SIZE,
        |line: &str| -> Result<Option<_>, ParseError> {
            Ok(parse_vcf_line(line)?
                .filter(|entry| !entry.snp_ids.is_empty())
                .map(|entry| (entry.coordinate(), entry.snp_ids))
                .filter(|(coordinate, _)| coordinates.contains(coordinate)))
        },
        |(coordinate, snp_ids)| index.entry(coordinate).or_default().extend(snp_ids),
    )?;

    info!(
        "Found {} of {} coordinates in {:?}",
        index.len(),
        coordinates.len(),
        path
    );

    Ok(index)
}
