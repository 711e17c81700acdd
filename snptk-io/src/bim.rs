use std::io::Write;
use std::path::Path;

use anyhow::Result;
use snptk_core::models::GenotypeRecord;

use crate::chunked::for_each_parsed;
use crate::consts::DEFAULT_CHUNK_SIZE;
use crate::error::ParseError;
use crate::reader::get_dynamic_reader_w_stdin;

///
/// Parses one line of a PLINK `.bim` file.
///
/// Columns are chromosome, id, genetic distance, position and the two alleles.
/// The allele columns may be missing, the first four may not. Blank lines
/// give `Ok(None)`.
///
pub fn parse_bim_line(line: &str) -> Result<Option<GenotypeRecord>, ParseError> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let mut fields = line.split_whitespace();
    let mut required = |field: &'static str| {
        fields
            .next()
            .map(str::to_string)
            .ok_or_else(|| ParseError::MissingField {
                field,
                line: line.to_string(),
            })
    };

    let chromosome = required("chromosome")?;
    let snp_id = required("snp_id")?;
    let distance = required("distance")?;
    let position = required("position")?;
    let allele_1 = fields.next().unwrap_or_default().to_string();
    let allele_2 = fields.next().unwrap_or_default().to_string();

    Ok(Some(GenotypeRecord {
        chromosome,
        snp_id,
        distance,
        position,
        allele_1,
        allele_2,
    }))
}

///
/// Load every record of a `.bim` file, in file order.
///
/// # Arguments
/// - path: path to the (optionally gzipped) `.bim` file, or `-` for stdin
///
pub fn load_genotype_records(path: &Path) -> Result<Vec<GenotypeRecord>> {
    let reader = get_dynamic_reader_w_stdin(path)?;
    let mut records = Vec::new();

    for_each_parsed(
        reader,
        &path.display().to_string(),
        DEFAULT_CHUNK_SIZE,
        parse_bim_line,
        |record| records.push(record),
    )?;

    Ok(records)
}

pub trait BimWrite {
    ///
    /// Write records as tab separated `.bim` lines
    ///
    /// # Arguments
    /// - writer: where to write the lines to
    fn write_bim<W: Write>(&self, writer: W) -> std::io::Result<()>;
}

impl BimWrite for [GenotypeRecord] {
    fn write_bim<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        for record in self {
            writeln!(writer, "{}", record.as_string())?;
        }
        writer.flush()
    }
}
