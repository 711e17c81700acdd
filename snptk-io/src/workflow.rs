//! End-to-end runs of the two snptk commands.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use fxhash::FxHashSet;
use log::info;
use snptk_core::consts::DEFAULT_MAX_MERGE_DEPTH;
use snptk_core::{
    EditInstructions, RelabelSummary, Resolver, build_triples, classify, identifiers_of_interest,
    relabel_by_coordinate,
};

use crate::bim::{BimWrite, load_genotype_records};
use crate::dbsnp::{load_dbsnp_by_coordinate, load_dbsnp_by_snp_id};
use crate::edits::EditWrite;
use crate::history::{load_rs_merge, load_snp_history};
use crate::progress::spinner;

#[derive(Debug, Clone)]
pub struct UpdateOptions {
    pub bim: PathBuf,
    pub dbsnp: PathBuf,
    pub snp_history: PathBuf,
    pub rs_merge: PathBuf,
    pub output_dir: PathBuf,
    /// `0` disables the cap
    pub max_merge_depth: usize,
    pub show_progress: bool,
}

impl UpdateOptions {
    pub fn new(
        bim: impl Into<PathBuf>,
        dbsnp: impl Into<PathBuf>,
        snp_history: impl Into<PathBuf>,
        rs_merge: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        UpdateOptions {
            bim: bim.into(),
            dbsnp: dbsnp.into(),
            snp_history: snp_history.into(),
            rs_merge: rs_merge.into(),
            output_dir: output_dir.into(),
            max_merge_depth: DEFAULT_MAX_MERGE_DEPTH,
            show_progress: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CoordOptions {
    pub bim: PathBuf,
    pub dbsnp: PathBuf,
    /// stdout when `None`
    pub output: Option<PathBuf>,
    pub show_progress: bool,
}

///
/// Work out which ids of a genotype map to delete, rename or move, and write
/// the four edit lists into `output_dir`.
///
/// The edit files are only written once every record has been classified,
/// so a failing run leaves no partial output behind.
///
pub fn update_snpid_and_position(options: &UpdateOptions) -> Result<EditInstructions> {
    let pb = spinner("Loading dbSNP history...", options.show_progress)?;
    let (deletions, merges) = rayon::join(
        || load_snp_history(&options.snp_history),
        || load_rs_merge(&options.rs_merge),
    );
    let deletions = deletions?;
    let merges = merges?;
    pb.finish_and_clear();

    let records = load_genotype_records(&options.bim)?;
    info!("Loaded {} records from {:?}", records.len(), options.bim);

    let resolver = Resolver::new(&deletions, &merges).with_max_depth(options.max_merge_depth);
    let triples = build_triples(&records, &resolver)?;

    let pb = spinner("Loading dbSNP coordinates...", options.show_progress)?;
    let reference = load_dbsnp_by_snp_id(&options.dbsnp, &identifiers_of_interest(&triples))?;
    pb.finish_and_clear();

    let edits = classify(&triples, &reference)?;

    edits.write_edits(&options.output_dir).with_context(|| {
        format!(
            "There was an error writing edit lists to {:?}",
            options.output_dir
        )
    })?;

    info!(
        "{} to delete, {} to rename, {} to reposition, {} to move to another chromosome",
        edits.to_delete.len(),
        edits.to_rename.len(),
        edits.to_reposition.len(),
        edits.to_rechromosome.len()
    );

    Ok(edits)
}

///
/// Replace the id of every genotype record with the dbSNP id found at its
/// coordinate, and write the records back out as `.bim` lines.
///
pub fn snpid_from_coord(options: &CoordOptions) -> Result<RelabelSummary> {
    let mut records = load_genotype_records(&options.bim)?;
    let coordinates: FxHashSet<String> = records.iter().map(|r| r.coordinate()).collect();

    let pb = spinner("Loading dbSNP coordinates...", options.show_progress)?;
    let index = load_dbsnp_by_coordinate(&options.dbsnp, &coordinates)?;
    pb.finish_and_clear();

    let summary = relabel_by_coordinate(&mut records, &index);

    let writer: Box<dyn Write> = match &options.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("Failed to create file: {:?}", path))?,
        ),
        None => Box::new(std::io::stdout().lock()),
    };
    records
        .write_bim(BufWriter::new(writer))
        .context("There was an error writing the relabelled records")?;

    info!(
        "{} ids rewritten, {} ambiguous coordinates, {} unmatched coordinates",
        summary.rewritten, summary.ambiguous, summary.unmatched
    );

    Ok(summary)
}
