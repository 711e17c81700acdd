use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ArgMatches;

use snptk_io::{CoordOptions, snpid_from_coord};

pub fn run_coord(matches: &ArgMatches, show_progress: bool) -> Result<()> {
    let bim = matches
        .get_one::<PathBuf>("bim")
        .cloned()
        .context("A path to a .bim file is required.")?;

    let dbsnp = matches
        .get_one::<PathBuf>("dbsnp")
        .cloned()
        .context("A path to a dbSNP VCF is required.")?;

    let options = CoordOptions {
        bim,
        dbsnp,
        output: matches.get_one::<PathBuf>("output").cloned(),
        show_progress,
    };

    snpid_from_coord(&options)?;

    Ok(())
}
