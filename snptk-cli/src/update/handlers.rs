use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ArgMatches;

use snptk_io::{UpdateOptions, update_snpid_and_position};

fn path_arg(matches: &ArgMatches, name: &str) -> Result<PathBuf> {
    matches
        .get_one::<PathBuf>(name)
        .cloned()
        .with_context(|| format!("--{} is required", name.replace('_', "-")))
}

pub fn run_update(matches: &ArgMatches, show_progress: bool) -> Result<()> {
    let mut options = UpdateOptions::new(
        path_arg(matches, "bim")?,
        path_arg(matches, "dbsnp")?,
        path_arg(matches, "snp_history")?,
        path_arg(matches, "rs_merge")?,
        path_arg(matches, "output_dir")?,
    );

    if let Some(max_merge_depth) = matches.get_one::<usize>("max_merge_depth") {
        options.max_merge_depth = *max_merge_depth;
    }
    options.show_progress = show_progress;

    update_snpid_and_position(&options)?;

    Ok(())
}
