use std::path::PathBuf;

use clap::{Arg, Command, arg, value_parser};

use snptk_core::consts::DEFAULT_MAX_MERGE_DEPTH;

pub const UPDATE_CMD: &str = "update-snpid-and-position";

pub fn create_update_cli() -> Command {
    Command::new(UPDATE_CMD)
        .author("snptk")
        .about("Work out which SNP ids of a .bim file to delete, rename or move to match dbSNP.")
        .arg(
            arg!(--bim <bim>)
                .help("PLINK .bim file to update ('-' for stdin)")
                .value_parser(value_parser!(PathBuf))
                .required(true),
        )
        .arg(
            arg!(--dbsnp <dbsnp>)
                .help("dbSNP VCF dump (plain or gzipped)")
                .value_parser(value_parser!(PathBuf))
                .required(true),
        )
        .arg(
            Arg::new("snp_history")
                .long("snp-history")
                .value_name("snp_history")
                .help("dbSNP SNPHistory.bcp table (plain or gzipped)")
                .value_parser(value_parser!(PathBuf))
                .required(true),
        )
        .arg(
            Arg::new("rs_merge")
                .long("rs-merge")
                .value_name("rs_merge")
                .help("dbSNP RsMergeArch.bcp table (plain or gzipped)")
                .value_parser(value_parser!(PathBuf))
                .required(true),
        )
        .arg(
            Arg::new("max_merge_depth")
                .long("max-merge-depth")
                .value_name("max_merge_depth")
                .help(format!(
                    "Give up on an id after following this many merges, 0 never gives up [default: {DEFAULT_MAX_MERGE_DEPTH}]"
                ))
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("output_dir")
                .help("Directory to write the four edit lists to")
                .value_parser(value_parser!(PathBuf))
                .required(true),
        )
}
