use std::path::PathBuf;

use clap::{Command, arg, value_parser};

pub const COORD_CMD: &str = "snpid-from-coord";

pub fn create_coord_cli() -> Command {
    Command::new(COORD_CMD)
        .author("snptk")
        .about("Rewrite the SNP ids of a .bim file with the dbSNP id found at each coordinate.")
        .arg(
            arg!(--bim <bim>)
                .help("PLINK .bim file to relabel ('-' for stdin)")
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
            arg!(--output <output>)
                .help("Where to write the relabelled .bim (default: stdout)")
                .value_parser(value_parser!(PathBuf)),
        )
}
