mod coord;
mod logging;
mod update;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command, value_parser};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "snptk";
    pub const BIN_NAME: &str = "snptk";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Bring the SNP ids and coordinates of genotype files up to date with dbSNP.")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("More logging (-v info, -vv debug, -vvv trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Hide progress spinners")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("threads")
                .long("threads")
                .help("Threads used to parse input files (default: all cores)")
                .value_parser(value_parser!(usize))
                .global(true),
        )
        .subcommand(update::cli::create_update_cli())
        .subcommand(coord::cli::create_coord_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    logging::init_logging(matches.get_count("verbose"))?;

    if let Some(threads) = matches.get_one::<usize>("threads") {
        rayon::ThreadPoolBuilder::new()
            .num_threads(*threads)
            .build_global()
            .context("Failed to set up the thread pool")?;
    }

    let show_progress = !matches.get_flag("quiet");

    match matches.subcommand() {
        //
        // UPDATE SNP IDS AND POSITIONS
        //
        Some((update::cli::UPDATE_CMD, matches)) => {
            update::handlers::run_update(matches, show_progress)?;
        }

        //
        // SNP IDS FROM COORDINATES
        //
        Some((coord::cli::COORD_CMD, matches)) => {
            coord::handlers::run_coord(matches, show_progress)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    log::debug!("{} {} done", consts::PKG_NAME, consts::VERSION);

    Ok(())
}
