use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

///
/// Map a `-v` count onto a filter for our crates.
///
pub fn verbosity_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "warn,snptk_core=info,snptk_io=info,snptk=info",
        2 => "warn,snptk_core=debug,snptk_io=debug,snptk=debug",
        _ => "trace",
    }
}

///
/// Send `log` records to stderr. `RUST_LOG`, when set, wins over `-v`.
///
pub fn init_logging(verbose: u8) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(verbosity_filter(verbose))?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_filters_parse() {
        for verbose in 0..5 {
            assert!(EnvFilter::try_new(verbosity_filter(verbose)).is_ok());
        }
    }
}
