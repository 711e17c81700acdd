use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

///
/// Spinner shown on stderr while a file loads. Hidden when `visible` is false.
///
pub fn spinner(message: &str, visible: bool) -> Result<ProgressBar> {
    if !visible {
        return Ok(ProgressBar::hidden());
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed}] {msg}")?
            .tick_strings(&["-", "\\", "|", "/", "-"]),
    );
    spinner.enable_steady_tick(std::time::Duration::from_millis(120));
    spinner.set_message(message.to_string());
    Ok(spinner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case(true)]
    #[case(false)]
    fn test_spinner_template_is_valid(#[case] visible: bool) {
        let pb = spinner("Loading...", visible).unwrap();
        if !visible {
            assert!(pb.is_hidden());
        }
        pb.finish_and_clear();
    }
}
