use thiserror::Error;

/// Error type for a single malformed input line.
#[derive(Error, Debug)]
pub enum ParseError {
    /// A required column is absent or empty.
    #[error("Missing {field} column in line: {line:?}")]
    MissingField { field: &'static str, line: String },
}
