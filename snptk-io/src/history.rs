//! dbSNP history tables (`SNPHistory.bcp` and `RsMergeArch.bcp`).
//!
//! Both are tab separated dumps that store ids as bare numbers.
use std::path::Path;

use anyhow::Result;
use log::info;
use snptk_core::consts::RS_PREFIX;
use snptk_core::models::{DeletionSet, MergeMap};

use crate::chunked::for_each_parsed;
use crate::consts::DEFAULT_CHUNK_SIZE;
use crate::error::ParseError;
use crate::reader::get_dynamic_reader;

const RS_HIGH_COLUMN: usize = 0;
const RS_LOW_COLUMN: usize = 1;
const RS_CURRENT_COLUMN: usize = 6;
const HISTORY_COMMENT_COLUMN: usize = 4;

/// Comments that mark a history row as a re-activation rather than a deletion.
const REACTIVATION_MARKERS: [&str; 2] = ["re-activ", "reactiv"];

fn rs_id(raw: &str) -> String {
    let raw = raw.trim();
    if raw.starts_with(RS_PREFIX) {
        raw.to_string()
    } else {
        format!("{RS_PREFIX}{raw}")
    }
}

fn required_column<'a>(
    columns: &[&'a str],
    index: usize,
    field: &'static str,
    line: &str,
) -> Result<&'a str, ParseError> {
    columns
        .get(index)
        .copied()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ParseError::MissingField {
            field,
            line: line.to_string(),
        })
}

///
/// Parse one `SNPHistory` row into the id it deletes.
///
/// Rows whose comment (the fifth column) mentions a re-activation give
/// `Ok(None)`, as do blank lines.
///
pub fn parse_snp_history_line(line: &str) -> Result<Option<String>, ParseError> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let columns: Vec<&str> = line.split('\t').collect();
    let snp_id = required_column(&columns, 0, "snp_id", line)?;

    let comment = columns
        .get(HISTORY_COMMENT_COLUMN)
        .map(|comment| comment.to_lowercase())
        .unwrap_or_default();
    if REACTIVATION_MARKERS
        .iter()
        .any(|marker| comment.contains(marker))
    {
        return Ok(None);
    }

    Ok(Some(rs_id(snp_id)))
}

///
/// Parse one `RsMergeArch` row into an (obsolete id, current id) pair.
///
/// The target is `rsCurrent` when the row has one, `rsLow` otherwise.
///
pub fn parse_rs_merge_line(line: &str) -> Result<Option<(String, String)>, ParseError> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let columns: Vec<&str> = line.split('\t').collect();
    let rs_high = required_column(&columns, RS_HIGH_COLUMN, "rsHigh", line)?;
    let target = match required_column(&columns, RS_CURRENT_COLUMN, "rsCurrent", line) {
        Ok(rs_current) => rs_current,
        Err(_) => required_column(&columns, RS_LOW_COLUMN, "rsLow", line)?,
    };

    Ok(Some((rs_id(rs_high), rs_id(target))))
}

///
/// Load the set of deleted ids from a `SNPHistory` table.
///
pub fn load_snp_history(path: &Path) -> Result<DeletionSet> {
    let reader = get_dynamic_reader(path)?;
    let mut deletions = DeletionSet::new();

    for_each_parsed(
        reader,
        &path.display().to_string(),
        DEFAULT_CHUNK_SIZE,
        parse_snp_history_line,
        |snp_id| {
            deletions.insert(snp_id);
        },
    )?;

    info!("Loaded {} deleted ids from {:?}", deletions.len(), path);
    Ok(deletions)
}

///
/// Load the merge map from an `RsMergeArch` table.
///
/// Rows are applied in file order, so a later merge of the same id replaces
/// an earlier one.
///
pub fn load_rs_merge(path: &Path) -> Result<MergeMap> {
    let reader = get_dynamic_reader(path)?;
    let mut merges = MergeMap::new();

    for_each_parsed(
        reader,
        &path.display().to_string(),
        DEFAULT_CHUNK_SIZE,
        parse_rs_merge_line,
        |(from, to)| {
            merges.insert(from, to);
        },
    )?;

    info!("Loaded {} merged ids from {:?}", merges.len(), path);
    Ok(merges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("3\t2005-05-24 14:43:00\t2005-05-24 14:43:00\t2005-05-24 14:43:00\t", Some("rs3"))]
    #[case("42\t\t\t\tWithdrawn by submitter", Some("rs42"))]
    #[case("8\t\t\t\tRe-activated in build 130", None)]
    #[case("8\t\t\t\tREACTIVATED", None)]
    #[case("8\t\t\t\tRe-activated\t", None)]
    #[case("9\t\t\t\t\tRe-activated", Some("rs9"))]
    #[case("77", Some("rs77"))]
    #[case("", None)]
    fn test_parse_snp_history_line(#[case] line: &str, #[case] expected: Option<&str>) {
        assert_eq!(
            parse_snp_history_line(line).unwrap(),
            expected.map(String::from)
        );
    }

    #[rstest]
    #[case("4\t40\t130\t0\t2008\t2008\t41\t0\t", ("rs4", "rs41"))]
    #[case("4\t40\t130\t0\t2008\t2008\t\t0\t", ("rs4", "rs40"))]
    #[case("4\t40", ("rs4", "rs40"))]
    fn test_parse_rs_merge_line(#[case] line: &str, #[case] expected: (&str, &str)) {
        assert_eq!(
            parse_rs_merge_line(line).unwrap(),
            Some((expected.0.to_string(), expected.1.to_string()))
        );
    }

    #[rstest]
    #[case("\t40\t130")]
    #[case("4")]
    fn test_parse_rs_merge_line_missing_columns(#[case] line: &str) {
        assert!(parse_rs_merge_line(line).is_err());
    }

    #[rstest]
    fn test_load_rs_merge_last_write_wins() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("RsMergeArch.bcp");
        std::fs::write(&path, "6\t59\t120\t0\t\t\t59\t0\t\n6\t60\t125\t0\t\t\t60\t0\t\n").unwrap();

        let merges = load_rs_merge(&path).unwrap();

        assert_eq!(merges.len(), 1);
        assert_eq!(merges.get("rs6"), Some("rs60"));
    }
}
