//! Chunked parallel line parsing.
//!
//! Lines are read sequentially, parsed in parallel one chunk at a time, and
//! handed to the caller in file order. Callers fold the results themselves,
//! which keeps "last line wins" and "append in order" semantics intact.
use std::io::BufRead;

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::error::ParseError;

///
/// Parse every line of `reader` with `parse` and feed the results to `sink`.
///
/// `parse` returns `Ok(None)` for lines that should be skipped (headers,
/// blank lines, or records outside a filter).
///
/// # Arguments
/// - reader: the lines to parse
/// - source_name: file name used in error messages
/// - chunk_size: number of lines parsed in parallel at a time
/// - parse: line parser, run on the rayon pool
/// - sink: receives parsed values in file order
///
pub fn for_each_parsed<R, T, P, S>(
    reader: R,
    source_name: &str,
    chunk_size: usize,
    parse: P,
    mut sink: S,
) -> Result<()>
where
    R: BufRead,
    T: Send,
    P: Fn(&str) -> Result<Option<T>, ParseError> + Sync,
    S: FnMut(T),
{
    let chunk_size = chunk_size.max(1);
    let mut chunk: Vec<(usize, String)> = Vec::with_capacity(chunk_size);

    let mut flush = |chunk: &mut Vec<(usize, String)>| -> Result<()> {
        let parsed = chunk
            .par_iter()
            .map(|(index, line)| {
                parse(line.as_str())
                    .with_context(|| format!("{}: line {}", source_name, index + 1))
            })
            .collect::<Result<Vec<Option<T>>>>()?;

        parsed.into_iter().flatten().for_each(&mut sink);
        chunk.clear();
        Ok(())
    };

    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!("{}: there was an error reading line {}", source_name, index + 1)
        })?;
        chunk.push((index, line));

        if chunk.len() == chunk_size {
            flush(&mut chunk)?;
        }
    }

    if !chunk.is_empty() {
        flush(&mut chunk)?;
    }

    Ok(())
}
