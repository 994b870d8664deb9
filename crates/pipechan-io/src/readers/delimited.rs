//! Delimited text -> `Channel`.
//!
//! Format: one row per line, cells separated by the delimiter (tab by
//! default). No header, no quoting, no comments. A line that is blank after
//! trimming is skipped; every other line is trimmed, split, and row-bound, so
//! the first line fixes the width and a one-cell line is recycled.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use pipechan_core::{Cell, Channel};

use crate::error::Result;

pub fn from_file(path: impl AsRef<Path>, delimiter: &str) -> Result<Channel> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let chan = read_lines(BufReader::new(file), delimiter, &path.display().to_string())?;
    tracing::debug!(
        path = %path.display(),
        rows = chan.length(),
        width = chan.width(),
        "read delimited file"
    );
    Ok(chan)
}

/// Same as [`from_file`] for any reader; errors are labelled `<reader>:N`.
pub fn from_reader<R: Read>(reader: R, delimiter: &str) -> Result<Channel> {
    read_lines(BufReader::new(reader), delimiter, "<reader>")
}

fn read_lines<R: BufRead>(reader: R, delimiter: &str, label: &str) -> Result<Channel> {
    if delimiter.is_empty() {
        return Err(pipechan_core::Error::Config("delimiter must not be empty".into()).into());
    }
    let mut ret = Channel::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let cells: Vec<Cell> = line.split(delimiter).map(Cell::from).collect();
        ret.rbind(cells)
            .map_err(|e| e.with_context(format!("{}:{}", label, idx + 1)))?;
    }
    Ok(ret)
}
