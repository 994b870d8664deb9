//! Test data generation utilities for the pipechan test suite
#![allow(dead_code)]

use pipechan_core::{Cell, Channel};
use std::fs;
use std::io::Write;
use std::path::Path;

/// A `rows` x `width` channel of string cells `r{i}c{j}`.
pub fn grid(rows: usize, width: usize) -> Channel {
    let mut chan = Channel::new();
    for i in 0..rows {
        let cells: Vec<Cell> = (0..width)
            .map(|j| Cell::Str(format!("r{}c{}", i, j)))
            .collect();
        chan.push_row(cells.into_iter().collect())
            .expect("grid rows share a width");
    }
    chan
}

/// Create empty files named `names` inside `dir`.
pub fn touch(dir: &Path, names: &[&str]) {
    for name in names {
        fs::File::create(dir.join(name)).expect("Failed to create fixture file");
    }
}

/// Write `lines` to `path`, each followed by a newline.
pub fn write_lines(path: &Path, lines: &[&str]) {
    let mut file = fs::File::create(path).expect("Failed to create fixture file");
    for line in lines {
        writeln!(file, "{}", line).expect("Failed to write line");
    }
}

/// Render every row as its cells' `Display` strings.
pub fn as_strings(chan: &Channel) -> Vec<Vec<String>> {
    chan.iter()
        .map(|row| row.iter().map(|c| c.to_string()).collect())
        .collect()
}

/// Path as the string form used in channel cells.
pub fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
