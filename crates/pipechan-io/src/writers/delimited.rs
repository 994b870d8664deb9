//! `Channel` -> delimited text, the mirror image of `readers::delimited`.
//!
//! Cells are written with their `Display` form and never quoted, so a channel
//! written here reads back through `from_file` unchanged as long as no cell
//! contains the delimiter or a newline.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv as csv_crate;
use pipechan_core::{Channel, Error as ChannelError, Row};

use crate::error::Result;

pub struct DelimitedWriter<W: Write> {
    wtr: csv_crate::Writer<W>,
    rows_written: usize,
}

impl DelimitedWriter<File> {
    pub fn to_path(path: impl AsRef<Path>, delimiter: &str) -> Result<Self> {
        let file = File::create(path)?;
        Self::to_writer(file, delimiter)
    }
}

impl<W: Write> DelimitedWriter<W> {
    /// The delimiter must be a single byte.
    pub fn to_writer(writer: W, delimiter: &str) -> Result<Self> {
        let &[byte] = delimiter.as_bytes() else {
            return Err(ChannelError::Config(format!(
                "delimited output needs a one-byte delimiter, got {:?}",
                delimiter
            ))
            .into());
        };
        let wtr = csv_crate::WriterBuilder::new()
            .delimiter(byte)
            .has_headers(false)
            .flexible(true)
            .quote_style(csv_crate::QuoteStyle::Never)
            .terminator(csv_crate::Terminator::Any(b'\n'))
            .from_writer(writer);
        Ok(Self {
            wtr,
            rows_written: 0,
        })
    }

    pub fn write_row(&mut self, row: &Row) -> Result<()> {
        self.wtr
            .write_record(row.iter().map(|c| c.to_string()))?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn write_channel(&mut self, chan: &Channel) -> Result<()> {
        for row in chan {
            self.write_row(row)?;
        }
        self.wtr.flush()?;
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    pub fn into_inner(self) -> Result<W> {
        self.wtr
            .into_inner()
            .map_err(|e| std::io::Error::new(e.error().kind(), e.to_string()).into())
    }
}

/// Write `chan` to `path`, one delimited line per row.
pub fn to_file(chan: &Channel, path: impl AsRef<Path>, delimiter: &str) -> Result<()> {
    let mut w = DelimitedWriter::to_path(path, delimiter)?;
    w.write_channel(chan)
}
