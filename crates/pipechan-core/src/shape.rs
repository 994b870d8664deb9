//! Shape transforms: slice / column selection, split, fold / unfold, collapse.
//!
//! All of these take `&self` and return a new channel; the receiver is never
//! modified. `expand` needs the filesystem and lives in `pipechan-io`.

use crate::cell::Cell;
use crate::channel::Channel;
use crate::error::{Error, Result};
use crate::path::{common_prefix, dirname};
use crate::row::Row;

impl Channel {
    /// Cells `[start, start + len)` of every row.
    ///
    /// A negative `start` counts from the end of the row. An out-of-range
    /// `start` or a zero `len` yields an empty channel; `len == None` takes
    /// every column from `start` on.
    pub fn slice(&self, start: isize, len: Option<usize>) -> Channel {
        let width = self.width();
        let signed_width = isize::try_from(width).unwrap_or(isize::MAX);
        let start = if start < 0 { start + signed_width } else { start };
        let Ok(start) = usize::try_from(start) else {
            return Channel::new();
        };
        if start >= width {
            return Channel::new();
        }
        let len = len.unwrap_or(width);
        if len == 0 {
            return Channel::new();
        }
        self.columns(start, start.saturating_add(len).min(width))
    }

    /// The single column at `index`; same rules as [`Channel::slice`].
    pub fn col_at(&self, index: isize) -> Channel {
        self.slice(index, Some(1))
    }

    /// One single-column channel per column, left to right.
    pub fn split(&self) -> Vec<Channel> {
        (0..self.width()).map(|i| self.columns(i, i + 1)).collect()
    }

    /// Cut every row into chunks of `n` cells, each chunk becoming a row.
    ///
    /// ```text
    /// a1 a2 a3 a4            a1 a2
    /// b1 b2 b3 b4  fold(2)   a3 a4
    ///                        b1 b2
    ///                        b3 b4
    /// ```
    pub fn fold(&self, n: usize) -> Result<Channel> {
        let width = self.width();
        if n == 0 || width % n != 0 {
            return Err(Error::NotDivisible {
                op: "fold",
                what: "width",
                size: width,
                factor: n,
            });
        }
        let rows: Vec<Row> = self
            .iter()
            .flat_map(|row| row.cells().chunks(n).map(|c| Row::new(c.to_vec())))
            .collect();
        Ok(Channel::from_rows_unchecked(rows))
    }

    /// Concatenate each group of `n` consecutive rows into one row.
    pub fn unfold(&self, n: usize) -> Result<Channel> {
        let length = self.length();
        if n == 0 || length % n != 0 {
            return Err(Error::NotDivisible {
                op: "unfold",
                what: "length",
                size: length,
                factor: n,
            });
        }
        let rows: Vec<Row> = self
            .rows()
            .chunks(n)
            .map(|group| group.iter().flat_map(|r| r.iter().cloned()).collect())
            .collect();
        Ok(Channel::from_rows_unchecked(rows))
    }

    /// Collapse the paths in column `col` into their shared parent directory.
    ///
    /// With one row the column becomes that path's parent; with several rows
    /// it becomes the parent of their longest common prefix. The result is a
    /// single row built from row 0.
    pub fn collapse(&self, col: usize) -> Result<Channel> {
        let first = self.row(0).ok_or(Error::EmptyChannel("collapse"))?;
        if col >= first.len() {
            return Err(Error::ColumnOutOfRange {
                index: col,
                width: first.len(),
            });
        }
        let dir = if self.length() == 1 {
            dirname(&first[col].to_path_string())
        } else {
            let paths: Vec<String> = self.iter().map(|r| r[col].to_path_string()).collect();
            dirname(&common_prefix(&paths))
        };
        let mut row = first.clone();
        row[col] = Cell::Str(dir);
        Ok(Channel::from_rows_unchecked(vec![row]))
    }

    /// Columns `[start, end)` of every row; empty when the range is empty.
    pub(crate) fn columns(&self, start: usize, end: usize) -> Channel {
        if start >= end {
            return Channel::new();
        }
        let rows = self
            .iter()
            .map(|row| Row::new(row.cells()[start..end].to_vec()))
            .collect();
        Channel::from_rows_unchecked(rows)
    }
}
