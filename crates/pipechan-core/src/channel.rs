//! The channel container.
//!
//! Invariant: every row has the same number of cells. Width is 0 while the
//! channel is empty and is fixed by the first row appended. All ingestion
//! paths go through [`Channel::push_row`] (exact width) or the bind
//! operators in [`crate::bind`] (recycling), so the invariant can only be
//! broken by a failing call, which leaves the rows untouched. Deserialization
//! replays every row through `push_row` as well.

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize, Serializer};

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::row::{Row, Tuplize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Vec<Row>")]
pub struct Channel {
    rows: Vec<Row>,
}

impl Channel {
    /// An empty channel (width 0, length 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Tuplize each value and append it as a row, in input order.
    ///
    /// Rows are not recycled here; a value whose row width disagrees with the
    /// first one fails with `WidthMismatch`.
    pub fn create<I, T>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Tuplize,
    {
        let mut ret = Self::new();
        for v in values {
            ret.push_row(v.tuplize())?;
        }
        Ok(ret)
    }

    /// Build a channel by merging the given channels side by side.
    pub fn from_channels<'a, I>(channels: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Channel>,
    {
        let mut ret = Self::new();
        ret.merge(channels)?;
        Ok(ret)
    }

    /// Number of cells per row; 0 for an empty channel.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Row::len)
    }

    /// Number of rows.
    pub fn length(&self) -> usize {
        self.rows.len()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, idx: usize) -> Option<&Row> {
        self.rows.get(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    /// Drop every row; the width becomes undefined again.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Append a row as-is. The row must match the current width, or establish
    /// it when the channel is empty.
    pub fn push_row(&mut self, row: Row) -> Result<()> {
        if !self.rows.is_empty() && row.len() != self.width() {
            return Err(Error::WidthMismatch {
                row: row.len(),
                width: self.width(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Flatten a single-column channel: `[(a,), (b,)]` -> `[a, b]`.
    pub fn to_list(&self) -> Result<Vec<Cell>> {
        if self.width() != 1 {
            return Err(Error::InvalidWidth {
                width: self.width(),
            });
        }
        Ok(self.rows.iter().map(|r| r[0].clone()).collect())
    }

    pub(crate) fn rows_mut(&mut self) -> &mut Vec<Row> {
        &mut self.rows
    }

    pub(crate) fn from_rows_unchecked(rows: Vec<Row>) -> Self {
        Self { rows }
    }
}

impl TryFrom<Vec<Row>> for Channel {
    type Error = Error;

    fn try_from(rows: Vec<Row>) -> Result<Self> {
        let mut ret = Self::new();
        for row in rows {
            ret.push_row(row)?;
        }
        Ok(ret)
    }
}

/// Serialized as the bare list of rows.
impl Serialize for Channel {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.rows.serialize(serializer)
    }
}

impl Index<usize> for Channel {
    type Output = Row;

    fn index(&self, idx: usize) -> &Row {
        &self.rows[idx]
    }
}

impl IntoIterator for Channel {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a Channel {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Tab-separated rendering, one line per row.
impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str("\t")?;
                }
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
