//! Row-bind, column-bind, merge and insert, with R-style recycling.
//!
//! These are the in-place operators: each takes `&mut self` and hands the
//! receiver back for chaining. A single row or column that fails validation
//! leaves the receiver untouched; a multi-argument call is not atomic, and
//! arguments bound before the failing one stay bound.

use std::ops::{Range, RangeInclusive};

use crate::cell::Cell;
use crate::channel::Channel;
use crate::error::{Error, Result};
use crate::row::{Row, Tuplize};

/// A value accepted by [`Channel::rbind`], normalized into the cells of one row.
///
/// Unlike [`Tuplize`], sequences are spread: `vec![1, 2, 3]` is a row of three
/// cells. Ranges are materialized; atomic values are a single cell.
pub trait IntoCells {
    fn into_cells(self) -> Vec<Cell>;
}

/// A value accepted by [`Channel::cbind`]: one value per row.
///
/// Each value is tuplized, so a tuple value appends several cells to its row.
/// An atomic value is a one-value column and gets recycled.
pub trait IntoColumn {
    fn into_column(self) -> Vec<Row>;
}

macro_rules! atomic_bindings {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntoCells for $t {
                fn into_cells(self) -> Vec<Cell> {
                    vec![Cell::from(self)]
                }
            }

            impl IntoColumn for $t {
                fn into_column(self) -> Vec<Row> {
                    vec![self.tuplize()]
                }
            }
        )*
    };
}

atomic_bindings!(Cell, bool, i32, i64, u32, f32, f64, String, &str, &String);

impl IntoCells for Row {
    fn into_cells(self) -> Vec<Cell> {
        self.into_cells()
    }
}

impl IntoCells for &Row {
    fn into_cells(self) -> Vec<Cell> {
        self.cells().to_vec()
    }
}

impl<T: Into<Cell>> IntoCells for Vec<T> {
    fn into_cells(self) -> Vec<Cell> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Clone + Into<Cell>> IntoCells for &[T] {
    fn into_cells(self) -> Vec<Cell> {
        self.iter().cloned().map(Into::into).collect()
    }
}

impl IntoCells for Range<i64> {
    fn into_cells(self) -> Vec<Cell> {
        self.map(Cell::Int).collect()
    }
}

impl IntoCells for RangeInclusive<i64> {
    fn into_cells(self) -> Vec<Cell> {
        self.map(Cell::Int).collect()
    }
}

macro_rules! tuple_cells {
    ($(($($name:ident),+)),* $(,)?) => {
        $(
            impl<$($name: Into<Cell>),+> IntoCells for ($($name,)+) {
                fn into_cells(self) -> Vec<Cell> {
                    self.tuplize().into_cells()
                }
            }
        )*
    };
}

tuple_cells! {
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
    (A, B, C, D, E, F, G),
    (A, B, C, D, E, F, G, H),
}

impl<T: Tuplize> IntoColumn for Vec<T> {
    fn into_column(self) -> Vec<Row> {
        self.into_iter().map(Tuplize::tuplize).collect()
    }
}

impl IntoColumn for Row {
    fn into_column(self) -> Vec<Row> {
        self.into_iter().map(Tuplize::tuplize).collect()
    }
}

impl IntoColumn for Range<i64> {
    fn into_column(self) -> Vec<Row> {
        self.map(Tuplize::tuplize).collect()
    }
}

impl IntoColumn for RangeInclusive<i64> {
    fn into_column(self) -> Vec<Row> {
        self.map(Tuplize::tuplize).collect()
    }
}

/// Repeat a one-value column `length` times (at least once).
fn recycle_column(mut values: Vec<Row>, length: usize) -> Vec<Row> {
    if values.len() == 1 {
        let only = values.remove(0);
        values = vec![only; length.max(1)];
    }
    values
}

/// All values of a column must contribute the same number of cells.
fn check_column_width(values: &[Row]) -> Result<()> {
    if let Some(first) = values.first() {
        if let Some(bad) = values.iter().find(|v| v.len() != first.len()) {
            return Err(Error::WidthMismatch {
                row: bad.len(),
                width: first.len(),
            });
        }
    }
    Ok(())
}

impl Channel {
    /// Append one row. A single-cell row is recycled to the current width.
    pub fn rbind<R: IntoCells>(&mut self, row: R) -> Result<&mut Self> {
        self.rbind_one(row.into_cells())?;
        Ok(self)
    }

    /// Append several rows, each normalized independently.
    pub fn rbind_rows<I>(&mut self, rows: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: IntoCells,
    {
        for row in rows {
            self.rbind_one(row.into_cells())?;
        }
        Ok(self)
    }

    /// Concatenate the rows of `other` below the rows of `self`.
    pub fn rbind_channel(&mut self, other: &Channel) -> Result<&mut Self> {
        for row in other {
            self.rbind_one(row.cells().to_vec())?;
        }
        Ok(self)
    }

    /// Append one column. A one-value column is recycled across every row.
    pub fn cbind<C: IntoColumn>(&mut self, column: C) -> Result<&mut Self> {
        self.cbind_one(column.into_column())?;
        Ok(self)
    }

    /// Append several columns, left to right.
    pub fn cbind_columns<I>(&mut self, columns: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: IntoColumn,
    {
        for column in columns {
            self.cbind_one(column.into_column())?;
        }
        Ok(self)
    }

    /// Column-bind every column of every given channel, in order.
    pub fn merge<'a, I>(&mut self, channels: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = &'a Channel>,
    {
        for chan in channels {
            for column in chan.split() {
                self.cbind_one(column.into_rows())?;
            }
        }
        Ok(self)
    }

    /// Insert `column` so that its first cell lands at position `index`.
    ///
    /// Later columns shift right; `index >= width` appends at the end. The
    /// receiver is only replaced once the rebuilt channel is complete.
    pub fn insert<C: IntoColumn>(&mut self, index: usize, column: C) -> Result<&mut Self> {
        let values = recycle_column(column.into_column(), self.length());
        let width = self.width();
        let split_at = index.min(width);
        let before = self.columns(0, split_at);
        let after = self.columns(split_at, width);

        let mut rebuilt = Channel::new();
        rebuilt.merge([&before])?;
        rebuilt.cbind_one(values)?;
        rebuilt.merge([&after])?;
        *self = rebuilt;
        Ok(self)
    }

    fn rbind_one(&mut self, cells: Vec<Cell>) -> Result<()> {
        let width = self.width();
        let cells = if cells.len() == 1 {
            vec![cells[0].clone(); width.max(1)]
        } else {
            cells
        };
        if !self.is_empty() && cells.len() != width {
            return Err(Error::WidthMismatch {
                row: cells.len(),
                width,
            });
        }
        self.rows_mut().push(Row::new(cells));
        Ok(())
    }

    pub(crate) fn cbind_one(&mut self, values: Vec<Row>) -> Result<()> {
        let length = self.length();
        let values = recycle_column(values, length);
        check_column_width(&values)?;

        if self.is_empty() {
            self.rows_mut().extend(values);
        } else if values.len() == length {
            for (row, value) in self.rows_mut().iter_mut().zip(values) {
                row.extend(value);
            }
        } else {
            return Err(Error::LengthMismatch {
                column: values.len(),
                length,
            });
        }
        Ok(())
    }
}
