//! Rows and the tuplization rule.
//!
//! Tuplization canonicalizes a value into a [`Row`]:
//! - an atomic value (string, number, bool, `Cell`) becomes `(v)`;
//! - a tuple becomes one cell per element, in order;
//! - a `Vec` is **not** spread: it becomes one `Cell::List` holding the whole
//!   sequence. Use a tuple when several columns are intended.

use std::ops::{Index, IndexMut};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cell::Cell;

/// One entry of a channel: an ordered, fixed-length sequence of cells.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(Vec<Cell>);

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self(cells)
    }

    /// A row of `width` copies of `cell`.
    pub fn repeat(cell: Cell, width: usize) -> Self {
        Self(vec![cell; width])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Cell> {
        self.0.get(idx)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.0.iter()
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.0
    }

    /// Append the cells of `other` after the cells of `self`.
    pub fn extend(&mut self, other: Row) {
        self.0.extend(other.0);
    }
}

impl Index<usize> for Row {
    type Output = Cell;

    fn index(&self, idx: usize) -> &Cell {
        &self.0[idx]
    }
}

impl IndexMut<usize> for Row {
    fn index_mut(&mut self, idx: usize) -> &mut Cell {
        &mut self.0[idx]
    }
}

impl From<Vec<Cell>> for Row {
    fn from(cells: Vec<Cell>) -> Self {
        Self(cells)
    }
}

impl FromIterator<Cell> for Row {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Row {
    type Item = Cell;
    type IntoIter = std::vec::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Conversion of a value into its canonical row form. Total and pure.
pub trait Tuplize {
    fn tuplize(self) -> Row;
}

/// Canonicalize `value` into a row.
pub fn tuplize<T: Tuplize>(value: T) -> Row {
    value.tuplize()
}

impl Tuplize for Row {
    fn tuplize(self) -> Row {
        self
    }
}

impl Tuplize for &Row {
    fn tuplize(self) -> Row {
        self.clone()
    }
}

macro_rules! tuplize_atomic {
    ($($t:ty),* $(,)?) => {
        $(
            impl Tuplize for $t {
                fn tuplize(self) -> Row {
                    Row(vec![Cell::from(self)])
                }
            }
        )*
    };
}

tuplize_atomic!(Cell, bool, i32, i64, u32, f32, f64, String, &str, &String, PathBuf, &Path);

impl<T: Into<Cell>> Tuplize for Vec<T> {
    fn tuplize(self) -> Row {
        Row(vec![Cell::from(self)])
    }
}

impl<T: Into<Cell>> Tuplize for Option<T> {
    fn tuplize(self) -> Row {
        Row(vec![Cell::from(self)])
    }
}

macro_rules! tuplize_tuple {
    ($(($($name:ident),+)),* $(,)?) => {
        $(
            impl<$($name: Into<Cell>),+> Tuplize for ($($name,)+) {
                #[allow(non_snake_case)]
                fn tuplize(self) -> Row {
                    let ($($name,)+) = self;
                    Row(vec![$($name.into()),+])
                }
            }
        )*
    };
}

tuplize_tuple! {
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
    (A, B, C, D, E, F, G),
    (A, B, C, D, E, F, G, H),
}
