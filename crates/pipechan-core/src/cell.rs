//! Cell values carried by channel rows.
//!
//! A cell is opaque to the reshape algebra: operators move cells around but
//! never inspect them, apart from `collapse`, which reads a cell as a path.
//! `List` is the sequence-wrapped variant produced when a whole list is
//! tuplized into one cell.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Cell>),
}

impl Cell {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Cell::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Render the cell as a filesystem path string.
    ///
    /// Strings are used verbatim; other variants use their `Display` form.
    pub fn to_path_string(&self) -> String {
        match self {
            Cell::Str(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => Ok(()),
            Cell::Bool(b) => write!(f, "{b}"),
            Cell::Int(i) => write!(f, "{i}"),
            Cell::Float(x) => write!(f, "{x}"),
            Cell::Str(s) => f.write_str(s),
            Cell::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

macro_rules! cell_from {
    ($($t:ty => |$v:ident| $e:expr),* $(,)?) => {
        $(
            impl From<$t> for Cell {
                fn from($v: $t) -> Self {
                    $e
                }
            }
        )*
    };
}

cell_from! {
    bool => |v| Cell::Bool(v),
    i32 => |v| Cell::Int(i64::from(v)),
    i64 => |v| Cell::Int(v),
    u32 => |v| Cell::Int(i64::from(v)),
    f32 => |v| Cell::Float(f64::from(v)),
    f64 => |v| Cell::Float(v),
    String => |v| Cell::Str(v),
    &str => |v| Cell::Str(v.to_string()),
    &String => |v| Cell::Str(v.clone()),
    PathBuf => |v| Cell::Str(v.to_string_lossy().into_owned()),
    &Path => |v| Cell::Str(v.to_string_lossy().into_owned()),
}

impl<T: Into<Cell>> From<Vec<T>> for Cell {
    fn from(items: Vec<T>) -> Self {
        Cell::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(v: Option<T>) -> Self {
        v.map_or(Cell::Null, Into::into)
    }
}
