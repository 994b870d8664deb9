//! map / filter / reduce over rows. Pure: the receiver is never modified.

use crate::channel::Channel;
use crate::error::{Error, Result};
use crate::row::{Row, Tuplize};

impl Channel {
    /// Apply `f` to every row and tuplize the results into a new channel.
    ///
    /// Fails with `WidthMismatch` if the results disagree on width.
    pub fn map<F, T>(&self, f: F) -> Result<Channel>
    where
        F: FnMut(&Row) -> T,
        T: Tuplize,
    {
        Channel::create(self.iter().map(f))
    }

    /// Like [`Channel::map`], for closures that can fail.
    ///
    /// The first error returned by `f` is handed back unchanged; a width
    /// disagreement between results is reported through `E: From<Error>`.
    pub fn try_map<F, T, E>(&self, mut f: F) -> std::result::Result<Channel, E>
    where
        F: FnMut(&Row) -> std::result::Result<T, E>,
        T: Tuplize,
        E: From<Error>,
    {
        let mut ret = Channel::new();
        for row in self {
            ret.push_row(f(row)?.tuplize())?;
        }
        Ok(ret)
    }

    /// Keep the rows for which `f` returns true, in order.
    pub fn filter<F>(&self, mut f: F) -> Channel
    where
        F: FnMut(&Row) -> bool,
    {
        let rows = self.iter().filter(|&r| f(r)).cloned().collect();
        Channel::from_rows_unchecked(rows)
    }

    /// Left fold of the rows with `f`, seeded by the first row.
    pub fn reduce<F>(&self, mut f: F) -> Result<Row>
    where
        F: FnMut(Row, &Row) -> Row,
    {
        let mut rows = self.iter();
        let first = rows.next().ok_or(Error::EmptyChannel("reduce"))?;
        Ok(rows.fold(first.clone(), |acc, r| f(acc, r)))
    }
}
