//! `expand`: turn one template row into one row per filesystem match.
//!
//! ```text
//! [(dir1/dir2, 1)].expand(0, "*")  ->  [(dir1/dir2/file1, 1),
//!                                       (dir1/dir2/file2, 1), ...]
//! ```
//! Length 1 -> N, width unchanged. The inverse direction is
//! `Channel::collapse` in `pipechan-core`.

use std::path::Path;

use pipechan_core::config::ChannelConfig;
use pipechan_core::{Cell, Channel, Error as ChannelError};

use crate::error::Result;
use crate::glob::resolve;

pub trait ExpandExt {
    /// Resolve `pattern` inside the directory held by row 0, column `col`.
    ///
    /// The first match overwrites the template row, later matches are
    /// appended with every other column copied. Without matches the channel is
    /// left as it was. The channel must hold exactly one row.
    fn expand(&mut self, col: usize, pattern: &str) -> Result<&mut Self> {
        self.expand_with(col, pattern, &ChannelConfig::default())
    }

    /// [`ExpandExt::expand`], with `cfg.glob_hidden` deciding whether
    /// wildcards match dot entries.
    fn expand_with(
        &mut self,
        col: usize,
        pattern: &str,
        cfg: &ChannelConfig,
    ) -> Result<&mut Self>;
}

impl ExpandExt for Channel {
    fn expand_with(
        &mut self,
        col: usize,
        pattern: &str,
        cfg: &ChannelConfig,
    ) -> Result<&mut Self> {
        let template = match self.rows() {
            [] => return Err(ChannelError::EmptyChannel("expand").into()),
            [only] => only.clone(),
            rows => return Err(ChannelError::AmbiguousTemplate { rows: rows.len() }.into()),
        };
        let folder = template
            .get(col)
            .ok_or(ChannelError::ColumnOutOfRange {
                index: col,
                width: template.len(),
            })?
            .to_path_string();

        let joined = Path::new(&folder).join(pattern);
        let matches = resolve(&joined.to_string_lossy(), cfg.glob_hidden);
        tracing::debug!(folder = %folder, pattern, matches = matches.len(), "expand");
        if matches.is_empty() {
            return Ok(self);
        }

        self.clear();
        for m in matches {
            let mut row = template.clone();
            row[col] = Cell::Str(m);
            self.push_row(row)?;
        }
        Ok(self)
    }
}
