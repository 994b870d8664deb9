//! `from_path` / `from_pairs`: channels of filesystem matches.

use pipechan_core::config::ChannelConfig;
use pipechan_core::{Cell, Channel};

use crate::error::{Error, Result};
use crate::glob::{resolve, PathKind};

/// One single-cell row per match of `pattern`, sorted, filtered by `kind`.
///
/// No match is not an error: the channel is simply empty.
pub fn from_path(pattern: &str, kind: PathKind) -> Result<Channel> {
    from_path_with(pattern, kind, &ChannelConfig::default())
}

pub fn from_path_with(pattern: &str, kind: PathKind, cfg: &ChannelConfig) -> Result<Channel> {
    let matches = resolve(pattern, cfg.glob_hidden);
    let kept = matches
        .into_iter()
        .filter(|m| kind.matches(std::path::Path::new(m)))
        .map(Cell::Str);
    Ok(Channel::create(kept)?)
}

/// Width-2 channel of consecutive sorted matches: `(m0, m1), (m2, m3), ...`.
///
/// An odd number of matches fails with `UnpairedMatch` instead of dropping the
/// last one.
pub fn from_pairs(pattern: &str) -> Result<Channel> {
    from_pairs_with(pattern, &ChannelConfig::default())
}

pub fn from_pairs_with(pattern: &str, cfg: &ChannelConfig) -> Result<Channel> {
    let matches = resolve(pattern, cfg.glob_hidden);
    if matches.len() % 2 != 0 {
        return Err(Error::UnpairedMatch {
            count: matches.len(),
        });
    }
    let mut ret = Channel::new();
    for pair in matches.chunks(2) {
        ret.rbind((pair[0].as_str(), pair[1].as_str()))?;
    }
    Ok(ret)
}
