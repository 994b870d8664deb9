//! Command-line records -> `Channel`.
//!
//! `prog a b c` gives a width-1 channel, `prog a,1 b,2 c,3` a width-2 one.
//! Every argument must split into the same number of fields.

use pipechan_core::config::ChannelConfig;
use pipechan_core::{Cell, Channel, Error as ChannelError};

use crate::error::Result;

/// Build a channel from the process arguments, program name excluded.
pub fn from_argv() -> Result<Channel> {
    from_args_with(std::env::args().skip(1), &ChannelConfig::from_env())
}

/// Build a channel from an explicit argument list, splitting on `,`.
pub fn from_args<I, S>(args: I) -> Result<Channel>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    from_args_with(args, &ChannelConfig::default())
}

pub fn from_args_with<I, S>(args: I, cfg: &ChannelConfig) -> Result<Channel>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut ret = Channel::new();
    let mut width: Option<usize> = None;
    for arg in args {
        let arg = arg.as_ref();
        let fields = split_fields(arg, cfg.arg_separator);
        if let Some(previous) = width {
            if previous != fields.len() {
                return Err(ChannelError::InconsistentArgWidth {
                    arg: arg.to_string(),
                    width: fields.len(),
                    previous,
                }
                .into());
            }
        }
        width = Some(fields.len());
        ret.push_row(fields.into_iter().map(Cell::Str).collect())?;
    }
    Ok(ret)
}

/// Split `s` on `sep`, ignoring separators inside quotes or brackets.
///
/// Each field is trimmed; the result always has at least one field.
pub fn split_fields(s: &str, sep: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut depth = 0usize;

    for c in s.chars() {
        match (quote, c) {
            (Some(q), _) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(' | '[' | '{') => depth += 1,
            (None, ')' | ']' | '}') => depth = depth.saturating_sub(1),
            (None, _) if c == sep && depth == 0 => {
                fields.push(current.trim().to_string());
                current.clear();
                continue;
            }
            _ => {}
        }
        current.push(c);
    }
    fields.push(current.trim().to_string());
    fields
}
