//! Ingestion settings shared by the readers, the recipe runner and the CLI.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelConfig {
    /// Cell separator for delimited files.
    pub delimiter: String,
    /// Field separator for command-line records.
    pub arg_separator: char,
    /// Let wildcards match names that start with a dot.
    pub glob_hidden: bool,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            delimiter: "\t".to_string(),
            arg_separator: ',',
            glob_hidden: false,
        }
    }
}

impl ChannelConfig {
    /// Defaults, overridden by `PIPECHAN_DELIMITER`, `PIPECHAN_ARG_SEPARATOR`
    /// and `PIPECHAN_GLOB_HIDDEN` when they are set and valid.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(d) = std::env::var("PIPECHAN_DELIMITER") {
            if !d.is_empty() {
                cfg.delimiter = unescape_delimiter(&d);
            }
        }
        if let Ok(s) = std::env::var("PIPECHAN_ARG_SEPARATOR") {
            let mut chars = s.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                cfg.arg_separator = c;
            }
        }
        if let Ok(h) = std::env::var("PIPECHAN_GLOB_HIDDEN") {
            cfg.glob_hidden = matches!(h.as_str(), "1" | "true" | "yes");
        }
        cfg
    }

    pub fn validate(&self) -> Result<()> {
        if self.delimiter.is_empty() {
            return Err(Error::Config("delimiter must not be empty".into()));
        }
        Ok(())
    }
}

/// Turn the escape spellings `\t`, `\n` and `tab` into the real separator.
pub fn unescape_delimiter(raw: &str) -> String {
    match raw {
        "\\t" | "tab" => "\t".to_string(),
        "\\n" => "\n".to_string(),
        other => other.to_string(),
    }
}
