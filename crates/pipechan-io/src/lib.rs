#![forbid(unsafe_code)]
//! pipechan-io: everything that touches the host environment.
//!
//! - `glob`: shell-style pattern resolution (sorted, never fails on missing entries).
//! - `readers`: channel factories from globs, paired globs, delimited files and argv.
//! - `writers`: flat delimited text and JSON-lines output.
//! - `expand`: the filesystem-aware `expand` operator.

pub mod error;
pub mod expand;
pub mod glob;
pub mod readers;
pub mod writers;

pub use error::{Error, Result};
pub use expand::ExpandExt;
pub use glob::PathKind;
pub use readers::argv::{from_args, from_args_with, from_argv};
pub use readers::delimited::{from_file, from_reader};
pub use readers::paths::{from_pairs, from_pairs_with, from_path, from_path_with};
