#![forbid(unsafe_code)]
//! pipechan: tabular channels of fixed-width rows and their reshape algebra.
//!
//! Facade over the workspace crates:
//! - [`pipechan_core`]: `Channel`, `Row`, `Cell`, tuplization, bind/shape/functional operators.
//! - [`pipechan_io`]: glob/file/argv factories, writers, and `expand`.
//! - [`pipechan_recipe`]: YAML recipes that drive a channel through operators.

pub use pipechan_core;
pub use pipechan_io;
pub use pipechan_recipe;

pub use pipechan_core::prelude::*;
pub use pipechan_io::{ExpandExt, PathKind};
