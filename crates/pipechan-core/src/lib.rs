#![forbid(unsafe_code)]
//! pipechan-core: the channel container and its reshape algebra.
//!
//! A [`Channel`](channel::Channel) is an ordered sequence of equal-width rows.
//! This crate holds the container, the tuplization rule that turns arbitrary
//! values into rows, and every operator that does not touch the filesystem.
//! There is **no I/O** here; globbing, file ingestion and `expand` live in
//! `pipechan-io`.
//!
//! Crates that use this:
//! - pipechan-io: filesystem/argv factories, writers, and `expand`.
//! - pipechan-recipe: YAML recipes that drive a channel through operators.
//! - pipechan-cli: command-line front end.

pub mod bind;
pub mod cell;
pub mod channel;
pub mod config;
pub mod error;
pub mod functional;
pub mod hash;
pub mod path;
pub mod prelude;
pub mod row;
pub mod shape;

pub use cell::Cell;
pub use channel::Channel;
pub use error::{Error, Result};
pub use row::{tuplize, Row, Tuplize};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
