//! Channel factories backed by the host environment.

pub mod argv;
pub mod delimited;
pub mod paths;
