//! Channel writers.

pub mod delimited;
pub mod jsonl;
