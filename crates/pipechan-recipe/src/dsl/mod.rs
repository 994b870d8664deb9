//! Recipe front ends.

pub mod yaml;
