#![forbid(unsafe_code)]
//! pipechan-recipe: describe a linear channel pipeline in YAML and run it.
//!
//! A recipe is one source step, any number of operator steps, and an optional
//! sink. Parsing checks the shape; running drives a single exclusively owned
//! channel through the operators in order.

pub mod dsl;
pub mod error;
pub mod recipe;
pub mod run;

pub use dsl::yaml::parse_yaml_recipe;
pub use error::{RecipeError, Result};
pub use recipe::{Op, Recipe, Sink, SinkFormat, Source, Step};
pub use run::{evaluate, run, RunReport};
