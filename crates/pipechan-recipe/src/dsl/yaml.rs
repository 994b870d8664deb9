//! YAML -> `Recipe` for *linear* pipelines.
//!
//! Example:
//! ```yaml
//! steps:
//!   - op: from_file
//!     path: "samples.tsv"
//!   - op: insert
//!     index: 1
//!     values: ["hg38"]
//!   - op: fold
//!     n: 2
//!   - op: sink
//!     destination: "out/pairs.tsv"
//!     format: tsv
//! ```
//!
//! `create` takes either `values` (one single-cell row each; a nested list
//! stays one list cell) or `rows`, whose inner lists spread into cells:
//! ```yaml
//!   - op: create
//!     rows: [["s1", 1], ["s2", 2]]
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::recipe::{Recipe, Step};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub steps: Vec<Step>,
}

/// Parse a YAML string into a validated `Recipe`.
pub fn parse_yaml_recipe(yaml_src: &str) -> Result<Recipe> {
    let doc: Document = serde_yaml::from_str(yaml_src)?;
    Recipe::from_steps(doc.steps)
}
