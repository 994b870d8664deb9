//! Recipe steps and the validated `Recipe` shape.

use std::fmt;

use serde::{Deserialize, Serialize};

use pipechan_core::Cell;
use pipechan_io::PathKind;

use crate::error::{RecipeError, Result};

/// One YAML step, tagged by `op`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    // sources
    Create {
        #[serde(default)]
        values: Vec<Cell>,
        #[serde(default)]
        rows: Vec<Vec<Cell>>,
    },
    FromFile {
        path: String,
        #[serde(default)]
        delimiter: Option<String>,
    },
    FromPath {
        pattern: String,
        #[serde(default)]
        kind: PathKind,
    },
    FromPairs {
        pattern: String,
    },
    FromArgs {
        args: Vec<String>,
    },

    // operators
    Rbind {
        row: Vec<Cell>,
    },
    Cbind {
        values: Vec<Cell>,
    },
    Insert {
        index: usize,
        values: Vec<Cell>,
    },
    Slice {
        start: isize,
        #[serde(default)]
        len: Option<usize>,
    },
    ColAt {
        index: isize,
    },
    Fold {
        n: usize,
    },
    Unfold {
        n: usize,
    },
    Expand {
        #[serde(default)]
        col: usize,
        #[serde(default = "default_pattern")]
        pattern: String,
    },
    Collapse {
        #[serde(default)]
        col: usize,
    },
    FilterNonempty {
        col: usize,
    },

    // sink
    Sink {
        destination: String,
        #[serde(default)]
        format: SinkFormat,
        #[serde(default)]
        delimiter: Option<String>,
    },
}

fn default_pattern() -> String {
    "*".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkFormat {
    #[default]
    Tsv,
    Jsonl,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    /// One row per entry of `values` (width 1), or one row per entry of
    /// `rows` (one cell per element).
    Create { values: Vec<Cell>, rows: Vec<Vec<Cell>> },
    FromFile { path: String, delimiter: Option<String> },
    FromPath { pattern: String, kind: PathKind },
    FromPairs { pattern: String },
    FromArgs { args: Vec<String> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Rbind { row: Vec<Cell> },
    Cbind { values: Vec<Cell> },
    Insert { index: usize, values: Vec<Cell> },
    Slice { start: isize, len: Option<usize> },
    ColAt { index: isize },
    Fold { n: usize },
    Unfold { n: usize },
    Expand { col: usize, pattern: String },
    Collapse { col: usize },
    FilterNonempty { col: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sink {
    pub destination: String,
    pub format: SinkFormat,
    pub delimiter: Option<String>,
}

/// A validated linear pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub source: Source,
    pub ops: Vec<Op>,
    pub sink: Option<Sink>,
}

enum Part {
    Source(Source),
    Op(Op),
    Sink(Sink),
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::Create { .. } => "create",
            Step::FromFile { .. } => "from_file",
            Step::FromPath { .. } => "from_path",
            Step::FromPairs { .. } => "from_pairs",
            Step::FromArgs { .. } => "from_args",
            Step::Rbind { .. } => "rbind",
            Step::Cbind { .. } => "cbind",
            Step::Insert { .. } => "insert",
            Step::Slice { .. } => "slice",
            Step::ColAt { .. } => "col_at",
            Step::Fold { .. } => "fold",
            Step::Unfold { .. } => "unfold",
            Step::Expand { .. } => "expand",
            Step::Collapse { .. } => "collapse",
            Step::FilterNonempty { .. } => "filter_nonempty",
            Step::Sink { .. } => "sink",
        }
    }

    fn into_part(self) -> Part {
        match self {
            Step::Create { values, rows } => Part::Source(Source::Create { values, rows }),
            Step::FromFile { path, delimiter } => Part::Source(Source::FromFile { path, delimiter }),
            Step::FromPath { pattern, kind } => Part::Source(Source::FromPath { pattern, kind }),
            Step::FromPairs { pattern } => Part::Source(Source::FromPairs { pattern }),
            Step::FromArgs { args } => Part::Source(Source::FromArgs { args }),
            Step::Rbind { row } => Part::Op(Op::Rbind { row }),
            Step::Cbind { values } => Part::Op(Op::Cbind { values }),
            Step::Insert { index, values } => Part::Op(Op::Insert { index, values }),
            Step::Slice { start, len } => Part::Op(Op::Slice { start, len }),
            Step::ColAt { index } => Part::Op(Op::ColAt { index }),
            Step::Fold { n } => Part::Op(Op::Fold { n }),
            Step::Unfold { n } => Part::Op(Op::Unfold { n }),
            Step::Expand { col, pattern } => Part::Op(Op::Expand { col, pattern }),
            Step::Collapse { col } => Part::Op(Op::Collapse { col }),
            Step::FilterNonempty { col } => Part::Op(Op::FilterNonempty { col }),
            Step::Sink {
                destination,
                format,
                delimiter,
            } => Part::Sink(Sink {
                destination,
                format,
                delimiter,
            }),
        }
    }
}

impl Recipe {
    /// Check the step order: exactly one source first, at most one sink last.
    pub fn from_steps(steps: Vec<Step>) -> Result<Self> {
        let mut steps = steps.into_iter();
        let source = match steps.next().map(Step::into_part) {
            Some(Part::Source(s)) => s,
            Some(_) => {
                return Err(RecipeError::Invalid(
                    "first step must be a source (create, from_file, from_path, from_pairs, from_args)"
                        .into(),
                ))
            }
            None => return Err(RecipeError::Invalid("empty recipe".into())),
        };
        if let Source::Create { values, rows } = &source {
            if !values.is_empty() && !rows.is_empty() {
                return Err(RecipeError::Invalid(
                    "step 0: create takes either values or rows, not both".into(),
                ));
            }
        }

        let mut ops = Vec::new();
        let mut sink = None;
        for (i, step) in steps.enumerate() {
            let index = i + 1;
            if sink.is_some() {
                return Err(RecipeError::Invalid(format!(
                    "step {index}: nothing may follow the sink"
                )));
            }
            let name = step.name();
            match step.into_part() {
                Part::Source(_) => {
                    return Err(RecipeError::Invalid(format!(
                        "step {index}: multiple sources are not supported (got '{name}')"
                    )))
                }
                Part::Op(op) => ops.push(op),
                Part::Sink(s) => sink = Some(s),
            }
        }

        Ok(Self { source, ops, sink })
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Create { values, rows } if values.is_empty() => {
                write!(f, "create ({} rows)", rows.len())
            }
            Source::Create { values, .. } => write!(f, "create ({} values)", values.len()),
            Source::FromFile { path, delimiter } => match delimiter {
                Some(d) => write!(f, "from_file {path} (delimiter {d:?})"),
                None => write!(f, "from_file {path}"),
            },
            Source::FromPath { pattern, kind } => write!(f, "from_path {pattern} ({kind:?})"),
            Source::FromPairs { pattern } => write!(f, "from_pairs {pattern}"),
            Source::FromArgs { args } => write!(f, "from_args ({} args)", args.len()),
        }
    }
}

impl Op {
    pub fn name(&self) -> &'static str {
        match self {
            Op::Rbind { .. } => "rbind",
            Op::Cbind { .. } => "cbind",
            Op::Insert { .. } => "insert",
            Op::Slice { .. } => "slice",
            Op::ColAt { .. } => "col_at",
            Op::Fold { .. } => "fold",
            Op::Unfold { .. } => "unfold",
            Op::Expand { .. } => "expand",
            Op::Collapse { .. } => "collapse",
            Op::FilterNonempty { .. } => "filter_nonempty",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Rbind { row } => write!(f, "rbind ({} cells)", row.len()),
            Op::Cbind { values } => write!(f, "cbind ({} values)", values.len()),
            Op::Insert { index, values } => {
                write!(f, "insert at {index} ({} values)", values.len())
            }
            Op::Slice { start, len } => match len {
                Some(len) => write!(f, "slice {start} +{len}"),
                None => write!(f, "slice {start}.."),
            },
            Op::ColAt { index } => write!(f, "col_at {index}"),
            Op::Fold { n } => write!(f, "fold {n}"),
            Op::Unfold { n } => write!(f, "unfold {n}"),
            Op::Expand { col, pattern } => write!(f, "expand col {col} with {pattern}"),
            Op::Collapse { col } => write!(f, "collapse col {col}"),
            Op::FilterNonempty { col } => write!(f, "filter_nonempty col {col}"),
        }
    }
}

impl fmt::Display for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sink {} ({:?})", self.destination, self.format)
    }
}
