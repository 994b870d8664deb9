use thiserror::Error;

/// Canonical result for core.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot bind row (len: {row}) to channel (width: {width}): width is different")]
    WidthMismatch { row: usize, width: usize },

    #[error("cannot bind column (len: {column}) to channel (length: {length}): length is different")]
    LengthMismatch { column: usize, length: usize },

    #[error("failed to {op}: the {what} {size} cannot be divided by {factor}")]
    NotDivisible {
        op: &'static str,
        what: &'static str,
        size: usize,
        factor: usize,
    },

    #[error("cannot {0} an empty channel")]
    EmptyChannel(&'static str),

    #[error("width {width} ({arg}) is not consistent with previous {previous}")]
    InconsistentArgWidth {
        arg: String,
        width: usize,
        previous: usize,
    },

    #[error("width = {width}, but expect width = 1")]
    InvalidWidth { width: usize },

    #[error("column {index} is out of range for a channel of width {width}")]
    ColumnOutOfRange { index: usize, width: usize },

    #[error("expand uses a single template row, but the channel has {rows} rows")]
    AmbiguousTemplate { rows: usize },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("hashing error: {0}")]
    Hash(String),

    /// Error with context chain for better debugging
    #[error("error in {context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    /// Add context to an error, creating an error chain.
    ///
    /// # Example
    /// ```rust
    /// use pipechan_core::error::Error;
    /// let err = Error::WidthMismatch { row: 2, width: 3 };
    /// let err = err.with_context("samples.tsv:4");
    /// assert!(err.to_string().contains("samples.tsv:4"));
    /// ```
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Error::Context {
            context: context.into(),
            source: Box::new(self) as Box<dyn std::error::Error + Send + Sync>,
        }
    }

    /// Strip every `Context` layer and return the error that was raised first.
    pub fn innermost(&self) -> &Error {
        match self {
            Error::Context { source, .. } => match source.downcast_ref::<Error>() {
                Some(inner) => inner.innermost(),
                None => self,
            },
            other => other,
        }
    }

    /// Get suggestions for common errors.
    pub fn suggestions(&self) -> Vec<String> {
        match self.innermost() {
            Error::WidthMismatch { row, width } => {
                let mut out = vec![format!(
                    "Rows in this channel have {} cells, the rejected row has {}",
                    width, row
                )];
                if *row == 1 {
                    out.push(
                        "A list is stored as one cell; use a tuple to bind several columns".into(),
                    );
                }
                out
            }
            Error::LengthMismatch { .. } => vec![
                "A column must have one value per row, or a single value to recycle".into(),
            ],
            Error::NotDivisible { factor, .. } => vec![format!(
                "Pick a factor that divides the channel evenly (got {})",
                factor
            )],
            Error::InconsistentArgWidth { previous, .. } => vec![
                format!("Every argument must have {} comma-separated fields", previous),
                "Quote a field or wrap it in brackets to keep a literal comma".into(),
            ],
            Error::InvalidWidth { .. } => {
                vec!["Select a single column first, e.g. with col_at(i)".into()]
            }
            _ => vec![],
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Hash(e.to_string())
    }
}
