use thiserror::Error;

pub type Result<T> = std::result::Result<T, RecipeError>;

#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid recipe: {0}")]
    Invalid(String),

    #[error("step {index} ({op}): {source}")]
    Step {
        index: usize,
        op: &'static str,
        #[source]
        source: pipechan_io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] pipechan_io::Error),
}

impl RecipeError {
    pub(crate) fn step(index: usize, op: &'static str, source: impl Into<pipechan_io::Error>) -> Self {
        RecipeError::Step {
            index,
            op,
            source: source.into(),
        }
    }

    /// The channel error that made a step fail, if any.
    pub fn channel_error(&self) -> Option<&pipechan_core::Error> {
        match self {
            RecipeError::Step { source, .. } | RecipeError::Io(source) => source.channel_error(),
            _ => None,
        }
    }
}
