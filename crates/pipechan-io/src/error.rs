use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Channel(#[from] pipechan_core::Error),

    #[error("cannot pair {count} matches: the number of matches is odd")]
    UnpairedMatch { count: usize },
}

impl Error {
    /// The channel error behind this one, with any context layers removed.
    pub fn channel_error(&self) -> Option<&pipechan_core::Error> {
        match self {
            Error::Channel(e) => Some(e.innermost()),
            _ => None,
        }
    }
}
