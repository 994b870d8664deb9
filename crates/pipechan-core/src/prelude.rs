pub use crate::bind::{IntoCells, IntoColumn};
pub use crate::cell::Cell;
pub use crate::channel::Channel;
pub use crate::config::ChannelConfig;
pub use crate::error::{Error, Result};
pub use crate::hash::Hash256;
pub use crate::row::{tuplize, Row, Tuplize};
