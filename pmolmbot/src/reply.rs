//! Reply items emitted by the handler

use futures::stream::BoxStream;
use std::fmt;

/// One message sent back to the chat
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Plain text message
    Text(String),
    /// Image message referenced by URL
    Image { url: String },
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn image(url: impl Into<String>) -> Self {
        Self::Image { url: url.into() }
    }

    /// Text content, `None` for images
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Image { .. } => None,
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{}", text),
            Self::Image { url } => write!(f, "[image] {}", url),
        }
    }
}

/// Ordered replies of one command, consumed once by the host
pub type ReplyStream<'a> = BoxStream<'a, Reply>;
