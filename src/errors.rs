use std::io;
use std::net::SocketAddr;

/// Errors raised while fetching a URL.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Network error while fetching {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// True when the failure happened while establishing the connection
    /// (refused, unreachable, DNS).
    pub fn is_connect(&self) -> bool {
        match self {
            FetchError::Transport { source, .. } => source.is_connect(),
            FetchError::InvalidUrl(_) => false,
        }
    }

    pub fn is_timeout(&self) -> bool {
        match self {
            FetchError::Transport { source, .. } => source.is_timeout(),
            FetchError::InvalidUrl(_) => false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Cannot listen on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("Server I/O error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum UrlError {
    #[error("Invalid URL escape {escape:?}")]
    InvalidEscape { escape: String },

    #[error("Parse error: {0}")]
    Parse(#[from] url::ParseError),
}

/// The one failure the intro exercise knows about.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unable to do something")]
pub struct TaskError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("target_url must not be empty")]
    EmptyTargetUrl,

    #[error("user_agent must not be empty")]
    EmptyUserAgent,

    #[error("listen port must not be 0")]
    ZeroPort,
}
