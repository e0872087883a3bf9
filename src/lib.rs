//! Small networking exercises: an HTTP client, an HTTP server with a GET/POST
//! pair, a URL decomposer and an error-handling warm-up.
//!
//! Each exercise has a matching binary under `src/bin`.

pub mod config;
pub mod errors;
pub mod intro;
pub mod net;
pub mod server;
pub mod urls;

pub use config::{ClientConfig, ServerConfig};
pub use errors::{ConfigError, FetchError, ServerError, TaskError, UrlError};
