mod fetch;
mod response;

pub use fetch::{fetch, fetch_with};
pub use response::Response;
