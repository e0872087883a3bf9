//! Route table of the exercise server.
//!
//! | Method | Path    | Response                                      |
//! |--------|---------|-----------------------------------------------|
//! | GET    | `/get`  | `200`, `Hello from GET!`                      |
//! | POST   | `/post` | `200`, `Received data: ` + the JSON re-encoded |
//!
//! The echo keeps object keys in the order the client sent them.
//!
//! Anything else gets `404 page not found`. A `/post` body that is not a
//! JSON object gets `400`, one larger than [`MAX_BODY_BYTES`] gets `413`.

use std::convert::Infallible;
use std::error::Error as StdError;

use bytes::Bytes;
use http::header::{HeaderValue, CONTENT_TYPE};
use http::{Method, Request, Response, StatusCode};
use http_body_util::{BodyExt, Full, LengthLimitError, Limited};
use hyper::body::Body;
use log::debug;
use serde_json::{Map, Value};

pub const GET_PATH: &str = "/get";
pub const POST_PATH: &str = "/post";

pub const GET_GREETING: &str = "Hello from GET!";
pub const POST_PREFIX: &str = "Received data: ";
pub const NOT_FOUND_BODY: &str = "404 page not found";

/// Largest `/post` body the server reads.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Dispatches one request. Never fails; every outcome is an HTTP response.
///
/// Generic over the body so the handler can be driven by hyper's `Incoming`
/// as well as by in-memory bodies.
pub async fn handle<B>(req: Request<B>) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body,
    B::Error: Into<Box<dyn StdError + Send + Sync>>,
{
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let res = match (&method, path.as_str()) {
        (&Method::GET, GET_PATH) => text(StatusCode::OK, GET_GREETING),
        (&Method::POST, POST_PATH) => echo(req.into_body()).await,
        _ => text(StatusCode::NOT_FOUND, NOT_FOUND_BODY),
    };

    debug!("{method} {path} -> {}", res.status().as_u16());
    Ok(res)
}

async fn echo<B>(body: B) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: Into<Box<dyn StdError + Send + Sync>>,
{
    let bytes = match Limited::new(body, MAX_BODY_BYTES).collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) if e.downcast_ref::<LengthLimitError>().is_some() => {
            return text(
                StatusCode::PAYLOAD_TOO_LARGE,
                format!("Body exceeds {MAX_BODY_BYTES} bytes"),
            );
        }
        Err(e) => return text(StatusCode::BAD_REQUEST, format!("Cannot read body: {e}")),
    };

    let data: Map<String, Value> = match serde_json::from_slice(&bytes) {
        Ok(data) => data,
        Err(e) => return text(StatusCode::BAD_REQUEST, format!("Invalid JSON: {e}")),
    };

    match serde_json::to_string(&data) {
        Ok(encoded) => text(StatusCode::OK, format!("{POST_PREFIX}{encoded}")),
        Err(e) => text(StatusCode::INTERNAL_SERVER_ERROR, format!("Cannot encode JSON: {e}")),
    }
}

fn text(status: StatusCode, body: impl Into<Bytes>) -> Response<Full<Bytes>> {
    let mut res = Response::new(Full::new(body.into()));
    *res.status_mut() = status;
    res.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(TEXT_PLAIN));
    res
}
