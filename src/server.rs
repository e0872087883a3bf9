//! HTTP server for the GET/POST exercise.
//!
//! One tokio task is spawned per accepted connection and each connection is
//! driven by hyper's HTTP/1 implementation. Requests are answered by
//! [`routes::handle`]; there is no state shared between requests.

pub mod routes;

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use log::{debug, error, info};
use tokio::net::{TcpListener, TcpStream};

use crate::config::ServerConfig;
use crate::errors::ServerError;

pub use routes::{GET_GREETING, GET_PATH, MAX_BODY_BYTES, NOT_FOUND_BODY, POST_PATH, POST_PREFIX};

/// Pause after a failed `accept()` so fd exhaustion does not turn into a
/// busy loop.
const ACCEPT_ERROR_BACKOFF: Duration = Duration::from_millis(50);

/// Source of inbound connections for the accept loop.
pub(crate) trait Accept {
    fn accept(&self) -> impl Future<Output = io::Result<(TcpStream, SocketAddr)>> + Send;
}

impl Accept for TcpListener {
    fn accept(&self) -> impl Future<Output = io::Result<(TcpStream, SocketAddr)>> + Send {
        TcpListener::accept(self)
    }
}

pub struct Server {
    listener: TcpListener,
}

impl Server {
    /// Binds the listener. Fails if the address is already in use; there is
    /// no fallback port.
    pub async fn bind(addr: SocketAddr) -> Result<Self, ServerError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        Ok(Self { listener })
    }

    pub async fn from_config(config: &ServerConfig) -> Result<Self, ServerError> {
        Self::bind(config.listen_addr).await
    }

    /// Address actually bound. Differs from the requested one when port 0
    /// was asked for.
    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        Ok(self.listener.local_addr()?)
    }

    /// Serves until the process exits.
    pub async fn run(self) -> Result<(), ServerError> {
        self.run_until(std::future::pending::<()>()).await
    }

    /// Serves until `shutdown` resolves. Connections already accepted keep
    /// running on their own tasks. A failed `accept()` is logged and the
    /// loop keeps going; only binding is fatal.
    pub async fn run_until<F>(self, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()>,
    {
        info!("Listening on http://{}", self.local_addr()?);
        accept_loop(&self.listener, shutdown).await;
        Ok(())
    }
}

pub(crate) async fn accept_loop<A, F>(acceptor: &A, shutdown: F)
where
    A: Accept,
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            accepted = acceptor.accept() => match accepted {
                Ok((stream, peer)) => {
                    tokio::spawn(serve_connection(stream, peer));
                }
                Err(e) => {
                    error!("accept failed: {e}");
                    tokio::time::sleep(ACCEPT_ERROR_BACKOFF).await;
                }
            },
            _ = &mut shutdown => {
                info!("Shutting down listener");
                return;
            }
        }
    }
}

async fn serve_connection(stream: TcpStream, peer: SocketAddr) {
    let io = TokioIo::new(stream);
    if let Err(e) = http1::Builder::new()
        .serve_connection(io, service_fn(routes::handle::<Incoming>))
        .await
    {
        debug!("connection from {peer} ended with error: {e}");
    }
}
