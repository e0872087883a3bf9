use log::debug;

use crate::config::ClientConfig;
use crate::errors::FetchError;
use crate::net::Response;

/// GETs `url` with the default client settings and buffers the whole body.
pub async fn fetch(url: &str) -> Result<Response, FetchError> {
    let config = ClientConfig {
        target_url: url.to_string(),
        ..ClientConfig::default()
    };
    fetch_with(&config).await
}

/// GETs `config.target_url` and buffers the whole body.
///
/// Any transport failure (DNS, refused connection, broken stream while
/// reading the body) is returned as [`FetchError::Transport`]. There are no
/// retries, and `HTTP_PROXY`-style environment variables are not consulted.
pub async fn fetch_with(config: &ClientConfig) -> Result<Response, FetchError> {
    let url = url::Url::parse(&config.target_url)?;
    let transport = |source: reqwest::Error| FetchError::Transport {
        url: url.to_string(),
        source,
    };

    // Proxy variables are ignored so the request goes where the config says.
    let client = reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .no_proxy()
        .build()
        .map_err(transport)?;

    debug!("GET {url}");
    let res = client.get(url.clone()).send().await.map_err(transport)?;

    let final_url = res.url().clone();
    let status = res.status().as_u16();
    let status_text = res.status().canonical_reason().unwrap_or("Unknown").to_string();
    let content_length = res.content_length();
    let headers = res.headers().clone();

    // Consumes the response, so the connection goes back to the pool or is
    // closed whether or not reading succeeds.
    let body = res.bytes().await.map_err(transport)?.to_vec();
    debug!("{final_url} -> {status} ({} bytes)", body.len());

    Ok(Response {
        url: final_url,
        status,
        status_text,
        content_length,
        headers,
        body,
    })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    /// Returns a loopback address nothing is listening on.
    fn closed_addr() -> std::net::SocketAddr {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        addr
    }

    #[tokio::test]
    async fn refused_connection_is_a_transport_error() {
        let url = format!("http://{}/get", closed_addr());

        let result = tokio::time::timeout(Duration::from_secs(10), fetch(&url))
            .await
            .expect("fetch hung on a closed port");

        let err = result.unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }));
        assert!(err.is_connect());
        assert!(!err.is_timeout());
        assert!(err.to_string().contains(&url));
    }

    #[tokio::test]
    async fn malformed_target_is_rejected_before_connecting() {
        let err = fetch("not a url").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
        assert!(!err.is_connect());
        assert!(!err.is_timeout());
    }
}
