use anyhow::Context;
use netlab::config::ClientConfig;
use netlab::net;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ClientConfig::default();
    println!("Fetching {}", config.target_url);

    let response = net::fetch_with(&config)
        .await
        .with_context(|| format!("cannot fetch {}", config.target_url))?;

    println!("Status code: {} {}", response.status, response.status_text);
    if !response.is_success() {
        log::warn!("{} answered with status {}", response.url, response.status);
    }
    match response.content_length {
        Some(len) => println!("Content length: {len}"),
        None => println!("Content length: unknown"),
    }
    println!("{}", response.text());

    Ok(())
}
