use netlab::config::DEMO_URL;
use netlab::urls;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::debug!("parsing {DEMO_URL}");
    let parts = urls::parse(DEMO_URL)?;
    println!("{parts}");

    Ok(())
}
