use anyhow::Context;
use techdeck::kernel::config::load_deck_config;
use techdeck_desktop::{DesktopApp, PortfolioState};
use techdeck_logger::Logger;

fn main() -> anyhow::Result<()> {
    let _log = Logger::builder(env!("CARGO_PKG_NAME")).init()?;

    let cfg = load_deck_config(std::env::args().nth(1))
        .context("Critical: Configuration is malformed")?;

    DesktopApp::new().launch(PortfolioState::from_config(&cfg));
    Ok(())
}
