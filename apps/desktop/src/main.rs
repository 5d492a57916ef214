#![windows_subsystem = "windows"]

use pagebar_desktop::{DesktopApp, HostConfig, Root};
use pagebar_logger::Logger;
use std::path::PathBuf;
use tracing::info;

/// Looked up in the working directory when no path argument is given.
const LOCAL_CONFIG: &str = "pagebar.toml";

fn main() -> anyhow::Result<()> {
    let path = std::env::args().nth(1).map(PathBuf::from).or_else(|| {
        let local = PathBuf::from(LOCAL_CONFIG);
        local.is_file().then_some(local)
    });
    let (config, source) = HostConfig::load(path)?;

    let _logger = Logger::from_settings(env!("CARGO_PKG_NAME"), &config.logging)?;
    info!(%source, locale = %config.translations.locale, "Starting pagebar desktop");

    DesktopApp::from_config(config).launch(Root);

    Ok(())
}
