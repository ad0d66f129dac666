use anyhow::Result;
use roster_core::config::Config;
use std::path::PathBuf;

pub fn run(
    mut config: Config,
    host: Option<String>,
    port: Option<u16>,
    seed: Option<PathBuf>,
    open_browser: bool,
) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    if seed.is_some() {
        config.seed = seed;
    }

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        tokio::select! {
            res = roster_server::serve(&config, open_browser) => res,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutting down");
                Ok(())
            }
        }
    })
}
