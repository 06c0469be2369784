//! NEXA shell entry point.
//!
//! Reads one command per line from stdin and writes the transcript to
//! stdout. `--json` switches to one JSON object per transcript line.
//! The config path comes from the first non-flag argument or `NEXA_CONFIG`.

mod config;
mod render;

use std::io::BufRead;
use std::sync::Arc;

use anyhow::Result;

use config::{AppConfig, CONFIG_ENV};
use nexa_platform::{DesktopPlatform, TimeService};
use nexa_terminal::ShellSession;
use render::{OutputFormat, Renderer};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let format = if args.iter().any(|a| a == "--json") {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let config_path = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .cloned()
        .or_else(|| std::env::var(CONFIG_ENV).ok());
    let config = AppConfig::load(config_path.as_deref())?;

    let platform = DesktopPlatform::new();
    let tree = config.tree_seed().build(platform.now()?)?;
    log::info!(
        "Starting NEXA shell at {} ({} directories)",
        tree.root(),
        tree.len()
    );

    let mut session = ShellSession::new(Arc::new(tree), Box::new(platform), config.shell);
    let stdout = std::io::stdout();
    let mut renderer = Renderer::new(stdout.lock(), format);
    renderer.lines(session.transcript())?;
    renderer.prompt(&session.prompt())?;

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let result = session.submit_line(&line);
        renderer.submission(&result)?;
        renderer.prompt(&session.prompt())?;
    }

    log::info!("NEXA shell exiting");
    Ok(())
}
