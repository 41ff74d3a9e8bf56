//! Backoffice - terminal admin console for a business website
//!
//! This is the binary entry point. State, networking and rendering live in
//! the workspace crates.

mod headless;

use std::path::PathBuf;

use backoffice_app::config;
use backoffice_core::prelude::*;
use backoffice_core::{logging, Resource};
use clap::Parser;

/// Backoffice - manage leads, blogs, certifications, FAQs and testimonials
#[derive(Parser, Debug)]
#[command(name = "backoffice")]
#[command(about = "Terminal admin console for website content and leads", long_about = None)]
struct Args {
    /// Admin API origin, e.g. https://api.example.com (overrides config and BACKOFFICE_BASE_URL)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Path to config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a commented default config file and exit
    #[arg(long)]
    init_config: bool,

    /// Print one resource list as JSON and exit (no TUI)
    #[arg(long, value_name = "RESOURCE")]
    dump: Option<Resource>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    logging::init()?;

    if args.init_config {
        let path = config::init_config_file(args.config.as_deref())?;
        println!("Config file: {}", path.display());
        return Ok(());
    }

    let mut settings = config::load_settings(args.config.as_deref());
    config::apply_overrides(&mut settings, args.base_url.as_deref());
    info!(
        "Settings: base_url={} page_size={}",
        settings.api.base_url, settings.behavior.page_size
    );

    let result = match args.dump {
        Some(resource) => headless::run(&settings, resource).await,
        None => backoffice_tui::run(settings).await,
    };

    if let Err(e) = &result {
        error!("Backoffice exited with error: {}", e);
    }
    result
}
