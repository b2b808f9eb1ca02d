use std::{
    fs::File,
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::{Context, Result};
use clap::Parser;
use measure_tui::PageOptions;
use measure_types::Unit;
use tracing::info;

/// Interactive example page for the percent/pixel unit input.
#[derive(Debug, Parser)]
#[command(name = "measure", version, about)]
struct Args {
    /// Initial value of the input.
    #[arg(long, default_value_t = 50.0, allow_negative_numbers = true)]
    value: f64,

    /// Initial unit: `%` or `px`.
    #[arg(long, default_value = "%")]
    unit: Unit,

    /// Color theme (dracula, nord).
    #[arg(long, env = "MEASURE_THEME")]
    theme: Option<String>,

    /// Write logs to this file. Logging is off otherwise, since the page
    /// owns the terminal.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Args {
    fn page_options(&self) -> PageOptions {
        PageOptions {
            value: self.value,
            unit: self.unit,
            theme: self.theme.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = args.log_file.as_ref() {
        init_tracing(path)?;
    }
    info!(?args, "starting example page");

    let result = measure_tui::run(args.page_options()).await?;
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}
