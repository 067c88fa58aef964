//! Landing - a scroll-spy landing page in the terminal.
//!
//! # Usage
//!
//! ```bash
//! landing
//! landing --sections 8
//! landing --no-smooth page.md
//! ```

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;

use landing::app::{App, DEFAULT_DEMO_SECTIONS, PageSource};
use landing::config::{
    ConfigFlags, global_config_path, load_config_flags, local_override_path, parse_flag_tokens,
};

/// A landing page viewer with a scroll-spy navigation header
#[derive(Parser, Debug)]
#[command(name = "landing", version, about, long_about = None)]
struct Cli {
    /// Markdown file to show; the built-in demo page is used when omitted
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Jump to sections instead of animating
    #[arg(long)]
    no_smooth: bool,

    /// Smooth scroll duration in milliseconds
    #[arg(long, value_name = "MS")]
    smooth_ms: Option<u64>,

    /// Idle time before the header hides, in milliseconds
    #[arg(long, value_name = "MS")]
    idle_ms: Option<u64>,

    /// Rows scrolled before the scroll-to-top button appears
    #[arg(long, value_name = "ROWS")]
    top_threshold: Option<usize>,

    /// Number of sections on the demo page
    #[arg(long, value_name = "N")]
    sections: Option<usize>,

    /// Write log output to a file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    Ok(())
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();

    let global_flags = load_config_flags(&global_config_path())?;
    let local_flags = load_config_flags(&local_override_path())?;
    let cli_flags: ConfigFlags = parse_flag_tokens(&raw_args);
    let effective = global_flags.union(&local_flags).union(&cli_flags);

    init_logging(effective.log_file.as_ref())?;
    tracing::debug!(?cli, ?effective, "starting");

    let source = match cli.file {
        Some(path) => {
            // Verify file exists
            if !path.exists() {
                anyhow::bail!("File not found: {}", path.display());
            }
            PageSource::File(path)
        }
        None => PageSource::Demo(effective.sections.unwrap_or(DEFAULT_DEMO_SECTIONS)),
    };

    let mut app = App::new(source);
    if let Some(idle_ms) = effective.idle_ms {
        app = app.with_idle_ms(idle_ms);
    }
    if let Some(threshold) = effective.top_threshold {
        app = app.with_scroll_top_threshold(threshold);
    }
    if let Some(smooth_ms) = effective.effective_smooth_ms() {
        app = app.with_smooth_ms(smooth_ms);
    }

    app.run().context("Application error")
}
