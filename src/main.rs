//! hexview - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

/// hexview - windowed hex viewer for large files
#[derive(Parser, Debug)]
#[command(name = "hexview")]
#[command(version)]
#[command(about = "Hex viewer that reads only the visible window of a file")]
pub struct Args {
    /// Path to the file to view
    pub file: PathBuf,

    /// Start at the row containing this byte offset
    #[arg(short, long, default_value_t = 0)]
    pub offset: u64,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = hexview::config::resolve(args.config.clone(), args.no_color)
        .map_err(hexview::model::AppError::from)?;

    // A broken log path should not keep the viewer from starting
    let logging = hexview::logging::init(&config.log_file_path);
    if let Err(err) = &logging {
        eprintln!("hexview: logging disabled: {err}");
    }

    info!(
        config = ?config,
        file = %args.file.display(),
        "Configuration loaded and resolved"
    );

    if let Err(err) = hexview::view::run(args.file, config, args.offset) {
        warn!(error = %err, "Viewer exited with error");
        return Err(err.into());
    }

    Ok(())
}
