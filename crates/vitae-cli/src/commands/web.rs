//! Web command - serve the upload form.

use std::path::PathBuf;

use colored::Colorize;
use vitae::{Analyzer, AnalyzerConfig};

use crate::server::{app, state::AppState};

pub fn run(
    port: u16,
    config: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = match config {
        Some(ref path) => {
            if verbose {
                println!("Loading config overlay from {}", path.display());
            }
            AnalyzerConfig::load(path)?
        }
        None => AnalyzerConfig::default(),
    };

    let state = AppState::new(Analyzer::with_config(config));

    let url = format!("http://localhost:{}", port);
    println!();
    println!(
        "{} {}",
        "Starting analyzer server at".cyan().bold(),
        url.white().bold()
    );
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(app::run_server(state, port))
}
