//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Vitae: résumé analysis against a job description
#[derive(Parser)]
#[command(name = "vitae")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a résumé (or a directory of résumés) against a job description
    Analyze {
        /// Path to the résumé (.pdf/.docx), or a directory with --batch
        #[arg(value_name = "RESUME")]
        resume: PathBuf,

        /// Job description text file (omit to paste interactively)
        #[arg(short, long)]
        job_file: Option<PathBuf>,

        /// YAML config overlay
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Also save the report as .json next to the .txt
        #[arg(long)]
        json: bool,

        /// Treat RESUME as a directory and analyze every supported file in it
        #[arg(short, long)]
        batch: bool,

        /// Directory for saved reports (default: current directory)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Serve a minimal web form for uploading a résumé and pasting a job description
    Web {
        /// Port for the web server
        #[arg(short, long, default_value = "3141")]
        port: u16,

        /// YAML config overlay
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
