//! Vitae CLI - résumé analysis against a job description.

mod cli;
mod commands;
mod server;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            resume,
            job_file,
            config,
            json,
            batch,
            output_dir,
        } => commands::analyze::run(resume, job_file, config, json, batch, output_dir, cli.verbose),

        Commands::Web { port, config } => commands::web::run(port, config, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
