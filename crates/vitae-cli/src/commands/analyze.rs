//! Analyze command - run the pipeline over one résumé or a directory.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;
use vitae::{Analysis, Analyzer, AnalyzerConfig};

pub fn run(
    resume: PathBuf,
    job_file: Option<PathBuf>,
    config: Option<PathBuf>,
    json: bool,
    batch: bool,
    output_dir: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !resume.exists() {
        return Err(format!("File not found: {}", resume.display()).into());
    }

    let config = match config {
        Some(path) => AnalyzerConfig::load(&path)?,
        None => AnalyzerConfig::default(),
    };

    let jd_text = match job_file {
        Some(path) => fs::read_to_string(&path)
            .map_err(|e| format!("Cannot read job file '{}': {}", path.display(), e))?,
        None => read_job_description_interactively()?,
    };
    if jd_text.trim().is_empty() {
        return Err("Job description is empty".into());
    }

    let paths = collect_resume_paths(&resume, batch)?;
    let output_dir = output_dir.unwrap_or_else(|| PathBuf::from("."));
    let analyzer = Analyzer::with_config(config);

    // One résumé failing must not abort the rest of the batch.
    let mut failures = 0usize;
    for path in &paths {
        println!(
            "{} {}",
            "Analyzing".cyan().bold(),
            path.display().to_string().white()
        );

        match analyzer.analyze_file(path, &jd_text) {
            Ok(analysis) => {
                print_report(&analysis, verbose);
                if let Err(e) = save_report(&analysis, &output_dir, json) {
                    eprintln!("{} could not save report: {}", "Warning:".yellow(), e);
                }
            }
            Err(e) => {
                failures += 1;
                eprintln!("{} {}: {}", "Failed".red().bold(), path.display(), e);
            }
        }
        println!();
    }

    if failures > 0 {
        return Err(format!("{} of {} résumé(s) failed", failures, paths.len()).into());
    }
    Ok(())
}

/// Read a multi-line job description from stdin, terminated by a blank line.
fn read_job_description_interactively() -> Result<String, Box<dyn std::error::Error>> {
    println!("Paste job description; end with blank line:");
    io::stdout().flush()?;

    let stdin = io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

/// The list of résumés to analyze: the file itself, or in batch mode every
/// file in the directory with a recognized extension.
fn collect_resume_paths(
    resume: &Path,
    batch: bool,
) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    if batch && resume.is_dir() {
        let mut paths: Vec<PathBuf> = fs::read_dir(resume)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|p| p.is_file() && vitae::extract::is_supported(p))
            .collect();
        paths.sort();
        if paths.is_empty() {
            return Err(format!(
                "No .pdf or .docx files found in {}",
                resume.display()
            )
            .into());
        }
        Ok(paths)
    } else if batch {
        Err(format!("--batch requires a directory, got {}", resume.display()).into())
    } else {
        Ok(vec![resume.to_path_buf()])
    }
}

fn print_report(analysis: &Analysis, verbose: bool) {
    let report = &analysis.report;

    if verbose {
        println!();
        println!("{}", "Source:".yellow().bold());
        println!("  format      {}", analysis.source.format);
        println!("  size        {} bytes", analysis.source.size_bytes);
        println!("  words       {}", analysis.source.word_count);
        println!("  hash        {}", analysis.source.hash);
    }

    println!();
    println!("  {:12} {}", "Candidate".cyan(), report.candidate);
    if report.contacts.is_empty() {
        println!("  {:12} {}", "Contact".cyan(), "No contact info found".dimmed());
    } else {
        for contact in &report.contacts {
            println!("  {:12} {}", "Contact".cyan(), contact);
        }
    }
    println!(
        "  {:12} {} %",
        "Match".cyan(),
        format!("{:.2}", report.match_pct).white().bold()
    );

    println!();
    println!("{}", "Recommendations:".bold());
    if report.recommendations.is_empty() {
        println!("  {}", "None - no issues found".green());
    } else {
        for rec in &report.recommendations {
            println!("  - {}", rec);
        }
    }
}

/// Persist the report as `analysis_<YYYYMMDD_HHMMSS>.txt` (pretty JSON),
/// plus a `.json` twin when requested.
fn save_report(
    analysis: &Analysis,
    output_dir: &Path,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(output_dir)?;

    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let pretty = serde_json::to_string_pretty(&analysis.report)?;

    let txt_path = output_dir.join(format!("analysis_{}.txt", stamp));
    fs::write(&txt_path, &pretty)?;
    println!(
        "{} {}",
        "Saved report to".green().bold(),
        txt_path.display().to_string().white()
    );

    if json {
        let json_path = txt_path.with_extension("json");
        fs::write(&json_path, &pretty)?;
        println!(
            "{} {}",
            "Saved JSON to".green().bold(),
            json_path.display().to_string().white()
        );
    }

    Ok(())
}
