use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use foundation_cnv::cli;
use foundation_cnv::diagnostics::StderrSink;
use foundation_cnv::extract;
use foundation_cnv::report;
use foundation_cnv::writer;

#[derive(Parser)]
#[command(
    name = "extract_cnv",
    about = "Extract copy-number alterations from a FoundationOne XML report into a CNV CSV file"
)]
struct Cli {
    /// Path to the FoundationOne XML report
    #[arg(short = 'x', long = "xml")]
    xml: PathBuf,

    /// Path to write the CNV CSV file
    #[arg(short = 'o', long = "out")]
    out: PathBuf,
}

fn main() -> Result<()> {
    let start = Instant::now();
    let cli_args = Cli::parse();

    cli::banner("Extract CNV");

    // ── Configuration ────────────────────────────────────
    cli::section("Configuration");

    cli::kv("Report", &cli_args.xml.display().to_string());
    cli::kv("Output", &cli_args.out.display().to_string());

    eprintln!();

    // ── Parsing ──────────────────────────────────────────
    cli::section("Parsing");

    let text = std::fs::read_to_string(&cli_args.xml)
        .with_context(|| format!("failed to read report: {}", cli_args.xml.display()))?;
    let variant_report = report::parse_report(&text)?;

    cli::kv("Samples", &variant_report.samples.len().to_string());
    cli::kv(
        "Alterations",
        &variant_report.copy_number_alterations.len().to_string(),
    );

    eprintln!();

    // ── Extraction ───────────────────────────────────────
    cli::section("Extraction");

    let mut sink = StderrSink;
    let copy_numbers = extract::extract_copy_numbers(&variant_report, &mut sink)?;

    cli::kv("Copy numbers", &copy_numbers.copy_numbers.len().to_string());

    eprintln!();

    // ── Writing ──────────────────────────────────────────
    cli::section("Writing");

    writer::write_cnv_file(&cli_args.out, &copy_numbers)?;
    cli::success(&format!("wrote {}", cli_args.out.display()));

    // ── Summary ──────────────────────────────────────────
    cli::print_summary(start);
    Ok(())
}
