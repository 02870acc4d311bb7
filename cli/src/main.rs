//! pdfscope CLI - structural preview reports for PDF files

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use pdfscope::{
    analyze_file_with_options, generate_report_with_options, render, Error, JsonFormat,
    ReportOptions,
};

#[derive(Parser)]
#[command(name = "pdfscope")]
#[command(version)]
#[command(about = "Print page count, metadata, page sizes and a text preview of a PDF", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Number of leading pages to inspect
    #[arg(long, value_name = "N", default_value_t = pdfscope::analyze::DEFAULT_MAX_PAGES)]
    pages: u32,

    /// Number of leading text lines considered for each preview
    #[arg(long, value_name = "N", default_value_t = pdfscope::analyze::DEFAULT_PREVIEW_LINES)]
    lines: usize,

    /// Maximum characters shown per preview line
    #[arg(long, value_name = "N", default_value_t = pdfscope::analyze::DEFAULT_LINE_WIDTH)]
    width: usize,

    /// Keyword to look for on each page (repeatable; replaces ABSTRACT and REFERENCES)
    #[arg(long = "keyword", value_name = "WORD")]
    keywords: Vec<String>,

    /// Treat pages whose text cannot be extracted as empty
    #[arg(long)]
    lenient: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Compact JSON (with --json)
    #[arg(long, requires = "json")]
    compact: bool,
}

impl Cli {
    fn report_options(&self) -> ReportOptions {
        let mut options = ReportOptions::new()
            .with_max_pages(self.pages)
            .with_preview_lines(self.lines)
            .with_line_width(self.width);

        if !self.keywords.is_empty() {
            options = options.with_keywords(self.keywords.iter().cloned());
        }
        if self.lenient {
            options = options.lenient();
        }
        options
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let options = cli.report_options();

    let result = if cli.json {
        cmd_json(&cli.input, &options, cli.compact)
    } else {
        cmd_report(&cli.input, &options)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Errors go to stdout, after whatever part of the report was already printed.
            println!("{}", error_message(&e));
            ExitCode::FAILURE
        }
    }
}

fn cmd_report(input: &Path, options: &ReportOptions) -> Result<(), Error> {
    let stdout = io::stdout();
    generate_report_with_options(input, options, stdout.lock())
}

fn cmd_json(input: &Path, options: &ReportOptions, compact: bool) -> Result<(), Error> {
    let report = analyze_file_with_options(input, options)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    println!("{}", render::to_json(&report, format)?);
    Ok(())
}

fn error_message(err: &Error) -> String {
    match err {
        Error::FileNotFound(path) => format!(
            "❌ {}: File not found - {}",
            "Error".red().bold(),
            path.display()
        ),
        other => format!("❌ {} analyzing PDF: {}", "Error".red().bold(), other),
    }
}
