//! compare-pdf CLI - pixel-level PDF comparison tool

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdfdiff::{
    CompareOptions, ComparisonReport, JsonFormat, PageOutcome, PdfComparator, PdfiumRasterizer,
    RasterOptions, DEFAULT_OUTPUT_DIR,
};

/// Exit code when no page differs.
const EXIT_IDENTICAL: i32 = 0;
/// Exit code when any page differs.
const EXIT_DIFFERENCES: i32 = 1;
/// Exit code when the comparison could not run.
const EXIT_ERROR: i32 = 2;

#[derive(Parser)]
#[command(name = "compare-pdf")]
#[command(version)]
#[command(about = "Compare two PDF files at the pixel level and write diff images")]
#[command(long_about = "Compare two PDF files at the pixel level and write diff images.\n\n\
Pages are rendered at 100 dpi and paired by index. Every page that differs, or \
exists in only one file, is written as diff_page_<N>.png to the output directory.\n\n\
Caveat: when paired pages render to different sizes, the page from PDF_B is \
resized to the size of the page from PDF_A before comparing. The result then \
reflects a scaled rendering and may hide or invent differences.\n\n\
Exit status: 0 if no differences, 1 if differences were found, 2 on error.")]
struct Cli {
    /// Reference PDF file
    #[arg(value_name = "PDF_A")]
    pdf_a: PathBuf,

    /// PDF file to compare against the reference
    #[arg(value_name = "PDF_B")]
    pdf_b: PathBuf,

    /// Output directory for diff images
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Write a JSON comparison report to FILE
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Path to the pdfium shared library
    #[arg(long, value_name = "PATH", env = "PDFIUM_DYNAMIC_LIB_PATH")]
    pdfium_lib: Option<PathBuf>,

    /// Hide the progress spinner
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("pdfdiff=info"))
        .init();

    let cli = Cli::parse();

    let result = cmd_compare(&cli);
    let (code, message) = exit_status(&result);
    match result {
        Ok(true) => println!("{}", message.red().bold()),
        Ok(false) => println!("{}", message.green().bold()),
        Err(e) => eprintln!("{}: {}", message.red().bold(), e),
    }
    std::process::exit(code);
}

/// Exit code and verdict line for the outcome of a comparison.
fn exit_status<E>(result: &Result<bool, E>) -> (i32, &'static str) {
    match result {
        Ok(false) => (EXIT_IDENTICAL, "✅ No significant differences."),
        Ok(true) => (EXIT_DIFFERENCES, "❌ Differences found."),
        Err(_) => (EXIT_ERROR, "Error"),
    }
}

fn cmd_compare(cli: &Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let mut raster_options = RasterOptions::new();
    if let Some(ref lib) = cli.pdfium_lib {
        raster_options = raster_options.with_library_path(lib);
    }

    let options = CompareOptions::new().with_output_dir(&cli.output);
    let comparator = PdfComparator::new(PdfiumRasterizer::with_options(raster_options)?, options);

    let pb = if cli.quiet {
        ProgressBar::hidden()
    } else {
        spinner()
    };

    pb.set_message(format!("Rendering {}...", cli.pdf_a.display()));
    let first = comparator.rasterize(&cli.pdf_a)?;

    pb.set_message(format!("Rendering {}...", cli.pdf_b.display()));
    let second = comparator.rasterize(&cli.pdf_b)?;
    pb.finish_and_clear();

    let report = comparator.compare_documents(&first, &second)?;
    print_summary(&report);

    if let Some(ref path) = cli.report {
        write_report(&report, path)?;
    }

    Ok(report.differences_found())
}

fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn print_summary(report: &ComparisonReport) {
    println!(
        "{}: {} ({} pages) vs {} ({} pages)",
        "Compared".bold(),
        report.first.path.display(),
        report.first.page_count,
        report.second.path.display(),
        report.second.page_count
    );

    for page in report.differing_pages() {
        let detail = match page.outcome {
            PageOutcome::Mismatch { pixels } => format!("{} pixels differ", pixels),
            PageOutcome::Missing { .. } => "missing in one PDF".to_string(),
            PageOutcome::Identical => continue,
        };
        let file = page
            .diff_image
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        println!(
            "  {} page {}: {} {}",
            "├─".dimmed(),
            page.number,
            detail.yellow(),
            file.dimmed()
        );
    }
}

fn write_report(report: &ComparisonReport, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let json = pdfdiff::to_json(report, JsonFormat::Pretty)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, json)?;
    println!("{} {}", "Report saved to".green(), path.display());
    Ok(())
}
