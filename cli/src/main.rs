//! pagetidy CLI - reading-order reconstruction and text cleanup

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pagetidy::{
    detect_input_from_path, ConvertOptions, ExtractionStats, ExtractorRegistry, InputKind,
    JsonFormat, LayoutOptions, NormalizeOptions, NormalizePreset, Normalizer, OutputFormat,
    PageSelection, PageTidy,
};

#[derive(Parser)]
#[command(name = "pagetidy")]
#[command(version)]
#[command(about = "Rebuild reading order from text fragments and clean extracted text", long_about = None)]
struct Cli {
    /// Input file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconstruct paragraphs from fragment JSON
    Layout {
        /// Fragment JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: Format,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,

        /// Normalize the reconstructed text
        #[arg(long)]
        normalize: bool,

        /// Process pages on a single thread
        #[arg(long)]
        sequential: bool,
    },

    /// Normalize plain text
    Clean {
        /// Text file, or "-" for stdin
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Normalization preset
        #[arg(long, value_enum, default_value = "standard")]
        preset: CleanupLevel,

        /// Keep reference sections
        #[arg(long)]
        keep_references: bool,

        /// Reference section heading (repeatable)
        #[arg(long = "marker", value_name = "WORD", env = "PAGETIDY_MARKERS", value_delimiter = ',')]
        markers: Vec<String>,
    },

    /// Convert to all formats (text, JSON records)
    Convert {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Normalization preset
        #[arg(long, value_enum)]
        cleanup: Option<CleanupLevel>,
    },

    /// Show input information
    Info {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum CleanupLevel {
    /// Whitespace collapse only
    Minimal,
    /// Full normalization (default)
    Standard,
}

impl From<CleanupLevel> for NormalizePreset {
    fn from(level: CleanupLevel) -> Self {
        match level {
            CleanupLevel::Minimal => NormalizePreset::Minimal,
            CleanupLevel::Standard => NormalizePreset::Standard,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Plain text, pages separated by blank lines
    Text,
    /// JSON paragraph records
    Json,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Layout {
            input,
            output,
            format,
            pages,
            normalize,
            sequential,
        }) => cmd_layout(
            &input,
            output.as_deref(),
            format,
            pages.as_deref(),
            normalize,
            sequential,
        ),
        Some(Commands::Clean {
            input,
            output,
            preset,
            keep_references,
            markers,
        }) => cmd_clean(&input, output.as_deref(), preset, keep_references, markers),
        Some(Commands::Convert {
            input,
            output,
            cleanup,
        }) => cmd_convert(&input, output.as_deref(), cleanup),
        Some(Commands::Info { input, json }) => cmd_info(&input, json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            if let Some(input) = cli.input {
                cmd_convert(&input, cli.output.as_deref(), None)
            } else {
                println!("{}", "Usage: pagetidy <FILE> [OUTPUT]".yellow());
                println!("       pagetidy --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_layout(
    input: &Path,
    output: Option<&Path>,
    format: Format,
    pages: Option<&str>,
    normalize: bool,
    sequential: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let page_selection = match pages {
        Some(p) => PageSelection::parse(p)?,
        None => PageSelection::All,
    };

    let mut builder = PageTidy::new().with_pages(page_selection);
    if sequential {
        builder = builder.sequential();
    }
    if normalize {
        builder = builder.with_normalize(NormalizePreset::Standard);
    }

    let result = builder.parse(input)?;
    let content = match format {
        Format::Text => result.to_text(),
        Format::Json => result.to_json(JsonFormat::Pretty)?,
    };

    write_output(output, &content)
}

fn cmd_clean(
    input: &Path,
    output: Option<&Path>,
    preset: CleanupLevel,
    keep_references: bool,
    markers: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(input)?
    };

    let mut options = NormalizeOptions::from_preset(preset.into());
    if keep_references {
        options = options.keep_references();
    }
    if !markers.is_empty() {
        options = options.with_reference_markers(markers);
    }

    let cleaned = Normalizer::new(options).normalize(&text);
    write_output(output, &cleaned)
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    cleanup: Option<CleanupLevel>,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_output", stem))
    });

    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(3);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    let registry = ExtractorRegistry::with_defaults();
    let mut options = ConvertOptions::new()
        .with_layout_options(LayoutOptions::default())
        .with_stats(true);
    if let Some(level) = cleanup {
        options = options.with_normalize(NormalizeOptions::from_preset(level.into()));
    }

    pb.set_message("Reconstructing text...");
    let result = registry.convert(input, &options)?;
    pb.inc(1);

    pb.set_message("Writing text...");
    fs::write(output_dir.join("extract.txt"), &result.content)?;
    pb.inc(1);

    pb.set_message("Writing records...");
    let json = pagetidy::render::to_json(&result.records, JsonFormat::Pretty)?;
    fs::write(output_dir.join("records.json"), &json)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    println!("  {} extract.txt", "├─".dimmed());
    println!("  {} records.json", "└─".dimmed());

    if let Some(stats) = &result.stats {
        println!(
            "\n{} pages, {} paragraphs, {} words",
            stats.page_count, stats.paragraph_count, stats.word_count
        );
    }

    Ok(())
}

fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let kind = detect_input_from_path(input)?;
    log::debug!("{}: detected {}", input.display(), kind);

    let stats = if kind.is_builtin() {
        let options = ConvertOptions::new()
            .with_format(OutputFormat::Text)
            .with_stats(true);
        let result = ExtractorRegistry::with_defaults().convert_bytes(
            &fs::read(input)?,
            kind.extension(),
            &options,
        )?;
        result.stats
    } else {
        None
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", "Input Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), kind);

    match stats {
        Some(stats) => print_stats(&stats),
        None if kind == InputKind::Pdf || kind == InputKind::Docx => {
            println!(
                "{}",
                "Binary documents need an external extractor; export fragments as JSON first."
                    .yellow()
            );
        }
        None => {}
    }

    Ok(())
}

fn print_stats(stats: &ExtractionStats) {
    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Pages".bold(), stats.page_count);
    if stats.fragment_count > 0 {
        println!("{}: {}", "Fragments".bold(), stats.fragment_count);
        println!("{}: {}", "Lines".bold(), stats.line_count);
    }
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Spacers".bold(), stats.spacer_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);
}

fn cmd_version() {
    println!("{} {}", "pagetidy".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Reading-order reconstruction and text cleanup tool");
    println!();
    println!("License: MIT");
}
