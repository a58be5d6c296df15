//! CLI tool for turning outline text into slide decks.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use deck_core::{Deck, DeckConfig, DeckRequest, OutlineFormatter};
use std::collections::HashSet;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Convert outline text into slide deck JSON.
#[derive(Parser, Debug)]
#[command(name = "deck-outline")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input outline file(s); reads stdin when empty or "-"
    input: Vec<PathBuf>,

    /// Output directory (default: print to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Deck title override (wins over a "# " line in the outline)
    #[arg(short, long)]
    title: Option<String>,

    /// Slide template identifier for payload output
    #[arg(long, env = "DECK_TEMPLATE_ID")]
    template: Option<String>,

    /// Title for content that appears before the first "## " heading
    #[arg(long, env = "DECK_DEFAULT_SLIDE_TITLE")]
    default_slide_title: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// What to emit for each input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// The parsed deck as JSON
    Json,
    /// The slide-builder request body as JSON
    Payload,
    /// The deck rendered back to outline text
    Outline,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Json | Self::Payload => "json",
            Self::Outline => "outline.md",
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let config = build_config(&args);

    let inputs = if args.input.is_empty() {
        vec![PathBuf::from("-")]
    } else {
        args.input.clone()
    };

    let mut failures = 0;
    let mut written = HashSet::new();

    for input_path in &inputs {
        log::info!("Processing: {}", input_path.display());

        match process_input(input_path, &args, &config) {
            Ok(output) => {
                if let Err(e) = emit(input_path, &args, &output, &mut written) {
                    eprintln!("Error writing {}: {:#}", input_path.display(), e);
                    failures += 1;
                }
            }
            Err(e) => {
                eprintln!("Error processing {}: {:#}", input_path.display(), e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} inputs failed", failures, inputs.len());
    }

    Ok(())
}

/// Combine command-line settings into the library config.
fn build_config(args: &Args) -> DeckConfig {
    let mut config = DeckConfig::new();
    if let Some(template) = non_blank(args.template.as_deref()) {
        config = config.with_default_template(template);
    }
    if let Some(title) = non_blank(args.default_slide_title.as_deref()) {
        config = config.with_default_slide_title(title);
    }
    config
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Parse one input and render it in the requested format.
fn process_input(input_path: &Path, args: &Args, config: &DeckConfig) -> Result<String> {
    let text = read_input(input_path)?;

    let output = match args.format {
        OutputFormat::Json => {
            let deck = parse_deck(&text, args, config);
            if deck.is_empty() {
                log::warn!("{}: outline produced no slides", input_path.display());
            }
            log::debug!("  Found {} slides", deck.slides.len());
            to_json(&deck, args.pretty)?
        }
        OutputFormat::Payload => {
            let mut request = DeckRequest::new(text);
            request.title = args.title.clone();
            let payload = request
                .into_payload(config)
                .with_context(|| format!("Failed to build payload for {}", input_path.display()))?;
            log::debug!("  Found {} slides", payload.slides.len());
            to_json(&payload, args.pretty)?
        }
        OutputFormat::Outline => {
            let deck = parse_deck(&text, args, config);
            OutlineFormatter::new().format_with_newline(&deck)
        }
    };

    Ok(output)
}

/// Parse outline text, applying the title override if one was given.
fn parse_deck(text: &str, args: &Args, config: &DeckConfig) -> Deck {
    let mut deck = config.parser().parse(text);
    if let Some(title) = non_blank(args.title.as_deref()) {
        deck.title = Some(title.to_string());
    }
    deck
}

/// Read an input file, or stdin for "-".
fn read_input(input_path: &Path) -> Result<String> {
    let mut text = String::new();

    if input_path.as_os_str() == "-" {
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
    } else {
        File::open(input_path)
            .and_then(|mut file| file.read_to_string(&mut text))
            .with_context(|| format!("Failed to read {}", input_path.display()))?;
    }

    Ok(text)
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(format!("{}\n", json))
}

/// Print output or write it into the chosen output directory.
fn emit(
    input_path: &Path,
    args: &Args,
    output: &str,
    written: &mut HashSet<PathBuf>,
) -> Result<()> {
    match &args.output {
        Some(dir) => {
            let output_path = get_output_path(input_path, dir, args.format)?;
            claim_output_path(written, &output_path)?;
            write_output(&output_path, output)?;
            log::info!("Written to: {}", output_path.display());
        }
        None => print!("{}", output),
    }
    Ok(())
}

/// Determine the output path for a processed input.
fn get_output_path(input_path: &Path, output_dir: &Path, format: OutputFormat) -> Result<PathBuf> {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| *s != "-")
        .unwrap_or("stdin");

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    Ok(output_dir.join(format!("{}.{}", stem, format.extension())))
}

/// Reject an output path already written during this run.
///
/// Inputs sharing a file stem (`a/x.txt`, `b/x.txt`) map to the same output file.
fn claim_output_path(written: &mut HashSet<PathBuf>, path: &Path) -> Result<()> {
    if !written.insert(path.to_path_buf()) {
        anyhow::bail!(
            "{} was already written by an earlier input with the same name",
            path.display()
        );
    }
    Ok(())
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}
