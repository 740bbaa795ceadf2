use anyhow::Result;
use clap::Parser;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use tracing::info;

use textsplitter::tui::{self, App, SizeLimits, Theme};
use textsplitter::{DEFAULT_CHUNK_SIZE, OutputFormat, input, logging, split_chunks, write_chunks};

#[derive(Parser)]
#[command(name = "textsplitter", version)]
#[command(about = "Split large text into paste-sized parts at natural boundaries")]
struct Cli {
    /// Maximum characters per chunk
    #[arg(short, long, env = "TEXTSPLITTER_SIZE", default_value_t = DEFAULT_CHUNK_SIZE, value_parser = parse_chunk_size)]
    size: usize,

    /// Input file (reads from stdin if not provided)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Output format for line mode
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Open the interactive splitter instead of printing parts
    #[arg(short = 'i', long, conflicts_with = "format")]
    tui: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Append logs to this file instead of stderr
    #[arg(long, env = "TEXTSPLITTER_LOG_FILE")]
    log_file: Option<PathBuf>,
}

fn parse_chunk_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("chunk size must be a positive integer".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("invalid chunk size '{}': {}", s, e)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.tui {
        // Logging to stderr would draw over the UI
        if let Some(path) = cli.log_file.as_deref() {
            logging::init_logger(cli.verbose, Some(path))?;
        }
        run_tui(&cli)
    } else {
        logging::init_logger(cli.verbose, cli.log_file.as_deref())?;
        run_split(&cli)
    }
}

fn run_split(cli: &Cli) -> Result<()> {
    let text = input::read_input(cli.file.as_deref())?;
    info!(bytes = text.len(), size = cli.size, source = %source_name(cli), "read input");

    let chunks = split_chunks(&text, cli.size)?;
    info!(parts = chunks.len(), "split complete");

    let mut out = io::stdout().lock();
    write_chunks(&mut out, cli.format, &chunks, cli.size)?;
    out.flush()?;

    Ok(())
}

fn run_tui(cli: &Cli) -> Result<()> {
    // A file or piped stdin becomes the initial text; keys still come from the tty
    let initial = if cli.file.is_some() || !io::stdin().is_terminal() {
        input::read_input(cli.file.as_deref())?
    } else {
        String::new()
    };
    info!(bytes = initial.len(), source = %source_name(cli), "starting interactive mode");

    let app = App::new(cli.size, SizeLimits::default(), &initial);
    tui::run(app, &Theme::default())
}

fn source_name(cli: &Cli) -> String {
    cli.file
        .as_deref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdin".to_string())
}
