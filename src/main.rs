//! CLI tool to tokenize and highlight Ymir source files.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;
use ymir_highlight::{Config, render_html};

#[derive(Debug, Parser)]
#[command(name = "ymir-highlight", version, about = "Highlight Ymir source code")]
struct Cli {
    /// TOML file overriding the vocabulary and grammar tables
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print one `category<TAB>text` line per grammar token
    Tokens {
        /// Source files; reads stdin when empty
        files: Vec<PathBuf>,
    },
    /// Render grammar tokens as HTML
    Html { files: Vec<PathBuf> },
    /// Wrap keywords and primitive types of a code block in spans
    Markup { files: Vec<PathBuf> },
}

impl Command {
    fn files(&self) -> &[PathBuf] {
        match self {
            Self::Tokens { files } | Self::Html { files } | Self::Markup { files } => files,
        }
    }

    fn run(&self, config: &Config, source: &str) -> String {
        match self {
            Self::Tokens { .. } => config
                .tokenize(source)
                .iter()
                .map(|t| format!("{}\t{:?}\n", t.category, t.text))
                .collect(),
            Self::Html { .. } => render_html(&config.tokenize(source)),
            Self::Markup { .. } => config.highlight(source),
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match ymir_highlight::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(2);
        }
    };

    let files = cli.command.files();
    if files.is_empty() {
        let mut source = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut source) {
            eprintln!("<stdin>: {e}");
            return ExitCode::FAILURE;
        }
        print!("{}", cli.command.run(&config, &source));
        return ExitCode::SUCCESS;
    }

    let mut had_error = false;
    for path in files {
        match ymir_highlight::read_source(path) {
            Ok(source) => print!("{}", cli.command.run(&config, &source)),
            Err(e) => {
                warn!(path = %path.display(), "skipping unreadable file");
                eprintln!("{}: {e}", path.display());
                had_error = true;
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
