/// Textgen — random text generator based on Markov chains.
///
/// Usage: textgen --file <corpus.txt> [--num <n>] [--print | --generate] [--config <textgen.ron>] [-v...]
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use textgen::{ConfigError, MarkovChain, MarkovError, TextgenConfig};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Random text generator based on Markov chains
#[derive(Parser)]
#[command(name = "textgen")]
#[command(version)]
#[command(about = "Random text generator based on Markov chains")]
struct Cli {
    /// The file to use for the Markov chain
    #[arg(short, long, value_name = "PATH")]
    file: PathBuf,

    /// The number of words to generate [default: 20]
    #[arg(short, long, value_name = "NUM")]
    num: Option<u32>,

    /// Print the constructed Markov chain instead of generating text
    #[arg(short, long)]
    print: bool,

    /// Generate text even if the config file selects print mode
    #[arg(short, long, conflicts_with = "print")]
    generate: bool,

    /// RON file with default settings
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("could not load config '{}': {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },
    #[error(transparent)]
    Markov(#[from] MarkovError),
    #[error("could not write output: {0}")]
    Output(#[from] io::Error),
}

fn main() {
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        // --help and --version are reported through the same path
        if !e.use_stderr() {
            let _ = e.print();
            process::exit(0);
        }
        eprintln!("{}", parse_error_line(&e));
        process::exit(1);
    });

    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// The leading paragraph of a clap error folded onto one line, without the
/// usage and help hint that follow it.
fn parse_error_line(e: &clap::Error) -> String {
    let rendered = e.to_string();
    let line = rendered
        .lines()
        .map(str::trim)
        .skip_while(|line| line.is_empty())
        .take_while(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if line.is_empty() {
        "error: invalid arguments".to_owned()
    } else {
        line
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => TextgenConfig::load_from_ron(path).map_err(|source| CliError::Config {
            path: path.clone(),
            source,
        })?,
        None => TextgenConfig::default(),
    };

    let words = cli.num.unwrap_or(config.words);
    let print = cli.print || (config.print && !cli.generate);

    let chain = MarkovChain::from_file(&cli.file)?;
    info!(corpus = %cli.file.display(), "{}", chain);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if print {
        chain.write_chain(&mut out)?;
    } else {
        chain.write_text(&mut out, words as usize)?;
        writeln!(out)?;
    }
    out.flush()?;

    Ok(())
}
