use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use ipmt::index::{build_index, stats, SuffixArrayReader};
use ipmt::output;
use ipmt::query::{read_patterns, QueryExecutor};
use ipmt::utils::{AppConfig, ColorMode};
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "ipmt", version)]
#[command(about = "Build suffix-array indexes of text files and search them for exact patterns")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// When to colour matches
    #[arg(long, global = true, value_enum, value_name = "WHEN")]
    color: Option<ColorMode>,

    /// Do not draw a progress bar while indexing
    #[arg(long, global = true)]
    no_progress: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an index file named after TEXTFILE with suffix '.idx'
    Index {
        /// Text to index (bytes 0x00-0x7e only)
        textfile: PathBuf,

        /// Write the index here instead
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Search for patterns using an index file
    Search {
        /// Obtain patterns (one per line) from FILE
        #[arg(short = 'p', long = "pattern", value_name = "FILE")]
        pattern_file: Option<PathBuf>,

        /// Only print the total count of occurrences
        #[arg(short, long, conflicts_with = "line_count")]
        count: bool,

        /// Only print the number of lines that have occurrences
        #[arg(short = 'l', long = "line-count", alias = "line_count")]
        line_count: bool,

        /// Patterns followed by the index file
        #[arg(value_name = "PATTERN... INDEXFILE", required = true, num_args = 1..)]
        args: Vec<OsString>,
    },
    /// Show index statistics
    Stats {
        /// Index file to inspect
        indexfile: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli) {
        Ok(code) => code,
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = AppConfig::load();
    if let Some(color) = cli.color {
        config.color = color;
    }
    if cli.no_progress {
        config.progress = false;
    }

    match cli.command {
        Commands::Index { textfile, output } => {
            build_index(&textfile, output.as_deref(), &config)?;
        }
        Commands::Search {
            pattern_file,
            count,
            line_count,
            args,
        } => {
            return search(pattern_file, count, line_count, args, &config);
        }
        Commands::Stats { indexfile } => {
            stats::show_stats(&indexfile)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn search(
    pattern_file: Option<PathBuf>,
    count: bool,
    line_count: bool,
    mut args: Vec<OsString>,
    config: &AppConfig,
) -> Result<ExitCode> {
    let index_path = PathBuf::from(args.pop().context("missing index file")?);

    let mut patterns = match &pattern_file {
        Some(path) => read_patterns(path)?,
        None => Vec::new(),
    };
    patterns.extend(args.into_iter().map(OsString::into_encoded_bytes));

    if patterns.is_empty() {
        let _ = Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "no patterns given: pass PATTERN arguments or -p FILE before INDEXFILE",
            )
            .print();
        return Ok(ExitCode::FAILURE);
    }

    let reader = SuffixArrayReader::open(&index_path)
        .with_context(|| format!("Failed to load index {}", index_path.display()))?;
    let executor = QueryExecutor::new(&reader);
    let mut out = output::stdout(config.color);

    if count {
        output::print_count(&mut out, executor.count(&patterns))?;
    } else if line_count {
        output::print_count(&mut out, executor.line_count(&patterns))?;
    } else {
        let matches = executor.matches(&patterns);
        output::print_line_matches(&mut out, &executor, &matches)?;
    }

    Ok(ExitCode::SUCCESS)
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.downcast_ref::<io::Error>()
        .is_some_and(|io| io.kind() == io::ErrorKind::BrokenPipe)
}
