use std::{fs, path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use simian::run_script;
use tracing_subscriber::EnvFilter;

/// simian is a small scripting language with first-class functions and
/// closures. Without a file or `--eval`, an interactive session starts.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script file to run.
    file: Option<PathBuf>,

    /// Runs the given source text instead of a file.
    #[arg(short, long, value_name = "SOURCE", conflicts_with = "file")]
    eval: Option<String>,

    /// Pipe mode prints the value of the script's last statement.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Raises the log level; repeat for more detail. `RUST_LOG` takes
    /// precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    let script = match (args.eval, &args.file) {
        (Some(source), _) => source,
        (None, Some(path)) => fs::read_to_string(path).with_context(|| {
                                  format!("failed to read the input file '{}'", path.display())
                              })?,
        (None, None) => {
            simian::repl::run().context("the interactive session failed")?;
            return Ok(ExitCode::SUCCESS);
        },
    };

    if let Err(e) = run_script(&script, args.pipe_mode) {
        eprintln!("{e}");
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
