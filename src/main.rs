use std::{fs, path::PathBuf};

use calculator::{add, divide, evaluate, evaluate_lines, multiply, sqrt, subtract};
use clap::{Parser, Subcommand};
use tracing::Level;

/// calculator evaluates simple arithmetic from the command line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Increases log output on stderr. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluates a two-operand expression such as "10 / 2".
    Eval { expression: String },
    /// Evaluates every non-blank line of a file. Lines starting with '#' are
    /// skipped.
    File { path: PathBuf },
    /// Sums the values.
    Add {
        #[arg(allow_negative_numbers = true)]
        values: Vec<f64>,
    },
    /// Subtracts the remaining values from the first.
    Sub {
        #[arg(allow_negative_numbers = true)]
        values: Vec<f64>,
    },
    /// Multiplies the values.
    Mul {
        #[arg(allow_negative_numbers = true)]
        values: Vec<f64>,
    },
    /// Divides the first value by the remaining values.
    Div {
        #[arg(allow_negative_numbers = true)]
        values: Vec<f64>,
    },
    /// Takes the square root of a non-negative value.
    Sqrt {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
}

const fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn run(command: Command) -> Result<Vec<f64>, Box<dyn std::error::Error>> {
    let results = match command {
        Command::Eval { expression } => vec![evaluate(&expression)?],
        Command::File { path } => {
            let source = fs::read_to_string(&path).map_err(|e| {
                                                      format!("Failed to read the input file '{}': {e}",
                                                              path.display())
                                                  })?;
            tracing::info!(path = %path.display(), "evaluating file");
            evaluate_lines(&source)?
        },
        Command::Add { values } => vec![add(&values)],
        Command::Sub { values } => vec![subtract(&values)],
        Command::Mul { values } => vec![multiply(&values)],
        Command::Div { values } => vec![divide(&values)?],
        Command::Sqrt { value } => vec![sqrt(value)?],
    };
    Ok(results)
}

/// Formats results for stdout, one value per line.
fn render(results: &[f64]) -> String {
    results.iter().map(|value| format!("{value}\n")).collect()
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt().with_max_level(log_level(args.verbose))
                             .with_writer(std::io::stderr)
                             .init();

    match run(args.command) {
        Ok(results) => print!("{}", render(&results)),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
