use std::{fs, process::ExitCode};

use clap::{ArgAction, Parser};
use exprcalc::Expression;
use log::{LevelFilter, info};

/// exprcalc evaluates infix arithmetic expressions with optional variables
/// x0, x1, ...
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells exprcalc to read expressions from a file, one per line, instead
    /// of taking a single expression.
    #[arg(short, long)]
    file: bool,

    /// Prints the canonical form and the number of variables before each
    /// value.
    #[arg(short, long)]
    show: bool,

    /// Raises the log level: once for debug, twice for trace. Without it the
    /// `RUST_LOG` environment variable applies.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The expression, or the path of the expression file with `--file`.
    contents: String,

    /// Values bound to x0, x1, ... in order.
    #[arg(allow_negative_numbers = true)]
    values: Vec<f64>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents.clone()
    };

    let mut failed = false;
    for source in expressions(&script, args.file) {
        if let Err(e) = run(source, &args) {
            eprintln!("{source}: {e}");
            failed = true;
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

/// Splits the input into the expressions to evaluate.
///
/// A file holds one expression per line; blank lines and lines starting with
/// `#` are skipped.
fn expressions(script: &str, from_file: bool) -> Vec<&str> {
    if !from_file {
        return vec![script];
    }
    script.lines()
          .map(str::trim)
          .filter(|line| !line.is_empty() && !line.starts_with('#'))
          .collect()
}

fn run(source: &str, args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let expr = Expression::parse(source)?;
    if args.show {
        println!("{expr}  [{} variable(s)]", expr.variable_count());
    }

    let value = expr.evaluate(&args.values)?;
    info!("{expr} = {value}");
    println!("{value}");
    Ok(())
}

fn init_logger(verbose: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    match verbose {
        0 => {},
        1 => {
            builder.filter_level(LevelFilter::Debug);
        },
        _ => {
            builder.filter_level(LevelFilter::Trace);
        },
    }
    builder.try_init().ok();
}
