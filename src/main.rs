use std::{
    fs,
    io::{self, BufRead},
    process::ExitCode,
};

use clap::Parser;
use letcalc::{Options, evaluate_with, interpreter::parser::DEFAULT_MAX_DEPTH};

/// letcalc evaluates integer arithmetic written in prefix form, such as
/// `let(a, 5, add(a, a))`.
///
/// Each non-blank line is evaluated on its own. Results go to stdout, errors to
/// stderr.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells letcalc to read expressions from a file, one per line.
    #[arg(short, long)]
    file: bool,

    /// Print the tokens and the syntax tree of every expression to stderr.
    #[arg(short, long)]
    trace: bool,

    /// How deeply parentheses may nest.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// An expression, or a path with `--file`. Reads stdin when omitted.
    contents: Option<String>,
}

/// Evaluates every non-blank line and reports whether all of them succeeded.
fn run_lines<I>(lines: I, options: &Options) -> bool
    where I: IntoIterator<Item = String>
{
    let mut all_ok = true;

    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        match evaluate_with(&line, options) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                all_ok = false;
            },
        }
    }

    all_ok
}

fn main() -> ExitCode {
    let args = Args::parse();
    let options = Options { max_depth: args.max_depth,
                            trace:     args.trace, };

    let all_ok = match args.contents {
        Some(path) if args.file => {
            let Ok(script) = fs::read_to_string(&path) else {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            };
            run_lines(script.lines().map(str::to_owned), &options)
        },
        Some(expression) => run_lines([expression], &options),
        None => run_lines(io::stdin().lock().lines().map_while(Result::ok), &options),
    };

    if all_ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
