use std::{
    fs,
    io::{self, BufRead, IsTerminal, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use linecalc::{
    Error,
    config::{Config, DEFAULT_MAX_DEPTH, FloatDivision},
    interpreter::{evaluator::core::evaluate, lexer::tokenize, parser::core::parse, value::Value},
    report::{format_result, render_error_with_source},
};
use tracing::info;

mod logging;

/// Policy for dividing a float by zero.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum DivisionMode {
    /// Report a division by zero error.
    Error,
    /// Produce infinity or NaN.
    Ieee,
}

impl From<DivisionMode> for FloatDivision {
    fn from(mode: DivisionMode) -> Self {
        match mode {
            DivisionMode::Error => Self::Error,
            DivisionMode::Ieee => Self::Ieee,
        }
    }
}

/// linecalc evaluates arithmetic expressions over integers and floats, one
/// line at a time.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate this expression once instead of reading stdin.
    #[arg(conflicts_with = "file")]
    expression: Option<String>,

    /// Evaluate every non-blank line of a file.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Print the token list before the result.
    #[arg(long)]
    tokens: bool,

    /// Print the syntax tree before the result.
    #[arg(long)]
    ast: bool,

    /// Deepest nesting of operators and parentheses accepted.
    #[arg(long, env = "LINECALC_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// What dividing a float by zero produces.
    #[arg(long, env = "LINECALC_FLOAT_DIVISION", value_enum, default_value = "error")]
    float_division: DivisionMode,

    /// Increase log verbosity (-v, -vv, -vvv). `RUST_LOG` overrides it.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Runs the stages one by one, printing the dumps requested on the way.
fn pipeline(line: &str, source_name: &str, args: &Args, config: &Config) -> Result<Value, Error> {
    let tokens = tokenize(line, source_name)?;
    if args.tokens {
        let rendered: Vec<String> = tokens.iter().map(ToString::to_string).collect();
        println!("[{}]", rendered.join(", "));
    }

    let expr = parse(&tokens, config)?;
    if args.ast {
        println!("{expr}");
    }

    Ok(evaluate(&expr, config)?)
}

/// Runs one line and prints its outcome. Returns `false` on failure.
fn evaluate_line(line: &str, source_name: &str, args: &Args, config: &Config) -> bool {
    let outcome = pipeline(line, source_name, args, config);

    match outcome {
        Ok(value) => {
            println!("{}", format_result(&value));
            true
        },
        Err(e) => {
            println!("{}", render_error_with_source(&e));
            false
        },
    }
}

fn run_file(path: &Path, args: &Args, config: &Config) -> ExitCode {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("Failed to read the input file '{}': {e}", path.display());
            return ExitCode::FAILURE;
        },
    };

    let source_name = path.display().to_string();
    let mut ok = true;
    for line in contents.lines().filter(|l| !l.trim().is_empty()) {
        ok &= evaluate_line(line, &source_name, args, config);
    }

    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

fn run_repl(args: &Args, config: &Config) -> ExitCode {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    info!(target: "linecalc::cli", interactive, "reading from stdin");

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!(" > ");
            let _ = io::stdout().flush();
        }
        match lines.next() {
            Some(Ok(line)) => {
                evaluate_line(&line, "stdin", args, config);
            },
            Some(Err(e)) => {
                eprintln!("Failed to read from stdin: {e}");
                return ExitCode::FAILURE;
            },
            None => return ExitCode::SUCCESS,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = Config::default().with_max_depth(args.max_depth)
                                  .with_float_division(args.float_division.into());

    if let Some(path) = &args.file {
        run_file(path, &args, &config)
    } else if let Some(expression) = &args.expression {
        if evaluate_line(expression, "arg", &args, &config) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    } else {
        run_repl(&args, &config)
    }
}
