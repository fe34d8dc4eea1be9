use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::Parser;
use shunting_yard::{
    config::{Capabilities, Config},
    error::Error,
    interpreter::{calculator::Calculator, render::render_tokens},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// shunting-yard evaluates arithmetic expressions by converting them to
/// Reverse Polish Notation.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Expression to evaluate. Read from standard input when omitted.
    expression: Option<String>,

    /// Directory of shared libraries exporting `imp`-prefixed functions.
    /// May be given more than once.
    #[arg(short, long = "lib-dir", value_name = "DIR")]
    lib_dirs: Vec<PathBuf>,

    /// Reject function calls.
    #[arg(long)]
    no_functions: bool,

    /// Do not fold `(-x)` into a negative operand.
    #[arg(long)]
    no_negation: bool,

    /// Print the postfix form instead of evaluating it.
    #[arg(short, long)]
    rpn: bool,

    /// Trace the intermediate token lists on standard error.
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.debug);

    let source = match args.expression.clone() {
        Some(expression) => expression,
        None => read_expression().unwrap_or_else(|e| {
                                     eprintln!("Failed to read the expression: {e}");
                                     std::process::exit(1);
                                 }),
    };

    if let Err(e) = run(&args, &source) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args, source: &str) -> Result<(), Error> {
    let config = Config { capabilities: Capabilities { functions:        !args.no_functions,
                                                       negation_folding: !args.no_negation, },
                          library_dirs: args.lib_dirs.clone(), };
    let calculator = Calculator::from_config(&config)?;

    if args.rpn {
        println!("{}", render_tokens(&calculator.to_rpn(source)?));
    } else {
        println!("{}", calculator.evaluate(source)?);
    }
    Ok(())
}

fn read_expression() -> io::Result<String> {
    print!("Enter expression: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Installs a subscriber when `--debug` is passed or `RUST_LOG` is set.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("shunting_yard=trace")
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        return;
    };

    tracing_subscriber::registry().with(fmt::layer().with_target(true)
                                                    .with_level(true)
                                                    .with_writer(io::stderr))
                                  .with(filter)
                                  .init();
}
