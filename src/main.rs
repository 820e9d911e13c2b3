use std::process::ExitCode;

use bean::{Engine, EngineOptions, interpreter::engine::read_script};
use clap::Parser;

/// bean is a small embeddable scripting language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat CONTENTS as the path of a script file.
    #[arg(short, long)]
    file: bool,

    /// Print the value of the last statement.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Print the syntax tree as JSON instead of evaluating. Combined with
    /// pipe mode, each statement is evaluated and printed with its value.
    #[arg(short, long)]
    ast: bool,

    /// Maximum number of nested script function calls.
    #[arg(long, default_value_t = EngineOptions::default().max_call_depth)]
    max_call_depth: usize,

    contents: String,
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    // Only initialize if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn run(args: Args) -> Result<(), bean::Error> {
    let mut engine = Engine::with_options(EngineOptions { max_call_depth: args.max_call_depth });

    let source = if args.file {
        read_script(&args.contents)?
    } else {
        args.contents
    };

    if args.ast {
        let tree = if args.pipe_mode {
            engine.describe_evaluated(&source)?
        } else {
            engine.describe(&source)?
        };
        println!("{tree:#}");
        return Ok(());
    }

    let value = engine.evaluate(&source)?;
    if args.pipe_mode {
        println!("{value}");
    }

    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
