use std::{fs, process::ExitCode};

use clap::Parser;
use exprsolve::evaluate;
use log::LevelFilter;

/// exprsolve reduces parenthesized integer arithmetic to a single numeral.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treats the contents as a path and evaluates every non-blank line of
    /// that file.
    #[arg(short, long)]
    file: bool,

    /// Logs every reduction step.
    #[arg(short, long)]
    verbose: bool,

    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if args.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let lines: Vec<&str> = if args.file {
        script.lines().filter(|line| !line.trim().is_empty()).collect()
    } else {
        vec![script.as_str()]
    };

    let mut failed = false;
    for line in lines {
        match evaluate(line) {
            Ok(numeral) => println!("{numeral}"),
            Err(e) => {
                log::info!("{line:?} failed to evaluate: {e:?}");
                println!("{e}");
                failed = true;
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
