use std::{fs, process::ExitCode};

use boolcalc::{
    Calculation, calculate,
    interpreter::value::Bit,
    util::binding::{collect_bindings, parse_binding},
};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// boolcalc evaluates boolean logic expressions built from AND, OR, XOR, NOT,
/// parentheses and variables, and shows every step of the calculation.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells boolcalc to read the expression from a file.
    #[arg(short, long)]
    file: bool,

    /// Binds a variable to a bit, e.g. `--set X=1`. Can be repeated.
    #[arg(short, long = "set", value_name = "NAME=BIT", value_parser = parse_binding)]
    set: Vec<(String, Bit)>,

    /// Prints the calculation as JSON.
    #[arg(short, long)]
    json: bool,

    contents: String,
}

fn main() -> ExitCode {
    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr))
                                  .with(EnvFilter::from_default_env())
                                  .init();

    let args = Args::parse();

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let bindings = match collect_bindings(args.set) {
        Ok(bindings) => bindings,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };

    match calculate(&source, &bindings) {
        Ok(calculation) => {
            if args.json {
                match serde_json::to_string_pretty(&calculation) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("{e}");
                        return ExitCode::FAILURE;
                    },
                }
            } else {
                print_calculation(&calculation);
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            for message in e.messages() {
                eprintln!("{message}");
            }
            ExitCode::FAILURE
        },
    }
}

fn print_calculation(calculation: &Calculation) {
    println!("Parsed: {}", calculation.parsed);
    println!("Expression: {}", calculation.expression);
    println!("Result: {}", calculation.result);
    println!("Processes:");
    for process in &calculation.processes {
        println!("  {process}");
    }
}
