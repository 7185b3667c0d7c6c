use std::fs;

use clap::Parser;
use engcalc::{Environment, Value, evaluate, parse_number};
use tracing_subscriber::EnvFilter;

/// engcalc evaluates engineering calculator queries such as `4k7 // 10k`,
/// `11+2%` or `sin(2*pi*50)`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells engcalc to read the query from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Also prints the canonical rendering of the evaluated expression.
    #[arg(short, long)]
    canonical: bool,

    /// Binds a variable, e.g. `--var x=4.7e3`. May be repeated.
    #[arg(short, long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    vars: Vec<(String, Value)>,

    contents: String,
}

/// Parses a `NAME=VALUE` command-line binding.
fn parse_binding(binding: &str) -> Result<(String, Value), String> {
    let (name, value) = binding.split_once('=')
                               .ok_or_else(|| format!("expected NAME=VALUE, found '{binding}'"))?;
    let name = name.trim();
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(format!("'{name}' is not a valid variable name"));
    }
    let value = parse_number(value).map_err(|e| e.to_string())?;
    Ok((name.to_string(), value))
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env())
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    let query = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let environment = args.vars.into_iter().collect::<Environment>();

    match evaluate(&query, &environment) {
        Ok((value, canonical)) => {
            if args.canonical {
                println!("{canonical}");
            }
            println!("{value}");
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
