//! argsplit inspector entry point.
//!
//! Reads command lines from stdin, one parse per line, and prints each
//! parsed pipeline to stdout.

use argsplit::output::{format_json, format_plain};
use argsplit::parser::parse;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

const USAGE: &str = "usage: argsplit [--json]\n\n\
Reads command lines from stdin and prints the parsed pipeline stages,\n\
one parse per line. With --json, each line is printed as a JSON array\n\
of arrays of argument strings.";

fn main() -> ExitCode {
    let mut json = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                return ExitCode::SUCCESS;
            }
            other => {
                eprintln!("argsplit: unknown option '{other}'\n{USAGE}");
                return ExitCode::from(2);
            }
        }
    }

    match run(json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("argsplit: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    for line in stdin.lines() {
        let line = line?;
        let pipeline = parse(&line);
        if json {
            writeln!(stdout, "{}", format_json(&pipeline)?)?;
        } else {
            write!(stdout, "{}", format_plain(&pipeline))?;
        }
    }
    Ok(())
}
