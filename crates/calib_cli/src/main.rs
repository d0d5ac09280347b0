//! calib: The calibration document summing CLI.
//!
//! Usage:
//!   calib [options] [FILE]
//!
//! Reads a calibration document, combines the first and last digit token of
//! each line into a two-digit value, and prints the sum of those values.

use clap::Parser as ClapParser;
use std::process;
use std::time::Instant;

#[derive(ClapParser, Debug)]
#[command(name = "calib", about = "calib - Sums the first/last digit tokens of a document", version)]
struct Cli {
    /// Calibration document to read.
    #[arg(value_name = "FILE", default_value = "input.txt")]
    input: std::path::PathBuf,

    /// Recognize only numeral digits, not the spelled-out words.
    #[arg(long = "digits-only")]
    digits_only: bool,

    /// Enable pretty printing for diagnostics.
    #[arg(long, default_value_t = true)]
    pretty: bool,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let start = Instant::now();

    let options = calib_sum::SumOptions {
        numerals_only: cli.digits_only,
    };
    let mut summation = calib_sum::Summation::new(options);

    if let Err(e) = summation.load_input(&cli.input) {
        print_error(&e.to_string());
        return 1;
    }

    let (tally, diagnostics) = summation.run();

    // Print diagnostics with color
    let use_color = cli.pretty && atty_is_terminal();
    for diag in diagnostics.diagnostics() {
        print_diagnostic(diag, use_color);
    }

    if diagnostics.has_errors() {
        let count = diagnostics.error_count();
        if use_color {
            eprintln!(
                "\n{}Found {} error{}.{}",
                RED,
                count,
                if count == 1 { "" } else { "s" },
                RESET
            );
        } else {
            eprintln!(
                "\nFound {} error{}.",
                count,
                if count == 1 { "" } else { "s" }
            );
        }
        return 2;
    }

    let tally = match tally {
        Some(tally) => tally,
        None => {
            print_error("No total produced.");
            return 2;
        }
    };

    let elapsed = start.elapsed();
    log::debug!("summed {} lines in {:.2?}", tally.lines, elapsed);

    if use_color {
        eprintln!(
            "{}Scanned {} lines.{}",
            GRAY, tally.lines, RESET
        );
    }

    // The total is the sole stdout output.
    println!("{}", tally.total);
    0
}

fn print_diagnostic(diag: &calib_diagnostics::Diagnostic, use_color: bool) {
    if use_color {
        let color = if diag.is_error() { RED } else { YELLOW };
        let category = if diag.is_error() { "error" } else { "warning" };
        if let Some(ref file) = diag.file {
            eprint!("{}{}{}", CYAN, file, RESET);
            if let Some(span) = diag.span {
                eprint!("({})", span.start);
            }
            eprint!(": ");
        }
        eprintln!(
            "{}{}{}{} {}{}{}: {}",
            BOLD, color, category, RESET,
            CYAN, format!("CAL{}", diag.code), RESET,
            diag.message_text
        );
    } else {
        eprintln!("{}", diag);
    }
}

fn print_error(msg: &str) {
    if atty_is_terminal() {
        eprintln!("{}{}error{}: {}", BOLD, RED, RESET, msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

fn atty_is_terminal() -> bool {
    // Simple check - on Unix, check if stderr is a terminal
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        true // Assume terminal on other platforms
    }
}
