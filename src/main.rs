// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `algos` binary entry point: one subcommand per demo.

use std::io::{self, Write};

use clap::{Parser, Subcommand};
use strum::IntoEnumIterator;

use algo_demos::{run_all, DemoKind, DemoResult};

#[derive(Parser)]
#[command(name = "algos")]
#[command(about = "Pedagogical algorithm demos with fixed, compiled-in inputs")]
struct Args {
    /// Enable debug-level logging (to stderr; transcripts stay on stdout)
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Approximate the square root of 2 by bisection
    Sqrt,
    /// Evaluate the growth recursion uparrow(2, 2, 3)
    Uparrow,
    /// Enumerate shifted Fibonacci numbers for n = 0..=15
    Fib,
    /// Search for a Pythagorean triple with components up to 13
    Triple,
    /// The same triple search, reporting via shared mutable state
    TripleShared,
    /// Run every demo in suite order
    All,
    /// List the demo names
    List,
}

fn main() -> DemoResult<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Sqrt => DemoKind::Sqrt.demo().run(&mut out),
        Command::Uparrow => DemoKind::Uparrow.demo().run(&mut out),
        Command::Fib => DemoKind::Fib.demo().run(&mut out),
        Command::Triple => DemoKind::Triple.demo().run(&mut out),
        Command::TripleShared => DemoKind::TripleShared.demo().run(&mut out),
        Command::All => run_all(&mut out),
        Command::List => {
            for kind in DemoKind::iter() {
                writeln!(out, "{}", kind)?;
            }
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("algo_demos=debug,algos=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
