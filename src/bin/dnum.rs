use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};
use dnum::{Context, Error, Number};
use tracing_subscriber::EnvFilter;

/// Demonstrates dynamically promoted numbers.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Runs a handful of operations and checks their results.
    Demo,
    /// Repeatedly sums values and reports the elapsed time.
    Sum {
        #[arg(short, long, default_value_t = 1_000_000)]
        iterations: u32,
        /// Allocate every value instead of recycling storage.
        #[arg(long)]
        no_pool: bool,
    },
    /// Decodes a `<kind>:<value>` string.
    Parse { text: String },
}

fn demo() -> Result<(), Error> {
    let a = Number::from(10);
    let b = Number::from(5);

    let checks = [
        ("10 + 5", (&a + &b)?, "short:15"),
        ("10 - 5", (&a - &b)?, "short:5"),
        ("10 * 5", (&a * &b)?, "short:50"),
        ("10 / 5", (&a / &b)?, "short:2"),
    ];
    for (expr, result, expected) in checks {
        let status = if result.serialize() == expected { "ok" } else { "MISMATCH" };
        println!("{expr} = {result} -> {} [{status}]", result.serialize());
    }

    match &a / &Number::from(0) {
        Err(e) => println!("10 / 0 -> {e}"),
        Ok(n) => println!("10 / 0 = {n} [MISMATCH]"),
    }
    for text in ["bogus:1", "short1"] {
        match Number::deserialize(text) {
            Err(e) => println!("{text:?} -> {e}"),
            Ok(n) => println!("{text:?} = {n} [MISMATCH]"),
        }
    }
    Ok(())
}

fn sum(iterations: u32, pooled: bool) -> Result<(), Error> {
    let ctx = Context::new().pooling(pooled);
    let one = Number::new_in(1, &ctx)?;
    let mut total = Number::new_in(0, &ctx)?;

    let start = Instant::now();
    for _ in 0..iterations {
        total = (&total + &one)?;
    }
    let elapsed = start.elapsed();

    println!("sum = {total} in {elapsed:?}");
    if let Some(pool) = ctx.pool() {
        println!("pool: {:?}", pool.stats());
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Demo => demo(),
        Command::Sum { iterations, no_pool } => sum(iterations, !no_pool),
        Command::Parse { text } => Number::deserialize(&text).map(|n| println!("{n}")),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
