// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Hermitian Code CLI
//!
//! Builds a one-point Hermitian code, prints its parameters and matrices, and runs a
//! transmission over a simulated noisy channel.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hermitian_code::channel::{transmit_text, NoisyChannel};
use hermitian_code::utils::print_matrix;
use hermitian_code::{load_config, verify_parity_matrix, HermitianCode, MatrixStrategy};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "One-point AG codes on the Hermitian curve x^(m+1) + y^m z + y z^m over GF(m^2)."
)]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Curve parameter m (a prime power)
    #[arg(long, global = true)]
    m: Option<u32>,

    /// Divisor degree a
    #[arg(long, global = true)]
    a: Option<usize>,

    /// Matrix construction strategy
    #[arg(long, global = true, value_enum)]
    strategy: Option<MatrixStrategy>,

    /// Log level
    #[arg(long, global = true, default_value_t = Level::WARN)]
    log_level: Level,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print code parameters
    Info {
        /// Also print the generator and parity-check matrices
        #[arg(long, default_value_t = false)]
        matrices: bool,

        /// Print as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Send text through the code over a noisy channel
    Transmit {
        /// Text to send
        #[arg(long, default_value = "Hello world")]
        text: String,

        /// Probability that a symbol is corrupted
        #[arg(long, default_value_t = 0.01)]
        error_rate: f64,

        /// Seed of the channel's random number generator
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

fn setup_simple_tracing(log_level: Level) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_simple_tracing(cli.log_level);

    let mut config = load_config(cli.config.as_deref()).context("Could not load configuration")?;
    if let Some(m) = cli.m {
        config.m = m;
    }
    if cli.a.is_some() {
        config.a = cli.a;
    }
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy;
    }

    let code = HermitianCode::from_config(&config).context("Could not build the code")?;

    match cli.command {
        Command::Info { matrices, json } => info(&code, matrices, json),
        Command::Transmit {
            text,
            error_rate,
            seed,
        } => transmit(&code, &text, error_rate, seed),
    }
}

fn info(code: &HermitianCode, matrices: bool, as_json: bool) -> Result<()> {
    if as_json {
        let mut value = json!({
            "m": code.m(),
            "a": code.a(),
            "g": code.g(),
            "n": code.n(),
            "k": code.k(),
            "d": code.d(),
            "t": code.t(),
            "strategy": code.strategy(),
            "points": code.points(),
        });
        if matrices {
            value["generator"] = serde_json::to_value(code.generator_matrix())?;
            value["parity_check"] = serde_json::to_value(code.parity_check_matrix())?;
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("=== {} ===", code);
    println!("Genus g: {}", code.g());
    println!("Field: GF({})", code.field().order());
    println!("Code length n: {}", code.n());
    println!("Code dimension k: {}", code.k());
    println!("Designed distance d: {}", code.d());
    println!("We may add up to {} errors", code.t());
    println!("Matrix strategy: {:?}", code.strategy());

    if matrices {
        println!();
        print_matrix("Generator Matrix G", code.generator_matrix(), code.field());
        print_matrix(
            "Parity-Check Matrix H",
            code.parity_check_matrix(),
            code.field(),
        );
        let verified = verify_parity_matrix(
            code.field(),
            code.generator_matrix(),
            code.parity_check_matrix(),
        )?;
        if verified {
            println!("✓ Verification passed: G · H^T = 0");
        }
    }
    Ok(())
}

fn transmit(code: &HermitianCode, text: &str, error_rate: f64, seed: u64) -> Result<()> {
    let mut channel = NoisyChannel::new(ChaCha8Rng::seed_from_u64(seed), error_rate)?;
    let report = transmit_text(code, &mut channel, text.as_bytes())?;

    println!("{}", String::from_utf8_lossy(&report.received));
    println!(
        "blocks: {}, failed: {}, corrupted symbols: {}, corrected symbols: {}",
        report.blocks, report.failed_blocks, report.corrupted_symbols, report.corrected_symbols
    );
    Ok(())
}
