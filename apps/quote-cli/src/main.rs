//! # bazaar-quote
//!
//! ## Usage
//! ```bash
//! # COD quote for a cart file
//! cargo run -p bazaar-quote -- --cart cart.json
//!
//! # Online quote from stdin, rejecting malformed items
//! cat cart.json | cargo run -p bazaar-quote -- --mode online --strict
//!
//! # Override the fee table for one run
//! BAZAAR__POLICY__COD_FEE_MAX_CENTS=2000 cargo run -p bazaar-quote -- -f cart.json
//! ```

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bazaar_quote::args::{QuoteArgs, USAGE};
use bazaar_quote::config::QuoteConfig;
use bazaar_quote::run_quote;

fn main() -> anyhow::Result<()> {
    let args = QuoteArgs::parse(std::env::args().skip(1))?;
    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }

    init_logging();

    let config = QuoteConfig::load(&args.config_path)?;
    info!(
        config = %args.config_path.display(),
        currency = %config.currency_code,
        strict = config.strict || args.strict,
        "Configuration loaded"
    );

    let stdout = io::stdout();
    match &args.cart {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Cannot open cart file {}", path.display()))?;
            run_quote(&config, &args, BufReader::new(file), stdout.lock())?;
        }
        None => {
            run_quote(&config, &args, io::stdin().lock(), stdout.lock())?;
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout carries only the JSON totals.
///
/// Default: INFO, overridable with RUST_LOG.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bazaar_core=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}
