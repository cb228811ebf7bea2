//! Command line parsing for `bazaar-quote`.

use std::path::PathBuf;

use bazaar_core::{Money, PaymentMode};

use crate::config::DEFAULT_CONFIG_PATH;

pub const USAGE: &str = "\
Bazaar Quote - price a cart for COD or online checkout

Usage: bazaar-quote [OPTIONS]

Options:
  -f, --cart <PATH>          Cart JSON (array of line items), '-' for stdin (default: -)
  -m, --mode <cod|online>    Payment mode (default: cod)
  -s, --shipping-cents <N>   Shipping fee added to COD orders (default: 0)
  -c, --config <PATH>        Config file (default: bazaar.toml)
      --strict               Reject malformed line items
  -h, --help                 Show this help message";

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteArgs {
    /// `None` reads the cart from stdin.
    pub cart: Option<PathBuf>,
    pub mode: PaymentMode,
    pub shipping_fee: Money,
    pub config_path: PathBuf,
    pub strict: bool,
    pub help: bool,
}

impl Default for QuoteArgs {
    fn default() -> Self {
        QuoteArgs {
            cart: None,
            mode: PaymentMode::CashOnDelivery,
            shipping_fee: Money::zero(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            strict: false,
            help: false,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Invalid value for {flag}: {value}")]
    InvalidValue { flag: String, value: String },

    #[error("Unknown option: {0}")]
    UnknownOption(String),
}

impl QuoteArgs {
    /// Parses arguments, excluding the program name.
    pub fn parse<I>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = QuoteArgs::default();
        let mut args = args.into_iter();

        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--cart" | "-f" => {
                    let value = next_value(&mut args, &flag)?;
                    parsed.cart = (value != "-").then(|| PathBuf::from(value));
                }
                "--mode" | "-m" => {
                    let value = next_value(&mut args, &flag)?;
                    parsed.mode = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidValue { flag, value })?;
                }
                "--shipping-cents" | "-s" => {
                    let value = next_value(&mut args, &flag)?;
                    let cents: i64 = value
                        .parse()
                        .ok()
                        .filter(|cents| *cents >= 0)
                        .ok_or(ArgsError::InvalidValue { flag, value })?;
                    parsed.shipping_fee = Money::from_cents(cents);
                }
                "--config" | "-c" => {
                    parsed.config_path = PathBuf::from(next_value(&mut args, &flag)?);
                }
                "--strict" => parsed.strict = true,
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownOption(flag)),
            }
        }

        Ok(parsed)
    }
}

fn next_value<I>(args: &mut I, flag: &str) -> Result<String, ArgsError>
where
    I: Iterator<Item = String>,
{
    args.next()
        .ok_or_else(|| ArgsError::MissingValue(flag.to_string()))
}
