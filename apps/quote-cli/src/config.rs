//! Quote CLI configuration.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     BAZAAR__CURRENCY_CODE=AED                                          │
//! │     BAZAAR__POLICY__COD_FEE_MAX_CENTS=2000                             │
//! │                                                                         │
//! │  2. TOML Config File (optional)                                        │
//! │     --config <path>, default ./bazaar.toml                             │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     USD, permissive pricing, marketplace fee table                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! currency_code = "USD"
//! strict = false
//!
//! [policy]
//! cod_free_threshold_cents = 15000
//! cod_fee_rate_bps = 1000
//! cod_fee_min_cents = 1000
//! cod_fee_max_cents = 1500
//! shipping_free_threshold_cents = 10000
//! shipping_fee_rate_bps = 1000
//! ```

use std::path::Path;

use bazaar_core::{PricingPolicy, ValidationError};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "BAZAAR";

/// Default config file, looked up relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "bazaar.toml";

/// Quote CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteConfig {
    /// ISO 4217 code printed in front of amounts in the log summary.
    pub currency_code: String,

    /// Reject malformed line items instead of pricing them as-is.
    pub strict: bool,

    /// Fee table handed to the calculator.
    pub policy: PricingPolicy,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        QuoteConfig {
            currency_code: "USD".to_string(),
            strict: false,
            policy: PricingPolicy::default(),
        }
    }
}

impl QuoteConfig {
    /// Loads the optional TOML file at `path`, then environment overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: QuoteConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a TOML document without consulting the environment.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let config: QuoteConfig = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the currency code and the fee table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let code = self.currency_code.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ConfigError::InvalidValue("currency_code".to_string()));
        }

        self.policy.validate().map_err(ConfigError::InvalidPolicy)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Invalid pricing policy: {0}")]
    InvalidPolicy(ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = QuoteConfig::from_toml_str("").unwrap();
        assert_eq!(config, QuoteConfig::default());
    }

    #[test]
    fn test_partial_policy_override() {
        let config = QuoteConfig::from_toml_str(
            r#"
            currency_code = "AED"

            [policy]
            cod_fee_max_cents = 2000
            "#,
        )
        .unwrap();

        assert_eq!(config.currency_code, "AED");
        assert_eq!(config.policy.cod_fee_max_cents, 2_000);
        assert_eq!(config.policy.cod_fee_min_cents, 1_000);
        assert!(!config.strict);
    }

    #[test]
    fn test_invalid_policy_rejected() {
        let result = QuoteConfig::from_toml_str(
            r#"
            [policy]
            cod_fee_min_cents = 3000
            cod_fee_max_cents = 1500
            "#,
        );
        assert!(matches!(result, Err(ConfigError::InvalidPolicy(_))));
    }

    #[test]
    fn test_invalid_currency_code_rejected() {
        let result = QuoteConfig::from_toml_str(r#"currency_code = "dollars""#);
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    // Only test that touches BAZAAR__* variables; other tests use `from_toml_str`.
    #[test]
    fn test_load_layers_defaults_file_and_env() {
        const MAX_VAR: &str = "BAZAAR__POLICY__COD_FEE_MAX_CENTS";
        const CURRENCY_VAR: &str = "BAZAAR__CURRENCY_CODE";

        let saved: Vec<(&str, Option<String>)> = [MAX_VAR, CURRENCY_VAR]
            .into_iter()
            .map(|key| (key, std::env::var(key).ok()))
            .collect();
        std::env::remove_var(MAX_VAR);
        std::env::remove_var(CURRENCY_VAR);

        let missing = QuoteConfig::load(Path::new("does-not-exist/bazaar.toml")).unwrap();
        assert_eq!(missing, QuoteConfig::default());

        let path = std::env::temp_dir()
            .join(format!("bazaar-config-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            r#"
            currency_code = "EUR"

            [policy]
            cod_fee_min_cents = 1200
            cod_fee_max_cents = 1800
            "#,
        )
        .unwrap();

        let from_file = QuoteConfig::load(&path).unwrap();
        assert_eq!(from_file.currency_code, "EUR");
        assert_eq!(from_file.policy.cod_fee_max_cents, 1_800);

        std::env::set_var(MAX_VAR, "2000");
        std::env::set_var(CURRENCY_VAR, "AED");
        let overridden = QuoteConfig::load(&path);
        let env_only = QuoteConfig::load(Path::new("does-not-exist/bazaar.toml"));

        for (key, value) in saved {
            match value {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
        }
        let _ = std::fs::remove_file(&path);

        let overridden = overridden.unwrap();
        assert_eq!(overridden.currency_code, "AED");
        assert_eq!(overridden.policy.cod_fee_max_cents, 2_000);
        assert_eq!(overridden.policy.cod_fee_min_cents, 1_200);
        assert_eq!(overridden.policy.cod_free_threshold_cents, 15_000);

        let env_only = env_only.unwrap();
        assert_eq!(env_only.currency_code, "AED");
        assert_eq!(env_only.policy.cod_fee_max_cents, 2_000);
        assert_eq!(env_only.policy.cod_fee_min_cents, 1_000);
    }
}
