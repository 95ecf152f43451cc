//! Ledger configuration
//!
//! # Environment Variables
//!
//! * `FOLIO_CURRENCY` - Currency for folios created by the service (default: VND)
//! * `FOLIO_TIMEZONE` - IANA zone used for business dates (default: Asia/Ho_Chi_Minh)
//! * `FOLIO_ENFORCE_SIGN_CONVENTION` - Validate charges before posting (default: true)

use serde::Deserialize;

use core_kernel::{CoreError, Currency, Timezone};

/// Ledger configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    pub currency: Currency,
    pub timezone: Timezone,
    pub enforce_sign_convention: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            currency: Currency::VND,
            timezone: Timezone::default(),
            enforce_sign_convention: true,
        }
    }
}

impl LedgerConfig {
    /// Loads configuration from `FOLIO_*` environment variables
    pub fn from_env() -> Result<Self, CoreError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("FOLIO").try_parsing(true))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| CoreError::configuration(e.to_string()))
    }

    /// Loads an optional `.env` file, then reads the environment
    pub fn load() -> Result<Self, CoreError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LedgerConfig::default();
        assert_eq!(config.currency, Currency::VND);
        assert_eq!(config.timezone.to_string(), "Asia/Ho_Chi_Minh");
        assert!(config.enforce_sign_convention);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: LedgerConfig =
            serde_json::from_str(r#"{"currency": "USD", "timezone": "Asia/Bangkok"}"#).unwrap();
        assert_eq!(config.currency, Currency::USD);
        assert_eq!(config.timezone.to_string(), "Asia/Bangkok");
        assert!(config.enforce_sign_convention);
    }

    #[test]
    fn test_deserialize_rejects_bad_timezone() {
        let result = serde_json::from_str::<LedgerConfig>(r#"{"timezone": "Moon/Base"}"#);
        assert!(result.is_err());
    }
}
