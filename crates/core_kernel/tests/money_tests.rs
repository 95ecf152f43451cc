//! Unit tests for the Money module
//!
//! Tests cover money creation, rounding, currency handling, and display.

use core_kernel::{ensure_same_currency, Currency, Money, MoneyError};
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_rounds_to_four_decimal_places() {
        let m = Money::new(dec!(100.123456789), Currency::USD);
        assert_eq!(m.amount(), dec!(100.1235));
    }

    #[test]
    fn test_default_currency_is_vnd() {
        assert_eq!(Currency::default(), Currency::VND);
    }

    #[test]
    fn test_negative_amount_creation() {
        let m = Money::new(dec!(-300000), Currency::VND);
        assert!(m.is_negative());
        assert!(!m.is_zero());
    }
}

mod rounding {
    use super::*;

    #[test]
    fn test_ensure_same_currency() {
        assert!(ensure_same_currency(Currency::VND, Currency::VND).is_ok());
        assert_eq!(
            ensure_same_currency(Currency::USD, Currency::EUR),
            Err(MoneyError::CurrencyMismatch("USD".to_string(), "EUR".to_string()))
        );
    }

    #[test]
    fn test_round_to_currency() {
        let m = Money::new(dec!(1999.6), Currency::VND);
        assert_eq!(m.round_to_currency().amount(), dec!(2000));

        let m = Money::new(dec!(10.004), Currency::USD);
        assert_eq!(m.round_to_currency().amount(), dec!(10.00));
    }

    #[test]
    fn test_display_after_rounding() {
        let m = Money::new(dec!(-1250.4), Currency::VND).round_to_currency();
        assert_eq!(m.to_string(), "₫ -1250");
    }
}

mod currency {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("vnd".parse::<Currency>().unwrap(), Currency::VND);
        assert_eq!(" USD ".parse::<Currency>().unwrap(), Currency::USD);
    }

    #[test]
    fn test_parse_unknown_currency() {
        assert!(matches!(
            "XXX".parse::<Currency>(),
            Err(MoneyError::UnknownCurrency(_))
        ));
    }

    #[test]
    fn test_serde_uses_iso_code() {
        assert_eq!(serde_json::to_string(&Currency::VND).unwrap(), "\"VND\"");
        let parsed: Currency = serde_json::from_str("\"THB\"").unwrap();
        assert_eq!(parsed, Currency::THB);
    }

    #[test]
    fn test_deserialize_accepts_lower_case() {
        let parsed: Currency = serde_json::from_str("\"vnd\"").unwrap();
        assert_eq!(parsed, Currency::VND);
        assert!(serde_json::from_str::<Currency>("\"dong\"").is_err());
    }

    #[test]
    fn test_zero_decimal_currencies() {
        for currency in [Currency::VND, Currency::JPY, Currency::KRW] {
            assert_eq!(currency.decimal_places(), 0);
        }
        assert_eq!(Currency::USD.decimal_places(), 2);
    }
}
