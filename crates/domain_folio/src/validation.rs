//! Charge validation rules
//!
//! The ledger engines accept whatever the caller posts. These rules are the
//! caller-side checks a front desk applies before posting.
//!
//! # Rules
//!
//! - Description must not be blank
//! - Amount must not be zero
//! - ROOM_CHARGE, SERVICE, SURCHARGE and PENALTY amounts must be positive
//! - DEPOSIT and PAYMENT amounts must be negative
//! - TRANSFER_IN / TRANSFER_OUT are written by the transfer and split
//!   engines only, never posted directly

use rust_decimal::Decimal;

use crate::error::FolioError;
use crate::transaction::TransactionType;

/// Result of charge validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    /// List of validation errors
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
    }

    /// Converts the result into `Err(InvalidCharge)` when any rule failed
    pub fn into_result(self) -> Result<(), FolioError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(FolioError::InvalidCharge(self.errors.join("; ")))
        }
    }
}

/// Sign-convention and content checks for posted charges
#[derive(Debug, Clone, Copy, Default)]
pub struct ChargeRules;

impl ChargeRules {
    pub fn new() -> Self {
        Self
    }

    /// Checks a charge before it is handed to the poster
    pub fn check(
        &self,
        transaction_type: TransactionType,
        description: &str,
        amount: Decimal,
    ) -> ValidationResult {
        let mut result = ValidationResult::default();

        if description.trim().is_empty() {
            result.add_error("Description is required");
        }

        if amount.is_zero() {
            result.add_error("Amount must not be zero");
        }

        match transaction_type {
            TransactionType::TransferIn | TransactionType::TransferOut => {
                result.add_error(format!(
                    "{:?} entries are created by transfers and cannot be posted directly",
                    transaction_type
                ));
            }
            t if t.is_receipt() && amount.is_sign_positive() && !amount.is_zero() => {
                result.add_error(format!("{:?} amount must be negative, got {}", t, amount));
            }
            t if t.is_charge() && amount.is_sign_negative() && !amount.is_zero() => {
                result.add_error(format!("{:?} amount must be positive, got {}", t, amount));
            }
            _ => {}
        }

        result
    }

    /// Same as [`ChargeRules::check`], as a `Result`
    pub fn validate(
        &self,
        transaction_type: TransactionType,
        description: &str,
        amount: Decimal,
    ) -> Result<(), FolioError> {
        self.check(transaction_type, description, amount).into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_valid_charge_and_payment() {
        let rules = ChargeRules::new();
        assert!(rules.validate(TransactionType::RoomCharge, "Night 1", dec!(1000000)).is_ok());
        assert!(rules.validate(TransactionType::Payment, "Card", dec!(-500000)).is_ok());
    }

    #[test]
    fn test_negative_penalty_rejected() {
        let result = ChargeRules::new().check(TransactionType::Penalty, "Smoking", dec!(-200000));
        assert!(!result.is_valid());
        assert!(result.errors[0].contains("must be positive"));
    }

    #[test]
    fn test_positive_deposit_rejected() {
        let result = ChargeRules::new().validate(TransactionType::Deposit, "Cash", dec!(300000));
        assert!(matches!(result, Err(FolioError::InvalidCharge(_))));
    }

    #[test]
    fn test_transfers_cannot_be_posted() {
        let result = ChargeRules::new().check(TransactionType::TransferIn, "Manual", dec!(1));
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn test_collects_every_error() {
        let result = ChargeRules::new().check(TransactionType::Service, "  ", Decimal::ZERO);
        assert_eq!(result.errors.len(), 2);
    }
}
