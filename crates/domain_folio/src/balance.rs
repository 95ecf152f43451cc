//! Balance and breakdown calculators
//!
//! Both calculators are pure: they read a slice of transactions and never
//! touch it. Only entries that count toward the balance (not void, not a
//! reversal memo) are considered.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::transaction::{Transaction, TransactionType};

/// Sums the signed amounts of every counted transaction
///
/// Empty input yields zero.
pub fn calculate_balance(transactions: &[Transaction]) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.counts_toward_balance())
        .map(|t| t.amount)
        .sum()
}

/// Categorised subtotals of a folio, as shown on the bill
///
/// Deposits and payments are reported as positive "money received".
/// Transfer records are not part of any category, so after a transfer
/// `balance` here differs from [`calculate_balance`] by the net amount moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionBreakdown {
    #[serde(with = "rust_decimal::serde::float")]
    pub room_charges: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub services: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub surcharges: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub penalties: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub deposits: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub payments: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_charges: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_payments: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

/// Builds the categorised breakdown of a transaction set
pub fn transaction_breakdown(transactions: &[Transaction]) -> TransactionBreakdown {
    let mut breakdown = TransactionBreakdown::default();

    for transaction in transactions.iter().filter(|t| t.counts_toward_balance()) {
        match transaction.transaction_type {
            TransactionType::RoomCharge => breakdown.room_charges += transaction.amount,
            TransactionType::Service => breakdown.services += transaction.amount,
            TransactionType::Surcharge => breakdown.surcharges += transaction.amount,
            TransactionType::Penalty => breakdown.penalties += transaction.amount,
            TransactionType::Deposit => breakdown.deposits += transaction.amount,
            TransactionType::Payment => breakdown.payments += transaction.amount,
            TransactionType::TransferIn | TransactionType::TransferOut => {}
        }
    }

    breakdown.deposits = breakdown.deposits.abs();
    breakdown.payments = breakdown.payments.abs();
    breakdown.total_charges =
        breakdown.room_charges + breakdown.services + breakdown.surcharges + breakdown.penalties;
    breakdown.total_payments = breakdown.deposits + breakdown.payments;
    breakdown.balance = breakdown.total_charges - breakdown.total_payments;

    breakdown
}
