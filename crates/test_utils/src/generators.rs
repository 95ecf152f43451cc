//! Property-Based Test Generators
//!
//! Provides proptest strategies for folio entries that follow the sign
//! convention: charges positive, receipts negative.

use domain_folio::{Folio, FolioType, Transaction, TransactionType};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::builders::TestFolioBuilder;
use crate::fixtures::TemporalFixtures;

/// Strategy for entry types that increase the balance
pub fn charge_type_strategy() -> impl Strategy<Value = TransactionType> {
    prop_oneof![
        Just(TransactionType::RoomCharge),
        Just(TransactionType::Service),
        Just(TransactionType::Surcharge),
        Just(TransactionType::Penalty),
    ]
}

/// Strategy for entry types that record money received
pub fn receipt_type_strategy() -> impl Strategy<Value = TransactionType> {
    prop_oneof![Just(TransactionType::Deposit), Just(TransactionType::Payment)]
}

/// Strategy for whole-dong amounts between 1,000 and 10,000,000
pub fn vnd_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000i64).prop_map(|thousands| Decimal::new(thousands * 1_000, 0))
}

/// Strategy for a postable (type, signed amount) pair
pub fn signed_entry_strategy() -> impl Strategy<Value = (TransactionType, Decimal)> {
    prop_oneof![
        3 => (charge_type_strategy(), vnd_amount_strategy()),
        1 => (receipt_type_strategy(), vnd_amount_strategy().prop_map(|a| -a)),
    ]
}

/// Strategy for a list of postable entries
pub fn entries_strategy(max: usize) -> impl Strategy<Value = Vec<(TransactionType, Decimal)>> {
    proptest::collection::vec(signed_entry_strategy(), 0..=max)
}

/// Strategy for a single standalone transaction
pub fn transaction_strategy() -> impl Strategy<Value = Transaction> {
    signed_entry_strategy().prop_map(|(transaction_type, amount)| {
        Transaction::new(TemporalFixtures::check_in(), transaction_type, "Generated entry", amount)
    })
}

/// Strategy for a guest folio holding between 1 and `max` entries (ids `T-1`..)
pub fn folio_strategy(folio_id: &'static str, max: usize) -> impl Strategy<Value = Folio> {
    proptest::collection::vec(signed_entry_strategy(), 1..=max.max(1)).prop_map(move |entries| {
        entries
            .into_iter()
            .fold(TestFolioBuilder::new(folio_id), |builder, (t, amount)| {
                builder.entry(t, "Generated entry", amount)
            })
            .build()
    })
}

/// Strategy for a folio type that can receive transfers
pub fn folio_type_strategy() -> impl Strategy<Value = FolioType> {
    prop_oneof![
        Just(FolioType::Guest),
        Just(FolioType::Master),
        Just(FolioType::NoResident),
    ]
}
