//! Custom Test Assertions
//!
//! Provides assertion helpers for folio invariants that give more
//! meaningful failure messages than plain `assert_eq!`.

use core_kernel::TransactionId;
use domain_folio::{calculate_balance, Folio, TransactionType};
use rust_decimal::Decimal;

/// Asserts that the stored balance equals the balance derived from the entries
pub fn assert_balance_consistent(folio: &Folio) {
    let derived = calculate_balance(&folio.transactions);
    assert_eq!(
        folio.balance, derived,
        "Folio {} balance {} does not match its entries ({})",
        folio.folio_id, folio.balance, derived
    );
}

/// Asserts the folio balance and its consistency with the entries
pub fn assert_balance_eq(folio: &Folio, expected: Decimal) {
    assert_balance_consistent(folio);
    assert_eq!(
        folio.balance, expected,
        "Folio {} balance: expected {}, got {}",
        folio.folio_id, expected, folio.balance
    );
}

/// Asserts that `after` kept every entry of `before` in the same position
///
/// Entries may have been flagged void, but ids, order, and amounts are fixed.
pub fn assert_history_preserved(before: &Folio, after: &Folio) {
    assert!(
        after.transactions.len() >= before.transactions.len(),
        "Folio {} lost entries: {} before, {} after",
        before.folio_id,
        before.transactions.len(),
        after.transactions.len()
    );

    for (old, new) in before.transactions.iter().zip(&after.transactions) {
        assert_eq!(old.id, new.id, "Entry order changed on folio {}", before.folio_id);
        assert_eq!(
            old.amount, new.amount,
            "Amount of entry {} changed on folio {}",
            old.id, before.folio_id
        );
    }
}

/// Asserts that a linked transfer pair exists for `original_id`
///
/// The pair shares the original description and has opposite amounts.
pub fn assert_transfer_pair(from: &Folio, to: &Folio, original_id: &TransactionId) {
    let original = from
        .find_transaction(original_id)
        .unwrap_or_else(|| panic!("Original entry {} missing from {}", original_id, from.folio_id));

    let outgoing = from
        .transactions
        .iter()
        .rev()
        .find(|t| t.transaction_type == TransactionType::TransferOut)
        .unwrap_or_else(|| panic!("No TRANSFER_OUT entry on {}", from.folio_id));
    let incoming = to
        .transactions
        .iter()
        .rev()
        .find(|t| t.transaction_type == TransactionType::TransferIn)
        .unwrap_or_else(|| panic!("No TRANSFER_IN entry on {}", to.folio_id));

    assert_eq!(outgoing.amount, -original.amount, "TRANSFER_OUT must negate the original");
    assert_eq!(incoming.amount, original.amount, "TRANSFER_IN must carry the original amount");
    assert_ne!(outgoing.id, incoming.id, "Transfer entries must have distinct ids");

    for entry in [outgoing, incoming] {
        assert_eq!(entry.from_folio_id.as_ref(), Some(&from.folio_id));
        assert_eq!(entry.to_folio_id.as_ref(), Some(&to.folio_id));
    }
}

/// Asserts that the combined balance of several folios equals `expected`
pub fn assert_total_balance(folios: &[&Folio], expected: Decimal) {
    let total: Decimal = folios.iter().map(|f| f.balance).sum();
    assert_eq!(
        total, expected,
        "Combined balance of {} folios: expected {}, got {}",
        folios.len(),
        expected,
        total
    );
}
