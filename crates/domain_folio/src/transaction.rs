//! Folio transaction types
//!
//! A transaction is one signed monetary entry on a folio. Once appended it is
//! never edited, except to flip `is_void` and attach the void audit fields.
//!
//! # Balance membership
//!
//! Voided entries and reversal memos (entries with `reversalOf` set) are left
//! out of the balance, so a void moves the balance by exactly the voided
//! amount once.
//!
//! Folios written before `reversalOf` existed carry reversal memos without
//! it. Such an entry is indistinguishable from an ordinary negative entry and
//! is counted, so loading those folios (for example through
//! `FolioService::open_folio`) counts each old void twice. Set `reversalOf`
//! on the old `VOID: ` entries when migrating that data.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{EmployeeId, FolioId, TransactionId};

/// Kind of monetary event recorded on a folio
///
/// Sign convention: charges are positive, money received or leaving the
/// folio is negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    /// Nightly room rate
    RoomCharge,
    /// Minibar, laundry, restaurant and other services
    Service,
    /// Deposit taken at booking or check-in
    Deposit,
    /// Payment received
    Payment,
    /// Extra charges such as early check-in or late check-out
    Surcharge,
    /// Penalties (damage, no-show, smoking)
    Penalty,
    /// Charge received from another folio
    TransferIn,
    /// Charge moved to another folio
    TransferOut,
}

impl TransactionType {
    /// Returns true for types that add to what the guest owes
    pub fn is_charge(&self) -> bool {
        matches!(
            self,
            TransactionType::RoomCharge
                | TransactionType::Service
                | TransactionType::Surcharge
                | TransactionType::Penalty
                | TransactionType::TransferIn
        )
    }

    /// Returns true for money received (deposits and payments)
    pub fn is_receipt(&self) -> bool {
        matches!(self, TransactionType::Deposit | TransactionType::Payment)
    }

    /// Returns true for the paired transfer records
    pub fn is_transfer(&self) -> bool {
        matches!(self, TransactionType::TransferIn | TransactionType::TransferOut)
    }
}

/// A single entry on a folio
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier, assigned when the entry is appended
    pub id: TransactionId,
    /// Business date the entry was recorded on
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub description: String,
    /// Signed amount in the folio's currency
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(default)]
    pub is_void: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub void_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voided_by: Option<EmployeeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voided_at: Option<DateTime<Utc>>,
    #[serde(rename = "fromFolioID", default, skip_serializing_if = "Option::is_none")]
    pub from_folio_id: Option<FolioId>,
    #[serde(rename = "toFolioID", default, skip_serializing_if = "Option::is_none")]
    pub to_folio_id: Option<FolioId>,
    /// Set on the memo entry written when another entry is voided
    #[serde(rename = "reversalOf", default, skip_serializing_if = "Option::is_none")]
    pub reversal_of: Option<TransactionId>,
}

impl Transaction {
    /// Creates a new transaction with a freshly generated id
    pub fn new(
        date: NaiveDate,
        transaction_type: TransactionType,
        description: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            id: TransactionId::generate(),
            date,
            transaction_type,
            description: description.into(),
            amount,
            is_void: false,
            void_reason: None,
            voided_by: None,
            voided_at: None,
            from_folio_id: None,
            to_folio_id: None,
            reversal_of: None,
        }
    }

    /// Overrides the generated id (used when loading or building fixtures)
    pub fn with_id(mut self, id: impl Into<TransactionId>) -> Self {
        self.id = id.into();
        self
    }

    /// Records the two folios involved in a transfer
    pub fn between(mut self, from: FolioId, to: FolioId) -> Self {
        self.from_folio_id = Some(from);
        self.to_folio_id = Some(to);
        self
    }

    /// Marks this entry as the reversal memo of another entry
    pub fn reversing(mut self, original: TransactionId) -> Self {
        self.reversal_of = Some(original);
        self
    }

    /// Returns true if this entry is the reversal memo of a voided entry
    pub fn is_reversal(&self) -> bool {
        self.reversal_of.is_some()
    }

    /// Returns true if the entry contributes to the folio balance
    ///
    /// Voided entries and reversal memos are kept for history only.
    pub fn counts_toward_balance(&self) -> bool {
        !self.is_void && !self.is_reversal()
    }

    /// Returns a copy flagged as void with the audit trail attached
    pub(crate) fn voided(
        &self,
        reason: impl Into<String>,
        voided_by: EmployeeId,
        voided_at: DateTime<Utc>,
    ) -> Self {
        Self {
            is_void: true,
            void_reason: Some(reason.into()),
            voided_by: Some(voided_by),
            voided_at: Some(voided_at),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[test]
    fn test_charge_and_receipt_types() {
        assert!(TransactionType::RoomCharge.is_charge());
        assert!(TransactionType::TransferIn.is_charge());
        assert!(!TransactionType::TransferOut.is_charge());
        assert!(TransactionType::Deposit.is_receipt());
        assert!(TransactionType::TransferOut.is_transfer());
    }

    #[test]
    fn test_new_transaction_counts_toward_balance() {
        let txn = Transaction::new(date(), TransactionType::Service, "Minibar", dec!(120000));
        assert!(txn.counts_toward_balance());
        assert!(!txn.is_void);
        assert!(txn.id.as_str().starts_with("T-"));
    }

    #[test]
    fn test_voided_copy_keeps_amount_and_type() {
        let txn = Transaction::new(date(), TransactionType::RoomCharge, "Night 1", dec!(1000000));
        let at = Utc::now();
        let voided = txn.voided("duplicate entry", EmployeeId::new("NV01"), at);

        assert!(voided.is_void);
        assert_eq!(voided.id, txn.id);
        assert_eq!(voided.amount, txn.amount);
        assert_eq!(voided.transaction_type, txn.transaction_type);
        assert_eq!(voided.void_reason.as_deref(), Some("duplicate entry"));
        assert_eq!(voided.voided_at, Some(at));
        assert!(!voided.counts_toward_balance());
    }

    #[test]
    fn test_reversal_memo_does_not_count() {
        let txn = Transaction::new(date(), TransactionType::RoomCharge, "VOID: Night 1", dec!(-1000000))
            .reversing(TransactionId::new("T-1"));
        assert!(txn.is_reversal());
        assert!(!txn.counts_toward_balance());
    }

    #[test]
    fn test_serialized_field_names() {
        let txn = Transaction::new(date(), TransactionType::TransferOut, "Move", dec!(-200000))
            .with_id("T-42")
            .between(FolioId::new("F1"), FolioId::new("F2"));
        let json = serde_json::to_value(&txn).unwrap();

        assert_eq!(json["id"], "T-42");
        assert_eq!(json["type"], "TRANSFER_OUT");
        assert_eq!(json["amount"], -200000.0);
        assert_eq!(json["isVoid"], false);
        assert_eq!(json["fromFolioID"], "F1");
        assert_eq!(json["toFolioID"], "F2");
        assert_eq!(json["date"], "2024-05-01");
        assert!(json.get("voidReason").is_none());
    }

    #[test]
    fn test_reversal_without_reversal_of_is_counted() {
        let json = r#"{
            "id": "T-1700000000000",
            "date": "2024-05-01",
            "type": "ROOM_CHARGE",
            "description": "VOID: Night 1 (duplicate)",
            "amount": -1000000.0,
            "isVoid": false
        }"#;
        let legacy: Transaction = serde_json::from_str(json).unwrap();

        assert!(!legacy.is_reversal());
        assert!(legacy.counts_toward_balance());

        let migrated = legacy.reversing(TransactionId::new("T-1699999999999"));
        assert!(!migrated.counts_toward_balance());
    }
}
