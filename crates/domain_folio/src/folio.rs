//! The folio aggregate
//!
//! A folio is the running bill for one guest, one paying company (master) or
//! one non-resident. Its `balance` is always derived from the transactions.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, FolioId, Money, TransactionId};

use crate::balance::calculate_balance;
use crate::transaction::Transaction;

/// Kind of folio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FolioType {
    /// Individual in-house guest
    Guest,
    /// Consolidating folio for a company or group
    Master,
    /// Walk-in customer without a room (restaurant, spa)
    NoResident,
}

/// A guest, master or non-resident bill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folio {
    #[serde(rename = "folioID")]
    pub folio_id: FolioId,
    pub folio_type: FolioType,
    pub guest_name: String,
    #[serde(default)]
    pub room_number: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    /// Derived; equals `calculate_balance(&transactions)` after every engine call
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    /// Append-only, in insertion order
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    /// Folios whose charges a master folio may receive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_folios: Option<Vec<FolioId>>,
    #[serde(rename = "masterFolioID", default, skip_serializing_if = "Option::is_none")]
    pub master_folio_id: Option<FolioId>,
    #[serde(default)]
    pub currency: Currency,
}

impl Folio {
    /// Creates an empty folio in the default currency
    pub fn new(
        folio_id: impl Into<FolioId>,
        folio_type: FolioType,
        guest_name: impl Into<String>,
        room_number: impl Into<String>,
        check_in_date: NaiveDate,
        check_out_date: NaiveDate,
    ) -> Self {
        Self {
            folio_id: folio_id.into(),
            folio_type,
            guest_name: guest_name.into(),
            room_number: room_number.into(),
            check_in_date,
            check_out_date,
            balance: Decimal::ZERO,
            transactions: Vec::new(),
            linked_folios: None,
            master_folio_id: None,
            currency: Currency::default(),
        }
    }

    /// Sets the folio currency
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Replaces the transaction history and recomputes the balance
    pub fn with_transactions(mut self, transactions: Vec<Transaction>) -> Self {
        self.transactions = transactions;
        self.recalculate_balance();
        self
    }

    /// Records the master folio this guest folio belongs to
    pub fn with_master(mut self, master_folio_id: FolioId) -> Self {
        self.master_folio_id = Some(master_folio_id);
        self
    }

    /// Looks up a transaction by id
    pub fn find_transaction(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| &t.id == id)
    }

    /// Iterates the transactions that count toward the balance
    pub fn counted_transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().filter(|t| t.counts_toward_balance())
    }

    /// Returns the balance tagged with the folio currency
    pub fn balance_money(&self) -> Money {
        Money::new(self.balance, self.currency)
    }

    /// Returns true when nothing is owed and nothing is due back
    pub fn is_settled(&self) -> bool {
        self.balance.is_zero()
    }

    /// Number of nights between check-in and check-out
    pub fn nights(&self) -> i64 {
        (self.check_out_date - self.check_in_date).num_days().max(0)
    }

    /// Appends an entry and recomputes the balance
    pub(crate) fn append(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
        self.recalculate_balance();
    }

    pub(crate) fn recalculate_balance(&mut self) {
        self.balance = calculate_balance(&self.transactions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::TransactionType;
    use rust_decimal_macros::dec;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
    }

    fn folio() -> Folio {
        Folio::new("F001", FolioType::Guest, "Nguyen Van A", "101", date(1), date(3))
    }

    #[test]
    fn test_new_folio_is_empty_and_settled() {
        let folio = folio();
        assert!(folio.transactions.is_empty());
        assert_eq!(folio.balance, Decimal::ZERO);
        assert!(folio.is_settled());
        assert_eq!(folio.currency, Currency::VND);
        assert_eq!(folio.nights(), 2);
    }

    #[test]
    fn test_with_transactions_recomputes_balance() {
        let folio = folio().with_transactions(vec![
            Transaction::new(date(1), TransactionType::RoomCharge, "Night 1", dec!(1000000)),
            Transaction::new(date(1), TransactionType::Deposit, "Deposit", dec!(-300000)),
        ]);
        assert_eq!(folio.balance, dec!(700000));
        assert_eq!(folio.balance_money(), Money::new(dec!(700000), Currency::VND));
    }

    #[test]
    fn test_serialized_field_names() {
        let folio = folio().with_master(FolioId::new("M001"));
        let json = serde_json::to_value(&folio).unwrap();

        assert_eq!(json["folioID"], "F001");
        assert_eq!(json["folioType"], "GUEST");
        assert_eq!(json["guestName"], "Nguyen Van A");
        assert_eq!(json["roomNumber"], "101");
        assert_eq!(json["checkInDate"], "2024-05-01");
        assert_eq!(json["checkOutDate"], "2024-05-03");
        assert_eq!(json["masterFolioID"], "M001");
        assert!(json.get("linkedFolios").is_none());
    }

    #[test]
    fn test_deserializes_folio_without_currency() {
        let json = r#"{
            "folioID": "F9",
            "folioType": "NO_RESIDENT",
            "guestName": "Walk-in",
            "roomNumber": "",
            "checkInDate": "2024-05-01",
            "checkOutDate": "2024-05-01",
            "balance": 250000,
            "transactions": [
                {"id": "T-1700000000000", "date": "2024-05-01", "type": "SERVICE",
                 "description": "Spa", "amount": 250000}
            ]
        }"#;
        let folio: Folio = serde_json::from_str(json).unwrap();

        assert_eq!(folio.folio_type, FolioType::NoResident);
        assert_eq!(folio.currency, Currency::VND);
        assert_eq!(folio.balance, dec!(250000));
        assert!(!folio.transactions[0].is_void);
    }
}
