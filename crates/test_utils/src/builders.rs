//! Test Data Builders
//!
//! Provides builder patterns for constructing folios with entries already
//! on them. Entry ids are sequential (`T-1`, `T-2`, ...) so tests can refer
//! to them directly.

use chrono::NaiveDate;
use core_kernel::{Currency, FolioId};
use domain_folio::{Folio, FolioType, Transaction, TransactionType};
use rust_decimal::Decimal;

use crate::fixtures::TemporalFixtures;

/// Builder for constructing test folios
pub struct TestFolioBuilder {
    folio_id: FolioId,
    folio_type: FolioType,
    guest_name: String,
    room_number: String,
    check_in_date: NaiveDate,
    check_out_date: NaiveDate,
    currency: Currency,
    transactions: Vec<Transaction>,
}

impl Default for TestFolioBuilder {
    fn default() -> Self {
        Self::new("F-TEST")
    }
}

impl TestFolioBuilder {
    /// Creates a guest folio builder for the standard stay
    pub fn new(folio_id: &str) -> Self {
        Self {
            folio_id: FolioId::new(folio_id),
            folio_type: FolioType::Guest,
            guest_name: "Nguyen Van An".to_string(),
            room_number: "101".to_string(),
            check_in_date: TemporalFixtures::check_in(),
            check_out_date: TemporalFixtures::check_out(),
            currency: Currency::VND,
            transactions: Vec::new(),
        }
    }

    pub fn with_type(mut self, folio_type: FolioType) -> Self {
        self.folio_type = folio_type;
        self
    }

    pub fn with_guest_name(mut self, name: impl Into<String>) -> Self {
        self.guest_name = name.into();
        self
    }

    pub fn with_room(mut self, room_number: impl Into<String>) -> Self {
        self.room_number = room_number.into();
        self
    }

    pub fn with_stay(mut self, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        self.check_in_date = check_in;
        self.check_out_date = check_out;
        self
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Adds an entry with the next sequential id
    pub fn entry(
        mut self,
        transaction_type: TransactionType,
        description: &str,
        amount: Decimal,
    ) -> Self {
        let id = format!("T-{}", self.transactions.len() + 1);
        self.transactions.push(
            Transaction::new(
                TemporalFixtures::check_in(),
                transaction_type,
                description,
                amount,
            )
            .with_id(id),
        );
        self
    }

    pub fn room_charge(self, amount: Decimal) -> Self {
        self.entry(TransactionType::RoomCharge, "Room charge", amount)
    }

    pub fn service(self, description: &str, amount: Decimal) -> Self {
        self.entry(TransactionType::Service, description, amount)
    }

    /// Adds a payment; pass the amount received as a positive number
    pub fn payment(self, amount_received: Decimal) -> Self {
        self.entry(TransactionType::Payment, "Payment", -amount_received.abs())
    }

    /// Adds a deposit; pass the amount received as a positive number
    pub fn deposit(self, amount_received: Decimal) -> Self {
        self.entry(TransactionType::Deposit, "Deposit", -amount_received.abs())
    }

    /// Adds a prepared transaction as-is
    pub fn transaction(mut self, transaction: Transaction) -> Self {
        self.transactions.push(transaction);
        self
    }

    /// Builds the folio with its balance derived from the entries
    pub fn build(self) -> Folio {
        Folio::new(
            self.folio_id,
            self.folio_type,
            self.guest_name,
            self.room_number,
            self.check_in_date,
            self.check_out_date,
        )
        .with_currency(self.currency)
        .with_transactions(self.transactions)
    }
}
