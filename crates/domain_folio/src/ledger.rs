//! Folio ledger engines
//!
//! `FolioLedger` posts, voids, transfers and splits folio entries. It holds no
//! folio state: every operation takes the current folio value(s) by reference
//! and returns new values, leaving its inputs untouched. A failed operation
//! therefore never leaves a partially updated folio behind.
//!
//! # Example
//!
//! ```rust,ignore
//! let ledger = FolioLedger::system();
//!
//! let folio = ledger.post_charge(&folio, TransactionType::RoomCharge, "Night 1", dec!(1000000));
//! let folio = ledger.void_transaction(&folio, &txn_id, "duplicate entry", &employee)?;
//! let TransferOutcome { from_folio, to_folio } = ledger.transfer_charge(&a, &b, &txn_id)?;
//! ```

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::debug;

use core_kernel::{
    ensure_same_currency, Clock, EmployeeId, FolioId, SystemClock, Timezone, TransactionId,
};

use crate::config::LedgerConfig;
use crate::error::FolioError;
use crate::folio::{Folio, FolioType};
use crate::transaction::{Transaction, TransactionType};

/// Money received on a folio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptKind {
    Deposit,
    Payment,
}

impl From<ReceiptKind> for TransactionType {
    fn from(kind: ReceiptKind) -> Self {
        match kind {
            ReceiptKind::Deposit => TransactionType::Deposit,
            ReceiptKind::Payment => TransactionType::Payment,
        }
    }
}

/// Both folios after a successful transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferOutcome {
    pub from_folio: Folio,
    pub to_folio: Folio,
}

/// The reduced original folio and the folio carved out of it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOutcome {
    pub original_folio: Folio,
    pub new_folio: Folio,
}

/// Stateless engine set for folio accounting
#[derive(Debug, Clone)]
pub struct FolioLedger {
    clock: Arc<dyn Clock>,
    timezone: Timezone,
}

impl FolioLedger {
    /// Creates a ledger reading time from `clock`, dating entries in `timezone`
    pub fn new(clock: Arc<dyn Clock>, timezone: Timezone) -> Self {
        Self { clock, timezone }
    }

    /// Ledger on wall-clock time in the default property timezone
    pub fn system() -> Self {
        Self::new(Arc::new(SystemClock), Timezone::default())
    }

    /// Ledger on wall-clock time in the configured timezone
    pub fn from_config(config: &LedgerConfig) -> Self {
        Self::new(Arc::new(SystemClock), config.timezone)
    }

    pub fn timezone(&self) -> Timezone {
        self.timezone
    }

    /// Current instant according to the injected clock
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Today's business date at the property
    pub fn today(&self) -> NaiveDate {
        self.timezone.business_date(self.now())
    }

    /// Appends a new entry to a copy of the folio
    ///
    /// The amount is stored as given; callers are responsible for the sign
    /// convention (see [`crate::validation::ChargeRules`]).
    pub fn post_charge(
        &self,
        folio: &Folio,
        transaction_type: TransactionType,
        description: impl Into<String>,
        amount: Decimal,
    ) -> Folio {
        let transaction = Transaction::new(self.today(), transaction_type, description, amount);
        debug!(
            folio_id = %folio.folio_id,
            transaction_id = %transaction.id,
            transaction_type = ?transaction_type,
            %amount,
            "Posting folio entry"
        );

        let mut updated = folio.clone();
        updated.append(transaction);
        updated
    }

    /// Records a deposit or payment, storing the received amount as negative
    pub fn post_receipt(
        &self,
        folio: &Folio,
        kind: ReceiptKind,
        description: impl Into<String>,
        amount_received: Decimal,
    ) -> Folio {
        self.post_charge(folio, kind.into(), description, -amount_received.abs())
    }

    /// Voids an entry and appends its reversal memo
    ///
    /// The original stays in history flagged `is_void` with the audit trail;
    /// the reversal (same type, negated amount, `reversal_of` set) records the
    /// event. Neither counts toward the balance, so voiding an amount `A`
    /// moves the balance by exactly `-A`.
    ///
    /// # Errors
    ///
    /// - `TransactionNotFound` if the id is not on the folio
    /// - `AlreadyVoided` if the entry was voided before
    /// - `CannotVoidReversal` if the entry is itself a reversal memo
    pub fn void_transaction(
        &self,
        folio: &Folio,
        transaction_id: &TransactionId,
        void_reason: &str,
        voided_by: &EmployeeId,
    ) -> Result<Folio, FolioError> {
        let index = folio
            .transactions
            .iter()
            .position(|t| &t.id == transaction_id)
            .ok_or_else(|| FolioError::TransactionNotFound {
                folio_id: folio.folio_id.clone(),
                transaction_id: transaction_id.clone(),
            })?;

        let original = &folio.transactions[index];
        if original.is_void {
            return Err(FolioError::AlreadyVoided(transaction_id.clone()));
        }
        if original.is_reversal() {
            return Err(FolioError::CannotVoidReversal(transaction_id.clone()));
        }

        let now = self.now();
        let mut reversal = Transaction::new(
            self.timezone.business_date(now),
            original.transaction_type,
            format!("VOID: {} ({})", original.description, void_reason),
            -original.amount,
        )
        .reversing(original.id.clone());
        reversal.from_folio_id = original.from_folio_id.clone();
        reversal.to_folio_id = original.to_folio_id.clone();

        let mut updated = folio.clone();
        updated.transactions[index] = original.voided(void_reason, voided_by.clone(), now);
        updated.append(reversal);

        debug!(
            folio_id = %folio.folio_id,
            %transaction_id,
            voided_by = %voided_by,
            amount = %original.amount,
            "Voided folio entry"
        );

        Ok(updated)
    }

    /// Moves the effect of a charge from one folio to another
    ///
    /// The original entry stays untouched in `from`; a `TRANSFER_OUT` of the
    /// negated amount neutralises it there and a `TRANSFER_IN` of the same
    /// amount lands in `to`. The sum of both balance changes is zero.
    ///
    /// # Errors
    ///
    /// - `TransactionNotFound` if the id is not on `from`
    /// - `CannotTransferVoided` / `CannotTransferReversal` for history-only entries
    /// - `SameFolio` if both folios share an id
    /// - `Money` if the folios are kept in different currencies
    pub fn transfer_charge(
        &self,
        from: &Folio,
        to: &Folio,
        transaction_id: &TransactionId,
    ) -> Result<TransferOutcome, FolioError> {
        let mut from_folio = from.clone();
        let mut to_folio = to.clone();
        self.apply_transfer(&mut from_folio, &mut to_folio, transaction_id)?;

        Ok(TransferOutcome {
            from_folio,
            to_folio,
        })
    }

    /// Validates, then writes a transfer into the two folios
    ///
    /// Nothing is written unless every check passes.
    pub(crate) fn apply_transfer(
        &self,
        from: &mut Folio,
        to: &mut Folio,
        transaction_id: &TransactionId,
    ) -> Result<(), FolioError> {
        let original = from
            .find_transaction(transaction_id)
            .ok_or_else(|| FolioError::TransactionNotFound {
                folio_id: from.folio_id.clone(),
                transaction_id: transaction_id.clone(),
            })?;

        if original.is_void {
            return Err(FolioError::CannotTransferVoided(transaction_id.clone()));
        }
        if original.is_reversal() {
            return Err(FolioError::CannotTransferReversal(transaction_id.clone()));
        }
        if from.folio_id == to.folio_id {
            return Err(FolioError::SameFolio(from.folio_id.clone()));
        }
        ensure_same_currency(from.currency, to.currency)?;

        let amount = original.amount;
        let today = self.today();

        let transfer_out = Transaction::new(
            today,
            TransactionType::TransferOut,
            format!("Chuyển sang {}: {}", to.folio_id, original.description),
            -amount,
        )
        .between(from.folio_id.clone(), to.folio_id.clone());

        let transfer_in = Transaction::new(
            today,
            TransactionType::TransferIn,
            format!("Nhận từ {}: {}", from.folio_id, original.description),
            amount,
        )
        .between(from.folio_id.clone(), to.folio_id.clone());

        debug!(
            from_folio_id = %from.folio_id,
            to_folio_id = %to.folio_id,
            %transaction_id,
            %amount,
            "Transferring folio entry"
        );

        from.append(transfer_out);
        to.append(transfer_in);

        Ok(())
    }

    /// Carves `split_amount` out of a folio into a brand-new folio
    ///
    /// The original receives one `TRANSFER_OUT` of `-split_amount`; the new
    /// folio copies the guest, room, stay dates and currency and is seeded
    /// with a single `TRANSFER_IN` of `+split_amount`.
    pub fn split_bill(
        &self,
        original: &Folio,
        split_amount: Decimal,
        split_description: &str,
        new_folio_type: FolioType,
    ) -> SplitOutcome {
        let new_folio_id = FolioId::generate();
        let today = self.today();

        let transfer_out = Transaction::new(
            today,
            TransactionType::TransferOut,
            split_description,
            -split_amount,
        )
        .between(original.folio_id.clone(), new_folio_id.clone());

        let transfer_in = Transaction::new(
            today,
            TransactionType::TransferIn,
            split_description,
            split_amount,
        )
        .between(original.folio_id.clone(), new_folio_id.clone());

        let mut original_folio = original.clone();
        original_folio.append(transfer_out);

        let new_folio = Folio {
            folio_id: new_folio_id,
            folio_type: new_folio_type,
            guest_name: original.guest_name.clone(),
            room_number: original.room_number.clone(),
            check_in_date: original.check_in_date,
            check_out_date: original.check_out_date,
            balance: split_amount,
            transactions: vec![transfer_in],
            linked_folios: None,
            master_folio_id: None,
            currency: original.currency,
        };

        debug!(
            folio_id = %original.folio_id,
            new_folio_id = %new_folio.folio_id,
            amount = %split_amount,
            "Split folio"
        );

        SplitOutcome {
            original_folio,
            new_folio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use core_kernel::{Currency, FixedClock, MoneyError};
    use rust_decimal_macros::dec;

    use crate::balance::calculate_balance;

    fn ledger() -> FolioLedger {
        let clock = FixedClock::at(Utc.with_ymd_and_hms(2024, 5, 2, 3, 0, 0).unwrap());
        FolioLedger::new(Arc::new(clock), Timezone::default())
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
    }

    fn guest_folio(id: &str) -> Folio {
        Folio::new(id, FolioType::Guest, "Tran Thi B", "205", date(1), date(4))
    }

    #[test]
    fn test_post_charge_dates_entry_with_business_date() {
        let ledger = ledger();
        let folio = ledger.post_charge(&guest_folio("F1"), TransactionType::Service, "Laundry", dec!(80000));

        assert_eq!(folio.transactions.len(), 1);
        assert_eq!(folio.transactions[0].date, date(2));
        assert_eq!(folio.balance, dec!(80000));
    }

    #[test]
    fn test_post_charge_does_not_validate_sign() {
        let folio = ledger().post_charge(&guest_folio("F1"), TransactionType::Penalty, "Odd", dec!(-10));
        assert_eq!(folio.balance, dec!(-10));
    }

    #[test]
    fn test_post_receipt_stores_negative_amount() {
        let folio = ledger().post_receipt(&guest_folio("F1"), ReceiptKind::Deposit, "Cash deposit", dec!(300000));
        assert_eq!(folio.transactions[0].amount, dec!(-300000));
        assert_eq!(folio.transactions[0].transaction_type, TransactionType::Deposit);
    }

    #[test]
    fn test_void_reversal_description_and_link() {
        let ledger = ledger();
        let folio = ledger.post_charge(&guest_folio("F1"), TransactionType::RoomCharge, "Night 1", dec!(1000000));
        let id = folio.transactions[0].id.clone();

        let voided = ledger
            .void_transaction(&folio, &id, "duplicate entry", &EmployeeId::new("NV01"))
            .unwrap();

        let reversal = &voided.transactions[1];
        assert_eq!(reversal.description, "VOID: Night 1 (duplicate entry)");
        assert_eq!(reversal.reversal_of, Some(id));
        assert_eq!(reversal.amount, dec!(-1000000));
        assert!(!reversal.is_void);
        assert_eq!(voided.balance, Decimal::ZERO);
    }

    #[test]
    fn test_void_reversal_cannot_be_voided() {
        let ledger = ledger();
        let folio = ledger.post_charge(&guest_folio("F1"), TransactionType::Service, "Spa", dec!(500000));
        let id = folio.transactions[0].id.clone();
        let voided = ledger.void_transaction(&folio, &id, "wrong room", &EmployeeId::new("NV01")).unwrap();
        let reversal_id = voided.transactions[1].id.clone();

        let result = ledger.void_transaction(&voided, &reversal_id, "again", &EmployeeId::new("NV01"));
        assert!(matches!(result, Err(FolioError::CannotVoidReversal(_))));
    }

    #[test]
    fn test_transfer_descriptions() {
        let ledger = ledger();
        let a = ledger.post_charge(&guest_folio("FA"), TransactionType::Service, "Minibar", dec!(200000));
        let id = a.transactions[0].id.clone();

        let outcome = ledger.transfer_charge(&a, &guest_folio("FB"), &id).unwrap();

        let out = outcome.from_folio.transactions.last().unwrap();
        let inn = outcome.to_folio.transactions.last().unwrap();
        assert_eq!(out.description, "Chuyển sang FB: Minibar");
        assert_eq!(inn.description, "Nhận từ FA: Minibar");
        assert_eq!(out.from_folio_id, Some(FolioId::new("FA")));
        assert_eq!(inn.to_folio_id, Some(FolioId::new("FB")));
        assert_ne!(out.id, inn.id);
    }

    #[test]
    fn test_transfer_rejects_same_folio() {
        let ledger = ledger();
        let a = ledger.post_charge(&guest_folio("FA"), TransactionType::Service, "Minibar", dec!(200000));
        let id = a.transactions[0].id.clone();

        assert!(matches!(
            ledger.transfer_charge(&a, &a, &id),
            Err(FolioError::SameFolio(_))
        ));
    }

    #[test]
    fn test_transfer_rejects_currency_mismatch() {
        let ledger = ledger();
        let a = ledger.post_charge(&guest_folio("FA"), TransactionType::Service, "Minibar", dec!(200000));
        let b = guest_folio("FB").with_currency(Currency::USD);
        let id = a.transactions[0].id.clone();

        assert!(matches!(
            ledger.transfer_charge(&a, &b, &id),
            Err(FolioError::Money(MoneyError::CurrencyMismatch(_, _)))
        ));
    }

    #[test]
    fn test_split_bill_links_both_folios() {
        let ledger = ledger();
        let a = ledger.post_charge(&guest_folio("FA"), TransactionType::RoomCharge, "3 nights", dec!(1000000));

        let outcome = ledger.split_bill(&a, dec!(400000), "Company pays room", FolioType::Master);

        let out = outcome.original_folio.transactions.last().unwrap();
        assert_eq!(out.to_folio_id.as_ref(), Some(&outcome.new_folio.folio_id));
        assert_eq!(outcome.new_folio.folio_type, FolioType::Master);
        assert_eq!(outcome.new_folio.guest_name, "Tran Thi B");
        assert_eq!(outcome.new_folio.balance, calculate_balance(&outcome.new_folio.transactions));
    }
}
