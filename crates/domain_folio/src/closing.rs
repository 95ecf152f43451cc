//! Folio closing and bills
//!
//! Closing snapshots a folio's breakdown into a `Bill` at checkout or
//! settlement. A folio may be closed with a non-zero balance.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use core_kernel::{Currency, FolioId, Money};

use crate::balance::{transaction_breakdown, TransactionBreakdown};
use crate::folio::{Folio, FolioType};
use crate::ledger::FolioLedger;

/// Immutable snapshot of a folio at closing time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    #[serde(rename = "folioID")]
    pub folio_id: FolioId,
    pub folio_type: FolioType,
    pub guest_name: String,
    pub room_number: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub breakdown: TransactionBreakdown,
    #[serde(with = "rust_decimal::serde::float")]
    pub final_balance: Decimal,
    pub closed_at: DateTime<Utc>,
    #[serde(default)]
    pub currency: Currency,
}

impl Bill {
    /// Final balance tagged with the bill currency, rounded for printing
    pub fn final_balance_money(&self) -> Money {
        Money::new(self.final_balance, self.currency).round_to_currency()
    }

    /// True when the guest neither owes nor is owed anything
    pub fn is_settled(&self) -> bool {
        self.final_balance_money().is_zero()
    }

    /// True when the hotel owes money back to the guest
    pub fn is_refund_due(&self) -> bool {
        self.final_balance_money().is_negative()
    }
}

/// The closed folio together with its bill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolioClosing {
    pub folio: Folio,
    pub bill: Bill,
}

impl FolioLedger {
    /// Produces the closing bill for a folio
    ///
    /// The bill's final balance is the breakdown balance, and the returned
    /// folio copy carries that same balance. Transfer records are outside the
    /// breakdown, so for a folio with transfers this differs from
    /// [`crate::balance::calculate_balance`].
    pub fn close_folio(&self, folio: &Folio) -> FolioClosing {
        let breakdown = transaction_breakdown(&folio.transactions);

        let bill = Bill {
            folio_id: folio.folio_id.clone(),
            folio_type: folio.folio_type,
            guest_name: folio.guest_name.clone(),
            room_number: folio.room_number.clone(),
            check_in_date: folio.check_in_date,
            check_out_date: folio.check_out_date,
            breakdown,
            final_balance: breakdown.balance,
            closed_at: self.now(),
            currency: folio.currency,
        };

        let mut closed = folio.clone();
        closed.balance = breakdown.balance;

        info!(
            folio_id = %folio.folio_id,
            final_balance = %bill.final_balance_money(),
            settled = bill.is_settled(),
            "Closed folio"
        );

        FolioClosing {
            folio: closed,
            bill,
        }
    }
}
