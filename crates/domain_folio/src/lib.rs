//! Folio Domain - Hotel Guest Ledger
//!
//! A folio is the running account of charges and receipts for one guest,
//! a group (master folio), or a walk-in customer without a room.
//!
//! # Sign Convention
//!
//! - Charges (room, service, surcharge, penalty) are positive
//! - Receipts (deposit, payment) are negative
//! - A positive balance is owed by the guest; a negative one is owed to the guest
//!
//! # Operations
//!
//! - **Post**: append a charge or receipt dated with today's business date
//! - **Void**: flag an entry void and append a reversal memo
//! - **Transfer**: move a charge from one folio to another as a linked pair
//! - **Split**: carve part of a balance into a new folio
//! - **Consolidate**: open a master folio and move guests' room charges onto it
//! - **Close**: produce the bill with a breakdown by category
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_folio::{FolioLedger, TransactionType};
//!
//! let ledger = FolioLedger::system();
//! let folio = ledger.post_charge(&folio, TransactionType::RoomCharge, "Room 101 - night 1", dec!(1500000));
//! let closing = ledger.close_folio(&folio);
//! ```

pub mod transaction;
pub mod folio;
pub mod balance;
pub mod ledger;
pub mod consolidation;
pub mod closing;
pub mod validation;
pub mod config;
pub mod ports;
pub mod adapters;
pub mod services;
pub mod error;

pub use transaction::{Transaction, TransactionType};
pub use folio::{Folio, FolioType};
pub use balance::{calculate_balance, transaction_breakdown, TransactionBreakdown};
pub use ledger::{FolioLedger, ReceiptKind, SplitOutcome, TransferOutcome};
pub use consolidation::MasterConsolidation;
pub use closing::{Bill, FolioClosing};
pub use validation::{ChargeRules, ValidationResult};
pub use config::LedgerConfig;
pub use ports::FolioStore;
pub use adapters::InMemoryFolioStore;
pub use services::FolioService;
pub use error::FolioError;
