//! Core Kernel - Foundational types and utilities for the hotel ledger
//!
//! This crate provides the fundamental building blocks used by the folio domain:
//! - Money types with precise decimal arithmetic
//! - Business-date and clock handling for the property's timezone
//! - String-shaped identifiers and the shared port error type

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod ports;
pub mod error;

pub use money::{Money, Currency, MoneyError, ensure_same_currency};
pub use temporal::{Clock, SystemClock, FixedClock, Timezone, TemporalError};
pub use identifiers::{FolioId, TransactionId, EmployeeId};
pub use ports::{PortError, DomainPort};
pub use error::CoreError;
