//! Folio domain errors

use thiserror::Error;

use core_kernel::{CoreError, FolioId, MoneyError, PortError, TransactionId};

/// Errors that can occur in the folio ledger
#[derive(Debug, Error)]
pub enum FolioError {
    /// The transaction id does not exist in the folio
    #[error("Transaction not found: {transaction_id} in folio {folio_id}")]
    TransactionNotFound {
        folio_id: FolioId,
        transaction_id: TransactionId,
    },

    /// A transaction may be voided at most once
    #[error("Transaction already voided: {0}")]
    AlreadyVoided(TransactionId),

    #[error("Cannot void reversal entry: {0}")]
    CannotVoidReversal(TransactionId),

    #[error("Cannot transfer voided transaction: {0}")]
    CannotTransferVoided(TransactionId),

    #[error("Cannot transfer reversal entry: {0}")]
    CannotTransferReversal(TransactionId),

    /// Source and destination are the same folio
    #[error("Cannot transfer within the same folio: {0}")]
    SameFolio(FolioId),

    #[error("At least one guest folio is required to open a master folio")]
    NoGuestFolios,

    /// The same guest folio was listed more than once for consolidation
    #[error("Guest folio listed more than once: {0}")]
    DuplicateGuestFolio(FolioId),

    /// Rejected by the caller-side charge rules
    #[error("Invalid charge: {0}")]
    InvalidCharge(String),

    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    #[error("Folio store error: {0}")]
    Store(#[from] PortError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl FolioError {
    /// True when an id did not resolve (transaction or stored folio)
    pub fn is_not_found(&self) -> bool {
        match self {
            FolioError::TransactionNotFound { .. } => true,
            FolioError::Store(err) => err.is_not_found(),
            _ => false,
        }
    }

    /// True when the target exists but is in a state that forbids the operation
    pub fn is_invalid_state(&self) -> bool {
        matches!(
            self,
            FolioError::AlreadyVoided(_)
                | FolioError::CannotVoidReversal(_)
                | FolioError::CannotTransferVoided(_)
                | FolioError::CannotTransferReversal(_)
        )
    }
}
