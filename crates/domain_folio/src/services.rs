//! Folio application service
//!
//! `FolioService` is the caller the ledger engines expect: it loads folios
//! from the store, applies one engine, and saves every folio the engine
//! returned. Nothing is saved when the engine rejects the operation.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{info, instrument, warn};

use core_kernel::{EmployeeId, FolioId, TransactionId};

use crate::closing::FolioClosing;
use crate::config::LedgerConfig;
use crate::consolidation::MasterConsolidation;
use crate::error::FolioError;
use crate::folio::{Folio, FolioType};
use crate::ledger::{FolioLedger, ReceiptKind, SplitOutcome, TransferOutcome};
use crate::ports::FolioStore;
use crate::transaction::TransactionType;
use crate::validation::ChargeRules;

/// Orchestrates store access around the ledger engines
pub struct FolioService {
    store: Arc<dyn FolioStore>,
    ledger: FolioLedger,
    rules: ChargeRules,
    config: LedgerConfig,
}

impl FolioService {
    /// Creates a new folio service
    pub fn new(store: Arc<dyn FolioStore>, ledger: FolioLedger, config: LedgerConfig) -> Self {
        Self {
            store,
            ledger,
            rules: ChargeRules::new(),
            config,
        }
    }

    /// Creates a service on wall-clock time, configured from `FOLIO_*` variables
    pub fn from_env(store: Arc<dyn FolioStore>) -> Result<Self, FolioError> {
        let config = LedgerConfig::load()?;
        Ok(Self::new(store, FolioLedger::from_config(&config), config))
    }

    pub fn ledger(&self) -> &FolioLedger {
        &self.ledger
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Loads a folio
    pub async fn get_folio(&self, folio_id: &FolioId) -> Result<Folio, FolioError> {
        Ok(self.store.get_folio(folio_id).await?)
    }

    /// Stores a newly created folio with its balance derived from its entries
    #[instrument(skip(self, folio), fields(folio_id = %folio.folio_id))]
    pub async fn open_folio(&self, folio: Folio) -> Result<Folio, FolioError> {
        let mut folio = folio;
        folio.recalculate_balance();
        self.store.save_folio(&folio).await?;
        info!(folio_type = ?folio.folio_type, "Opened folio");
        Ok(folio)
    }

    /// Creates and stores an empty folio in the configured currency
    pub async fn create_folio(
        &self,
        folio_type: FolioType,
        guest_name: &str,
        room_number: &str,
        check_in_date: NaiveDate,
        check_out_date: NaiveDate,
    ) -> Result<Folio, FolioError> {
        let folio = Folio::new(
            FolioId::generate(),
            folio_type,
            guest_name,
            room_number,
            check_in_date,
            check_out_date,
        )
        .with_currency(self.config.currency);

        self.open_folio(folio).await
    }

    /// Posts a charge after checking the sign convention (when enabled)
    #[instrument(skip(self, description))]
    pub async fn post_charge(
        &self,
        folio_id: &FolioId,
        transaction_type: TransactionType,
        description: &str,
        amount: Decimal,
    ) -> Result<Folio, FolioError> {
        if self.config.enforce_sign_convention {
            self.rules
                .validate(transaction_type, description, amount)
                .map_err(|e| rejected("post_charge", e))?;
        }

        let folio = self.store.get_folio(folio_id).await?;
        let updated = self.ledger.post_charge(&folio, transaction_type, description, amount);
        self.store.save_folio(&updated).await?;

        info!(balance = %updated.balance, "Posted charge");
        Ok(updated)
    }

    /// Records a deposit or payment
    #[instrument(skip(self, description))]
    pub async fn post_receipt(
        &self,
        folio_id: &FolioId,
        kind: ReceiptKind,
        description: &str,
        amount_received: Decimal,
    ) -> Result<Folio, FolioError> {
        if self.config.enforce_sign_convention {
            self.rules
                .validate(kind.into(), description, -amount_received.abs())
                .map_err(|e| rejected("post_receipt", e))?;
        }

        let folio = self.store.get_folio(folio_id).await?;
        let updated = self.ledger.post_receipt(&folio, kind, description, amount_received);
        self.store.save_folio(&updated).await?;

        info!(balance = %updated.balance, "Recorded receipt");
        Ok(updated)
    }

    /// Voids an entry on a stored folio
    #[instrument(skip(self, void_reason))]
    pub async fn void_transaction(
        &self,
        folio_id: &FolioId,
        transaction_id: &TransactionId,
        void_reason: &str,
        voided_by: &EmployeeId,
    ) -> Result<Folio, FolioError> {
        let folio = self.store.get_folio(folio_id).await?;
        let updated = self
            .ledger
            .void_transaction(&folio, transaction_id, void_reason, voided_by)
            .map_err(|e| rejected("void_transaction", e))?;
        self.store.save_folio(&updated).await?;

        info!(balance = %updated.balance, "Voided transaction");
        Ok(updated)
    }

    /// Transfers a charge between two stored folios
    #[instrument(skip(self))]
    pub async fn transfer_charge(
        &self,
        from_folio_id: &FolioId,
        to_folio_id: &FolioId,
        transaction_id: &TransactionId,
    ) -> Result<TransferOutcome, FolioError> {
        let from = self.store.get_folio(from_folio_id).await?;
        let to = self.store.get_folio(to_folio_id).await?;

        let outcome = self
            .ledger
            .transfer_charge(&from, &to, transaction_id)
            .map_err(|e| rejected("transfer_charge", e))?;

        self.store.save_folio(&outcome.from_folio).await?;
        self.store.save_folio(&outcome.to_folio).await?;

        info!(
            from_balance = %outcome.from_folio.balance,
            to_balance = %outcome.to_folio.balance,
            "Transferred charge"
        );
        Ok(outcome)
    }

    /// Splits part of a stored folio into a new stored folio
    #[instrument(skip(self, split_description))]
    pub async fn split_bill(
        &self,
        folio_id: &FolioId,
        split_amount: Decimal,
        split_description: &str,
        new_folio_type: FolioType,
    ) -> Result<SplitOutcome, FolioError> {
        let original = self.store.get_folio(folio_id).await?;
        let outcome = self
            .ledger
            .split_bill(&original, split_amount, split_description, new_folio_type);

        self.store.save_folio(&outcome.original_folio).await?;
        self.store.save_folio(&outcome.new_folio).await?;

        info!(new_folio_id = %outcome.new_folio.folio_id, "Split folio");
        Ok(outcome)
    }

    /// Opens a master folio for the given guests and moves their room charges onto it
    #[instrument(skip(self))]
    pub async fn consolidate_to_master(
        &self,
        guest_folio_ids: &[FolioId],
        company_name: &str,
    ) -> Result<MasterConsolidation, FolioError> {
        let guests = self.store.get_folios(guest_folio_ids).await?;
        let master = self
            .ledger
            .create_master_folio(&guests, company_name)
            .map_err(|e| rejected("consolidate_to_master", e))?;

        let consolidation = self
            .ledger
            .transfer_room_charges_to_master(&guests, &master)
            .map_err(|e| rejected("consolidate_to_master", e))?;

        for guest in &consolidation.guest_folios {
            self.store.save_folio(guest).await?;
        }
        self.store.save_folio(&consolidation.master_folio).await?;

        info!(
            master_folio_id = %consolidation.master_folio.folio_id,
            balance = %consolidation.master_folio.balance,
            "Master folio saved"
        );
        Ok(consolidation)
    }

    /// Closes a stored folio and returns its bill
    #[instrument(skip(self))]
    pub async fn close_folio(&self, folio_id: &FolioId) -> Result<FolioClosing, FolioError> {
        let folio = self.store.get_folio(folio_id).await?;
        let closing = self.ledger.close_folio(&folio);
        self.store.save_folio(&closing.folio).await?;
        Ok(closing)
    }
}

fn rejected(operation: &'static str, err: FolioError) -> FolioError {
    warn!(operation, error = %err, "Folio operation rejected");
    err
}
