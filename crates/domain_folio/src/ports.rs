//! Folio Domain Ports
//!
//! The ledger engines never load or save folios themselves. `FolioStore` is
//! the port toward whatever keeps folios (the hotel's REST backend, a
//! database, or the in-memory adapter used in tests).
//!
//! Saves replace the stored folio wholesale. There is no version token, so
//! two writers that load the same folio and save independently end with the
//! last write winning.

use async_trait::async_trait;

use core_kernel::{DomainPort, FolioId, PortError};

use crate::folio::Folio;

/// Storage port for folios
#[async_trait]
pub trait FolioStore: DomainPort {
    /// Loads a folio by id
    async fn get_folio(&self, id: &FolioId) -> Result<Folio, PortError>;

    /// Stores a folio, replacing any previous value with the same id
    async fn save_folio(&self, folio: &Folio) -> Result<(), PortError>;

    /// Lists every stored folio
    async fn list_folios(&self) -> Result<Vec<Folio>, PortError>;

    /// Loads several folios, failing on the first missing id
    async fn get_folios(&self, ids: &[FolioId]) -> Result<Vec<Folio>, PortError> {
        let mut folios = Vec::with_capacity(ids.len());
        for id in ids {
            folios.push(self.get_folio(id).await?);
        }
        Ok(folios)
    }
}
