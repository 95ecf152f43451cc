//! In-memory folio store

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use core_kernel::{DomainPort, FolioId, PortError};

use crate::folio::Folio;
use crate::ports::FolioStore;

/// `FolioStore` backed by a `HashMap`
///
/// Cloning shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFolioStore {
    folios: Arc<RwLock<HashMap<FolioId, Folio>>>,
}

impl InMemoryFolioStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates the store
    pub async fn with_folios(folios: Vec<Folio>) -> Self {
        let store = Self::new();
        {
            let mut map = store.folios.write().await;
            for folio in folios {
                map.insert(folio.folio_id.clone(), folio);
            }
        }
        store
    }

    pub async fn len(&self) -> usize {
        self.folios.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.folios.read().await.is_empty()
    }
}

impl DomainPort for InMemoryFolioStore {}

#[async_trait]
impl FolioStore for InMemoryFolioStore {
    async fn get_folio(&self, id: &FolioId) -> Result<Folio, PortError> {
        self.folios
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Folio", id))
    }

    async fn save_folio(&self, folio: &Folio) -> Result<(), PortError> {
        self.folios
            .write()
            .await
            .insert(folio.folio_id.clone(), folio.clone());
        Ok(())
    }

    async fn list_folios(&self) -> Result<Vec<Folio>, PortError> {
        let mut folios: Vec<Folio> = self.folios.read().await.values().cloned().collect();
        folios.sort_by(|a, b| a.folio_id.cmp(&b.folio_id));
        Ok(folios)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::folio::FolioType;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn folio(id: &str) -> Folio {
        let date = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
        Folio::new(id, FolioType::Guest, "Guest", "101", date, date)
    }

    #[tokio::test]
    async fn test_save_and_get() {
        let store = InMemoryFolioStore::new();
        store.save_folio(&folio("F1")).await.unwrap();

        let loaded = store.get_folio(&FolioId::new("F1")).await.unwrap();
        assert_eq!(loaded, folio("F1"));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_missing_folio_is_not_found() {
        let store = InMemoryFolioStore::new();
        let err = store.get_folio(&FolioId::new("nope")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let store = InMemoryFolioStore::with_folios(vec![folio("F1")]).await;

        let mut first = store.get_folio(&FolioId::new("F1")).await.unwrap();
        let mut second = store.get_folio(&FolioId::new("F1")).await.unwrap();
        first.balance = dec!(100);
        second.balance = dec!(200);

        store.save_folio(&first).await.unwrap();
        store.save_folio(&second).await.unwrap();

        let stored = store.get_folio(&FolioId::new("F1")).await.unwrap();
        assert_eq!(stored.balance, dec!(200));
    }

    #[tokio::test]
    async fn test_get_folios_fails_on_missing_id() {
        let store = InMemoryFolioStore::with_folios(vec![folio("F1")]).await;
        let result = store
            .get_folios(&[FolioId::new("F1"), FolioId::new("F2")])
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_list_folios_sorted_by_id() {
        let store =
            InMemoryFolioStore::with_folios(vec![folio("F3"), folio("F1"), folio("F2")]).await;
        store.save_folio(&folio("F0")).await.unwrap();

        let ids: Vec<String> = store
            .list_folios()
            .await
            .unwrap()
            .into_iter()
            .map(|f| f.folio_id.to_string())
            .collect();

        assert_eq!(ids, vec!["F0", "F1", "F2", "F3"]);
    }
}
