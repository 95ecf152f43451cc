//! Ports and Adapters Infrastructure
//!
//! Domain crates declare port traits toward their collaborators (the folio
//! store) by extending [`DomainPort`]. Adapters report failures as
//! [`PortError`].
//!
//! ```rust,ignore
//! #[async_trait]
//! pub trait FolioStore: DomainPort {
//!     async fn get_folio(&self, id: &FolioId) -> Result<Folio, PortError>;
//!     async fn save_folio(&self, folio: &Folio) -> Result<(), PortError>;
//! }
//! ```

use std::fmt;
use thiserror::Error;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Error type for port operations
#[derive(Debug, Error)]
pub enum PortError {
    /// No entity is stored under the id
    #[error("Not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    /// The backing store could not be reached
    #[error("Store unavailable: {message}")]
    Unavailable {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },
}

impl PortError {
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        PortError::Unavailable {
            message: message.into(),
            source: None,
        }
    }

    /// Wraps a lower-level error from the store client
    pub fn unavailable_with(message: impl Into<String>, source: impl Into<BoxedSource>) -> Self {
        PortError::Unavailable {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// True if retrying the call may succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, PortError::Unavailable { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }
}

/// Marker trait for all domain ports
///
/// Ports must be thread-safe so services can hold them behind `Arc<dyn _>`.
pub trait DomainPort: Send + Sync + 'static {}
