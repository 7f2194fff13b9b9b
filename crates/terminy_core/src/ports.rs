//! crates/terminy_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the
//! core to be independent of specific external implementations like the
//! storage backend or the id scheme.

use async_trait::async_trait;

use crate::domain::Slot;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors of the storage backend.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// The persistence port for the slot collection.
///
/// The collection is always read and written wholesale: `load` returns the
/// entire persisted state once at startup, and `save` overwrites it after
/// every mutation. There is no partial update, no migration, no versioning.
#[async_trait]
pub trait SlotRepository: Send + Sync {
    /// Loads the full slot collection. `NotFound` means nothing has been
    /// persisted yet; `Unexpected` covers unreadable or corrupt state.
    async fn load(&self) -> PortResult<Vec<Slot>>;

    /// Overwrites the persisted collection with `slots`.
    async fn save(&self, slots: &[Slot]) -> PortResult<()>;
}

/// Allocates opaque, unique identifiers for slots and participants.
/// Injected so tests can supply deterministic ids.
pub trait IdProvider: Send + Sync {
    fn next_id(&self) -> String;
}
