//! services/app/src/adapters/ids.rs
//!
//! Concrete implementations of the `IdProvider` port. The production
//! provider hands out UUIDv4 strings; the sequential provider exists so
//! tests get deterministic ids.

use std::sync::atomic::{AtomicU64, Ordering};
use terminy_core::ports::IdProvider;
use uuid::Uuid;

/// The production id provider: random UUIDv4, rendered without hyphens.
#[derive(Clone, Default)]
pub struct UuidIdProvider;

impl IdProvider for UuidIdProvider {
    fn next_id(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// A deterministic provider yielding "id-1", "id-2", ... in call order.
#[derive(Default)]
pub struct SequentialIdProvider {
    counter: AtomicU64,
}

impl IdProvider for SequentialIdProvider {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("id-{}", n)
    }
}
