//! services/app/src/adapters/memory.rs
//!
//! An in-memory implementation of the `SlotRepository` port. Used as the
//! test double for the persistence boundary: it counts saves and can be
//! switched into a failing mode to exercise the demo-data fallback.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use terminy_core::domain::Slot;
use terminy_core::ports::{PortError, PortResult, SlotRepository};

/// An in-memory `SlotRepository`.
#[derive(Default)]
pub struct InMemoryRepo {
    slots: Mutex<Option<Vec<Slot>>>,
    saves: AtomicUsize,
    fail_loads: bool,
}

impl InMemoryRepo {
    /// An empty repository: the first `load` reports `NotFound`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A repository pre-seeded with `slots`.
    pub fn seeded(slots: Vec<Slot>) -> Self {
        Self {
            slots: Mutex::new(Some(slots)),
            ..Self::default()
        }
    }

    /// A repository whose `load` always fails, simulating corrupt state.
    pub fn failing() -> Self {
        Self {
            fail_loads: true,
            ..Self::default()
        }
    }

    /// How many times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::Relaxed)
    }

    /// The last saved collection, if any.
    pub fn saved_slots(&self) -> Option<Vec<Slot>> {
        self.slots.lock().unwrap().clone()
    }
}

#[async_trait]
impl SlotRepository for InMemoryRepo {
    async fn load(&self) -> PortResult<Vec<Slot>> {
        if self.fail_loads {
            return Err(PortError::Unexpected("simulated load failure".to_string()));
        }
        self.slots
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| PortError::NotFound("no collection persisted yet".to_string()))
    }

    async fn save(&self, slots: &[Slot]) -> PortResult<()> {
        self.saves.fetch_add(1, Ordering::Relaxed);
        *self.slots.lock().unwrap() = Some(slots.to_vec());
        Ok(())
    }
}
