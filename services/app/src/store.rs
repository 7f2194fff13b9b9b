//! services/app/src/store.rs
//!
//! The slot store: owns the in-memory slot collection, applies the
//! registration rules, and mirrors every mutation to the persistence
//! port. There is exactly one logical writer, so the store is a plain
//! owned value with `&mut self` operations.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use terminy_core::domain::{NewParticipant, NewSlot, Participant, Slot};
use terminy_core::ports::{IdProvider, SlotRepository};
use terminy_core::rules::{check_registration, RejectionReason};
use tracing::{debug, info, warn};

use crate::demo::demo_slots;

//=========================================================================================
// Operation Outcomes
//=========================================================================================

/// What happened to a registration attempt. Returned as a value so the
/// calling layer decides how to present rejections; the store never
/// raises dialogs or treats them as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// The participant was appended to the slot.
    Registered(Participant),
    /// No slot with the given id exists; the collection is unchanged.
    SlotNotFound,
    /// A business rule turned the attempt away; the collection is unchanged.
    Rejected(RejectionReason),
}

//=========================================================================================
// The Slot Store
//=========================================================================================

/// Owns the ordered slot collection and its local-storage mirror.
pub struct SlotStore {
    slots: Vec<Slot>,
    repo: Arc<dyn SlotRepository>,
    ids: Arc<dyn IdProvider>,
    /// Cosmetic pause before a registration completes. Zero in tests.
    register_delay: Duration,
}

impl SlotStore {
    /// Opens the store: loads the persisted collection once, falling back
    /// to the built-in demo dataset when nothing usable is there.
    pub async fn open(
        repo: Arc<dyn SlotRepository>,
        ids: Arc<dyn IdProvider>,
        register_delay: Duration,
    ) -> Self {
        let slots = match repo.load().await {
            Ok(slots) => {
                info!(count = slots.len(), "loaded persisted slot collection");
                slots
            }
            Err(e) => {
                warn!(error = %e, "no usable persisted collection, seeding demo data");
                demo_slots()
            }
        };
        Self {
            slots,
            repo,
            ids,
            register_delay,
        }
    }

    /// The full collection, in creation order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Creates a new slot from validated form data. No uniqueness or
    /// overlap checks across slots; always succeeds.
    pub async fn create_slot(&mut self, data: NewSlot) -> Slot {
        let slot = Slot {
            id: self.ids.next_id(),
            date: data.date,
            time: data.time,
            topic: data.topic,
            capacity: data.capacity,
            participants: Vec::new(),
            created_at: Utc::now(),
        };
        info!(id = %slot.id, topic = %slot.topic, "created slot");
        self.slots.push(slot.clone());
        self.persist().await;
        slot
    }

    /// Replaces date, time, topic, and capacity on the matching slot.
    /// The id, participant list, and creation timestamp never change.
    /// Returns `false` (and does nothing) when the id is unknown.
    pub async fn update_slot(&mut self, id: &str, data: NewSlot) -> bool {
        let Some(slot) = self.slots.iter_mut().find(|s| s.id == id) else {
            debug!(id, "update ignored, no such slot");
            return false;
        };
        slot.date = data.date;
        slot.time = data.time;
        slot.topic = data.topic;
        slot.capacity = data.capacity;
        info!(id, "updated slot");
        self.persist().await;
        true
    }

    /// Removes the slot unconditionally if present. Returns `false` when
    /// the id is unknown; confirmation is the caller's concern.
    pub async fn delete_slot(&mut self, id: &str) -> bool {
        let before = self.slots.len();
        self.slots.retain(|s| s.id != id);
        if self.slots.len() == before {
            debug!(id, "delete ignored, no such slot");
            return false;
        }
        info!(id, "deleted slot");
        self.persist().await;
        true
    }

    /// Registers a participant on a slot, subject to the capacity and
    /// duplicate-email rules. Rejections leave the collection untouched.
    pub async fn register(&mut self, slot_id: &str, data: NewParticipant) -> RegisterOutcome {
        // Simulated latency carried over from the reference UI. Purely
        // cosmetic; has no effect on the outcome.
        if !self.register_delay.is_zero() {
            tokio::time::sleep(self.register_delay).await;
        }

        let Some(slot) = self.slots.iter_mut().find(|s| s.id == slot_id) else {
            debug!(slot_id, "registration ignored, no such slot");
            return RegisterOutcome::SlotNotFound;
        };

        if let Err(reason) = check_registration(slot, &data.email) {
            info!(slot_id, %reason, "registration rejected");
            return RegisterOutcome::Rejected(reason);
        }

        let participant = Participant {
            id: self.ids.next_id(),
            name: data.name,
            email: data.email,
            phone: data.phone,
            registered_at: Utc::now(),
        };
        slot.participants.push(participant.clone());
        info!(slot_id, participant = %participant.id, "registration accepted");
        self.persist().await;
        RegisterOutcome::Registered(participant)
    }

    /// Mirrors the full collection to the persistence port. Best-effort:
    /// a failed save is logged and otherwise ignored, with no retry and
    /// no rollback of the in-memory state.
    async fn persist(&self) {
        if let Err(e) = self.repo.save(&self.slots).await {
            warn!(error = %e, "failed to persist slot collection");
        }
    }
}
