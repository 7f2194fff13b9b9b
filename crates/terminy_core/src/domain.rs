//! crates/terminy_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any storage backend or UI layer.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled session that people can register for.
///
/// The participant list is append-only and kept in registration order.
/// `capacity` is only enforced at registration time: an admin edit that
/// lowers it below the current participant count is permitted and simply
/// leaves the slot over-booked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub id: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub topic: String,
    pub capacity: u32,
    pub participants: Vec<Participant>,
    pub created_at: DateTime<Utc>,
}

impl Slot {
    /// The instant this slot starts, with date and time combined.
    pub fn starts_at(&self) -> DateTime<Utc> {
        self.date.and_time(self.time).and_utc()
    }

    /// Whether the slot starts strictly after `now`.
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.starts_at() > now
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() as u32 >= self.capacity
    }

    /// Whether `email` is already registered on this slot.
    /// Comparison is case-sensitive: `A@x.com` and `a@x.com` are distinct.
    pub fn has_email(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p.email == email)
    }

    /// Remaining seats, saturating at zero for over-booked slots.
    pub fn free_seats(&self) -> u32 {
        self.capacity.saturating_sub(self.participants.len() as u32)
    }
}

/// A person registered to a slot. Owned by its containing `Slot`;
/// never mutated or individually removed once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub registered_at: DateTime<Utc>,
}

/// The fields an admin supplies when creating or editing a slot.
/// Ids, the participant list, and the creation timestamp are assigned
/// by the store and never come from a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSlot {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub topic: String,
    pub capacity: u32,
}

/// The fields a visitor supplies when registering for a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewParticipant {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// The session mode of the current process. There is no identity beyond
/// the flag itself, no expiry, and no persistence across restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Anonymous,
    Admin,
}
