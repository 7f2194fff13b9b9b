//! services/app/src/views.rs
//!
//! Pure view derivations: given the full slot collection, a search term,
//! and a filter mode, produce the display list for the public or admin
//! view. "Now" is supplied by the caller, read once per render — a slot
//! on the borderline may flip category between renders, which is
//! accepted behavior.

use chrono::{DateTime, Utc};
use terminy_core::domain::Slot;

//=========================================================================================
// Filter Modes
//=========================================================================================

/// Filter modes offered on the public view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PublicFilter {
    /// Slots starting strictly after now. The default.
    #[default]
    Upcoming,
    /// Upcoming slots that still have free seats.
    Available,
    All,
}

/// Filter modes offered on the admin view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminFilter {
    /// Everything. The default.
    #[default]
    All,
    Upcoming,
    /// Slots starting at or before now.
    Past,
}

//=========================================================================================
// View Derivations
//=========================================================================================

/// The public display list: topic matches the search term
/// (case-insensitive substring) and the slot matches the filter mode,
/// sorted ascending by start instant (soonest first).
pub fn public_view<'a>(
    slots: &'a [Slot],
    search: &str,
    filter: PublicFilter,
    now: DateTime<Utc>,
) -> Vec<&'a Slot> {
    let mut result: Vec<&Slot> = slots
        .iter()
        .filter(|slot| matches_search(slot, search))
        .filter(|slot| match filter {
            PublicFilter::Upcoming => slot.is_upcoming(now),
            PublicFilter::Available => slot.is_upcoming(now) && !slot.is_full(),
            PublicFilter::All => true,
        })
        .collect();
    result.sort_by_key(|slot| slot.starts_at());
    result
}

/// The admin display list: same search semantics, admin filter modes,
/// and no sorting — the collection's creation order is preserved.
pub fn admin_view<'a>(
    slots: &'a [Slot],
    search: &str,
    filter: AdminFilter,
    now: DateTime<Utc>,
) -> Vec<&'a Slot> {
    slots
        .iter()
        .filter(|slot| matches_search(slot, search))
        .filter(|slot| match filter {
            AdminFilter::All => true,
            AdminFilter::Upcoming => slot.is_upcoming(now),
            AdminFilter::Past => !slot.is_upcoming(now),
        })
        .collect()
}

fn matches_search(slot: &Slot, search: &str) -> bool {
    slot.topic.to_lowercase().contains(&search.to_lowercase())
}

//=========================================================================================
// Dashboard Counters
//=========================================================================================

/// The counters shown above the public list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewStats {
    /// Slots starting strictly after now.
    pub upcoming: usize,
    /// Upcoming slots with free seats.
    pub available: usize,
    /// All slots, regardless of state.
    pub total: usize,
}

pub fn stats(slots: &[Slot], now: DateTime<Utc>) -> ViewStats {
    let upcoming: Vec<&Slot> = slots.iter().filter(|s| s.is_upcoming(now)).collect();
    ViewStats {
        upcoming: upcoming.len(),
        available: upcoming.iter().filter(|s| !s.is_full()).count(),
        total: slots.len(),
    }
}
