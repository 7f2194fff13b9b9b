//! services/app/tests/store.rs
//!
//! End-to-end tests for the slot store wired to the in-memory
//! persistence adapter and the deterministic id provider.

use std::sync::Arc;
use std::time::Duration;

use app_lib::adapters::{InMemoryRepo, SequentialIdProvider};
use app_lib::store::{RegisterOutcome, SlotStore};
use app_lib::validators::{validate_slot_form, SlotForm};
use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use terminy_core::domain::{NewParticipant, NewSlot};
use terminy_core::rules::RejectionReason;

fn new_slot(topic: &str, capacity: u32) -> NewSlot {
    NewSlot {
        date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        topic: topic.to_string(),
        capacity,
    }
}

fn participant(name: &str, email: &str) -> NewParticipant {
    NewParticipant {
        name: name.to_string(),
        email: email.to_string(),
        phone: None,
    }
}

async fn empty_store() -> (Arc<InMemoryRepo>, SlotStore) {
    let repo = Arc::new(InMemoryRepo::seeded(Vec::new()));
    let store = SlotStore::open(
        repo.clone(),
        Arc::new(SequentialIdProvider::default()),
        Duration::ZERO,
    )
    .await;
    (repo, store)
}

#[tokio::test]
async fn create_assigns_id_and_persists() {
    let (repo, mut store) = empty_store().await;

    let slot = store.create_slot(new_slot("Rust basics", 10)).await;
    assert_eq!(slot.id, "id-1");
    assert!(slot.participants.is_empty());
    assert_eq!(store.slots().len(), 1);

    // The full collection is mirrored to the port on every mutation.
    assert_eq!(repo.save_count(), 1);
    let saved = repo.saved_slots().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].topic, "Rust basics");
}

#[tokio::test]
async fn registration_scenario_duplicate_then_full() {
    // Slot with capacity 2: A accepted, duplicate of A rejected,
    // C accepted, D rejected as full.
    let (repo, mut store) = empty_store().await;
    let slot = store.create_slot(new_slot("Workshop", 2)).await;
    let saves_after_create = repo.save_count();

    let a = store.register(&slot.id, participant("A", "a@x.com")).await;
    assert!(matches!(a, RegisterOutcome::Registered(_)));
    assert_eq!(store.slots()[0].participants.len(), 1);

    let b = store.register(&slot.id, participant("B", "a@x.com")).await;
    assert_eq!(b, RegisterOutcome::Rejected(RejectionReason::DuplicateEmail));
    assert_eq!(store.slots()[0].participants.len(), 1);

    let c = store.register(&slot.id, participant("C", "c@x.com")).await;
    assert!(matches!(c, RegisterOutcome::Registered(_)));
    assert_eq!(store.slots()[0].participants.len(), 2);

    let d = store.register(&slot.id, participant("D", "d@x.com")).await;
    assert_eq!(d, RegisterOutcome::Rejected(RejectionReason::Full));
    assert_eq!(store.slots()[0].participants.len(), 2);

    // Capacity invariant held throughout, and only accepted
    // registrations were persisted.
    assert!(store.slots()[0].participants.len() as u32 <= store.slots()[0].capacity);
    assert_eq!(repo.save_count(), saves_after_create + 2);
}

#[tokio::test]
async fn participants_keep_registration_order() {
    let (_repo, mut store) = empty_store().await;
    let slot = store.create_slot(new_slot("Ordered", 5)).await;

    for email in ["first@x.com", "second@x.com", "third@x.com"] {
        store.register(&slot.id, participant(email, email)).await;
    }

    let emails: Vec<&str> = store.slots()[0]
        .participants
        .iter()
        .map(|p| p.email.as_str())
        .collect();
    assert_eq!(emails, ["first@x.com", "second@x.com", "third@x.com"]);
}

#[tokio::test]
async fn update_replaces_fields_but_never_identity() {
    let (_repo, mut store) = empty_store().await;
    let slot = store.create_slot(new_slot("Before", 10)).await;
    store
        .register(&slot.id, participant("A", "a@x.com"))
        .await;

    let created_at = store.slots()[0].created_at;
    let updated = store
        .update_slot(
            &slot.id,
            NewSlot {
                date: NaiveDate::from_ymd_opt(2025, 7, 2).unwrap(),
                time: NaiveTime::from_hms_opt(18, 30, 0).unwrap(),
                topic: "After".to_string(),
                capacity: 20,
            },
        )
        .await;
    assert!(updated);

    let slot = &store.slots()[0];
    assert_eq!(slot.topic, "After");
    assert_eq!(slot.capacity, 20);
    assert_eq!(slot.id, "id-1");
    assert_eq!(slot.created_at, created_at);
    assert_eq!(slot.participants.len(), 1);
}

#[tokio::test]
async fn lowering_capacity_below_count_is_permitted() {
    // The reference silently allows this; the slot is simply over-booked
    // and further registrations bounce off the capacity check.
    let (_repo, mut store) = empty_store().await;
    let slot = store.create_slot(new_slot("Tight", 3)).await;
    store.register(&slot.id, participant("A", "a@x.com")).await;
    store.register(&slot.id, participant("B", "b@x.com")).await;

    assert!(store.update_slot(&slot.id, new_slot("Tight", 1)).await);
    assert_eq!(store.slots()[0].participants.len(), 2);

    let outcome = store.register(&slot.id, participant("C", "c@x.com")).await;
    assert_eq!(outcome, RegisterOutcome::Rejected(RejectionReason::Full));
}

#[tokio::test]
async fn unknown_ids_are_silent_noops() {
    let (repo, mut store) = empty_store().await;
    store.create_slot(new_slot("Only", 5)).await;
    let saves = repo.save_count();

    assert!(!store.update_slot("nope", new_slot("X", 5)).await);
    assert!(!store.delete_slot("nope").await);
    let outcome = store.register("nope", participant("A", "a@x.com")).await;
    assert_eq!(outcome, RegisterOutcome::SlotNotFound);

    // Nothing changed, nothing was persisted.
    assert_eq!(store.slots().len(), 1);
    assert_eq!(repo.save_count(), saves);
}

#[tokio::test]
async fn delete_removes_the_slot_irreversibly() {
    let (repo, mut store) = empty_store().await;
    let keep = store.create_slot(new_slot("Keep", 5)).await;
    let doomed = store.create_slot(new_slot("Drop", 5)).await;

    assert!(store.delete_slot(&doomed.id).await);
    assert_eq!(store.slots().len(), 1);
    assert_eq!(store.slots()[0].id, keep.id);
    assert_eq!(repo.saved_slots().unwrap().len(), 1);
}

#[tokio::test]
async fn open_uses_persisted_collection_when_present() {
    let (repo, mut store) = empty_store().await;
    store.create_slot(new_slot("Persisted", 5)).await;

    // A second store over the same repository sees the saved state.
    let reopened = SlotStore::open(
        repo,
        Arc::new(SequentialIdProvider::default()),
        Duration::ZERO,
    )
    .await;
    assert_eq!(reopened.slots().len(), 1);
    assert_eq!(reopened.slots()[0].topic, "Persisted");
}

#[tokio::test]
async fn past_dated_form_never_reaches_the_store() {
    // Submission flow: the form is validated first; a failure blocks the
    // submission, so the store sees no call and nothing is persisted.
    let (repo, mut store) = empty_store().await;
    let now = Utc.with_ymd_and_hms(2025, 2, 1, 12, 0, 0).unwrap();

    let form = SlotForm {
        date: "2025-01-10".to_string(),
        time: "16:00".to_string(),
        topic: "HTML & CSS Workshop".to_string(),
        capacity: "20".to_string(),
    };
    match validate_slot_form(&form, now) {
        Err(errors) => assert!(errors.get("date").is_some()),
        Ok(data) => {
            store.create_slot(data).await;
            panic!("a past-dated form must not validate");
        }
    }

    assert!(store.slots().is_empty());
    assert_eq!(repo.save_count(), 0);
}

#[tokio::test]
async fn open_falls_back_to_demo_data() {
    // Nothing persisted yet.
    let store = SlotStore::open(
        Arc::new(InMemoryRepo::empty()),
        Arc::new(SequentialIdProvider::default()),
        Duration::ZERO,
    )
    .await;
    assert_eq!(store.slots().len(), 3);

    // Unreadable state falls back the same way.
    let store = SlotStore::open(
        Arc::new(InMemoryRepo::failing()),
        Arc::new(SequentialIdProvider::default()),
        Duration::ZERO,
    )
    .await;
    assert_eq!(store.slots().len(), 3);
    assert_eq!(store.slots()[0].topic, "Úvod do React.js");
}
