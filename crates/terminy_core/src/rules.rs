//! crates/terminy_core/src/rules.rs
//!
//! The registration rule engine: a pure predicate deciding whether a
//! candidate registration may be appended to a slot. No side effects;
//! the store applies the verdict.

use crate::domain::Slot;

/// Why a registration attempt was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RejectionReason {
    #[error("the slot has no free seats left")]
    Full,
    #[error("this email is already registered for the slot")]
    DuplicateEmail,
}

/// Checks a candidate registration against a slot.
///
/// Capacity is evaluated first; the duplicate-email check only runs once
/// capacity passes, so a full slot always reports `Full` even when the
/// email is also a duplicate. The email match is case-sensitive.
pub fn check_registration(slot: &Slot, email: &str) -> Result<(), RejectionReason> {
    if slot.is_full() {
        return Err(RejectionReason::Full);
    }
    if slot.has_email(email) {
        return Err(RejectionReason::DuplicateEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Participant, Slot};
    use chrono::{NaiveDate, NaiveTime, Utc};

    fn slot(capacity: u32, emails: &[&str]) -> Slot {
        Slot {
            id: "s1".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            topic: "Workshop".to_string(),
            capacity,
            participants: emails
                .iter()
                .enumerate()
                .map(|(i, email)| Participant {
                    id: format!("p{i}"),
                    name: format!("Person {i}"),
                    email: (*email).to_string(),
                    phone: None,
                    registered_at: Utc::now(),
                })
                .collect(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn accepts_when_seats_remain_and_email_is_new() {
        assert_eq!(check_registration(&slot(2, &["a@x.com"]), "b@x.com"), Ok(()));
    }

    #[test]
    fn rejects_full_slot() {
        let s = slot(1, &["a@x.com"]);
        assert_eq!(check_registration(&s, "b@x.com"), Err(RejectionReason::Full));
    }

    #[test]
    fn rejects_duplicate_email() {
        let s = slot(2, &["a@x.com"]);
        assert_eq!(
            check_registration(&s, "a@x.com"),
            Err(RejectionReason::DuplicateEmail)
        );
    }

    #[test]
    fn capacity_wins_when_both_conditions_fail() {
        // A full slot with a duplicate email reports Full: the duplicate
        // check is nested under the capacity check.
        let s = slot(1, &["a@x.com"]);
        assert_eq!(check_registration(&s, "a@x.com"), Err(RejectionReason::Full));
    }

    #[test]
    fn differently_cased_email_is_distinct() {
        let s = slot(2, &["a@x.com"]);
        assert_eq!(check_registration(&s, "A@x.com"), Ok(()));
    }
}
