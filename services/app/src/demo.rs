//! services/app/src/demo.rs
//!
//! The built-in demo dataset: three slots the store falls back to when
//! nothing usable has been persisted yet. Carried over verbatim from
//! the reference application, including the deliberately past workshop.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use terminy_core::domain::{Participant, Slot};

fn ts(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .expect("demo timestamp is valid")
        .with_timezone(&Utc)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("demo date is valid")
}

fn time(h: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, min, 0).expect("demo time is valid")
}

/// The three-slot demo collection.
pub fn demo_slots() -> Vec<Slot> {
    vec![
        Slot {
            id: "1".to_string(),
            date: date(2025, 2, 15),
            time: time(10, 0),
            topic: "Úvod do React.js".to_string(),
            capacity: 15,
            participants: vec![
                Participant {
                    id: "1".to_string(),
                    name: "Jan Novák".to_string(),
                    email: "jan.novak@email.cz".to_string(),
                    phone: Some("+420 123 456 789".to_string()),
                    registered_at: ts("2025-01-10T09:30:00Z"),
                },
                Participant {
                    id: "2".to_string(),
                    name: "Marie Svobodová".to_string(),
                    email: "marie.svoboda@email.cz".to_string(),
                    phone: None,
                    registered_at: ts("2025-01-12T14:20:00Z"),
                },
            ],
            created_at: ts("2025-01-08T08:00:00Z"),
        },
        Slot {
            id: "2".to_string(),
            date: date(2025, 2, 20),
            time: time(14, 0),
            topic: "TypeScript pro začátečníky".to_string(),
            capacity: 12,
            participants: Vec::new(),
            created_at: ts("2025-01-09T10:00:00Z"),
        },
        Slot {
            id: "3".to_string(),
            date: date(2025, 1, 10),
            time: time(16, 0),
            topic: "HTML & CSS Workshop".to_string(),
            capacity: 20,
            participants: vec![Participant {
                id: "3".to_string(),
                name: "Petr Dvořák".to_string(),
                email: "petr.dvorak@email.cz".to_string(),
                phone: Some("+420 987 654 321".to_string()),
                registered_at: ts("2025-01-05T11:45:00Z"),
            }],
            created_at: ts("2025-01-01T12:00:00Z"),
        },
    ]
}
