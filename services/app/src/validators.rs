//! services/app/src/validators.rs
//!
//! Field-level validation for the two submission forms. Runs
//! synchronously on submit; a failure blocks the submission and carries
//! one message per offending field. Validation is independent of the
//! slot store — a slot that drifts into the past after an edit is never
//! re-checked.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use terminy_core::domain::{NewParticipant, NewSlot};

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid");
}

//=========================================================================================
// Per-field Error Map
//=========================================================================================

/// Messages keyed by field name. Correcting a field clears only that
/// field's message, so the map supports targeted removal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<&'static str, String>,
}

impl ValidationErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.insert(field, message.into());
    }

    /// Removes the message attached to `field`, leaving the rest intact.
    pub fn clear(&mut self, field: &str) {
        self.fields.remove(field);
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

//=========================================================================================
// Slot Form
//=========================================================================================

/// Raw slot form fields as the UI submits them.
#[derive(Debug, Clone, Default)]
pub struct SlotForm {
    pub date: String,
    pub time: String,
    pub topic: String,
    pub capacity: String,
}

/// Validates the slot creation/edit form. On success the parsed field
/// bundle is ready to hand to the store; the store itself is never
/// consulted.
pub fn validate_slot_form(
    form: &SlotForm,
    now: DateTime<Utc>,
) -> Result<NewSlot, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let date = if form.date.trim().is_empty() {
        errors.add("date", "Date is required");
        None
    } else {
        match NaiveDate::parse_from_str(form.date.trim(), "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                errors.add("date", "Invalid date format");
                None
            }
        }
    };

    let time = if form.time.trim().is_empty() {
        errors.add("time", "Time is required");
        None
    } else {
        match NaiveTime::parse_from_str(form.time.trim(), "%H:%M") {
            Ok(time) => Some(time),
            Err(_) => {
                errors.add("time", "Invalid time format");
                None
            }
        }
    };

    let topic = form.topic.trim();
    if topic.is_empty() {
        errors.add("topic", "Topic is required");
    }

    let capacity = match form.capacity.trim().parse::<i64>() {
        Err(_) => {
            errors.add("capacity", "Capacity must be a number");
            None
        }
        Ok(n) if n < 1 => {
            errors.add("capacity", "At least 1 participant");
            None
        }
        Ok(n) if n > 100 => {
            errors.add("capacity", "At most 100 participants");
            None
        }
        Ok(n) => Some(n as u32),
    };

    // The combined instant must lie strictly in the future. The failure
    // attaches to the date field, matching the reference form.
    if let (Some(date), Some(time)) = (date, time) {
        if date.and_time(time).and_utc() <= now {
            errors.add("date", "Date and time must be in the future");
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // The unwraps cannot fire: a None in any field added an error above.
    Ok(NewSlot {
        date: date.unwrap(),
        time: time.unwrap(),
        topic: topic.to_string(),
        capacity: capacity.unwrap(),
    })
}

//=========================================================================================
// Registration Form
//=========================================================================================

/// Raw registration form fields as the UI submits them.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Validates the participant registration form. Phone is optional and
/// unvalidated; a blank phone becomes `None`.
pub fn validate_registration_form(
    form: &RegistrationForm,
) -> Result<NewParticipant, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = form.name.trim();
    if name.is_empty() {
        errors.add("name", "Name is required");
    }

    let email = form.email.trim();
    if email.is_empty() {
        errors.add("email", "Email is required");
    } else if !EMAIL_RE.is_match(email) {
        errors.add("email", "Invalid email format");
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let phone = form.phone.trim();
    Ok(NewParticipant {
        name: name.to_string(),
        email: email.to_string(),
        phone: (!phone.is_empty()).then(|| phone.to_string()),
    })
}
