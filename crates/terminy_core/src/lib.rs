pub mod domain;
pub mod ports;
pub mod rules;

pub use domain::{NewParticipant, NewSlot, Participant, SessionState, Slot};
pub use ports::{IdProvider, PortError, PortResult, SlotRepository};
pub use rules::{check_registration, RejectionReason};
