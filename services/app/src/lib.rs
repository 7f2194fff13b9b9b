pub mod adapters;
pub mod auth;
pub mod config;
pub mod demo;
pub mod error;
pub mod store;
pub mod validators;
pub mod views;

pub use auth::{AuthError, AuthGate};
pub use config::{AdminCredentials, Config};
pub use error::AppError;
pub use store::{RegisterOutcome, SlotStore};
