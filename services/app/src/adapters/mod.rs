pub mod ids;
pub mod json_store;
pub mod memory;

pub use ids::{SequentialIdProvider, UuidIdProvider};
pub use json_store::JsonFileStore;
pub use memory::InMemoryRepo;
