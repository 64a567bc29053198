//! Storage layer: abstraction traits plus the JSON flat-file implementation.

pub mod json;
pub mod traits;

pub use json::JsonConnection;
pub use traits::{AnimalStorage, BreedingStorage, StorageError};
