//! # Storage Traits
//!
//! Abstraction traits for the animal and breeding-record stores, allowing
//! the domain layer to run against different backends (flat JSON files, an
//! embedded database, in-memory fakes in tests) without modification.

use anyhow::Result;
use thiserror::Error;

use crate::domain::models::animal::{Animal, AnimalFields};
use crate::domain::models::breeding::{BreedingRecord, NewBreedingRecord};

/// Typed storage failure carried inside `anyhow::Error` so transport layers
/// can tell a missing record apart from an I/O problem.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },
}

/// Interface for animal persistence.
///
/// Lineage ids are weak references; no operation here enforces that they
/// resolve to stored animals.
pub trait AnimalStorage: Send + Sync {
    /// Create a new animal; the store assigns id, created_at and updated_at.
    fn create_animal(&self, fields: &AnimalFields) -> Result<Animal>;

    /// Retrieve a specific animal by id.
    fn get_animal(&self, animal_id: &str) -> Result<Option<Animal>>;

    /// List all animals in store order (newest first).
    fn list_animals(&self) -> Result<Vec<Animal>>;

    /// Replace an animal's mutable fields. Preserves id and created_at,
    /// refreshes updated_at. Fails with `StorageError::NotFound` when the id
    /// does not exist.
    fn update_animal(&self, animal_id: &str, fields: &AnimalFields) -> Result<Animal>;

    /// Delete an animal. Returns false when the id was not present.
    fn delete_animal(&self, animal_id: &str) -> Result<bool>;
}

/// Interface for breeding-record persistence. Records are append-only.
pub trait BreedingStorage: Send + Sync {
    /// Create a new breeding record; the store assigns id, created_at and
    /// updated_at.
    fn create_breeding_record(&self, fields: &NewBreedingRecord) -> Result<BreedingRecord>;

    /// List all breeding records in store order (newest first).
    fn list_breeding_records(&self) -> Result<Vec<BreedingRecord>>;

    /// Records where the given animal is the mother.
    fn list_breeding_records_for_mother(&self, mother_id: &str) -> Result<Vec<BreedingRecord>>;

    /// Records where the given animal is either the mother or the father.
    fn list_breeding_records_for_parent(&self, animal_id: &str) -> Result<Vec<BreedingRecord>>;
}
