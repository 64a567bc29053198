//! # JSON Storage Module
//!
//! Flat-file storage backing the farm tracker: one JSON array file per
//! entity type, read and rewritten whole on every operation. There is no
//! locking; concurrent writers can lose updates, an accepted limitation for
//! single-operator usage.
//!
//! ## Files
//!
//! - `animals.json`: the animal registry
//! - `breeding-records.json`: birth events
//!
//! New records sit at the front of each array (newest first), and ids are
//! the decimal successor of the highest numeric id already present. Writes
//! go through a temp file and rename so a crash never leaves a half-written
//! array behind.

pub mod animal_repository;
pub mod breeding_repository;
pub mod connection;

#[cfg(test)]
pub mod test_utils;

pub use animal_repository::AnimalRepository;
pub use breeding_repository::BreedingRepository;
pub use connection::JsonConnection;
