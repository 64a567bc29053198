//! Domain model for an animal in the livestock registry.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::{AnimalStatus, Gender, Species};

/// An animal in the registry.
///
/// `mother_id`, `father_id` and the ids in `offspring` are weak references:
/// the store never checks that they resolve to an existing animal, and they
/// may point at animals that were sold off-farm or never registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub id: String,
    pub name: String,
    pub species: Species,
    pub breed: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    /// Last recorded weight in kilograms.
    pub current_weight: Option<f64>,
    pub markings: Option<String>,
    pub status: AnimalStatus,
    pub mother_id: Option<String>,
    pub father_id: Option<String>,
    /// Breeding record that produced this animal, when it was promoted from
    /// a birth event.
    pub breeding_record_id: Option<String>,
    /// Ids of animals this animal is a parent to. Append-only; the store
    /// does not deduplicate.
    #[serde(default)]
    pub offspring: Vec<String>,
    #[serde(default)]
    pub insured: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The caller-supplied fields of an animal record.
///
/// Used both for creation (the store assigns id, created_at and updated_at)
/// and for update (full replacement of the mutable fields).
#[derive(Debug, Clone, PartialEq)]
pub struct AnimalFields {
    pub name: String,
    pub species: Species,
    pub breed: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub current_weight: Option<f64>,
    pub markings: Option<String>,
    pub status: AnimalStatus,
    pub mother_id: Option<String>,
    pub father_id: Option<String>,
    pub breeding_record_id: Option<String>,
    pub offspring: Vec<String>,
    pub insured: bool,
    pub notes: Option<String>,
}

impl Animal {
    /// Assemble a full record from caller fields plus the store-assigned parts.
    pub fn from_fields(
        id: String,
        fields: &AnimalFields,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: fields.name.clone(),
            species: fields.species,
            breed: fields.breed.clone(),
            gender: fields.gender,
            date_of_birth: fields.date_of_birth,
            current_weight: fields.current_weight,
            markings: fields.markings.clone(),
            status: fields.status,
            mother_id: fields.mother_id.clone(),
            father_id: fields.father_id.clone(),
            breeding_record_id: fields.breeding_record_id.clone(),
            offspring: fields.offspring.clone(),
            insured: fields.insured,
            notes: fields.notes.clone(),
            created_at,
            updated_at,
        }
    }
}

impl From<&Animal> for AnimalFields {
    fn from(animal: &Animal) -> Self {
        Self {
            name: animal.name.clone(),
            species: animal.species,
            breed: animal.breed.clone(),
            gender: animal.gender,
            date_of_birth: animal.date_of_birth,
            current_weight: animal.current_weight,
            markings: animal.markings.clone(),
            status: animal.status,
            mother_id: animal.mother_id.clone(),
            father_id: animal.father_id.clone(),
            breeding_record_id: animal.breeding_record_id.clone(),
            offspring: animal.offspring.clone(),
            insured: animal.insured,
            notes: animal.notes.clone(),
        }
    }
}
