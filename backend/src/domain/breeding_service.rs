//! Breeding workflow orchestration and the mother-history read side.
//!
//! The birth-event workflow is best-effort rather than transactional: the
//! flat-file stores have no multi-document transaction primitive, so the
//! breeding record write is the only hard gate. Offspring record creation
//! and the two parent back-links degrade independently and are reported as
//! warnings instead of failing the submission.

use anyhow::Result;
use log::{error, info};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use shared::{AnimalStatus, Gender, KidDetail, KidStatus};

use crate::domain::commands::breeding::{BirthEventCommand, KidEntry};
use crate::domain::gestation::estimate_delivery_date;
use crate::domain::models::animal::{Animal, AnimalFields};
use crate::domain::models::breeding::{BreedingHistoryEntry, BreedingRecord, NewBreedingRecord};
use crate::storage::{AnimalStorage, BreedingStorage, StorageError};

/// Form value meaning "no sire recorded"; normalized to absent, never stored.
const UNKNOWN_FATHER_SENTINEL: &str = "unknown";

/// Display name for a father id that resolves to nothing.
const UNKNOWN_FATHER_NAME: &str = "Unknown";

/// Failures that abort a birth-event submission outright. Anything that
/// happens after the breeding record exists is a [`PartialFailure`] instead.
#[derive(Debug, Error)]
pub enum BirthEventError {
    /// No store write was attempted; resubmitting unchanged input fails again.
    #[error("actual delivery date is required")]
    MissingDeliveryDate,
    /// No store write was attempted.
    #[error("at least one kid must be recorded")]
    NoKids,
    #[error("mother animal {0} not found")]
    MotherNotFound(String),
    #[error("failed to load mother animal: {0}")]
    MotherLookup(#[source] anyhow::Error),
    /// The breeding record write failed. No partial state exists and the
    /// whole submission is safe to retry.
    #[error("failed to save breeding record: {0}")]
    RecordCreation(#[source] anyhow::Error),
}

impl BirthEventError {
    /// Whether this is an input problem rather than a store failure.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            BirthEventError::MissingDeliveryDate
                | BirthEventError::NoKids
                | BirthEventError::MotherNotFound(_)
        )
    }
}

/// Which parent an offspring back-link failed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentRole {
    Mother,
    Father,
}

impl fmt::Display for ParentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParentRole::Mother => write!(f, "mother"),
            ParentRole::Father => write!(f, "father"),
        }
    }
}

/// A non-fatal failure collected while processing a birth event. None of
/// these invalidate the breeding record or any animal already created.
#[derive(Debug)]
pub enum PartialFailure {
    /// One kid's animal record could not be created; the index refers to the
    /// submitted kids list. The caller may retry just that kid with a
    /// follow-up animal creation.
    OffspringCreation { kid_index: usize, message: String },
    /// The offspring-append update failed for one parent.
    ParentLink { parent: ParentRole, message: String },
}

impl fmt::Display for PartialFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartialFailure::OffspringCreation { kid_index, message } => {
                write!(
                    f,
                    "animal record for kid {} was not created: {}",
                    kid_index + 1,
                    message
                )
            }
            PartialFailure::ParentLink { parent, message } => {
                write!(f, "{} offspring list was not updated: {}", parent, message)
            }
        }
    }
}

/// The result of a successfully submitted birth event.
#[derive(Debug)]
pub struct BirthEventOutcome {
    pub breeding_record: BreedingRecord,
    /// Ids of the animal records actually created, in kid order. May be
    /// shorter than the number requested if individual creations failed.
    pub new_animal_ids: Vec<String>,
    pub failures: Vec<PartialFailure>,
}

impl BirthEventOutcome {
    /// One-line human summary for the caller to display.
    pub fn summary(&self) -> String {
        format!(
            "Breeding record saved: {} kid(s) recorded, {} new animal record(s) created",
            self.breeding_record.total_kids,
            self.new_animal_ids.len()
        )
    }
}

/// Breeding record workflow: the birth-event orchestrator plus the
/// mother-history read side.
#[derive(Clone)]
pub struct BreedingService {
    animal_repository: Arc<dyn AnimalStorage>,
    breeding_repository: Arc<dyn BreedingStorage>,
}

impl BreedingService {
    pub fn new(
        animal_repository: Arc<dyn AnimalStorage>,
        breeding_repository: Arc<dyn BreedingStorage>,
    ) -> Self {
        Self {
            animal_repository,
            breeding_repository,
        }
    }

    /// Turn one birth-event submission into durable records.
    ///
    /// Sequence: validate, create the breeding record, promote flagged live
    /// kids to animal records, append the new ids to the mother's and (if
    /// known) father's offspring lists. Once the breeding record exists
    /// nothing is rolled back; later failures accumulate in the outcome.
    pub fn record_birth_event(
        &self,
        command: BirthEventCommand,
    ) -> Result<BirthEventOutcome, BirthEventError> {
        let actual_delivery_date = command
            .actual_delivery_date
            .ok_or(BirthEventError::MissingDeliveryDate)?;
        if command.kids.is_empty() {
            return Err(BirthEventError::NoKids);
        }

        // The mother supplies species and breed for any promoted offspring.
        let mother = self
            .animal_repository
            .get_animal(&command.mother_id)
            .map_err(BirthEventError::MotherLookup)?
            .ok_or_else(|| BirthEventError::MotherNotFound(command.mother_id.clone()))?;

        let father_id = normalize_father_id(command.father_id.as_deref());

        let total_kids = command.kids.len() as u32;
        let male_kids = count_gender(&command.kids, Gender::Male);
        let female_kids = count_gender(&command.kids, Gender::Female);

        // A birth witnessed without a recorded mating date is treated as
        // mated same-day for record purposes; the delivery estimate is only
        // derived from a real mating date.
        let breeding_date = command.breeding_date.unwrap_or(actual_delivery_date);
        let expected_delivery_date = command
            .breeding_date
            .map(|mating| estimate_delivery_date(mating, mother.species));

        let kid_details = command
            .kids
            .iter()
            .map(|kid| KidDetail {
                name: kid.name.clone(),
                gender: kid.gender,
                weight: kid.weight_kg,
                status: kid.status,
            })
            .collect();

        let record = self
            .breeding_repository
            .create_breeding_record(&NewBreedingRecord {
                mother_id: mother.id.clone(),
                father_id: father_id.clone(),
                breeding_date: Some(breeding_date),
                expected_delivery_date,
                actual_delivery_date,
                total_kids,
                male_kids,
                female_kids,
                breeding_method: command.breeding_method,
                veterinarian_name: command.veterinarian_name.clone(),
                complications: command.complications.clone(),
                notes: command.notes.clone(),
                kid_details,
            })
            .map_err(BirthEventError::RecordCreation)?;

        info!(
            "Created breeding record {} for mother {} ({} kid(s))",
            record.id, record.mother_id, record.total_kids
        );

        let mut failures = Vec::new();
        let mut new_animal_ids = Vec::new();

        for (kid_index, kid) in command.kids.iter().enumerate() {
            if !should_create_animal_record(kid) {
                continue;
            }
            let fields = offspring_fields(kid, &mother, &father_id, &record.id, actual_delivery_date);
            match self.animal_repository.create_animal(&fields) {
                Ok(animal) => {
                    info!(
                        "Created offspring animal {} for breeding record {}",
                        animal.id, record.id
                    );
                    new_animal_ids.push(animal.id);
                }
                Err(e) => {
                    error!(
                        "Failed to create animal record for kid {}: {}",
                        kid_index + 1,
                        e
                    );
                    failures.push(PartialFailure::OffspringCreation {
                        kid_index,
                        message: e.to_string(),
                    });
                }
            }
        }

        if !new_animal_ids.is_empty() {
            if let Err(failure) =
                self.append_offspring(&mother.id, &new_animal_ids, ParentRole::Mother)
            {
                failures.push(failure);
            }
            if let Some(father_id) = &father_id {
                if let Err(failure) =
                    self.append_offspring(father_id, &new_animal_ids, ParentRole::Father)
                {
                    failures.push(failure);
                }
            }
        }

        Ok(BirthEventOutcome {
            breeding_record: record,
            new_animal_ids,
            failures,
        })
    }

    /// Breeding history for one mother, father names resolved for display.
    /// Store order is preserved (newest first, since the store prepends).
    pub fn breeding_history(&self, mother_id: &str) -> Result<Vec<BreedingHistoryEntry>> {
        let records = self
            .breeding_repository
            .list_breeding_records_for_mother(mother_id)?;
        let animals = self.animal_repository.list_animals()?;

        Ok(records
            .into_iter()
            .map(|record| {
                let father_name = record
                    .father_id
                    .as_deref()
                    .and_then(|id| animals.iter().find(|a| a.id == id))
                    .map(|a| a.name.clone())
                    .unwrap_or_else(|| UNKNOWN_FATHER_NAME.to_string());
                BreedingHistoryEntry {
                    record,
                    father_name,
                }
            })
            .collect())
    }

    /// Direct record creation, for the POST /breeding-records surface.
    pub fn create_breeding_record(&self, fields: NewBreedingRecord) -> Result<BreedingRecord> {
        self.breeding_repository.create_breeding_record(&fields)
    }

    /// Unfiltered when `animal_id` is absent, else mother-or-father match.
    pub fn list_breeding_records(&self, animal_id: Option<&str>) -> Result<Vec<BreedingRecord>> {
        match animal_id {
            Some(id) => self.breeding_repository.list_breeding_records_for_parent(id),
            None => self.breeding_repository.list_breeding_records(),
        }
    }

    /// Append the new offspring ids to one parent's record. Existing entries
    /// are preserved and nothing is deduplicated; a retried submission can
    /// legitimately put the same id on a parent twice.
    fn append_offspring(
        &self,
        parent_id: &str,
        new_animal_ids: &[String],
        role: ParentRole,
    ) -> Result<(), PartialFailure> {
        let result = self
            .animal_repository
            .get_animal(parent_id)
            .and_then(|maybe| {
                maybe.ok_or_else(|| {
                    anyhow::Error::new(StorageError::NotFound {
                        entity: "animal",
                        id: parent_id.to_string(),
                    })
                })
            })
            .and_then(|parent| {
                let mut fields = AnimalFields::from(&parent);
                fields.offspring.extend(new_animal_ids.iter().cloned());
                self.animal_repository
                    .update_animal(parent_id, &fields)
                    .map(|_| ())
            });

        result.map_err(|e| {
            error!(
                "Failed to update {} offspring list for {}: {}",
                role, parent_id, e
            );
            PartialFailure::ParentLink {
                parent: role,
                message: e.to_string(),
            }
        })
    }
}

fn count_gender(kids: &[KidEntry], gender: Gender) -> u32 {
    kids.iter().filter(|k| k.gender == gender).count() as u32
}

/// A kid is promoted to a full animal record only when it survived, the form
/// flagged it for promotion, and it was actually given a name.
fn should_create_animal_record(kid: &KidEntry) -> bool {
    kid.status == KidStatus::Alive
        && kid.create_animal_record
        && kid.name.as_deref().is_some_and(|name| !name.trim().is_empty())
}

fn offspring_fields(
    kid: &KidEntry,
    mother: &Animal,
    father_id: &Option<String>,
    breeding_record_id: &str,
    date_of_birth: chrono::NaiveDate,
) -> AnimalFields {
    AnimalFields {
        name: kid.name.clone().unwrap_or_default(),
        species: mother.species,
        breed: mother.breed.clone(),
        gender: kid.gender,
        date_of_birth,
        current_weight: kid.weight_kg,
        markings: kid.markings.clone(),
        status: AnimalStatus::Active,
        mother_id: Some(mother.id.clone()),
        father_id: father_id.clone(),
        breeding_record_id: Some(breeding_record_id.to_string()),
        offspring: Vec::new(),
        insured: false,
        notes: kid.notes.clone(),
    }
}

fn normalize_father_id(raw: Option<&str>) -> Option<String> {
    match raw {
        Some(value) if value.trim().is_empty() => None,
        Some(value) if value.trim().eq_ignore_ascii_case(UNKNOWN_FATHER_SENTINEL) => None,
        Some(value) => Some(value.to_string()),
        None => None,
    }
}
