//! Commands for the breeding workflow.

use chrono::NaiveDate;
use shared::{BreedingMethod, Gender, KidStatus};

/// One completed birth-record form, handed to the orchestrator.
///
/// `father_id` is the raw form value and may still carry the "unknown"
/// sentinel; the orchestrator normalizes it to absent before anything is
/// stored.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthEventCommand {
    pub mother_id: String,
    pub father_id: Option<String>,
    pub breeding_date: Option<NaiveDate>,
    /// Required; submissions without it fail validation.
    pub actual_delivery_date: Option<NaiveDate>,
    pub breeding_method: BreedingMethod,
    pub veterinarian_name: Option<String>,
    pub complications: Option<String>,
    pub notes: Option<String>,
    pub kids: Vec<KidEntry>,
}

/// One kid as entered on the birth-record form.
#[derive(Debug, Clone, PartialEq)]
pub struct KidEntry {
    pub name: Option<String>,
    pub gender: Gender,
    /// Already parsed from the free-form weight field; invalid or empty
    /// input arrives here as absent.
    pub weight_kg: Option<f64>,
    pub status: KidStatus,
    /// Used only for the promoted animal record, never persisted on the
    /// breeding record itself.
    pub markings: Option<String>,
    pub notes: Option<String>,
    /// Only meaningful when the kid is alive.
    pub create_animal_record: bool,
}
