//! Shared API types for the farm tracker.
//!
//! These are the request/response shapes exchanged over the HTTP API, plus
//! the enums used by both the API layer and the backend domain models.
//! Dates travel as `YYYY-MM-DD` strings and are parsed at the REST boundary;
//! field names are camelCase on the wire to stay compatible with the JSON
//! data files.

use serde::{Deserialize, Serialize};

/// Species kept on the farm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Goat,
    Sheep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Default for Gender {
    /// Birth-event entry defaults to female when no gender was chosen.
    fn default() -> Self {
        Gender::Female
    }
}

/// Lifecycle status of an animal record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimalStatus {
    Active,
    Sold,
    ReadyToSell,
    Dead,
}

impl Default for AnimalStatus {
    fn default() -> Self {
        AnimalStatus::Active
    }
}

/// How a mating was performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreedingMethod {
    Natural,
    ArtificialInsemination,
}

impl Default for BreedingMethod {
    fn default() -> Self {
        BreedingMethod::Natural
    }
}

/// Outcome of a single kid in a birth event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KidStatus {
    Alive,
    Stillborn,
    DiedAfterBirth,
}

/// One kid's recorded outcome as persisted on a breeding record.
///
/// Independent of whether the kid was promoted to a full animal record:
/// markings and per-kid notes are animal-record fields and never stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KidDetail {
    pub name: Option<String>,
    pub gender: Gender,
    /// Birth weight in kilograms, when weighed.
    pub weight: Option<f64>,
    pub status: KidStatus,
}

/// Request body for POST /api/animals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnimalRequest {
    pub name: String,
    pub species: Species,
    pub breed: String,
    pub gender: Gender,
    /// Date of birth (YYYY-MM-DD).
    pub date_of_birth: String,
    pub current_weight: Option<f64>,
    pub markings: Option<String>,
    /// Defaults to `active` when omitted.
    pub status: Option<AnimalStatus>,
    pub mother_id: Option<String>,
    pub father_id: Option<String>,
    pub breeding_record_id: Option<String>,
    pub insured: Option<bool>,
    pub notes: Option<String>,
}

/// Request body for PUT /api/animals/:id.
///
/// Full replacement of the mutable fields; id, createdAt and updatedAt are
/// owned by the store and cannot be supplied here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAnimalRequest {
    pub name: String,
    pub species: Species,
    pub breed: String,
    pub gender: Gender,
    pub date_of_birth: String,
    pub current_weight: Option<f64>,
    pub markings: Option<String>,
    pub status: AnimalStatus,
    pub mother_id: Option<String>,
    pub father_id: Option<String>,
    pub breeding_record_id: Option<String>,
    #[serde(default)]
    pub offspring: Vec<String>,
    #[serde(default)]
    pub insured: bool,
    pub notes: Option<String>,
}

/// Request body for POST /api/breeding-records (direct record creation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBreedingRecordRequest {
    pub mother_id: String,
    pub father_id: Option<String>,
    pub breeding_date: Option<String>,
    pub expected_delivery_date: Option<String>,
    pub actual_delivery_date: String,
    pub total_kids: u32,
    pub male_kids: u32,
    pub female_kids: u32,
    pub breeding_method: BreedingMethod,
    pub veterinarian_name: Option<String>,
    pub complications: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub kid_details: Vec<KidDetail>,
}

/// Request body for POST /api/birth-events: one completed birth-record form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthEventRequest {
    pub mother_id: String,
    /// May carry the literal "unknown" when the sire was not recorded.
    pub father_id: Option<String>,
    /// Mating date (YYYY-MM-DD), when known.
    pub breeding_date: Option<String>,
    /// Birth date (YYYY-MM-DD). Required; its absence fails validation.
    pub actual_delivery_date: Option<String>,
    /// Defaults to `natural` when omitted.
    pub breeding_method: Option<BreedingMethod>,
    pub veterinarian_name: Option<String>,
    pub complications: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub kids: Vec<KidEntryRequest>,
}

/// One kid as entered on the birth-record form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KidEntryRequest {
    pub name: Option<String>,
    /// Defaults to female when omitted.
    pub gender: Option<Gender>,
    /// Free-form weight entry in kilograms; non-numeric input means no weight.
    pub weight: Option<String>,
    pub status: KidStatus,
    pub markings: Option<String>,
    pub notes: Option<String>,
    /// Only meaningful when status is `alive`.
    #[serde(default)]
    pub create_animal_record: bool,
}

/// Response body for POST /api/birth-events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthEventResponse {
    pub breeding_record_id: String,
    pub kids_recorded: u32,
    /// May be lower than the number requested if individual creations failed.
    pub animals_created: u32,
    pub message: String,
    /// Partial failures from offspring creation or parent linking. These do
    /// not invalidate the breeding record itself.
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// Generic deletion acknowledgement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// Response body for GET /api/ping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PingResponse {
    pub message: String,
}
