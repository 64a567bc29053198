//! Domain model for a breeding/birth event.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::{BreedingMethod, KidDetail};

/// One birth event for a mother. Created once and immutable afterwards;
/// there is no edit or delete workflow for breeding records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreedingRecord {
    pub id: String,
    pub mother_id: String,
    /// Absent means the sire is unknown.
    pub father_id: Option<String>,
    pub breeding_date: Option<NaiveDate>,
    /// Derived from the breeding date and the mother's species; only set
    /// when a real mating date was recorded.
    pub expected_delivery_date: Option<NaiveDate>,
    pub actual_delivery_date: NaiveDate,
    pub total_kids: u32,
    pub male_kids: u32,
    pub female_kids: u32,
    pub breeding_method: BreedingMethod,
    pub veterinarian_name: Option<String>,
    pub complications: Option<String>,
    pub notes: Option<String>,
    /// One entry per kid born, in form order; length equals `total_kids`.
    #[serde(default)]
    pub kid_details: Vec<KidDetail>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The caller-supplied fields of a breeding record; the store assigns id,
/// created_at and updated_at.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBreedingRecord {
    pub mother_id: String,
    pub father_id: Option<String>,
    pub breeding_date: Option<NaiveDate>,
    pub expected_delivery_date: Option<NaiveDate>,
    pub actual_delivery_date: NaiveDate,
    pub total_kids: u32,
    pub male_kids: u32,
    pub female_kids: u32,
    pub breeding_method: BreedingMethod,
    pub veterinarian_name: Option<String>,
    pub complications: Option<String>,
    pub notes: Option<String>,
    pub kid_details: Vec<KidDetail>,
}

/// A breeding record paired with its father's display name, for the
/// mother's breeding-history view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreedingHistoryEntry {
    #[serde(flatten)]
    pub record: BreedingRecord,
    /// "Unknown" when the record has no father or the id resolves to nothing.
    pub father_name: String,
}
