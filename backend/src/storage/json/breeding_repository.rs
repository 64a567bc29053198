use anyhow::Result;
use chrono::Utc;
use log::info;

use super::connection::{next_record_id, JsonConnection};
use crate::domain::models::breeding::{BreedingRecord, NewBreedingRecord};
use crate::storage::traits::BreedingStorage;

/// JSON-file breeding-record repository. Records are append-only; there is
/// no update or delete.
#[derive(Clone)]
pub struct BreedingRepository {
    connection: JsonConnection,
}

impl BreedingRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    fn read_records(&self) -> Result<Vec<BreedingRecord>> {
        self.connection
            .read_array(&self.connection.breeding_records_file_path())
    }
}

impl BreedingStorage for BreedingRepository {
    fn create_breeding_record(&self, fields: &NewBreedingRecord) -> Result<BreedingRecord> {
        let mut records = self.read_records()?;
        let now = Utc::now();
        let record = BreedingRecord {
            id: next_record_id(records.iter().map(|r| r.id.as_str())),
            mother_id: fields.mother_id.clone(),
            father_id: fields.father_id.clone(),
            breeding_date: fields.breeding_date,
            expected_delivery_date: fields.expected_delivery_date,
            actual_delivery_date: fields.actual_delivery_date,
            total_kids: fields.total_kids,
            male_kids: fields.male_kids,
            female_kids: fields.female_kids,
            breeding_method: fields.breeding_method,
            veterinarian_name: fields.veterinarian_name.clone(),
            complications: fields.complications.clone(),
            notes: fields.notes.clone(),
            kid_details: fields.kid_details.clone(),
            created_at: now,
            updated_at: now,
        };
        records.insert(0, record.clone());
        self.connection
            .write_array(&self.connection.breeding_records_file_path(), &records)?;
        info!(
            "Created breeding record {} for mother {}",
            record.id, record.mother_id
        );
        Ok(record)
    }

    fn list_breeding_records(&self) -> Result<Vec<BreedingRecord>> {
        self.read_records()
    }

    fn list_breeding_records_for_mother(&self, mother_id: &str) -> Result<Vec<BreedingRecord>> {
        Ok(self
            .read_records()?
            .into_iter()
            .filter(|r| r.mother_id == mother_id)
            .collect())
    }

    fn list_breeding_records_for_parent(&self, animal_id: &str) -> Result<Vec<BreedingRecord>> {
        Ok(self
            .read_records()?
            .into_iter()
            .filter(|r| r.mother_id == animal_id || r.father_id.as_deref() == Some(animal_id))
            .collect())
    }
}
