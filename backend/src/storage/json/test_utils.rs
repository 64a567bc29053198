//! Test utilities: temp-dir-backed storage fixtures that clean themselves up
//! when dropped, even if a test panics.

use anyhow::Result;
use chrono::NaiveDate;
use shared::{AnimalStatus, BreedingMethod, Gender, KidDetail, KidStatus, Species};
use tempfile::TempDir;

use super::animal_repository::AnimalRepository;
use super::breeding_repository::BreedingRepository;
use super::connection::JsonConnection;
use crate::domain::models::animal::AnimalFields;
use crate::domain::models::breeding::NewBreedingRecord;

/// Repositories over a fresh temporary data directory.
pub struct TestHelper {
    pub connection: JsonConnection,
    pub animal_repo: AnimalRepository,
    pub breeding_repo: BreedingRepository,
    _temp_dir: TempDir, // keep alive until drop
}

impl TestHelper {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let connection = JsonConnection::new(temp_dir.path())?;
        Ok(Self {
            animal_repo: AnimalRepository::new(connection.clone()),
            breeding_repo: BreedingRepository::new(connection.clone()),
            connection,
            _temp_dir: temp_dir,
        })
    }
}

/// A plausible set of animal fields for tests.
pub fn animal_fields(name: &str, species: Species, gender: Gender) -> AnimalFields {
    AnimalFields {
        name: name.to_string(),
        species,
        breed: "Boer".to_string(),
        gender,
        date_of_birth: NaiveDate::from_ymd_opt(2022, 3, 10).unwrap(),
        current_weight: Some(38.0),
        markings: None,
        status: AnimalStatus::Active,
        mother_id: None,
        father_id: None,
        breeding_record_id: None,
        offspring: Vec::new(),
        insured: false,
        notes: None,
    }
}

/// A minimal breeding record draft for repository tests.
pub fn breeding_record_fields(mother_id: &str, father_id: Option<&str>) -> NewBreedingRecord {
    let delivery = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    NewBreedingRecord {
        mother_id: mother_id.to_string(),
        father_id: father_id.map(|id| id.to_string()),
        breeding_date: Some(delivery),
        expected_delivery_date: None,
        actual_delivery_date: delivery,
        total_kids: 1,
        male_kids: 0,
        female_kids: 1,
        breeding_method: BreedingMethod::Natural,
        veterinarian_name: None,
        complications: None,
        notes: None,
        kid_details: vec![KidDetail {
            name: None,
            gender: Gender::Female,
            weight: None,
            status: KidStatus::Alive,
        }],
    }
}
