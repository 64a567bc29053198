use anyhow::Result;
use chrono::Utc;
use log::{info, warn};

use super::connection::{next_record_id, JsonConnection};
use crate::domain::models::animal::{Animal, AnimalFields};
use crate::storage::traits::{AnimalStorage, StorageError};

/// JSON-file animal repository: whole-array read-modify-write per call.
#[derive(Clone)]
pub struct AnimalRepository {
    connection: JsonConnection,
}

impl AnimalRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    fn read_animals(&self) -> Result<Vec<Animal>> {
        self.connection
            .read_array(&self.connection.animals_file_path())
    }

    fn write_animals(&self, animals: &[Animal]) -> Result<()> {
        self.connection
            .write_array(&self.connection.animals_file_path(), animals)
    }
}

impl AnimalStorage for AnimalRepository {
    fn create_animal(&self, fields: &AnimalFields) -> Result<Animal> {
        let mut animals = self.read_animals()?;
        let now = Utc::now();
        let animal = Animal::from_fields(
            next_record_id(animals.iter().map(|a| a.id.as_str())),
            fields,
            now,
            now,
        );
        // Newest records go to the front of the array.
        animals.insert(0, animal.clone());
        self.write_animals(&animals)?;
        info!("Created animal {} ({})", animal.id, animal.name);
        Ok(animal)
    }

    fn get_animal(&self, animal_id: &str) -> Result<Option<Animal>> {
        Ok(self
            .read_animals()?
            .into_iter()
            .find(|a| a.id == animal_id))
    }

    fn list_animals(&self) -> Result<Vec<Animal>> {
        self.read_animals()
    }

    fn update_animal(&self, animal_id: &str, fields: &AnimalFields) -> Result<Animal> {
        let mut animals = self.read_animals()?;
        let index = match animals.iter().position(|a| a.id == animal_id) {
            Some(index) => index,
            None => {
                warn!("Attempted to update a non-existent animal: {}", animal_id);
                return Err(StorageError::NotFound {
                    entity: "animal",
                    id: animal_id.to_string(),
                }
                .into());
            }
        };
        let updated = Animal::from_fields(
            animals[index].id.clone(),
            fields,
            animals[index].created_at,
            Utc::now(),
        );
        animals[index] = updated.clone();
        self.write_animals(&animals)?;
        Ok(updated)
    }

    fn delete_animal(&self, animal_id: &str) -> Result<bool> {
        let mut animals = self.read_animals()?;
        let before = animals.len();
        animals.retain(|a| a.id != animal_id);
        if animals.len() == before {
            warn!("Attempted to delete a non-existent animal: {}", animal_id);
            return Ok(false);
        }
        self.write_animals(&animals)?;
        info!("Deleted animal {}", animal_id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::json::test_utils::{animal_fields, TestHelper};
    use shared::{Gender, Species};

    #[test]
    fn test_create_assigns_sequential_ids_and_prepends() {
        let helper = TestHelper::new().unwrap();

        let first = helper
            .animal_repo
            .create_animal(&animal_fields("Daisy", Species::Goat, Gender::Female))
            .unwrap();
        let second = helper
            .animal_repo
            .create_animal(&animal_fields("Bruno", Species::Goat, Gender::Male))
            .unwrap();

        assert_eq!(first.id, "1");
        assert_eq!(second.id, "2");

        let animals = helper.animal_repo.list_animals().unwrap();
        assert_eq!(animals.len(), 2);
        assert_eq!(animals[0].name, "Bruno");
        assert_eq!(animals[1].name, "Daisy");
    }

    #[test]
    fn test_update_preserves_created_at_and_refreshes_updated_at() {
        let helper = TestHelper::new().unwrap();
        let animal = helper
            .animal_repo
            .create_animal(&animal_fields("Daisy", Species::Goat, Gender::Female))
            .unwrap();

        let mut fields = AnimalFields::from(&animal);
        fields.current_weight = Some(41.5);
        let updated = helper.animal_repo.update_animal(&animal.id, &fields).unwrap();

        assert_eq!(updated.id, animal.id);
        assert_eq!(updated.created_at, animal.created_at);
        assert!(updated.updated_at >= animal.updated_at);
        assert_eq!(updated.current_weight, Some(41.5));
    }

    #[test]
    fn test_update_unknown_id_fails_with_not_found() {
        let helper = TestHelper::new().unwrap();
        let fields = animal_fields("Ghost", Species::Sheep, Gender::Female);

        let err = helper.animal_repo.update_animal("999", &fields).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StorageError>(),
            Some(StorageError::NotFound { .. })
        ));
    }

    #[test]
    fn test_delete_returns_false_for_unknown_id() {
        let helper = TestHelper::new().unwrap();
        assert!(!helper.animal_repo.delete_animal("999").unwrap());

        let animal = helper
            .animal_repo
            .create_animal(&animal_fields("Daisy", Species::Goat, Gender::Female))
            .unwrap();
        assert!(helper.animal_repo.delete_animal(&animal.id).unwrap());
        assert!(helper.animal_repo.get_animal(&animal.id).unwrap().is_none());
    }

    #[test]
    fn test_records_survive_reopening_the_store() {
        let helper = TestHelper::new().unwrap();
        let animal = helper
            .animal_repo
            .create_animal(&animal_fields("Daisy", Species::Goat, Gender::Female))
            .unwrap();

        // A fresh repository over the same directory sees the same data.
        let reopened =
            AnimalRepository::new(JsonConnection::new(helper.connection.base_directory()).unwrap());
        let found = reopened.get_animal(&animal.id).unwrap();
        assert_eq!(found, Some(animal));
    }
}
