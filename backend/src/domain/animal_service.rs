//! Animal registry service: validation plus delegation to the animal store.

use anyhow::{anyhow, Result};
use log::info;
use std::sync::Arc;

use crate::domain::models::animal::{Animal, AnimalFields};
use crate::storage::AnimalStorage;

#[derive(Clone)]
pub struct AnimalService {
    animal_repository: Arc<dyn AnimalStorage>,
}

impl AnimalService {
    pub fn new(animal_repository: Arc<dyn AnimalStorage>) -> Self {
        Self { animal_repository }
    }

    pub fn create_animal(&self, fields: AnimalFields) -> Result<Animal> {
        if fields.name.trim().is_empty() {
            return Err(anyhow!("Animal name must not be empty"));
        }
        let animal = self.animal_repository.create_animal(&fields)?;
        info!("Registered animal {} ({})", animal.id, animal.name);
        Ok(animal)
    }

    pub fn update_animal(&self, animal_id: &str, fields: AnimalFields) -> Result<Animal> {
        if fields.name.trim().is_empty() {
            return Err(anyhow!("Animal name must not be empty"));
        }
        self.animal_repository.update_animal(animal_id, &fields)
    }

    pub fn get_animal(&self, animal_id: &str) -> Result<Option<Animal>> {
        self.animal_repository.get_animal(animal_id)
    }

    pub fn list_animals(&self) -> Result<Vec<Animal>> {
        self.animal_repository.list_animals()
    }

    pub fn delete_animal(&self, animal_id: &str) -> Result<bool> {
        self.animal_repository.delete_animal(animal_id)
    }
}
