//! Domain layer: models, commands and the services implementing the
//! breeding workflow.

pub mod animal_service;
pub mod breeding_service;
pub mod commands;
pub mod gestation;
pub mod models;

pub use animal_service::AnimalService;
pub use breeding_service::{
    BirthEventError, BirthEventOutcome, BreedingService, ParentRole, PartialFailure,
};
