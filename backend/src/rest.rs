use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use shared::{
    BirthEventRequest, BirthEventResponse, CreateAnimalRequest, CreateBreedingRecordRequest,
    DeleteResponse, KidEntryRequest, PingResponse, UpdateAnimalRequest,
};
use tracing::info;

use crate::domain::commands::breeding::{BirthEventCommand, KidEntry};
use crate::domain::models::animal::AnimalFields;
use crate::domain::models::breeding::NewBreedingRecord;
use crate::domain::{AnimalService, BreedingService};
use crate::storage::StorageError;

/// Application state containing the AnimalService and BreedingService
#[derive(Clone)]
pub struct AppState {
    pub animal_service: AnimalService,
    pub breeding_service: BreedingService,
}

impl AppState {
    pub fn new(animal_service: AnimalService, breeding_service: BreedingService) -> Self {
        Self {
            animal_service,
            breeding_service,
        }
    }
}

/// Query parameters for the breeding-record list endpoint
#[derive(Deserialize, Debug)]
pub struct BreedingRecordQuery {
    /// Filter to records where this animal is the mother or the father.
    pub animal_id: Option<String>,
}

/// Axum handler for GET /api/ping
pub async fn ping() -> impl IntoResponse {
    let message = std::env::var("PING_MESSAGE").unwrap_or_else(|_| "ping".to_string());
    Json(PingResponse { message })
}

/// Axum handler for GET /api/animals
pub async fn list_animals(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/animals");

    match state.animal_service.list_animals() {
        Ok(animals) => (StatusCode::OK, Json(animals)).into_response(),
        Err(e) => {
            tracing::error!("Error listing animals: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error listing animals").into_response()
        }
    }
}

/// Axum handler for POST /api/animals
pub async fn create_animal(
    State(state): State<AppState>,
    Json(request): Json<CreateAnimalRequest>,
) -> impl IntoResponse {
    info!("POST /api/animals - name: {}", request.name);

    let fields = match animal_fields_from_create(request) {
        Ok(fields) => fields,
        Err(rejection) => return rejection.into_response(),
    };

    match state.animal_service.create_animal(fields) {
        Ok(animal) => (StatusCode::CREATED, Json(animal)).into_response(),
        Err(e) => {
            tracing::error!("Error creating animal: {:?}", e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}

/// Axum handler for GET /api/animals/:id
pub async fn get_animal(
    State(state): State<AppState>,
    Path(animal_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/animals/{}", animal_id);

    match state.animal_service.get_animal(&animal_id) {
        Ok(Some(animal)) => (StatusCode::OK, Json(animal)).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Animal not found").into_response(),
        Err(e) => {
            tracing::error!("Error retrieving animal {}: {:?}", animal_id, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error retrieving animal").into_response()
        }
    }
}

/// Axum handler for PUT /api/animals/:id
pub async fn update_animal(
    State(state): State<AppState>,
    Path(animal_id): Path<String>,
    Json(request): Json<UpdateAnimalRequest>,
) -> impl IntoResponse {
    info!("PUT /api/animals/{}", animal_id);

    let fields = match animal_fields_from_update(request) {
        Ok(fields) => fields,
        Err(rejection) => return rejection.into_response(),
    };

    match state.animal_service.update_animal(&animal_id, fields) {
        Ok(animal) => (StatusCode::OK, Json(animal)).into_response(),
        Err(e) if e.downcast_ref::<StorageError>().is_some() => {
            (StatusCode::NOT_FOUND, "Animal not found").into_response()
        }
        Err(e) => {
            tracing::error!("Error updating animal {}: {:?}", animal_id, e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}

/// Axum handler for DELETE /api/animals/:id
pub async fn delete_animal(
    State(state): State<AppState>,
    Path(animal_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/animals/{}", animal_id);

    match state.animal_service.delete_animal(&animal_id) {
        Ok(true) => (
            StatusCode::OK,
            Json(DeleteResponse {
                message: "Animal deleted successfully".to_string(),
            }),
        )
            .into_response(),
        Ok(false) => (StatusCode::NOT_FOUND, "Animal not found").into_response(),
        Err(e) => {
            tracing::error!("Error deleting animal {}: {:?}", animal_id, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error deleting animal").into_response()
        }
    }
}

/// Axum handler for GET /api/animals/:id/breeding-history
pub async fn breeding_history(
    State(state): State<AppState>,
    Path(animal_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/animals/{}/breeding-history", animal_id);

    match state.breeding_service.breeding_history(&animal_id) {
        Ok(entries) => (StatusCode::OK, Json(entries)).into_response(),
        Err(e) => {
            tracing::error!("Error loading breeding history: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error loading breeding history",
            )
                .into_response()
        }
    }
}

/// Axum handler for GET /api/breeding-records
pub async fn list_breeding_records(
    State(state): State<AppState>,
    Query(query): Query<BreedingRecordQuery>,
) -> impl IntoResponse {
    info!("GET /api/breeding-records - query: {:?}", query);

    match state
        .breeding_service
        .list_breeding_records(query.animal_id.as_deref())
    {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(e) => {
            tracing::error!("Error listing breeding records: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error listing breeding records",
            )
                .into_response()
        }
    }
}

/// Axum handler for POST /api/breeding-records
pub async fn create_breeding_record(
    State(state): State<AppState>,
    Json(request): Json<CreateBreedingRecordRequest>,
) -> impl IntoResponse {
    info!(
        "POST /api/breeding-records - mother: {}",
        request.mother_id
    );

    let fields = match new_breeding_record_from_request(request) {
        Ok(fields) => fields,
        Err(rejection) => return rejection.into_response(),
    };

    match state.breeding_service.create_breeding_record(fields) {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(e) => {
            tracing::error!("Error creating breeding record: {:?}", e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}

/// Axum handler for POST /api/birth-events
pub async fn record_birth_event(
    State(state): State<AppState>,
    Json(request): Json<BirthEventRequest>,
) -> impl IntoResponse {
    info!("POST /api/birth-events - mother: {}", request.mother_id);

    let command = match birth_event_command(request) {
        Ok(command) => command,
        Err(rejection) => return rejection.into_response(),
    };

    match state.breeding_service.record_birth_event(command) {
        Ok(outcome) => {
            let response = BirthEventResponse {
                breeding_record_id: outcome.breeding_record.id.clone(),
                kids_recorded: outcome.breeding_record.total_kids,
                animals_created: outcome.new_animal_ids.len() as u32,
                message: outcome.summary(),
                warnings: outcome.failures.iter().map(|f| f.to_string()).collect(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) if e.is_validation() => (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
        Err(e) => {
            tracing::error!("Error recording birth event: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, (StatusCode, String)> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| (StatusCode::BAD_REQUEST, format!("Invalid date: {}", value)))
}

fn parse_optional_date(value: Option<&str>) -> Result<Option<NaiveDate>, (StatusCode, String)> {
    value.map(parse_date).transpose()
}

fn animal_fields_from_create(
    request: CreateAnimalRequest,
) -> Result<AnimalFields, (StatusCode, String)> {
    Ok(AnimalFields {
        date_of_birth: parse_date(&request.date_of_birth)?,
        name: request.name,
        species: request.species,
        breed: request.breed,
        gender: request.gender,
        current_weight: request.current_weight,
        markings: request.markings,
        status: request.status.unwrap_or_default(),
        mother_id: request.mother_id,
        father_id: request.father_id,
        breeding_record_id: request.breeding_record_id,
        offspring: Vec::new(),
        insured: request.insured.unwrap_or(false),
        notes: request.notes,
    })
}

fn animal_fields_from_update(
    request: UpdateAnimalRequest,
) -> Result<AnimalFields, (StatusCode, String)> {
    Ok(AnimalFields {
        date_of_birth: parse_date(&request.date_of_birth)?,
        name: request.name,
        species: request.species,
        breed: request.breed,
        gender: request.gender,
        current_weight: request.current_weight,
        markings: request.markings,
        status: request.status,
        mother_id: request.mother_id,
        father_id: request.father_id,
        breeding_record_id: request.breeding_record_id,
        offspring: request.offspring,
        insured: request.insured,
        notes: request.notes,
    })
}

fn new_breeding_record_from_request(
    request: CreateBreedingRecordRequest,
) -> Result<NewBreedingRecord, (StatusCode, String)> {
    Ok(NewBreedingRecord {
        breeding_date: parse_optional_date(request.breeding_date.as_deref())?,
        expected_delivery_date: parse_optional_date(request.expected_delivery_date.as_deref())?,
        actual_delivery_date: parse_date(&request.actual_delivery_date)?,
        mother_id: request.mother_id,
        father_id: request.father_id,
        total_kids: request.total_kids,
        male_kids: request.male_kids,
        female_kids: request.female_kids,
        breeding_method: request.breeding_method,
        veterinarian_name: request.veterinarian_name,
        complications: request.complications,
        notes: request.notes,
        kid_details: request.kid_details,
    })
}

fn birth_event_command(
    request: BirthEventRequest,
) -> Result<BirthEventCommand, (StatusCode, String)> {
    Ok(BirthEventCommand {
        breeding_date: parse_optional_date(request.breeding_date.as_deref())?,
        actual_delivery_date: parse_optional_date(request.actual_delivery_date.as_deref())?,
        mother_id: request.mother_id,
        father_id: request.father_id,
        breeding_method: request.breeding_method.unwrap_or_default(),
        veterinarian_name: request.veterinarian_name,
        complications: request.complications,
        notes: request.notes,
        kids: request.kids.into_iter().map(kid_entry).collect(),
    })
}

fn kid_entry(request: KidEntryRequest) -> KidEntry {
    KidEntry {
        name: request.name,
        gender: request.gender.unwrap_or_default(),
        // Free-form field: anything that doesn't parse as a number means no
        // recorded weight.
        weight_kg: request
            .weight
            .as_deref()
            .and_then(|w| w.trim().parse::<f64>().ok()),
        status: request.status,
        markings: request.markings,
        notes: request.notes,
        create_animal_record: request.create_animal_record,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::json::{AnimalRepository, BreedingRepository, JsonConnection};
    use shared::{Gender, KidStatus, Species};
    use std::sync::Arc;
    use tempfile::TempDir;

    /// Helper to create test handler state over a temporary data directory
    fn setup_test_state() -> (AppState, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let connection = JsonConnection::new(temp_dir.path()).expect("Failed to open data dir");
        let animal_repository = Arc::new(AnimalRepository::new(connection.clone()));
        let breeding_repository = Arc::new(BreedingRepository::new(connection));
        let animal_service = AnimalService::new(animal_repository.clone());
        let breeding_service = BreedingService::new(animal_repository, breeding_repository);
        (AppState::new(animal_service, breeding_service), temp_dir)
    }

    fn create_animal_request(name: &str) -> CreateAnimalRequest {
        CreateAnimalRequest {
            name: name.to_string(),
            species: Species::Goat,
            breed: "Boer".to_string(),
            gender: Gender::Female,
            date_of_birth: "2022-03-10".to_string(),
            current_weight: None,
            markings: None,
            status: None,
            mother_id: None,
            father_id: None,
            breeding_record_id: None,
            insured: None,
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_create_animal_handler() {
        let (state, _temp_dir) = setup_test_state();

        let _response =
            create_animal(State(state.clone()), Json(create_animal_request("Daisy"))).await;

        let animals = state.animal_service.list_animals().unwrap();
        assert_eq!(animals.len(), 1);
        assert_eq!(animals[0].name, "Daisy");
    }

    #[tokio::test]
    async fn test_birth_event_handler_end_to_end() {
        let (state, _temp_dir) = setup_test_state();

        let _response =
            create_animal(State(state.clone()), Json(create_animal_request("Daisy"))).await;
        let mother = state.animal_service.list_animals().unwrap()[0].clone();

        let request = BirthEventRequest {
            mother_id: mother.id.clone(),
            father_id: Some("unknown".to_string()),
            breeding_date: None,
            actual_delivery_date: Some("2024-06-01".to_string()),
            breeding_method: None,
            veterinarian_name: None,
            complications: None,
            notes: None,
            kids: vec![KidEntryRequest {
                name: Some("A".to_string()),
                gender: Some(Gender::Female),
                weight: Some("2.4".to_string()),
                status: KidStatus::Alive,
                markings: None,
                notes: None,
                create_animal_record: true,
            }],
        };

        let _response = record_birth_event(State(state.clone()), Json(request)).await;

        let records = state.breeding_service.list_breeding_records(None).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].father_id, None);

        let animals = state.animal_service.list_animals().unwrap();
        assert_eq!(animals.len(), 2);
        let kid = animals.iter().find(|a| a.name == "A").unwrap();
        assert_eq!(kid.current_weight, Some(2.4));
    }

    #[tokio::test]
    async fn test_list_breeding_records_filter_matches_father_too() {
        let (state, _temp_dir) = setup_test_state();

        let _ = create_animal(State(state.clone()), Json(create_animal_request("Daisy"))).await;
        let _ = create_animal(State(state.clone()), Json(create_animal_request("Bruno"))).await;
        let animals = state.animal_service.list_animals().unwrap();
        let (mother, father) = (animals[1].clone(), animals[0].clone());

        let request = BirthEventRequest {
            mother_id: mother.id.clone(),
            father_id: Some(father.id.clone()),
            breeding_date: None,
            actual_delivery_date: Some("2024-06-01".to_string()),
            breeding_method: None,
            veterinarian_name: None,
            complications: None,
            notes: None,
            kids: vec![KidEntryRequest {
                name: None,
                gender: None,
                weight: None,
                status: KidStatus::Stillborn,
                markings: None,
                notes: None,
                create_animal_record: false,
            }],
        };
        let _ = record_birth_event(State(state.clone()), Json(request)).await;

        let query = BreedingRecordQuery {
            animal_id: Some(father.id.clone()),
        };
        let _response = list_breeding_records(State(state.clone()), Query(query)).await;

        let records = state
            .breeding_service
            .list_breeding_records(Some(&father.id))
            .unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_kid_weight_parsing_is_lenient() {
        let entry = |weight: Option<&str>| KidEntryRequest {
            name: None,
            gender: None,
            weight: weight.map(|w| w.to_string()),
            status: KidStatus::Alive,
            markings: None,
            notes: None,
            create_animal_record: false,
        };

        assert_eq!(kid_entry(entry(Some("2.4"))).weight_kg, Some(2.4));
        assert_eq!(kid_entry(entry(Some(" 3 "))).weight_kg, Some(3.0));
        assert_eq!(kid_entry(entry(Some("abc"))).weight_kg, None);
        assert_eq!(kid_entry(entry(Some(""))).weight_kg, None);
        assert_eq!(kid_entry(entry(None)).weight_kg, None);
    }

    #[test]
    fn test_invalid_date_is_rejected_with_bad_request() {
        let (status, _message) = parse_date("01/06/2024").unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(parse_optional_date(None).unwrap().is_none());
    }
}
