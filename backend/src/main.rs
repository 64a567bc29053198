use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::{HeaderValue, Method},
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, Level};

use farm_tracker_backend::domain::{AnimalService, BreedingService};
use farm_tracker_backend::rest::{self, AppState};
use farm_tracker_backend::storage::json::{AnimalRepository, BreedingRepository, JsonConnection};
use farm_tracker_backend::storage::{AnimalStorage, BreedingStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let data_dir = std::env::var("FARM_DATA_DIR").unwrap_or_else(|_| "data".to_string());
    info!("Using data directory: {}", data_dir);
    let connection = JsonConnection::new(&data_dir)?;

    let animal_repository: Arc<dyn AnimalStorage> =
        Arc::new(AnimalRepository::new(connection.clone()));
    let breeding_repository: Arc<dyn BreedingStorage> =
        Arc::new(BreedingRepository::new(connection));

    let animal_service = AnimalService::new(animal_repository.clone());
    let breeding_service = BreedingService::new(animal_repository, breeding_repository);
    let state = AppState::new(animal_service, breeding_service);

    // CORS setup to allow the frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin("http://localhost:8080".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/ping", get(rest::ping))
        .route("/animals", get(rest::list_animals).post(rest::create_animal))
        .route(
            "/animals/:id",
            get(rest::get_animal)
                .put(rest::update_animal)
                .delete(rest::delete_animal),
        )
        .route("/animals/:id/breeding-history", get(rest::breeding_history))
        .route(
            "/breeding-records",
            get(rest::list_breeding_records).post(rest::create_breeding_record),
        )
        .route("/birth-events", post(rest::record_birth_event));

    let app = Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
