use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::greeting::Greetings;
use service::reservations::ReservationsService;

pub mod greetings;
pub mod reservations;

/// Shared state for the reservation API.
#[derive(Clone)]
pub struct ServerState {
    pub reservations: Arc<dyn ReservationsService>,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the reservation application router.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/custom-reservations",
            get(reservations::list).post(reservations::create),
        )
        .route(
            "/custom-reservations/:id",
            get(reservations::get)
                .put(reservations::update)
                .delete(reservations::delete),
        )
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

/// Build the greeting application router.
pub fn build_greeting_router(greetings: Arc<Greetings>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/hello", get(greetings::hello))
        .route("/hello2", get(greetings::hello2))
        .with_state(greetings)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
