use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::{error, info};

use common::pagination::{Page, Pagination};
use models::reservation::{Reservation, ReservationInput};
use service::errors::ServiceError;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub name: Option<String>,
    pub lang: Option<String>,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl ListQuery {
    fn pagination(&self) -> Pagination {
        let d = Pagination::default();
        Pagination { page: self.page.unwrap_or(d.page), size: self.size.unwrap_or(d.size) }
    }
}

pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Page<Reservation>>, JsonApiError> {
    let pagination = q.pagination();
    let page = state.reservations.find_all(q.name, q.lang, pagination).await?;
    info!(count = page.items.len(), total = page.total, "list reservations");
    Ok(Json(page))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<ReservationInput>,
) -> Result<(StatusCode, Json<Reservation>), JsonApiError> {
    match state.reservations.create(input).await {
        Ok(r) => {
            info!(id = r.id, name = %r.name, "created reservation");
            Ok((StatusCode::CREATED, Json(r)))
        }
        Err(e @ ServiceError::AlreadyExists(_)) => {
            Err(JsonApiError::new(StatusCode::CONFLICT, e.to_string()))
        }
        Err(e) => {
            error!(err = %e, "create reservation failed");
            Err(JsonApiError::from(e))
        }
    }
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<Reservation>, StatusCode> {
    match state.reservations.find_one(id).await {
        Ok(Some(r)) => Ok(Json(r)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            error!(err = %e, "get reservation failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(input): Json<ReservationInput>,
) -> Result<Json<Reservation>, JsonApiError> {
    match state.reservations.update(id, input).await {
        Ok(r) => {
            info!(id = r.id, "updated reservation");
            Ok(Json(r))
        }
        Err(e @ ServiceError::NotFound(_)) => {
            Err(JsonApiError::new(StatusCode::NOT_FOUND, e.to_string()))
        }
        Err(e @ ServiceError::AlreadyExists(_)) => {
            Err(JsonApiError::new(StatusCode::CONFLICT, e.to_string()))
        }
        Err(e) => {
            error!(err = %e, "update reservation failed");
            Err(JsonApiError::from(e))
        }
    }
}

pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> StatusCode {
    match state.reservations.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(e) => {
            error!(err = %e, "delete reservation failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
