use std::{fmt::Debug, sync::Arc, time::Instant};

use async_trait::async_trait;
use tracing::{info, warn};

use common::pagination::{Page, Pagination};
use models::reservation::{Reservation, ReservationInput};

use crate::errors::ServiceError;
use crate::reservations::repository::{ReservationFilter, ReservationStore};

/// Business contract for reservation operations.
#[async_trait]
pub trait ReservationsService: Send + Sync {
    async fn find_all(
        &self,
        name: Option<String>,
        lang: Option<String>,
        page: Pagination,
    ) -> Result<Page<Reservation>, ServiceError>;

    async fn find_one(&self, id: i64) -> Result<Option<Reservation>, ServiceError>;

    async fn create(&self, input: ReservationInput) -> Result<Reservation, ServiceError>;

    async fn update(&self, id: i64, input: ReservationInput)
        -> Result<Reservation, ServiceError>;

    async fn delete(&self, id: i64) -> Result<(), ServiceError>;
}

/// Default implementation enforcing the unique-name invariant on top of the
/// storage trait.
pub struct Reservations {
    store: Arc<dyn ReservationStore>,
}

impl Reservations {
    pub fn new(store: Arc<dyn ReservationStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ReservationsService for Reservations {
    async fn find_all(
        &self,
        name: Option<String>,
        lang: Option<String>,
        page: Pagination,
    ) -> Result<Page<Reservation>, ServiceError> {
        let filter = ReservationFilter { name, lang };
        self.store.find_all(&filter, page).await
    }

    async fn find_one(&self, id: i64) -> Result<Option<Reservation>, ServiceError> {
        self.store.find_one(id).await
    }

    async fn create(&self, input: ReservationInput) -> Result<Reservation, ServiceError> {
        if let Some(existing) = self.store.find_by_name(&input.name).await? {
            return Err(ServiceError::AlreadyExists(existing.name));
        }
        // save re-checks the name under the store lock, closing the race window
        self.store.save(None, input).await
    }

    async fn update(
        &self,
        id: i64,
        input: ReservationInput,
    ) -> Result<Reservation, ServiceError> {
        if self.store.find_one(id).await?.is_none() {
            return Err(ServiceError::NotFound(id));
        }
        // a record may keep its own name; only a different holder conflicts
        if let Some(other) = self.store.find_by_name(&input.name).await? {
            if other.id != id {
                return Err(ServiceError::AlreadyExists(other.name));
            }
        }
        self.store.save(Some(id), input).await
    }

    async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        self.store.delete(id).await?;
        Ok(())
    }
}

/// Logging/timing decoration around any `ReservationsService`.
///
/// Logs the method name before each call and the outcome plus wall-clock
/// elapsed time after it. Return values pass through untouched, errors are
/// never swallowed, and there is no shared mutable state.
pub struct Instrumented<S> {
    inner: S,
}

impl<S: ReservationsService> Instrumented<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

fn finish<T: Debug>(method: &'static str, started: Instant, result: &Result<T, ServiceError>) {
    let elapsed_ms = started.elapsed().as_millis() as u64;
    match result {
        Ok(value) => info!(method, elapsed_ms, returned = ?value, "service call finished"),
        Err(e) => warn!(method, elapsed_ms, error = %e, "service call failed"),
    }
}

#[async_trait]
impl<S: ReservationsService> ReservationsService for Instrumented<S> {
    async fn find_all(
        &self,
        name: Option<String>,
        lang: Option<String>,
        page: Pagination,
    ) -> Result<Page<Reservation>, ServiceError> {
        info!(method = "find_all", "service call");
        let started = Instant::now();
        let result = self.inner.find_all(name, lang, page).await;
        finish("find_all", started, &result);
        result
    }

    async fn find_one(&self, id: i64) -> Result<Option<Reservation>, ServiceError> {
        info!(method = "find_one", "service call");
        let started = Instant::now();
        let result = self.inner.find_one(id).await;
        finish("find_one", started, &result);
        result
    }

    async fn create(&self, input: ReservationInput) -> Result<Reservation, ServiceError> {
        info!(method = "create", "service call");
        let started = Instant::now();
        let result = self.inner.create(input).await;
        finish("create", started, &result);
        result
    }

    async fn update(
        &self,
        id: i64,
        input: ReservationInput,
    ) -> Result<Reservation, ServiceError> {
        info!(method = "update", "service call");
        let started = Instant::now();
        let result = self.inner.update(id, input).await;
        finish("update", started, &result);
        result
    }

    async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        info!(method = "delete", "service call");
        let started = Instant::now();
        let result = self.inner.delete(id).await;
        finish("delete", started, &result);
        result
    }
}
