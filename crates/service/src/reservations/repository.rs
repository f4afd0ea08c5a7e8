use std::{collections::HashMap, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::{fs, sync::RwLock};

use common::pagination::{Page, Pagination};
use models::reservation::{Reservation, ReservationInput};

use crate::errors::ServiceError;

/// Exact-equality filters for reservation queries. `None` leaves a field
/// unconstrained; present filters are ANDed.
#[derive(Clone, Debug, Default)]
pub struct ReservationFilter {
    pub name: Option<String>,
    pub lang: Option<String>,
}

impl ReservationFilter {
    pub fn matches(&self, r: &Reservation) -> bool {
        self.name.as_deref().map_or(true, |n| r.name == n)
            && self.lang.as_deref().map_or(true, |l| r.lang == l)
    }
}

/// Keyed reservation storage with a unique secondary lookup by name.
#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// Filtered page of records; `total` counts matches before slicing.
    async fn find_all(
        &self,
        filter: &ReservationFilter,
        page: Pagination,
    ) -> Result<Page<Reservation>, ServiceError>;

    async fn find_one(&self, id: i64) -> Result<Option<Reservation>, ServiceError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Reservation>, ServiceError>;

    /// Insert (assigning the next id) when `id` is `None`, otherwise
    /// overwrite the record with that id. The unique-name check and the
    /// write happen under one lock, so two writers racing on the same name
    /// cannot both succeed.
    async fn save(
        &self,
        id: Option<i64>,
        input: ReservationInput,
    ) -> Result<Reservation, ServiceError>;

    /// Idempotent removal; returns whether the record existed.
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct StoreState {
    next_id: i64,
    records: HashMap<i64, Reservation>,
}

/// JSON-file-backed reservation store.
///
/// Holds the full record set in memory behind an `RwLock` and rewrites the
/// backing file after every mutation while the write lock is still held; a
/// failed write rolls the in-memory state back. Ids come from a monotonic
/// counter persisted with the records, so they are never reused. Intended
/// for demo-sized data sets where a database is overkill.
pub struct FileReservationStore {
    inner: RwLock<StoreState>,
    file_path: PathBuf,
}

impl FileReservationStore {
    /// Load the store from `path`, creating the file with an empty state if
    /// it does not exist yet.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }

        let state = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| ServiceError::Storage(format!("corrupt store file: {e}")))?,
            Err(_) => {
                let empty = StoreState { next_id: 1, records: HashMap::new() };
                write_file(&file_path, &empty).await?;
                empty
            }
        };

        Ok(Arc::new(Self { inner: RwLock::new(state), file_path }))
    }

    async fn persist(&self, state: &StoreState) -> Result<(), ServiceError> {
        write_file(&self.file_path, state).await
    }
}

async fn write_file(path: &PathBuf, state: &StoreState) -> Result<(), ServiceError> {
    let data = serde_json::to_vec(state).map_err(|e| ServiceError::Storage(e.to_string()))?;
    fs::write(path, data).await.map_err(|e| ServiceError::Storage(e.to_string()))
}

#[async_trait]
impl ReservationStore for FileReservationStore {
    /// Total and slice come from the same lock acquisition, so a page and
    /// its `total` always describe one consistent snapshot.
    async fn find_all(
        &self,
        filter: &ReservationFilter,
        page: Pagination,
    ) -> Result<Page<Reservation>, ServiceError> {
        let state = self.inner.read().await;
        let mut matched: Vec<&Reservation> =
            state.records.values().filter(|r| filter.matches(r)).collect();
        matched.sort_by_key(|r| r.id);
        let total = matched.len();
        let (offset, size) = page.normalize();
        let items = matched.into_iter().skip(offset).take(size).cloned().collect();
        Ok(Page::new(items, total, page))
    }

    async fn find_one(&self, id: i64) -> Result<Option<Reservation>, ServiceError> {
        let state = self.inner.read().await;
        Ok(state.records.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Reservation>, ServiceError> {
        let state = self.inner.read().await;
        Ok(state.records.values().find(|r| r.name == name).cloned())
    }

    async fn save(
        &self,
        id: Option<i64>,
        input: ReservationInput,
    ) -> Result<Reservation, ServiceError> {
        let mut state = self.inner.write().await;

        if let Some(existing) = state.records.values().find(|r| r.name == input.name) {
            if Some(existing.id) != id {
                return Err(ServiceError::AlreadyExists(input.name));
            }
        }

        let record = match id {
            None => {
                let new_id = state.next_id;
                state.next_id += 1;
                Reservation { id: new_id, name: input.name, lang: input.lang }
            }
            Some(id) => {
                if !state.records.contains_key(&id) {
                    return Err(ServiceError::NotFound(id));
                }
                Reservation { id, name: input.name, lang: input.lang }
            }
        };

        let prior = state.records.insert(record.id, record.clone());
        if let Err(e) = self.persist(&state).await {
            match prior {
                Some(prev) => state.records.insert(record.id, prev),
                None => state.records.remove(&record.id),
            };
            return Err(e);
        }
        Ok(record)
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let mut state = self.inner.write().await;
        let Some(prev) = state.records.remove(&id) else {
            return Ok(false);
        };
        if let Err(e) = self.persist(&state).await {
            state.records.insert(id, prev);
            return Err(e);
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, lang: &str) -> ReservationInput {
        ReservationInput { name: name.into(), lang: lang.into() }
    }

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("reservations_store_{}.json", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn store_crud_persists_across_reload() -> Result<(), anyhow::Error> {
        let path = temp_path();
        let store = FileReservationStore::new(&path).await?;

        let tomek = store.save(None, input("Tomek", "PLSQL")).await?;
        let grzegorz = store.save(None, input("Grzegorz", "C++")).await?;
        assert_eq!(tomek.id, 1);
        assert_eq!(grzegorz.id, 2);

        assert_eq!(store.find_one(tomek.id).await?.unwrap().name, "Tomek");
        assert_eq!(store.find_by_name("Grzegorz").await?.unwrap().lang, "C++");
        assert!(store.find_by_name("Nobody").await?.is_none());

        assert!(store.delete(grzegorz.id).await?);
        assert!(!store.delete(grzegorz.id).await?);

        // reload from disk: surviving record and the id counter persist
        drop(store);
        let reloaded = FileReservationStore::new(&path).await?;
        assert_eq!(reloaded.find_one(tomek.id).await?.unwrap().name, "Tomek");
        let next = reloaded.save(None, input("Marek", "Java")).await?;
        assert_eq!(next.id, 3);

        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn save_enforces_unique_name() -> Result<(), anyhow::Error> {
        let path = temp_path();
        let store = FileReservationStore::new(&path).await?;

        let tomek = store.save(None, input("Tomek", "PLSQL")).await?;
        let tom = store.save(None, input("Tom", "C++")).await?;

        // duplicate insert
        let err = store.save(None, input("Tomek", "Java")).await.unwrap_err();
        assert!(matches!(err, ServiceError::AlreadyExists(ref n) if n == "Tomek"));

        // overwrite taking another record's name
        let err = store.save(Some(tom.id), input("Tomek", "C++")).await.unwrap_err();
        assert!(matches!(err, ServiceError::AlreadyExists(_)));

        // overwrite keeping its own name is fine
        let updated = store.save(Some(tomek.id), input("Tomek", "Rust")).await?;
        assert_eq!(updated.lang, "Rust");

        // overwriting an id that was never assigned
        let err = store.save(Some(999), input("Nobody", "None")).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(999)));

        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn find_all_filters_and_paginates() -> Result<(), anyhow::Error> {
        let path = temp_path();
        let store = FileReservationStore::new(&path).await?;
        for (name, lang) in
            [("Tomek", "PLSQL"), ("Tomasz", "PLSQL"), ("Grzegorz", "C++"), ("Rafał", "C++"), ("Marek", "Java")]
        {
            store.save(None, input(name, lang)).await?;
        }

        // unfiltered, page-sliced, total counts everything
        let page = store.find_all(&ReservationFilter::default(), Pagination { page: 0, size: 2 }).await?;
        assert_eq!(page.total, 5);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].name, "Tomek");

        let last = store.find_all(&ReservationFilter::default(), Pagination { page: 2, size: 2 }).await?;
        assert_eq!(last.items.len(), 1);
        assert_eq!(last.items[0].name, "Marek");

        // lang filter
        let cpp = store
            .find_all(
                &ReservationFilter { name: None, lang: Some("C++".into()) },
                Pagination::default(),
            )
            .await?;
        assert_eq!(cpp.total, 2);
        assert!(cpp.items.iter().all(|r| r.lang == "C++"));

        // both filters are ANDed
        let both = store
            .find_all(
                &ReservationFilter { name: Some("Tomek".into()), lang: Some("C++".into()) },
                Pagination::default(),
            )
            .await?;
        assert_eq!(both.total, 0);

        // exact match only, no substring matching
        let exact = store
            .find_all(
                &ReservationFilter { name: Some("Tom".into()), lang: None },
                Pagination::default(),
            )
            .await?;
        assert_eq!(exact.total, 0);

        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }
}
