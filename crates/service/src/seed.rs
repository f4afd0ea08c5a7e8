use tracing::info;

use models::reservation::ReservationInput;

use crate::errors::ServiceError;
use crate::reservations::repository::ReservationStore;

/// Initial data set inserted on startup.
pub const SEED_RESERVATIONS: &[(&str, &str)] = &[
    ("Tomek", "PLSQL"),
    ("Tomasz", "PLSQL"),
    ("Stanisław", "PLSQL"),
    ("Grzegorz", "C++"),
    ("Rafał", "C++"),
    ("Andrzej", "C++"),
    ("Tom", "C++"),
    ("Marek", "Java"),
    ("Artur", "OracleForms"),
    ("Jędrek", "OracleForms"),
];

/// Insert the fixed demo records, skipping names that already exist.
/// Returns how many records were inserted.
pub async fn seed_reservations(store: &dyn ReservationStore) -> Result<usize, ServiceError> {
    let mut inserted = 0;
    for (name, lang) in SEED_RESERVATIONS {
        if store.find_by_name(name).await?.is_some() {
            continue;
        }
        let input = ReservationInput { name: (*name).into(), lang: (*lang).into() };
        match store.save(None, input).await {
            Ok(_) => inserted += 1,
            // lost a race on the name: same outcome as the skip above
            Err(ServiceError::AlreadyExists(_)) => {}
            Err(e) => return Err(e),
        }
    }
    info!(inserted, "seeded reservations");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reservations::repository::{FileReservationStore, ReservationFilter};
    use common::pagination::Pagination;

    #[tokio::test]
    async fn seeds_ten_records_once() -> Result<(), anyhow::Error> {
        let path = std::env::temp_dir()
            .join(format!("reservations_seed_{}.json", uuid::Uuid::new_v4()));
        let store = FileReservationStore::new(&path).await?;

        let inserted = seed_reservations(store.as_ref()).await?;
        assert_eq!(inserted, SEED_RESERVATIONS.len());

        // re-running skips everything
        let inserted = seed_reservations(store.as_ref()).await?;
        assert_eq!(inserted, 0);

        let all = store
            .find_all(&ReservationFilter::default(), Pagination { page: 0, size: 100 })
            .await?;
        assert_eq!(all.total, SEED_RESERVATIONS.len());

        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn existing_names_are_left_untouched() -> Result<(), anyhow::Error> {
        let path = std::env::temp_dir()
            .join(format!("reservations_seed_{}.json", uuid::Uuid::new_v4()));
        let store = FileReservationStore::new(&path).await?;

        store
            .save(None, ReservationInput { name: "Tomek".into(), lang: "Rust".into() })
            .await?;

        let inserted = seed_reservations(store.as_ref()).await?;
        assert_eq!(inserted, SEED_RESERVATIONS.len() - 1);

        // the pre-existing record keeps its language
        let tomek = store.find_by_name("Tomek").await?.unwrap();
        assert_eq!(tomek.lang, "Rust");

        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }
}
