use serde::{Deserialize, Serialize};

/// A named record pairing a person with a language/tool label.
///
/// `name` is unique across all records; `id` is assigned by the store on
/// insert and never changes afterwards.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reservation {
    pub id: i64,
    pub name: String,
    pub lang: String,
}

/// Create/update input: no id, the store assigns one on insert.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReservationInput {
    pub name: String,
    pub lang: String,
}
