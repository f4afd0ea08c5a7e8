use serde::Serialize;

/// Liveness payload returned by the `/health` endpoints.
#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}
