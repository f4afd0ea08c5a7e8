use serde::{Deserialize, Serialize};

/// Response payload for the greeting endpoints.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Greeting {
    pub message: String,
}

impl Greeting {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
