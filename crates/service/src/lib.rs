//! Business layer for the reservation and greeting services.
//! - Enforces the unique-name invariant on top of the storage trait.
//! - Keeps cross-cutting logging/timing in a decorator, not in the handlers.

pub mod errors;
pub mod greeting;
pub mod reservations;
pub mod seed;
