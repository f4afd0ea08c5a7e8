pub mod repository;
pub mod service;

pub use repository::{FileReservationStore, ReservationFilter, ReservationStore};
pub use service::{Instrumented, Reservations, ReservationsService};
