//! Trip validation, repository trait, and service.

pub mod repository;
pub mod service;
pub mod validate;

pub use repository::TripRepository;
pub use service::TripService;
pub use validate::validate_trip;
