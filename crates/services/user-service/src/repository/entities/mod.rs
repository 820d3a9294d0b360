//! SeaORM entities owned by this service.

pub mod user;
