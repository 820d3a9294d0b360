//! Infrastructure layer - database and external services.

mod db;

pub use db::Database;
