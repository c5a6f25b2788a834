//! Shared database connection and schema infrastructure.
//! Used by the enum-column integration tests and any future binaries.

pub mod config;
pub mod error;
pub mod infra;

pub use config::db::DbProfile;
pub use error::DbInfraError;
pub use infra::db::core::{connect, sanitize_db_url};
pub use infra::db::schema::reset_table;
