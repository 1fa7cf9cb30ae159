//! SQLite storage adapters built on sqlx.

pub mod pool;
pub mod trip;
