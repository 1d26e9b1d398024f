pub mod connection;
pub mod error;
pub mod repositories;
pub mod store;

pub use connection::pool::{PoolSettings, connect, migrate};
pub use error::{Result, StoreError};
pub use repositories::user_repository::UserRepository;
pub use store::UserStore;

use sqlx::migrate::Migrator;

/// Embedded schema migrations for the user store
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");
