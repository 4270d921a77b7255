//! Mini KV - A minimal in-memory key-value store over HTTP
//!
//! String keys and values held in a concurrent map, served through plain-text
//! GET endpoints. Nothing outlives the process.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::{create_router, AppState};
pub use config::Config;
pub use store::KvStore;
