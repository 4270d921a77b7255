//! API Module
//!
//! HTTP handlers and routing for the key-value server.
//!
//! # Endpoints
//! - `GET /health` - Health check endpoint
//! - `GET /set/:key/:value` - Store a key-value pair (insert-if-absent)
//! - `GET /get/:key` - Retrieve a value by key
//! - `GET /delete/:key` - Delete a key

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
