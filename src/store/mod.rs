//! Store Module
//!
//! Provides the concurrent in-memory map behind the HTTP API.

mod kv;


pub use kv::KvStore;
