//! Request models for the key-value server API
//!
//! Every input arrives as a path parameter; this module defines the DTOs the
//! `Path` extractor deserializes into.

pub mod params;

pub use params::{KeyParams, SetParams};
