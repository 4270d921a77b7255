//! API Handlers
//!
//! HTTP request handlers for each key-value server endpoint. Every handler
//! answers with a plain-text body.

use std::sync::Arc;

use axum::extract::{rejection::PathRejection, Path, State};
use tracing::{debug, warn};

use crate::error::{KvError, Result};
use crate::models::{KeyParams, SetParams};
use crate::store::KvStore;

/// Body returned by successful writes and the health check
pub const OK_BODY: &str = "ok";

/// Application state shared across all handlers.
///
/// The store synchronizes internally, so the state only needs an `Arc`.
#[derive(Clone, Default)]
pub struct AppState {
    /// Shared key-value store
    pub store: Arc<KvStore>,
}

impl AppState {
    /// Creates a new AppState around the given store.
    pub fn new(store: KvStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Creates a new AppState sharing an existing store.
    pub fn with_shared(store: Arc<KvStore>) -> Self {
        Self { store }
    }
}

/// Unwraps extracted path parameters.
///
/// Only a route without the segments yields empty defaults; any other
/// rejection (such as a segment that is not valid UTF-8 once decoded) is
/// passed through with the extractor's own status and message.
fn path_params<T: Default>(params: std::result::Result<Path<T>, PathRejection>) -> Result<T> {
    match params {
        Ok(Path(params)) => Ok(params),
        Err(PathRejection::MissingPathParams(_)) => Ok(T::default()),
        Err(rejection) => {
            warn!("path rejected: {}", rejection.body_text());
            Err(KvError::from(rejection))
        }
    }
}

/// Handler for GET /set/:key/:value
///
/// Inserts the pair unless the key already exists, in which case the stored
/// value is kept. Responds `ok` either way.
pub async fn set_handler(
    State(state): State<AppState>,
    params: std::result::Result<Path<SetParams>, PathRejection>,
) -> Result<&'static str> {
    let params = path_params(params)?;
    let (key, value) = params.require().inspect_err(|err| warn!("set rejected: {err}"))?;

    if !state.store.set(key.clone(), value) {
        debug!(key = %key, "set: key already present, keeping existing value");
    }

    Ok(OK_BODY)
}

/// Handler for GET /get/:key
///
/// Returns the stored value as the response body.
pub async fn get_handler(
    State(state): State<AppState>,
    params: std::result::Result<Path<KeyParams>, PathRejection>,
) -> Result<String> {
    let params = path_params(params)?;
    let key = params.require().inspect_err(|err| warn!("get rejected: {err}"))?;

    state.store.get(&key).ok_or_else(|| {
        debug!(key = %key, "get: miss");
        KvError::ValueNotFound
    })
}

/// Handler for GET /delete/:key
///
/// Deleting an absent key still responds `ok`.
pub async fn delete_handler(
    State(state): State<AppState>,
    params: std::result::Result<Path<KeyParams>, PathRejection>,
) -> Result<&'static str> {
    let params = path_params(params)?;
    let key = params.require().inspect_err(|err| warn!("delete rejected: {err}"))?;

    if !state.store.delete(&key) {
        debug!(key = %key, "delete: key was not present");
    }

    Ok(OK_BODY)
}

/// Handler for GET /health
pub async fn health_handler() -> &'static str {
    OK_BODY
}
