//! Shared application state for all routes.

use crate::repository::Store;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Injected dataset access; handlers see only the trait.
    pub store: Arc<dyn Store>,
}

impl AppState {
    pub fn new<S: Store + 'static>(store: S) -> Self {
        AppState { store: Arc::new(store) }
    }
}
