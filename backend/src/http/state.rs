//! Application state for the HTTP server.

use std::sync::Arc;

use crate::resolver::NameResolver;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Resolver used by `/resolve`
    pub resolver: Arc<dyn NameResolver>,
}

impl AppState {
    /// Create a new application state with the given resolver.
    pub fn new(resolver: Arc<dyn NameResolver>) -> Self {
        Self { resolver }
    }
}
