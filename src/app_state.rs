//! Application state shared across all handlers.

use std::sync::Arc;

use crate::auth::JwtService;
use crate::config::Config;
use crate::db::{BookStore, ListItemStore};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// JWT authentication service
    pub jwt_service: JwtService,
    /// Book collaborator (read-only)
    pub books: Arc<dyn BookStore>,
    /// List-item collaborator
    pub list_items: Arc<dyn ListItemStore>,
}
