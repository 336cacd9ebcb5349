//! Application startup and initialization logic.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::app_state::AppState;
use crate::auth::JwtService;
use crate::config::Config;
use crate::db::{InMemoryBookStore, InMemoryListItemStore};

/// Initialize application services and create the AppState.
pub fn initialize_app(config: &Config) -> Result<AppState> {
    let jwt_service = JwtService::new(&config.jwt_secret, config.jwt_expiration_hours)?;
    info!("JWT service initialized");

    let books = InMemoryBookStore::with_seed();
    info!("Book store initialized ({} seeded books)", books.len());

    let list_items = InMemoryListItemStore::new();
    info!("List-item store initialized");

    if config.expose_stack_traces {
        info!("Stack traces are exposed on 500 responses (non-production mode)");
    }

    Ok(AppState {
        config: config.clone(),
        jwt_service,
        books: Arc::new(books),
        list_items: Arc::new(list_items),
    })
}
