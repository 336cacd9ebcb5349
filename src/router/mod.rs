//! Router configuration.
//!
//! The /api subtree requires a bearer token; item-scoped routes additionally
//! run behind the ownership gate.

use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::get,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::app_state::AppState;
use crate::auth;
use crate::handlers::{health, list_items};
use crate::middleware::{ownership, request_logger_middleware};
use crate::openapi::ApiDoc;

/// Build the application router.
pub fn build_router(app_state: AppState) -> Router {
    // Item-scoped routes: the ownership gate resolves {id}, authorizes it and
    // attaches the ListItem before the handler runs.
    let item_routes = Router::new()
        .route(
            "/{id}",
            get(list_items::get_list_item)
                .put(list_items::update_list_item)
                .delete(list_items::delete_list_item),
        )
        .route_layer(from_fn_with_state(
            app_state.clone(),
            ownership::require_list_item_owner,
        ));

    let list_item_routes = Router::new()
        .route(
            "/",
            get(list_items::get_list_items).post(list_items::create_list_item),
        )
        .merge(item_routes)
        .layer(from_fn_with_state(
            app_state.clone(),
            auth::middleware::auth_middleware,
        ));

    let timeout = std::time::Duration::from_secs(app_state.config.request_timeout);

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/list-items", list_item_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(from_fn(request_logger_middleware))
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(timeout))
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state)
}
