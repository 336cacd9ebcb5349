//! OpenAPI document served at /docs.

use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

use crate::handlers::health::HealthStatus;
use crate::handlers::response::{DeleteResponse, ListItemResponse, ListItemsResponse};
use crate::handlers::{health, list_items};
use crate::models::{Book, CreateListItemRequest, ListItem, ListItemWithBook, UpdateListItem};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        list_items::get_list_items,
        list_items::create_list_item,
        list_items::get_list_item,
        list_items::update_list_item,
        list_items::delete_list_item,
    ),
    components(schemas(
        HealthStatus,
        Book,
        ListItem,
        ListItemWithBook,
        CreateListItemRequest,
        UpdateListItem,
        ListItemResponse,
        ListItemsResponse,
        DeleteResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "list-items", description = "Per-user reading list"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
