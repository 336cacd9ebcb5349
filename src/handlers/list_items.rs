//! List-item handlers.
//!
//! Item-scoped routes run behind the ownership gate
//! (`middleware::ownership`), which resolves and authorizes the `ListItem`
//! and hands it to the handler as a request extension.

use axum::{
    Extension, Json,
    extract::State,
};
use tracing::debug;

use crate::AppState;
use crate::auth::AuthenticatedUser;
use crate::error::{ApiError, Result};
use crate::handlers::response::{DeleteResponse, ListItemResponse, ListItemsResponse};
use crate::models::{CreateListItemRequest, ListItem, ListItemWithBook, NewListItem, UpdateListItem};

/// Get one list item with its book merged in.
/// GET /api/list-items/{id}
#[utoipa::path(
    get,
    path = "/api/list-items/{id}",
    tag = "list-items",
    params(("id" = uuid::Uuid, Path, description = "List item id")),
    responses(
        (status = 200, description = "The list item with its book", body = ListItemResponse),
        (status = 401, description = "Missing or invalid credentials"),
        (status = 403, description = "Requester does not own the list item"),
        (status = 404, description = "No list item with this id")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_list_item(
    State(state): State<AppState>,
    Extension(item): Extension<ListItem>,
) -> Result<Json<ListItemResponse>> {
    let book = state.books.read_by_id(item.book_id).await?;

    Ok(Json(ListItemResponse {
        list_item: ListItemWithBook { item, book },
    }))
}

/// List the requester's items, each with its book merged in.
/// GET /api/list-items
#[utoipa::path(
    get,
    path = "/api/list-items",
    tag = "list-items",
    responses(
        (status = 200, description = "All list items owned by the requester", body = ListItemsResponse),
        (status = 401, description = "Missing or invalid credentials")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_list_items(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<ListItemsResponse>> {
    let items = state.list_items.read_by_owner(user.0.sub).await?;

    let mut list_items = Vec::with_capacity(items.len());
    for item in items {
        let book = state.books.read_by_id(item.book_id).await?;
        list_items.push(ListItemWithBook { item, book });
    }

    Ok(Json(ListItemsResponse { list_items }))
}

/// Create a list item for the requester.
/// POST /api/list-items
#[utoipa::path(
    post,
    path = "/api/list-items",
    tag = "list-items",
    request_body = CreateListItemRequest,
    responses(
        (status = 200, description = "The created list item with its book", body = ListItemResponse),
        (status = 400, description = "Missing bookId, or the requester already has an item for this book"),
        (status = 401, description = "Missing or invalid credentials")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_list_item(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateListItemRequest>,
) -> Result<Json<ListItemResponse>> {
    let Some(book_id) = payload.book_id else {
        return Err(ApiError::Validation("No bookId provided".to_string()));
    };

    let owner_id = user.0.sub;
    if let Some(existing) = state
        .list_items
        .read_by_owner_and_book(owner_id, book_id)
        .await?
    {
        debug!(list_item_id = %existing.id, "Rejected duplicate list item");
        return Err(ApiError::Validation(format!(
            "User {owner_id} already has a list item for the book with the book id of {book_id}"
        )));
    }

    let item = state
        .list_items
        .create(NewListItem { owner_id, book_id })
        .await?;
    let book = state.books.read_by_id(book_id).await?;

    Ok(Json(ListItemResponse {
        list_item: ListItemWithBook { item, book },
    }))
}

/// Update reading-progress fields on an owned list item.
/// PUT /api/list-items/{id}
#[utoipa::path(
    put,
    path = "/api/list-items/{id}",
    tag = "list-items",
    params(("id" = uuid::Uuid, Path, description = "List item id")),
    request_body = UpdateListItem,
    responses(
        (status = 200, description = "The updated list item with its book", body = ListItemResponse),
        (status = 401, description = "Missing or invalid credentials"),
        (status = 403, description = "Requester does not own the list item"),
        (status = 404, description = "No list item with this id")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_list_item(
    State(state): State<AppState>,
    Extension(item): Extension<ListItem>,
    Json(changes): Json<UpdateListItem>,
) -> Result<Json<ListItemResponse>> {
    let item = state.list_items.update(item.id, changes).await?;
    let book = state.books.read_by_id(item.book_id).await?;

    Ok(Json(ListItemResponse {
        list_item: ListItemWithBook { item, book },
    }))
}

/// Delete an owned list item.
/// DELETE /api/list-items/{id}
#[utoipa::path(
    delete,
    path = "/api/list-items/{id}",
    tag = "list-items",
    params(("id" = uuid::Uuid, Path, description = "List item id")),
    responses(
        (status = 200, description = "The list item was removed", body = DeleteResponse),
        (status = 401, description = "Missing or invalid credentials"),
        (status = 403, description = "Requester does not own the list item"),
        (status = 404, description = "No list item with this id")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_list_item(
    State(state): State<AppState>,
    Extension(item): Extension<ListItem>,
) -> Result<Json<DeleteResponse>> {
    state.list_items.remove(item.id).await?;

    Ok(Json(DeleteResponse { success: true }))
}
