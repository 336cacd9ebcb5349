//! Ownership gate for item-scoped routes.
//!
//! The gate resolves the `{id}` path parameter to a stored list item, checks
//! that the requester owns it, and attaches the item to the request. Exactly
//! one of {404, 403, forward} happens per invocation. The decision is a pure
//! function so it can be tested without the transport; the middleware is the
//! I/O adapter around it.

use axum::{
    extract::{Path, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::AppState;
use crate::auth::AuthenticatedUser;
use crate::error::{ApiError, Result};
use crate::models::ListItem;

/// Decide what to do with a lookup result for `list_item_id` requested by
/// `user_id`: forward the owned item, or refuse with 404/403.
pub fn authorize_list_item(
    found: Option<ListItem>,
    user_id: Uuid,
    list_item_id: Uuid,
) -> Result<ListItem> {
    let Some(item) = found else {
        return Err(ApiError::NotFound(format!(
            "No list item was found with the id of {list_item_id}"
        )));
    };

    if item.owner_id != user_id {
        return Err(ApiError::Forbidden(format!(
            "User with id {user_id} is not authorized to access the list item {list_item_id}"
        )));
    }

    Ok(item)
}

/// Middleware enforcing that only the owning user may reach the inner
/// handler. On success the resolved `ListItem` is available as a request
/// extension.
pub async fn require_list_item_owner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    user: AuthenticatedUser,
    mut request: Request,
    next: Next,
) -> Response {
    let found = match state.list_items.read_by_id(id).await {
        Ok(found) => found,
        Err(err) => return err.into_response(),
    };

    match authorize_list_item(found, user.0.sub, id) {
        Ok(item) => {
            request.extensions_mut().insert(item);
            next.run(request).await
        }
        Err(err) => err.into_response(),
    }
}
