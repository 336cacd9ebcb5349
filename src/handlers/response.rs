//! Response shapes shared by the list-item handlers.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::ListItemWithBook;

/// `{"listItem": {...item, "book": {...}}}`
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListItemResponse {
    pub list_item: ListItemWithBook,
}

/// `{"listItems": [...]}`
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListItemsResponse {
    pub list_items: Vec<ListItemWithBook>,
}

/// `{"success": true}`
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    pub success: bool,
}
