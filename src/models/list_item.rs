use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Book;

/// A user-owned association between a user and a book, plus reading progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub book_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub start_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_date: Option<DateTime<Utc>>,
}

/// Fields the store needs to create a list item; everything else defaults.
#[derive(Debug, Clone)]
pub struct NewListItem {
    pub owner_id: Uuid,
    pub book_id: Uuid,
}

/// Partial update applied to an existing list item. Absent fields are left
/// untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateListItem {
    pub rating: Option<i32>,
    pub notes: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub finish_date: Option<DateTime<Utc>>,
}

/// Creation request body. `bookId` is checked by the handler so its absence
/// yields the fixed validation message rather than a deserialization error.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateListItemRequest {
    pub book_id: Option<Uuid>,
}

/// A list item with its referenced book merged into the same JSON object.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListItemWithBook {
    #[serde(flatten)]
    pub item: ListItem,
    pub book: Book,
}
