//! Store contracts for the data collaborators.
//!
//! Handlers and middleware depend on these traits only; `memory` provides the
//! in-process implementation used in development.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Book, ListItem, NewListItem, UpdateListItem};

pub mod memory;

pub use memory::{InMemoryBookStore, InMemoryListItemStore};

/// Read-only access to books. Lookup of an unknown id is an error.
#[async_trait]
pub trait BookStore: Send + Sync {
    async fn read_by_id(&self, id: Uuid) -> Result<Book>;
}

/// Access to list items. Lookup of an unknown id yields `None`.
#[async_trait]
pub trait ListItemStore: Send + Sync {
    async fn read_by_id(&self, id: Uuid) -> Result<Option<ListItem>>;

    /// All items owned by the given user.
    async fn read_by_owner(&self, owner_id: Uuid) -> Result<Vec<ListItem>>;

    /// The owner's item for a given book, if any. One item per (owner, book).
    async fn read_by_owner_and_book(
        &self,
        owner_id: Uuid,
        book_id: Uuid,
    ) -> Result<Option<ListItem>>;

    async fn create(&self, new_item: NewListItem) -> Result<ListItem>;

    async fn update(&self, id: Uuid, changes: UpdateListItem) -> Result<ListItem>;

    async fn remove(&self, id: Uuid) -> Result<()>;
}
