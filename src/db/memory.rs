//! DashMap-backed store implementations for development and local runs.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use crate::db::{BookStore, ListItemStore};
use crate::error::{ApiError, Result};
use crate::models::{Book, ListItem, NewListItem, UpdateListItem};

/// In-memory book collection.
#[derive(Debug, Default)]
pub struct InMemoryBookStore {
    books: DashMap<Uuid, Book>,
}

impl InMemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        let store = Self::new();
        for book in books {
            store.books.insert(book.id, book);
        }
        store
    }

    /// Development seed so the service answers something out of the box.
    pub fn with_seed() -> Self {
        Self::with_books(seed_books())
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[async_trait]
impl BookStore for InMemoryBookStore {
    async fn read_by_id(&self, id: Uuid) -> Result<Book> {
        self.books
            .get(&id)
            .map(|entry| entry.clone())
            .ok_or_else(|| ApiError::NotFound(format!("No book was found with the id of {id}")))
    }
}

/// In-memory list-item collection.
#[derive(Debug, Default)]
pub struct InMemoryListItemStore {
    items: DashMap<Uuid, ListItem>,
}

impl InMemoryListItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ListItemStore for InMemoryListItemStore {
    async fn read_by_id(&self, id: Uuid) -> Result<Option<ListItem>> {
        Ok(self.items.get(&id).map(|entry| entry.clone()))
    }

    async fn read_by_owner(&self, owner_id: Uuid) -> Result<Vec<ListItem>> {
        Ok(self
            .items
            .iter()
            .filter(|entry| entry.owner_id == owner_id)
            .map(|entry| entry.clone())
            .collect())
    }

    async fn read_by_owner_and_book(
        &self,
        owner_id: Uuid,
        book_id: Uuid,
    ) -> Result<Option<ListItem>> {
        Ok(self
            .items
            .iter()
            .find(|entry| entry.owner_id == owner_id && entry.book_id == book_id)
            .map(|entry| entry.clone()))
    }

    async fn create(&self, new_item: NewListItem) -> Result<ListItem> {
        let item = ListItem {
            id: Uuid::new_v4(),
            owner_id: new_item.owner_id,
            book_id: new_item.book_id,
            rating: None,
            notes: None,
            start_date: Utc::now(),
            finish_date: None,
        };
        self.items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn update(&self, id: Uuid, changes: UpdateListItem) -> Result<ListItem> {
        let mut entry = self.items.get_mut(&id).ok_or_else(|| {
            ApiError::NotFound(format!("No list item was found with the id of {id}"))
        })?;

        if let Some(rating) = changes.rating {
            entry.rating = Some(rating);
        }
        if let Some(notes) = changes.notes {
            entry.notes = Some(notes);
        }
        if let Some(start_date) = changes.start_date {
            entry.start_date = start_date;
        }
        if let Some(finish_date) = changes.finish_date {
            entry.finish_date = Some(finish_date);
        }

        Ok(entry.clone())
    }

    async fn remove(&self, id: Uuid) -> Result<()> {
        self.items.remove(&id).ok_or_else(|| {
            ApiError::NotFound(format!("No list item was found with the id of {id}"))
        })?;
        Ok(())
    }
}

fn seed_books() -> Vec<Book> {
    vec![
        Book {
            id: Uuid::new_v4(),
            title: "The Hobbit".to_string(),
            author: "J.R.R. Tolkien".to_string(),
            cover_image_url: "https://covers.example.com/the-hobbit.jpg".to_string(),
            page_count: 310,
            publisher: "George Allen & Unwin".to_string(),
            synopsis: "Bilbo Baggins is swept into a quest to reclaim the Lonely Mountain."
                .to_string(),
        },
        Book {
            id: Uuid::new_v4(),
            title: "A Wizard of Earthsea".to_string(),
            author: "Ursula K. Le Guin".to_string(),
            cover_image_url: "https://covers.example.com/a-wizard-of-earthsea.jpg".to_string(),
            page_count: 183,
            publisher: "Parnassus Press".to_string(),
            synopsis: "A young mage unleashes a shadow he must spend his life confronting."
                .to_string(),
        },
        Book {
            id: Uuid::new_v4(),
            title: "The Left Hand of Darkness".to_string(),
            author: "Ursula K. Le Guin".to_string(),
            cover_image_url: "https://covers.example.com/left-hand-of-darkness.jpg".to_string(),
            page_count: 304,
            publisher: "Ace Books".to_string(),
            synopsis: "An envoy navigates politics and ice on a planet without fixed gender."
                .to_string(),
        },
    ]
}
