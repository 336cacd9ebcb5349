//! Shared fixtures for router-level tests: data builders, recording mock
//! stores, and request/response helpers.

#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use chrono::Utc;
use dashmap::DashMap;
use http_body_util::BodyExt;
use rand::Rng;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use bookshelf_api::{
    AppState, ApiError, Config,
    auth::JwtService,
    db::{BookStore, ListItemStore},
    error::Result,
    models::{Book, ListItem, NewListItem, UpdateListItem, User},
    router::build_router,
};

// ---------------------------------------------------------------------------
// Fixture builders
// ---------------------------------------------------------------------------

pub fn build_user() -> User {
    let n: u32 = rand::thread_rng().gen_range(1000..10_000);
    User {
        id: Uuid::new_v4(),
        username: format!("reader-{n}"),
    }
}

pub fn build_book() -> Book {
    let mut rng = rand::thread_rng();
    let n: u32 = rng.gen_range(1000..10_000);
    Book {
        id: Uuid::new_v4(),
        title: format!("Test Book {n}"),
        author: format!("Author {n}"),
        cover_image_url: format!("https://covers.example.com/test-{n}.jpg"),
        page_count: rng.gen_range(80..900),
        publisher: "Test House".to_string(),
        synopsis: "A book that exists only for tests.".to_string(),
    }
}

pub fn build_list_item(owner: &User, book: &Book) -> ListItem {
    ListItem {
        id: Uuid::new_v4(),
        owner_id: owner.id,
        book_id: book.id,
        rating: None,
        notes: None,
        start_date: Utc::now(),
        finish_date: None,
    }
}

// ---------------------------------------------------------------------------
// Recording mock stores
// ---------------------------------------------------------------------------

/// Book collaborator that records every `read_by_id` argument.
#[derive(Default)]
pub struct MockBookStore {
    books: DashMap<Uuid, Book>,
    read_calls: Mutex<Vec<Uuid>>,
}

impl MockBookStore {
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        let store = Self::default();
        for book in books {
            store.books.insert(book.id, book);
        }
        store
    }

    pub fn read_calls(&self) -> Vec<Uuid> {
        self.read_calls.lock().expect("mutex poisoned").clone()
    }
}

#[async_trait]
impl BookStore for MockBookStore {
    async fn read_by_id(&self, id: Uuid) -> Result<Book> {
        self.read_calls.lock().expect("mutex poisoned").push(id);
        self.books
            .get(&id)
            .map(|entry| entry.clone())
            .ok_or_else(|| ApiError::NotFound(format!("No book was found with the id of {id}")))
    }
}

/// List-item collaborator that records call counts and arguments, so tests
/// can assert the strict contract (exactly one lookup, with exactly the
/// requested id).
#[derive(Default)]
pub struct MockListItemStore {
    items: DashMap<Uuid, ListItem>,
    read_by_id_calls: Mutex<Vec<Uuid>>,
    owner_and_book_calls: Mutex<Vec<(Uuid, Uuid)>>,
    create_calls: AtomicUsize,
    remove_calls: Mutex<Vec<Uuid>>,
}

impl MockListItemStore {
    pub fn with_items(items: impl IntoIterator<Item = ListItem>) -> Self {
        let store = Self::default();
        for item in items {
            store.items.insert(item.id, item);
        }
        store
    }

    pub fn read_by_id_calls(&self) -> Vec<Uuid> {
        self.read_by_id_calls
            .lock()
            .expect("mutex poisoned")
            .clone()
    }

    pub fn owner_and_book_calls(&self) -> Vec<(Uuid, Uuid)> {
        self.owner_and_book_calls
            .lock()
            .expect("mutex poisoned")
            .clone()
    }

    pub fn create_count(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn remove_calls(&self) -> Vec<Uuid> {
        self.remove_calls.lock().expect("mutex poisoned").clone()
    }

    pub fn stored(&self, id: Uuid) -> Option<ListItem> {
        self.items.get(&id).map(|entry| entry.clone())
    }
}

#[async_trait]
impl ListItemStore for MockListItemStore {
    async fn read_by_id(&self, id: Uuid) -> Result<Option<ListItem>> {
        self.read_by_id_calls
            .lock()
            .expect("mutex poisoned")
            .push(id);
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
        self.owner_and_book_calls
            .lock()
            .expect("mutex poisoned")
            .push((owner_id, book_id));
        Ok(self
            .items
            .iter()
            .find(|entry| entry.owner_id == owner_id && entry.book_id == book_id)
            .map(|entry| entry.clone()))
    }

    async fn create(&self, new_item: NewListItem) -> Result<ListItem> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
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
        self.remove_calls.lock().expect("mutex poisoned").push(id);
        self.items.remove(&id).ok_or_else(|| {
            ApiError::NotFound(format!("No list item was found with the id of {id}"))
        })?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// App construction and HTTP helpers
// ---------------------------------------------------------------------------

pub struct TestApp {
    pub app: Router,
    pub state: AppState,
    pub books: Arc<MockBookStore>,
    pub list_items: Arc<MockListItemStore>,
}

pub fn test_config() -> Config {
    Config {
        environment: "test".to_string(),
        port: 0,
        jwt_secret: "test-secret-test-secret".to_string(),
        jwt_expiration_hours: 24,
        request_timeout: 30,
        log_level: "debug".to_string(),
        expose_stack_traces: true,
    }
}

pub fn test_app(books: MockBookStore, list_items: MockListItemStore) -> TestApp {
    let config = test_config();
    let jwt_service = JwtService::new(&config.jwt_secret, config.jwt_expiration_hours)
        .expect("valid test secret");

    let books = Arc::new(books);
    let list_items = Arc::new(list_items);

    let state = AppState {
        config,
        jwt_service,
        books: books.clone(),
        list_items: list_items.clone(),
    };

    TestApp {
        app: build_router(state.clone()),
        state,
        books,
        list_items,
    }
}

pub fn bearer_for(state: &AppState, user: &User) -> String {
    let token = state
        .jwt_service
        .issue_token(user.id, &user.username)
        .expect("token issues");
    format!("Bearer {token}")
}

pub fn request(method: Method, uri: &str, bearer: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(bearer) = bearer {
        builder = builder.header(header::AUTHORIZATION, bearer);
    }
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&value).expect("body serializes"))
        }
        None => Body::empty(),
    };
    builder.body(body).expect("request builds")
}

pub async fn send(app: &TestApp, req: Request<Body>) -> Response {
    app.app.clone().oneshot(req).await.expect("infallible")
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is JSON")
}

pub fn assert_status(response: &Response, expected: StatusCode) {
    assert_eq!(response.status(), expected);
}
