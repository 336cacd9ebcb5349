// Data models and DTOs for the reading-list API.

pub mod book;
pub mod list_item;
pub mod user;

pub use book::Book;
pub use list_item::{
    CreateListItemRequest, ListItem, ListItemWithBook, NewListItem, UpdateListItem,
};
pub use user::User;
