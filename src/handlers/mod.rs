pub mod health;
pub mod list_items;
pub mod response;

pub use response::{DeleteResponse, ListItemResponse, ListItemsResponse};
