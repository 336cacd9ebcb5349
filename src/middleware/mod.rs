// Middleware module - ownership gating and request logging.

pub mod ownership;
pub mod request_logger;

pub use ownership::{authorize_list_item, require_list_item_owner};
pub use request_logger::request_logger_middleware;
