pub mod health;
pub mod openapi;
pub mod page;

pub use health::health_handler;
pub use openapi::openapi_handler;
pub use page::page_handler;
