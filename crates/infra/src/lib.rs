//! Infrastructure layer: in-memory stores, storefront glue, configuration,
//! and the stock collaborators the checkout workflow needs.

pub mod catalog;
pub mod config;
pub mod order_book;
pub mod session;
pub mod storefront;
pub mod validation;

pub use catalog::InMemoryCatalog;
pub use config::{ConfigError, StoreConfig};
pub use order_book::{InMemoryOrderBook, OrderedLine, SubmittedOrder};
pub use session::{InMemorySessionStore, SessionStore};
pub use storefront::{CartChange, Storefront};
pub use validation::RequiredFieldsValidator;
