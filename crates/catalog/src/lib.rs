//! Catalog domain module.
//!
//! Products, their validation rules, and the read-only lookup capability the
//! cart and storefront consume. Storage lives in `climastore-infra`.

pub mod lookup;
pub mod product;

pub use lookup::{Page, PageRequest, ProductLookup, DEFAULT_PAGE_SIZE};
pub use product::{NewProduct, Product, ProductImage};
