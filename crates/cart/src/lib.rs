//! Shopping cart domain module.
//!
//! The cart is a plain in-memory aggregate (no IO, no HTTP, no storage).
//! Session storage and checkout live in other crates.

pub mod cart;

pub use cart::{Cart, CartLine};
