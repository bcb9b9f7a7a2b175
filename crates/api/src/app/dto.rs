use serde::{Deserialize, Serialize};

use climastore_cart::{Cart, CartLine};
use climastore_catalog::{Page, Product};
use climastore_core::{DomainError, DomainResult, Money, ProductId};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    pub category: Option<String>,
    pub page: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct CartQuery {
    pub return_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: u32,
    pub quantity: Option<u32>,
    pub return_url: Option<String>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Money,
    pub category: String,
    pub has_image: bool,
}

impl From<&Product> for ProductView {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id_typed(),
            name: p.name().to_string(),
            description: p.description().to_string(),
            price: p.price(),
            category: p.category().to_string(),
            has_image: p.has_image(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductListView {
    pub items: Vec<ProductView>,
    pub page: u32,
    pub page_size: u32,
    pub total_items: usize,
    pub total_pages: usize,
    pub current_category: Option<String>,
}

impl ProductListView {
    pub fn new(page: Page<Product>, current_category: Option<String>) -> Self {
        Self {
            total_pages: page.total_pages(),
            items: page.items.iter().map(ProductView::from).collect(),
            page: page.page,
            page_size: page.page_size,
            total_items: page.total_items,
            current_category,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CartLineView {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub subtotal: Money,
}

impl TryFrom<&CartLine> for CartLineView {
    type Error = DomainError;

    fn try_from(l: &CartLine) -> Result<Self, Self::Error> {
        Ok(Self {
            product_id: l.product().id_typed(),
            name: l.product().name().to_string(),
            unit_price: l.product().price(),
            quantity: l.quantity(),
            subtotal: l.subtotal()?,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub line_count: usize,
    pub item_count: u64,
    pub total: Money,
    pub return_url: Option<String>,
}

impl CartView {
    pub fn new(cart: &Cart, return_url: Option<String>) -> DomainResult<Self> {
        Ok(Self {
            lines: cart
                .lines()
                .iter()
                .map(CartLineView::try_from)
                .collect::<DomainResult<_>>()?,
            line_count: cart.line_count(),
            item_count: cart.item_count(),
            total: cart.calculate_total_value()?,
            return_url,
        })
    }
}
