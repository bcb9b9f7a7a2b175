use serde::Serialize;

use climastore_core::{DomainError, DomainResult, Entity, Money, ProductId};

/// Binary product image plus its mime type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductImage {
    pub data: Vec<u8>,
    pub mime_type: String,
}

/// Input for [`Product::new`].
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Money,
    pub category: String,
    pub image: Option<ProductImage>,
}

/// Catalog item.
///
/// Identity and equality are by `id` only: two `Product` values with the same
/// id are the same product even if one of them is a stale copy.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: Money,
    category: String,
    #[serde(skip)]
    image: Option<ProductImage>,
}

impl Product {
    /// Validate and build a product.
    pub fn new(input: NewProduct) -> DomainResult<Self> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("Please enter a product name"));
        }

        let category = input.category.trim();
        if category.is_empty() {
            return Err(DomainError::validation("Please specify a category"));
        }

        if !input.price.is_positive() {
            return Err(DomainError::validation("Please enter a positive price"));
        }

        if let Some(image) = &input.image {
            if image.mime_type.trim().is_empty() {
                return Err(DomainError::validation("image mime type must not be empty"));
            }
        }

        Ok(Self {
            id: input.id,
            name: name.to_string(),
            description: input.description,
            price: input.price,
            category: category.to_string(),
            image: input.image,
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn image(&self) -> Option<&ProductImage> {
        self.image.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

impl core::hash::Hash for Product {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
