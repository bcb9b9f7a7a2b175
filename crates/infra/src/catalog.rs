use std::collections::BTreeMap;
use std::sync::RwLock;

use climastore_catalog::{NewProduct, Product, ProductLookup};
use climastore_core::{DomainResult, Money, ProductId};

/// In-memory product catalog for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    products: RwLock<BTreeMap<ProductId, Product>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let catalog = Self::new();
        for p in products {
            catalog.insert(p);
        }
        catalog
    }

    /// Insert or replace a product (keyed by id).
    pub fn insert(&self, product: Product) {
        if let Ok(mut map) = self.products.write() {
            map.insert(product.id_typed(), product);
        }
    }

    /// A small climate-equipment catalog for local runs.
    pub fn seeded() -> DomainResult<Self> {
        let rows: [(u32, &str, &str, i64, &str); 6] = [
            (1, "Split Air Conditioner", "Wall-mounted 9000 BTU inverter unit", 54900, "Air Conditioners"),
            (2, "Portable Air Conditioner", "Single-hose unit for rooms up to 25 m2", 32950, "Air Conditioners"),
            (3, "Oil Radiator", "Nine-fin radiator with thermostat", 7990, "Heaters"),
            (4, "Ceramic Fan Heater", "Compact 2 kW heater with tip-over switch", 3450, "Heaters"),
            (5, "Ceiling Fan", "Quiet five-blade fan with remote", 8999, "Fans"),
            (6, "Air Purifier", "HEPA H13 purifier for bedrooms", 15900, "Air Quality"),
        ];

        let catalog = Self::new();
        for (id, name, description, cents, category) in rows {
            catalog.insert(Product::new(NewProduct {
                id: ProductId::new(id)?,
                name: name.to_string(),
                description: description.to_string(),
                price: Money::from_minor(cents, 2),
                category: category.to_string(),
                image: None,
            })?);
        }
        Ok(catalog)
    }
}

impl ProductLookup for InMemoryCatalog {
    fn find_product_by_id(&self, id: ProductId) -> Option<Product> {
        let map = self.products.read().ok()?;
        map.get(&id).cloned()
    }

    fn list_products(&self) -> Vec<Product> {
        match self.products.read() {
            Ok(map) => map.values().cloned().collect(),
            Err(_) => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use climastore_catalog::PageRequest;

    #[test]
    fn seeded_catalog_lists_products_in_id_order() {
        let catalog = InMemoryCatalog::seeded().unwrap();
        let ids: Vec<u32> = catalog
            .list_products()
            .iter()
            .map(|p| p.id_typed().get())
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(
            catalog.categories(),
            vec!["Air Conditioners", "Air Quality", "Fans", "Heaters"]
        );
    }

    #[test]
    fn find_returns_none_for_unknown_id() {
        let catalog = InMemoryCatalog::seeded().unwrap();
        assert!(catalog.find_product_by_id(ProductId::new(404).unwrap()).is_none());
        assert_eq!(
            catalog
                .find_product_by_id(ProductId::new(5).unwrap())
                .unwrap()
                .name(),
            "Ceiling Fan"
        );
    }

    #[test]
    fn insert_replaces_existing_product() {
        let catalog = InMemoryCatalog::seeded().unwrap();
        let id = ProductId::new(3).unwrap();
        catalog.insert(
            Product::new(NewProduct {
                id,
                name: "Oil Radiator XL".to_string(),
                description: String::new(),
                price: Money::from_minor(9990, 2),
                category: "Heaters".to_string(),
                image: None,
            })
            .unwrap(),
        );

        assert_eq!(catalog.list_products().len(), 6);
        assert_eq!(catalog.find_product_by_id(id).unwrap().name(), "Oil Radiator XL");
    }

    #[test]
    fn heaters_page() {
        let catalog = InMemoryCatalog::seeded().unwrap();
        let page = catalog.products_page(Some("Heaters"), PageRequest::default());
        assert_eq!(page.total_items, 2);
        assert_eq!(page.items[0].name(), "Oil Radiator");
    }
}
