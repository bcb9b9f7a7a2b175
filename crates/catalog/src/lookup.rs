//! Read-only catalog access.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Serialize;

use climastore_core::ProductId;

use crate::product::Product;

/// Number of products per catalog page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 4;

/// Paging parameters for catalog listings. Page numbers start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Normalize optional inputs: page 0 becomes 1, page size is at least 1.
    pub fn new(page: Option<u32>, page_size: u32) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            page_size: page_size.max(1),
        }
    }

    fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize).saturating_mul(self.page_size as usize)
    }
}

/// One page of a listing plus the information needed to render paging links.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub total_items: usize,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size.max(1) as usize)
    }

    pub fn has_next(&self) -> bool {
        (self.page as usize) < self.total_pages()
    }
}

/// Catalog lookup capability.
///
/// The storefront only ever reads through this trait; how products are stored
/// is up to the implementor.
pub trait ProductLookup: Send + Sync {
    fn find_product_by_id(&self, id: ProductId) -> Option<Product>;

    /// All products, ordered by id.
    fn list_products(&self) -> Vec<Product>;

    /// Distinct categories, sorted.
    fn categories(&self) -> Vec<String> {
        self.list_products()
            .into_iter()
            .map(|p| p.category().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// A page of products, optionally restricted to one category.
    fn products_page(&self, category: Option<&str>, request: PageRequest) -> Page<Product> {
        let matching: Vec<Product> = self
            .list_products()
            .into_iter()
            .filter(|p| category.is_none_or(|c| p.category() == c))
            .collect();
        let total_items = matching.len();

        let items = matching
            .into_iter()
            .skip(request.offset())
            .take(request.page_size as usize)
            .collect();

        Page {
            items,
            page: request.page,
            page_size: request.page_size,
            total_items,
        }
    }
}

impl<L> ProductLookup for Arc<L>
where
    L: ProductLookup + ?Sized,
{
    fn find_product_by_id(&self, id: ProductId) -> Option<Product> {
        (**self).find_product_by_id(id)
    }

    fn list_products(&self) -> Vec<Product> {
        (**self).list_products()
    }

    fn categories(&self) -> Vec<String> {
        (**self).categories()
    }

    fn products_page(&self, category: Option<&str>, request: PageRequest) -> Page<Product> {
        (**self).products_page(category, request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::NewProduct;
    use climastore_core::Money;

    struct FixedCatalog(Vec<Product>);

    impl ProductLookup for FixedCatalog {
        fn find_product_by_id(&self, id: ProductId) -> Option<Product> {
            self.0.iter().find(|p| p.id_typed() == id).cloned()
        }

        fn list_products(&self) -> Vec<Product> {
            self.0.clone()
        }
    }

    fn product(id: u32, category: &str) -> Product {
        Product::new(NewProduct {
            id: ProductId::new(id).unwrap(),
            name: format!("P{id}"),
            description: String::new(),
            price: Money::from_minor(100, 0),
            category: category.to_string(),
            image: None,
        })
        .unwrap()
    }

    fn catalog(n: u32) -> FixedCatalog {
        FixedCatalog(
            (1..=n)
                .map(|i| product(i, if i % 2 == 0 { "Heaters" } else { "Fans" }))
                .collect(),
        )
    }

    #[test]
    fn categories_are_distinct_and_sorted() {
        assert_eq!(catalog(5).categories(), vec!["Fans", "Heaters"]);
    }

    #[test]
    fn second_page_skips_first_page() {
        let page = catalog(5).products_page(None, PageRequest::new(Some(2), 2));
        let ids: Vec<u32> = page.items.iter().map(|p| p.id_typed().get()).collect();
        assert_eq!(ids, vec![3, 4]);
        assert_eq!(page.total_items, 5);
        assert_eq!(page.total_pages(), 3);
        assert!(page.has_next());
    }

    #[test]
    fn category_filter_applies_before_paging() {
        let page = catalog(5).products_page(Some("Heaters"), PageRequest::new(Some(1), 4));
        let ids: Vec<u32> = page.items.iter().map(|p| p.id_typed().get()).collect();
        assert_eq!(ids, vec![2, 4]);
        assert_eq!(page.total_items, 2);
        assert!(!page.has_next());
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let page = catalog(3).products_page(None, PageRequest::new(Some(9), 4));
        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 3);
    }

    #[test]
    fn page_request_normalizes_zero_values() {
        assert_eq!(
            PageRequest::new(Some(0), 0),
            PageRequest { page: 1, page_size: 1 }
        );
        assert_eq!(PageRequest::new(None, 4), PageRequest::default());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: walking every page visits each product exactly once, in order.
            #[test]
            fn pages_partition_the_catalog(n in 0u32..40, page_size in 1u32..10) {
                let catalog = catalog(n);
                let first = catalog.products_page(None, PageRequest::new(Some(1), page_size));
                let pages = first.total_pages().max(1) as u32;

                let mut seen = Vec::new();
                for page in 1..=pages {
                    let p = catalog.products_page(None, PageRequest::new(Some(page), page_size));
                    prop_assert!(p.items.len() <= page_size as usize);
                    seen.extend(p.items.iter().map(|p| p.id_typed().get()));
                }

                prop_assert_eq!(seen, (1..=n).collect::<Vec<_>>());
            }
        }
    }
}
