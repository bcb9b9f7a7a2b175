use std::sync::Arc;

use climastore_checkout::CheckoutWorkflow;
use climastore_infra::{
    InMemoryCatalog, InMemoryOrderBook, InMemorySessionStore, RequiredFieldsValidator, StoreConfig,
    Storefront,
};

pub type AppStorefront = Storefront<Arc<InMemoryCatalog>, Arc<InMemorySessionStore>>;
pub type AppCheckout = CheckoutWorkflow<Arc<InMemoryOrderBook>, RequiredFieldsValidator>;

/// Everything the handlers need, shared behind an `Arc`.
#[derive(Debug)]
pub struct AppServices {
    pub storefront: AppStorefront,
    pub checkout: AppCheckout,
    pub catalog: Arc<InMemoryCatalog>,
    pub order_book: Arc<InMemoryOrderBook>,
    pub page_size: u32,
}

impl AppServices {
    pub fn new(catalog: InMemoryCatalog, page_size: u32) -> Self {
        let catalog = Arc::new(catalog);
        let sessions = Arc::new(InMemorySessionStore::new());
        let order_book = Arc::new(InMemoryOrderBook::new());

        Self {
            storefront: Storefront::new(catalog.clone(), sessions),
            checkout: CheckoutWorkflow::new(order_book.clone(), RequiredFieldsValidator),
            catalog,
            order_book,
            page_size,
        }
    }
}

/// Build services from configuration.
pub fn build_services(config: &StoreConfig) -> anyhow::Result<AppServices> {
    let catalog = if config.seed_catalog {
        InMemoryCatalog::seeded()?
    } else {
        InMemoryCatalog::new()
    };

    tracing::info!(
        seeded = config.seed_catalog,
        page_size = config.page_size,
        "storefront services ready"
    );

    Ok(AppServices::new(catalog, config.page_size))
}
