use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use crate::application::ProductSearchService;
use crate::domain::{DomainError, ProductListing, SearchFilter};

pub struct SearchProductsUseCase {
    search_service: Arc<dyn ProductSearchService>,
}

impl SearchProductsUseCase {
    pub fn new(search_service: Arc<dyn ProductSearchService>) -> Self {
        Self { search_service }
    }

    /// Search once and return at most `filter.max_results()` listings, in
    /// provider order.
    pub async fn execute(&self, filter: SearchFilter) -> Result<Vec<ProductListing>, DomainError> {
        info!("Searching products: {}", filter.summary());
        let start_time = Instant::now();

        let mut listings = self.search_service.search(&filter).await?;
        listings.truncate(filter.max_results());

        info!(
            "Found {} listings in {:.2}s",
            listings.len(),
            start_time.elapsed().as_secs_f64()
        );
        Ok(listings)
    }

    pub async fn search(&self, keyword: &str) -> Result<Vec<ProductListing>, DomainError> {
        self.execute(SearchFilter::new(keyword)).await
    }
}
