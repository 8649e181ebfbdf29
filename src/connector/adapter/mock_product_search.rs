use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use async_trait::async_trait;

use crate::application::ProductSearchService;
use crate::domain::{DomainError, ProductListing, SearchFilter};

/// Offline [`ProductSearchService`] that fabricates `max_results` listings
/// for any keyword, with prices inside the requested range when one is set.
pub struct MockProductSearch;

impl MockProductSearch {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockProductSearch {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductSearchService for MockProductSearch {
    async fn search(&self, filter: &SearchFilter) -> Result<Vec<ProductListing>, DomainError> {
        let (min, max) = filter.price_range().unwrap_or((2000, 20000));
        let span = max.saturating_sub(min).max(1);

        Ok((0..filter.max_results())
            .map(|i| {
                let mut hasher = DefaultHasher::new();
                filter.keyword().hash(&mut hasher);
                i.hash(&mut hasher);
                let price = min + hasher.finish() % span;
                ProductListing::new(
                    format!("{} (mock listing {})", filter.keyword(), i + 1),
                    price as i64,
                    format!("https://example.com/images/{}.jpg", i + 1),
                    format!("https://example.com/items/{}", i + 1),
                )
            })
            .collect())
    }
}
