use async_trait::async_trait;

use crate::domain::{DomainError, ProductListing, SearchFilter};

/// Looks up product listings for a keyword on a shopping-search provider.
#[async_trait]
pub trait ProductSearchService: Send + Sync {
    /// One request, no retries. A response without an items collection is an
    /// empty result, not an error.
    async fn search(&self, filter: &SearchFilter) -> Result<Vec<ProductListing>, DomainError>;
}
