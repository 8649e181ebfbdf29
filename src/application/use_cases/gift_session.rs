use tracing::{info, warn};

use super::{RequestRecommendationsUseCase, SearchProductsUseCase};
use crate::domain::{
    parse_recommendations, DomainError, ParsedRecommendations, ProductListing,
    RecommendationQuery, RecommendationRecord, SearchFilter, SessionContext,
};

/// One interaction turn: recommend, pick, search.
///
/// The session state itself lives in a [`SessionContext`] owned by the caller;
/// this use case only reads and replaces it.
pub struct GiftSessionUseCase {
    requester: RequestRecommendationsUseCase,
    searcher: SearchProductsUseCase,
}

impl GiftSessionUseCase {
    pub fn new(requester: RequestRecommendationsUseCase, searcher: SearchProductsUseCase) -> Self {
        Self {
            requester,
            searcher,
        }
    }

    /// Request and parse recommendations, then replace the session state.
    ///
    /// On failure the session is left as it was.
    pub async fn submit<'s>(
        &self,
        session: &'s mut SessionContext,
        query: &RecommendationQuery,
    ) -> Result<&'s ParsedRecommendations, DomainError> {
        let text = match self.requester.execute(query).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Recommendation request failed, keeping previous results: {e}");
                return Err(e);
            }
        };

        let parsed = parse_recommendations(text.as_str());
        info!("{} selectable recommendation(s)", parsed.len());
        session.replace(text, parsed);
        Ok(session.parsed())
    }

    /// Search for the record at `index`. Returns `EmptyInput` without calling
    /// the search provider when there is nothing to select.
    pub async fn search_selected(
        &self,
        session: &SessionContext,
        index: usize,
        min_price: Option<u64>,
        max_price: Option<u64>,
    ) -> Result<(RecommendationRecord, Vec<ProductListing>), DomainError> {
        let record = session.select(index)?.clone();
        let filter = SearchFilter::new(record.name()).with_price_range(min_price, max_price);
        let listings = self.searcher.execute(filter).await?;
        Ok((record, listings))
    }
}
