use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::ProductSearchService;
use crate::domain::{DomainError, ProductListing, SearchFilter};

pub const DEFAULT_SEARCH_URL: &str =
    "https://app.rakuten.co.jp/services/api/IchibaItem/Search/20170706";

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(rename = "Items")]
    items: Option<Vec<ItemWrapper>>,
}

#[derive(Deserialize)]
struct ItemWrapper {
    #[serde(rename = "Item")]
    item: Item,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Item {
    item_name: String,
    item_price: i64,
    item_url: String,
    #[serde(default)]
    medium_image_urls: Vec<ImageUrl>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImageUrl {
    image_url: String,
}

impl From<Item> for ProductListing {
    fn from(item: Item) -> Self {
        let image_url = item
            .medium_image_urls
            .into_iter()
            .next()
            .map(|i| i.image_url)
            .unwrap_or_default();
        ProductListing::new(item.item_name, item.item_price, image_url, item.item_url)
    }
}

/// [`ProductSearchService`] backed by the Rakuten Ichiba item search API.
///
/// An empty application id is accepted; the provider then answers in its
/// unauthenticated (usually rejected or limited) mode and the caller sees the
/// resulting status as a search error.
pub struct RakutenProductSearch {
    client: reqwest::Client,
    application_id: String,
    url: String,
}

impl RakutenProductSearch {
    pub fn new(application_id: impl Into<String>, url: impl Into<String>) -> Self {
        let application_id: String = application_id.into();
        if application_id.is_empty() {
            warn!("RakutenProductSearch: no application id configured, search results may be limited");
        }
        Self {
            client: reqwest::Client::new(),
            application_id,
            url: url.into(),
        }
    }

    /// Reads `RAKUTEN_APP_ID` (default empty) and `RAKUTEN_SEARCH_URL`.
    pub fn from_env() -> Self {
        let app_id = std::env::var("RAKUTEN_APP_ID").unwrap_or_default();
        let url =
            std::env::var("RAKUTEN_SEARCH_URL").unwrap_or_else(|_| DEFAULT_SEARCH_URL.to_string());
        Self::new(app_id, url)
    }

    fn query_params(&self, filter: &SearchFilter) -> Vec<(&'static str, String)> {
        build_query_params(filter, &self.application_id)
    }
}

/// Query string for one search. Price bounds are only sent as a pair.
pub fn build_query_params(
    filter: &SearchFilter,
    application_id: &str,
) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("format", "json".to_string()),
        ("keyword", filter.keyword().to_string()),
        ("applicationId", application_id.to_string()),
        ("hits", filter.max_results().to_string()),
    ];
    if let Some((min, max)) = filter.price_range() {
        params.push(("minPrice", min.to_string()));
        params.push(("maxPrice", max.to_string()));
    }
    params
}

/// Map a 200 response body to listings, keeping at most `max_results`.
pub fn parse_search_response(
    body: &str,
    max_results: usize,
) -> Result<Vec<ProductListing>, DomainError> {
    let response: SearchResponse =
        serde_json::from_str(body).map_err(|e| DomainError::search_decode(e.to_string()))?;

    let Some(items) = response.items else {
        debug!("Search response has no Items collection");
        return Ok(vec![]);
    };

    Ok(items
        .into_iter()
        .take(max_results)
        .map(|wrapper| ProductListing::from(wrapper.item))
        .collect())
}

#[async_trait]
impl ProductSearchService for RakutenProductSearch {
    async fn search(&self, filter: &SearchFilter) -> Result<Vec<ProductListing>, DomainError> {
        let response = self
            .client
            .get(&self.url)
            .query(&self.query_params(filter))
            .send()
            .await
            .map_err(|e| DomainError::search_transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DomainError::search_transport(e.to_string()))?;

        if status != reqwest::StatusCode::OK {
            warn!("RakutenProductSearch: API returned {status}: {body}");
            return Err(DomainError::search_status(status.as_u16(), body));
        }

        parse_search_response(&body, filter.max_results())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param<'a>(params: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn params_without_price_bounds() {
        let params = build_query_params(&SearchFilter::new("ChateauX"), "app-123");

        assert_eq!(param(&params, "format"), Some("json"));
        assert_eq!(param(&params, "keyword"), Some("ChateauX"));
        assert_eq!(param(&params, "applicationId"), Some("app-123"));
        assert_eq!(param(&params, "hits"), Some("3"));
        assert_eq!(param(&params, "minPrice"), None);
        assert_eq!(param(&params, "maxPrice"), None);
    }

    #[test]
    fn single_price_bound_is_omitted() {
        let filter = SearchFilter::new("x").with_price_range(None, Some(5000));
        let params = build_query_params(&filter, "");
        assert_eq!(param(&params, "minPrice"), None);
        assert_eq!(param(&params, "maxPrice"), None);
    }

    #[test]
    fn both_price_bounds_are_sent() {
        let filter = SearchFilter::new("x").with_price_range(Some(3000), Some(8000));
        let params = build_query_params(&filter, "");
        assert_eq!(param(&params, "minPrice"), Some("3000"));
        assert_eq!(param(&params, "maxPrice"), Some("8000"));
    }

    #[test]
    fn zero_price_bound_omits_both() {
        let filter = SearchFilter::new("x").with_price_range(Some(0), Some(8000));
        let params = build_query_params(&filter, "");
        assert_eq!(param(&params, "minPrice"), None);
        assert_eq!(param(&params, "maxPrice"), None);
    }

    #[test]
    fn hits_never_exceeds_provider_limit() {
        let filter = SearchFilter::new("x").with_max_results(usize::MAX);
        let params = build_query_params(&filter, "");
        assert_eq!(param(&params, "hits"), Some("30"));
    }

    #[test]
    fn long_keyword_is_sent_truncated() {
        let params = build_query_params(&SearchFilter::new("k".repeat(200)), "");
        assert_eq!(param(&params, "keyword").map(|k| k.chars().count()), Some(128));
    }

    #[test]
    fn response_items_map_to_listings() {
        let body = r#"{"Items":[
            {"Item":{"itemName":"ChateauX 2018","itemPrice":4980,"itemUrl":"https://item/1",
                     "mediumImageUrls":[{"imageUrl":"https://img/1a"},{"imageUrl":"https://img/1b"}]}},
            {"Item":{"itemName":"ChateauX 2019","itemPrice":5500,"itemUrl":"https://item/2",
                     "mediumImageUrls":[]}}
        ]}"#;

        let listings = parse_search_response(body, 3).unwrap();
        assert_eq!(
            listings,
            vec![
                ProductListing::new("ChateauX 2018", 4980, "https://img/1a", "https://item/1"),
                ProductListing::new("ChateauX 2019", 5500, "", "https://item/2"),
            ]
        );
    }

    #[test]
    fn missing_items_is_empty_not_error() {
        let listings = parse_search_response(r#"{"count":0}"#, 3).unwrap();
        assert!(listings.is_empty());
    }

    #[test]
    fn invalid_json_is_decode_error() {
        let err = parse_search_response("<html>oops</html>", 3).unwrap_err();
        assert!(err.is_search_error());
        assert_eq!(err.status_code(), None);
    }
}
