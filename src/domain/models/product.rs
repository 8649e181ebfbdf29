use serde::{Deserialize, Serialize};

/// Longest keyword the shopping-search provider accepts, in characters.
pub const MAX_KEYWORD_CHARS: usize = 128;
pub const DEFAULT_MAX_RESULTS: usize = 3;
/// Largest `hits` value the shopping-search provider accepts.
pub const MAX_RESULTS_LIMIT: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    keyword: String,
    min_price: Option<u64>,
    max_price: Option<u64>,
    max_results: usize,
}

impl SearchFilter {
    /// Build a filter; the keyword is cut to [`MAX_KEYWORD_CHARS`] characters.
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: truncate_chars(keyword.into(), MAX_KEYWORD_CHARS),
            min_price: None,
            max_price: None,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    pub fn with_price_range(mut self, min_price: Option<u64>, max_price: Option<u64>) -> Self {
        self.min_price = min_price;
        self.max_price = max_price;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results.clamp(1, MAX_RESULTS_LIMIT);
        self
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn min_price(&self) -> Option<u64> {
        self.min_price
    }

    pub fn max_price(&self) -> Option<u64> {
        self.max_price
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Both bounds, or nothing. A single bound is never sent, and a zero
    /// bound counts as unset.
    pub fn price_range(&self) -> Option<(u64, u64)> {
        let non_zero = |p: &u64| *p > 0;
        self.min_price
            .filter(non_zero)
            .zip(self.max_price.filter(non_zero))
    }

    pub fn summary(&self) -> String {
        let mut parts = vec![format!("keyword=\"{}\"", self.keyword)];
        parts.push(format!("max_results={}", self.max_results));
        if let Some((min, max)) = self.price_range() {
            parts.push(format!("price={}..{}", min, max));
        }
        parts.join(", ")
    }
}

fn truncate_chars(mut value: String, max_chars: usize) -> String {
    if let Some((byte_idx, _)) = value.char_indices().nth(max_chars) {
        value.truncate(byte_idx);
    }
    value
}

/// One shopping-search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductListing {
    name: String,
    price: i64,
    image_url: String,
    page_url: String,
}

impl ProductListing {
    pub fn new(
        name: impl Into<String>,
        price: i64,
        image_url: impl Into<String>,
        page_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            image_url: image_url.into(),
            page_url: page_url.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> i64 {
        self.price
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn page_url(&self) -> &str {
        &self.page_url
    }

    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }
}
