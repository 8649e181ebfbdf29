use anyhow::Result;

use crate::cli::OutputFormat;
use crate::SearchFilter;

use super::super::Container;
use super::render::{render_listings, spinner};

pub struct SearchController<'a> {
    container: &'a Container,
}

impl<'a> SearchController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn search(
        &self,
        keyword: String,
        min_price: Option<u64>,
        max_price: Option<u64>,
        num: usize,
        format: OutputFormat,
    ) -> Result<String> {
        let filter = SearchFilter::new(&keyword)
            .with_price_range(min_price, max_price)
            .with_max_results(num);

        let use_case = self.container.search_use_case();
        let progress = spinner(format!("Searching for '{}'...", filter.keyword()));
        let result = use_case.execute(filter).await;
        progress.finish_and_clear();
        let listings = result?;

        match format {
            OutputFormat::Text => Ok(render_listings(&keyword, &listings)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&listings)?),
        }
    }
}
