use anyhow::Result;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::{parse_recommendations, ParsedRecommendations, RecommendationQuery};

use super::super::Container;
use super::render::{render_recommendations, spinner};

#[derive(Serialize)]
struct RecommendOutput<'a> {
    raw: &'a str,
    #[serde(flatten)]
    parsed: &'a ParsedRecommendations,
}

pub struct RecommendController<'a> {
    container: &'a Container,
}

impl<'a> RecommendController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn recommend(
        &self,
        query: RecommendationQuery,
        format: OutputFormat,
    ) -> Result<String> {
        let use_case = self.container.recommend_use_case();

        let progress = spinner("Asking for recommendations...");
        let result = use_case.execute(&query).await;
        progress.finish_and_clear();
        let text = result?;

        let parsed = parse_recommendations(text.as_str());
        match format {
            OutputFormat::Text => Ok(render_recommendations(&parsed)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&RecommendOutput {
                raw: text.as_str(),
                parsed: &parsed,
            })?),
        }
    }
}
