use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::application::ChatClient;
use crate::domain::{DomainError, RecommendationQuery, RecommendationText};

/// Number of items the prompt asks for.
pub const RECOMMENDATION_COUNT: usize = 5;
/// Output token ceiling, sized for five short entries.
pub const MAX_TOKENS: u32 = 700;
pub const DEFAULT_LANGUAGE: &str = "Japanese";

pub struct RequestRecommendationsUseCase {
    chat_client: Arc<dyn ChatClient>,
    language: String,
}

impl RequestRecommendationsUseCase {
    pub fn new(chat_client: Arc<dyn ChatClient>) -> Self {
        Self {
            chat_client,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Ask the provider for recommendations. Identical queries hit the
    /// provider every time.
    pub async fn execute(
        &self,
        query: &RecommendationQuery,
    ) -> Result<RecommendationText, DomainError> {
        let query = query.clone().with_defaults();
        info!(
            "Requesting {} recommendations from {} ({})",
            RECOMMENDATION_COUNT,
            self.chat_client.model_name(),
            query.summary()
        );

        let start_time = Instant::now();
        let system = system_prompt(&query, &self.language);
        let user = user_prompt(&query);
        debug!("Recommendation prompt: {user}");

        let text = self.chat_client.complete(&system, &user, MAX_TOKENS).await?;

        info!(
            "Received {} characters in {:.2}s",
            text.chars().count(),
            start_time.elapsed().as_secs_f64()
        );
        Ok(RecommendationText::new(text))
    }
}

pub fn system_prompt(query: &RecommendationQuery, language: &str) -> String {
    format!(
        "You are an expert on {}. Please answer in {}.",
        query.product(),
        language
    )
}

pub fn user_prompt(query: &RecommendationQuery) -> String {
    format!(
        "Please recommend {count} {product} for a {occasion} gift to a {recipient} with a budget of {budget}. \
         For each {product}, provide the name followed by a colon, price, and a brief description \
         (less than 300 characters) of its story or background.",
        count = RECOMMENDATION_COUNT,
        product = query.product(),
        occasion = query.occasion(),
        recipient = query.recipient(),
        budget = query.budget(),
    )
}
