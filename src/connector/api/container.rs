use std::sync::Arc;

use tracing::debug;

use crate::application::{
    ChatClient, GiftSessionUseCase, ProductSearchService, RequestRecommendationsUseCase,
    SearchProductsUseCase, DEFAULT_LANGUAGE,
};
use crate::{MockChatClient, MockProductSearch, OpenAiChatClient, RakutenProductSearch};

pub struct ContainerConfig {
    /// Use the offline mock providers instead of the HTTP ones.
    pub mock: bool,
    /// Overrides `OPENAI_MODEL` when set.
    pub model: Option<String>,
    /// Language the chat model is asked to answer in.
    pub language: String,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            mock: false,
            model: None,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

pub struct Container {
    chat_client: Arc<dyn ChatClient>,
    search_service: Arc<dyn ProductSearchService>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let chat_client: Arc<dyn ChatClient> = if config.mock {
            debug!("Using mock chat client");
            Arc::new(MockChatClient::new())
        } else {
            let client = OpenAiChatClient::from_env();
            let client = match config.model.as_deref() {
                Some(model) => client.with_model(model),
                None => client,
            };
            debug!("Using OpenAI chat client at {} ({})", client.url(), client.model_name());
            Arc::new(client)
        };

        let search_service: Arc<dyn ProductSearchService> = if config.mock {
            debug!("Using mock product search");
            Arc::new(MockProductSearch::new())
        } else {
            debug!("Using Rakuten product search");
            Arc::new(RakutenProductSearch::from_env())
        };

        Self::with_services(config, chat_client, search_service)
    }

    /// Build a container around already constructed providers.
    pub fn with_services(
        config: ContainerConfig,
        chat_client: Arc<dyn ChatClient>,
        search_service: Arc<dyn ProductSearchService>,
    ) -> Self {
        Self {
            chat_client,
            search_service,
            config,
        }
    }

    pub fn recommend_use_case(&self) -> RequestRecommendationsUseCase {
        RequestRecommendationsUseCase::new(self.chat_client.clone())
            .with_language(self.config.language.clone())
    }

    pub fn search_use_case(&self) -> SearchProductsUseCase {
        SearchProductsUseCase::new(self.search_service.clone())
    }

    pub fn session_use_case(&self) -> GiftSessionUseCase {
        GiftSessionUseCase::new(self.recommend_use_case(), self.search_use_case())
    }
}
