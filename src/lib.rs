pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    ChatClient, GiftSessionUseCase, ProductSearchService, RequestRecommendationsUseCase,
    SearchProductsUseCase, DEFAULT_LANGUAGE,
};

pub use cli::{Commands, OutputFormat};

pub use connector::{MockChatClient, MockProductSearch, OpenAiChatClient, RakutenProductSearch};

pub use domain::{
    extract_option_name, parse_recommendations, DomainError, ParsedRecommendations,
    ProductListing, RecommendationQuery, RecommendationRecord, RecommendationText, SearchFilter,
    SearchServiceError, SessionContext, DEFAULT_BUDGET, DEFAULT_OCCASION, DEFAULT_PRODUCT,
    DEFAULT_RECIPIENT,
};
