use thiserror::Error;

/// Failures reported by the shopping-search provider.
#[derive(Debug, Error)]
pub enum SearchServiceError {
    #[error("search API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("search request failed: {0}")]
    Transport(String),

    #[error("could not decode search response: {0}")]
    Decode(String),
}

impl SearchServiceError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Recommendation service error: {0}")]
    RecommendationService(String),

    #[error("Search service error: {0}")]
    SearchService(#[from] SearchServiceError),

    #[error("Nothing to select: {0}")]
    EmptyInput(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DomainError {
    pub fn recommendation(msg: impl Into<String>) -> Self {
        Self::RecommendationService(msg.into())
    }

    pub fn search_status(status: u16, body: impl Into<String>) -> Self {
        Self::SearchService(SearchServiceError::Status {
            status,
            body: body.into(),
        })
    }

    pub fn search_transport(msg: impl Into<String>) -> Self {
        Self::SearchService(SearchServiceError::Transport(msg.into()))
    }

    pub fn search_decode(msg: impl Into<String>) -> Self {
        Self::SearchService(SearchServiceError::Decode(msg.into()))
    }

    pub fn empty_input(msg: impl Into<String>) -> Self {
        Self::EmptyInput(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyInput(_))
    }

    pub fn is_recommendation_error(&self) -> bool {
        matches!(self, Self::RecommendationService(_))
    }

    pub fn is_search_error(&self) -> bool {
        matches!(self, Self::SearchService(_))
    }

    /// HTTP status reported by the search provider, when the failure carried one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::SearchService(e) => e.status_code(),
            _ => None,
        }
    }
}
