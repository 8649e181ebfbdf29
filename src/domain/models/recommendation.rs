use serde::{Deserialize, Serialize};

pub const DEFAULT_PRODUCT: &str = "wine";
pub const DEFAULT_OCCASION: &str = "promotion gift";
pub const DEFAULT_RECIPIENT: &str = "female boss";
pub const DEFAULT_BUDGET: &str = "50-100USD";

/// The four free-text fields of one recommendation form submission.
///
/// No validation is applied; blank fields are only replaced by the form
/// defaults through [`RecommendationQuery::with_defaults`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationQuery {
    product: String,
    occasion: String,
    recipient: String,
    budget: String,
}

impl RecommendationQuery {
    pub fn new(
        product: impl Into<String>,
        occasion: impl Into<String>,
        recipient: impl Into<String>,
        budget: impl Into<String>,
    ) -> Self {
        Self {
            product: product.into(),
            occasion: occasion.into(),
            recipient: recipient.into(),
            budget: budget.into(),
        }
    }

    /// Replace blank fields with the form defaults.
    pub fn with_defaults(self) -> Self {
        fn or_default(value: String, default: &str) -> String {
            if value.trim().is_empty() {
                default.to_string()
            } else {
                value
            }
        }

        Self {
            product: or_default(self.product, DEFAULT_PRODUCT),
            occasion: or_default(self.occasion, DEFAULT_OCCASION),
            recipient: or_default(self.recipient, DEFAULT_RECIPIENT),
            budget: or_default(self.budget, DEFAULT_BUDGET),
        }
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn occasion(&self) -> &str {
        &self.occasion
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn budget(&self) -> &str {
        &self.budget
    }

    pub fn summary(&self) -> String {
        format!(
            "product=\"{}\", occasion=\"{}\", recipient=\"{}\", budget=\"{}\"",
            self.product, self.occasion, self.recipient, self.budget
        )
    }
}

impl Default for RecommendationQuery {
    fn default() -> Self {
        Self::new(
            DEFAULT_PRODUCT,
            DEFAULT_OCCASION,
            DEFAULT_RECIPIENT,
            DEFAULT_BUDGET,
        )
    }
}

/// Raw free text returned by the text-generation provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecommendationText(String);

impl RecommendationText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for RecommendationText {
    fn from(text: String) -> Self {
        Self(text)
    }
}

/// One parsed suggestion. `name` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRecord {
    name: String,
    description: String,
}

impl RecommendationRecord {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn display_line(&self) -> String {
        if self.description.is_empty() {
            self.name.clone()
        } else {
            format!("{}: {}", self.name, self.description)
        }
    }
}

/// Output of the recommendation parser.
///
/// `lines` holds the normalized display text (one entry per non-empty input
/// line), `records` the selectable items in source order, and `skipped` the
/// lines that could not be turned into a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRecommendations {
    lines: Vec<String>,
    records: Vec<RecommendationRecord>,
    skipped: Vec<String>,
}

impl ParsedRecommendations {
    pub fn new(
        lines: Vec<String>,
        records: Vec<RecommendationRecord>,
        skipped: Vec<String>,
    ) -> Self {
        Self {
            lines,
            records,
            skipped,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn records(&self) -> &[RecommendationRecord] {
        &self.records
    }

    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    pub fn formatted(&self) -> String {
        self.lines.join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn into_records(self) -> Vec<RecommendationRecord> {
        self.records
    }
}
