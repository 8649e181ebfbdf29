use super::{ParsedRecommendations, RecommendationRecord, RecommendationText};
use crate::domain::DomainError;

/// Per-session state owned by the presentation layer: the latest raw
/// recommendation text and what was parsed from it.
///
/// Each submission replaces the previous state wholesale.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    latest: Option<RecommendationText>,
    parsed: ParsedRecommendations,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, text: RecommendationText, parsed: ParsedRecommendations) {
        self.latest = Some(text);
        self.parsed = parsed;
    }

    pub fn clear(&mut self) {
        self.latest = None;
        self.parsed = ParsedRecommendations::default();
    }

    pub fn latest(&self) -> Option<&RecommendationText> {
        self.latest.as_ref()
    }

    pub fn parsed(&self) -> &ParsedRecommendations {
        &self.parsed
    }

    pub fn records(&self) -> &[RecommendationRecord] {
        self.parsed.records()
    }

    pub fn has_recommendations(&self) -> bool {
        self.latest.is_some()
    }

    /// Pick a record by zero-based index.
    pub fn select(&self, index: usize) -> Result<&RecommendationRecord, DomainError> {
        let records = self.parsed.records();
        if records.is_empty() {
            return Err(DomainError::empty_input(
                "there are no recommendations to choose from",
            ));
        }
        records.get(index).ok_or_else(|| {
            DomainError::invalid_input(format!(
                "choice {} is out of range (1-{})",
                index + 1,
                records.len()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(names: &[&str]) -> ParsedRecommendations {
        let records: Vec<_> = names
            .iter()
            .map(|n| RecommendationRecord::new(*n, "desc"))
            .collect();
        let lines = records.iter().map(|r| r.display_line()).collect();
        ParsedRecommendations::new(lines, records, vec![])
    }

    #[test]
    fn select_on_empty_session_is_empty_input() {
        let session = SessionContext::new();
        let err = session.select(0).unwrap_err();
        assert!(err.is_empty_input());
    }

    #[test]
    fn select_out_of_range_is_invalid_input() {
        let mut session = SessionContext::new();
        session.replace(RecommendationText::new("A: desc"), parsed(&["A"]));
        let err = session.select(3).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn replace_is_last_write_wins() {
        let mut session = SessionContext::new();
        session.replace(RecommendationText::new("first"), parsed(&["A", "B"]));
        session.replace(RecommendationText::new("second"), parsed(&["C"]));

        assert_eq!(session.latest().map(|t| t.as_str()), Some("second"));
        assert_eq!(session.records().len(), 1);
        assert_eq!(session.select(0).unwrap().name(), "C");
    }

    #[test]
    fn clear_discards_state() {
        let mut session = SessionContext::new();
        session.replace(RecommendationText::new("x"), parsed(&["A"]));
        session.clear();
        assert!(!session.has_recommendations());
        assert!(session.records().is_empty());
    }
}
