use tracing::{debug, warn};

use crate::domain::{ParsedRecommendations, RecommendationRecord};

/// Parse the free text returned by the text-generation provider.
///
/// Each trimmed, non-empty line is handled on its own. The display line is
/// `head: rest` for lines with whitespace (the colon only added when `head`
/// does not already end with one) and the line verbatim otherwise.
///
/// The record is taken from the first colon when the line has one: the name
/// is the text before it and the description the text after it, both
/// trimmed. Lines without a colon are split on the first whitespace run into
/// name and description; a lone token without a colon yields no record.
///
/// Lines that yield no record are reported in
/// [`ParsedRecommendations::skipped`]. Order follows the source text and
/// duplicate names are kept.
pub fn parse_recommendations(text: &str) -> ParsedRecommendations {
    let mut lines = Vec::new();
    let mut records = Vec::new();
    let mut skipped = Vec::new();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let (display, record) = parse_line(line);
        lines.push(display);
        match record {
            Some(record) => records.push(record),
            None => skipped.push(line.to_string()),
        }
    }

    if !skipped.is_empty() {
        warn!(
            "{} recommendation line(s) had no usable name and are not selectable",
            skipped.len()
        );
    }
    debug!("Parsed {} recommendation record(s)", records.len());

    ParsedRecommendations::new(lines, records, skipped)
}

/// Text before the first colon of `line`, trimmed. `None` when there is no colon.
pub fn extract_option_name(line: &str) -> Option<&str> {
    line.split_once(':').map(|(name, _)| name.trim())
}

fn parse_line(line: &str) -> (String, Option<RecommendationRecord>) {
    let split = line
        .split_once(char::is_whitespace)
        .map(|(head, rest)| (head, rest.trim_start()));

    let display = match split {
        Some((head, rest)) if head.ends_with(':') => format!("{head} {rest}"),
        Some((head, rest)) => format!("{head}: {rest}"),
        None => line.to_string(),
    };

    let record = match (line.split_once(':'), split) {
        (Some((name, description)), _) => Some((name.trim(), description.trim())),
        (None, Some((head, rest))) => Some((head, rest)),
        (None, None) => None,
    }
    .filter(|(name, _)| !name.is_empty())
    .map(|(name, description)| RecommendationRecord::new(name, description));

    (display, record)
}
