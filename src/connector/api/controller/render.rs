//! Text rendering shared by the controllers.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{DomainError, ParsedRecommendations, ProductListing, SearchServiceError};

/// Spinner on stderr while a provider call is pending. Hidden when stderr is
/// not a terminal.
pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(message.into());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

pub fn render_recommendations(parsed: &ParsedRecommendations) -> String {
    if parsed.lines().is_empty() {
        return "No recommendations found.".to_string();
    }

    let mut output = String::from("Recommendations:\n\n");
    output.push_str(&parsed.formatted());
    output.push_str("\n\n");

    if parsed.is_empty() {
        output.push_str("No selectable recommendations.\n");
    } else {
        output.push_str("Choices:\n");
        for (i, record) in parsed.records().iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, record.name()));
        }
    }

    if !parsed.skipped().is_empty() {
        output.push_str(&format!(
            "\n({} line(s) could not be turned into a choice)\n",
            parsed.skipped().len()
        ));
    }

    output
}

pub fn render_listings(keyword: &str, listings: &[ProductListing]) -> String {
    if listings.is_empty() {
        return format!("No products found for '{}'.", keyword);
    }

    let mut output = format!("Results for '{}':\n\n", keyword);
    for (i, listing) in listings.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, listing.name()));
        output.push_str(&format!("   Price: {} yen\n", listing.price()));
        if listing.has_image() {
            output.push_str(&format!("   Image: {}\n", listing.image_url()));
        }
        output.push_str(&format!("   Link:  {}\n", listing.page_url()));
        output.push('\n');
    }

    output
}

/// The message shown to the user for a failed interaction.
pub fn user_message(err: &DomainError) -> String {
    match err {
        DomainError::RecommendationService(detail) => {
            format!("Could not get recommendations: {detail}")
        }
        DomainError::SearchService(SearchServiceError::Status { status, body }) => {
            format!("Product search failed with status {status}.\n{body}")
        }
        DomainError::SearchService(e) => format!("Product search failed: {e}"),
        DomainError::EmptyInput(_) => "There is nothing to select yet.".to_string(),
        other => other.to_string(),
    }
}
