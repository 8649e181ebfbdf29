use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use async_trait::async_trait;

use crate::application::ChatClient;
use crate::domain::DomainError;

const CATALOGUE: &[(&str, &str)] = &[
    ("Margaux", "First growth Bordeaux from Chateau Margaux, long favoured by royalty."),
    ("Tignanello", "Antinori's pioneering Super Tuscan blending Sangiovese and Cabernet."),
    ("Sassicaia", "The Bolgheri estate that started the Super Tuscan movement in 1968."),
    ("Chablis", "Crisp Burgundy Chardonnay grown on ancient oyster-shell limestone."),
    ("Barolo", "Nebbiolo from Piedmont, the wine of kings and the king of wines."),
    ("Sancerre", "Loire Sauvignon Blanc from flint and chalk hillsides."),
    ("Tokaji", "Hungarian sweet wine praised by Louis XIV as the wine of kings."),
];

/// Offline [`ChatClient`] returning five deterministic `name: price, story`
/// lines picked from a small catalogue by hashing the prompt.
pub struct MockChatClient;

impl MockChatClient {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(&self, system: &str, user: &str, _max_tokens: u32) -> Result<String, DomainError> {
        let mut hasher = DefaultHasher::new();
        system.hash(&mut hasher);
        user.hash(&mut hasher);
        let offset = (hasher.finish() % CATALOGUE.len() as u64) as usize;

        let lines: Vec<String> = (0..5)
            .map(|i| {
                let (name, story) = CATALOGUE[(offset + i) % CATALOGUE.len()];
                let price = 40 + ((offset + i * 7) % 60);
                format!("{name}: ${price}, {story}")
            })
            .collect();

        Ok(lines.join("\n"))
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}
