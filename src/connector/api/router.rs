use anyhow::Result;

use crate::{Commands, RecommendationQuery};

use super::container::Container;
use super::controller::{RecommendController, SearchController};

pub struct Router<'a> {
    recommend_controller: RecommendController<'a>,
    search_controller: SearchController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            recommend_controller: RecommendController::new(container),
            search_controller: SearchController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Recommend {
                product,
                occasion,
                recipient,
                budget,
                format,
            } => {
                let query = RecommendationQuery::new(product, occasion, recipient, budget);
                self.recommend_controller.recommend(query, format).await
            }
            Commands::Search {
                keyword,
                min_price,
                max_price,
                num,
                format,
            } => {
                self.search_controller
                    .search(keyword, min_price, max_price, num, format)
                    .await
            }
            Commands::Session { .. } => unreachable!("Session command is handled separately in main"),
        }
    }
}
