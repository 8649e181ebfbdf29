use clap::{Subcommand, ValueEnum};

use crate::domain::{DEFAULT_BUDGET, DEFAULT_OCCASION, DEFAULT_PRODUCT, DEFAULT_RECIPIENT};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask the chat model for gift recommendations
    Recommend {
        #[arg(long, default_value = DEFAULT_PRODUCT)]
        product: String,

        #[arg(long, default_value = DEFAULT_OCCASION)]
        occasion: String,

        #[arg(long, default_value = DEFAULT_RECIPIENT)]
        recipient: String,

        #[arg(long, default_value = DEFAULT_BUDGET)]
        budget: String,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Search the shopping provider for a product name
    Search {
        keyword: String,

        /// Only applied together with --max-price
        #[arg(long)]
        min_price: Option<u64>,

        /// Only applied together with --min-price
        #[arg(long)]
        max_price: Option<u64>,

        /// Number of listings to show (1-30)
        #[arg(long, default_value = "3")]
        num: usize,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Interactive recommend, pick and search loop on stdin
    Session {
        #[arg(long)]
        min_price: Option<u64>,

        #[arg(long)]
        max_price: Option<u64>,
    },
}
