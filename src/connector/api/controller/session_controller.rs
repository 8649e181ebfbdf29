use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::{
    RecommendationQuery, SessionContext, DEFAULT_BUDGET, DEFAULT_OCCASION, DEFAULT_PRODUCT,
    DEFAULT_RECIPIENT,
};

use super::super::Container;
use super::render::{render_listings, render_recommendations, spinner, user_message};

/// Interactive loop: collect the four form fields, show recommendations, let
/// the user pick one by number and search for it.
///
/// Provider failures are printed and the loop carries on with the previous
/// session state.
pub struct SessionController<'a> {
    container: &'a Container,
    min_price: Option<u64>,
    max_price: Option<u64>,
}

enum Choice {
    Search(usize),
    NewQuery,
    Quit,
    Unknown,
}

impl<'a> SessionController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            container,
            min_price: None,
            max_price: None,
        }
    }

    pub fn with_price_range(mut self, min_price: Option<u64>, max_price: Option<u64>) -> Self {
        self.min_price = min_price;
        self.max_price = max_price;
        self
    }

    pub async fn run<R, W>(&self, mut input: R, output: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let use_case = self.container.session_use_case();
        let mut session = SessionContext::new();

        loop {
            let Some(query) = self.read_query(&mut input, output).await? else {
                return Ok(());
            };

            let progress = spinner("Asking for recommendations...");
            let submitted = use_case.submit(&mut session, &query).await.map(|_| ());
            progress.finish_and_clear();

            if let Err(e) = submitted {
                writeln!(output, "{}\n", user_message(&e))?;
                if !session.has_recommendations() {
                    continue;
                }
                writeln!(output, "Showing the previous recommendations.\n")?;
            }
            writeln!(output, "{}", render_recommendations(session.parsed()))?;

            loop {
                if session.records().is_empty() {
                    writeln!(output, "There are no wines to choose from. Try another query.\n")?;
                    break;
                }

                write!(
                    output,
                    "Choose 1-{} to search, n for a new query, q to quit: ",
                    session.records().len()
                )?;
                output.flush()?;

                let Some(line) = read_line(&mut input).await? else {
                    return Ok(());
                };

                match parse_choice(&line) {
                    Choice::Quit => return Ok(()),
                    Choice::NewQuery => break,
                    Choice::Unknown => {
                        writeln!(output, "Please enter a number, n or q.")?;
                    }
                    Choice::Search(index) => {
                        let progress = spinner("Searching...");
                        let result = use_case
                            .search_selected(&session, index, self.min_price, self.max_price)
                            .await;
                        progress.finish_and_clear();

                        match result {
                            Ok((record, listings)) => {
                                writeln!(output, "{}", render_listings(record.name(), &listings))?
                            }
                            Err(e) => writeln!(output, "{}\n", user_message(&e))?,
                        }
                    }
                }
            }
        }
    }

    /// Prompt for the four fields. `None` on end of input.
    async fn read_query<R, W>(&self, input: &mut R, output: &mut W) -> Result<Option<RecommendationQuery>>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut fields = Vec::with_capacity(4);
        for (label, default) in [
            ("Product", DEFAULT_PRODUCT),
            ("Occasion", DEFAULT_OCCASION),
            ("Recipient", DEFAULT_RECIPIENT),
            ("Budget", DEFAULT_BUDGET),
        ] {
            write!(output, "{label} [{default}]: ")?;
            output.flush()?;
            let Some(value) = read_line(input).await? else {
                return Ok(None);
            };
            fields.push(value);
        }

        let [product, occasion, recipient, budget]: [String; 4] = match fields.try_into() {
            Ok(fields) => fields,
            Err(_) => return Ok(None),
        };
        let query = RecommendationQuery::new(product, occasion, recipient, budget).with_defaults();
        debug!("Session query: {}", query.summary());
        Ok(Some(query))
    }
}

async fn read_line<R>(input: &mut R) -> Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    if input.read_line(&mut line).await? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn parse_choice(line: &str) -> Choice {
    match line.to_lowercase().as_str() {
        "q" | "quit" => Choice::Quit,
        "n" | "new" => Choice::NewQuery,
        other => match other.parse::<usize>() {
            Ok(n) if n >= 1 => Choice::Search(n - 1),
            _ => Choice::Unknown,
        },
    }
}
