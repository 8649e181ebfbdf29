use anyhow::Result;
use clap::Parser;
use tokio::io::BufReader;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use winegift::connector::api::controller::SessionController;
use winegift::connector::api::{Container, ContainerConfig, Router};
use winegift::{Commands, DEFAULT_LANGUAGE};

#[derive(Parser)]
#[command(name = "winegift")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use offline providers instead of the chat and shopping APIs
    #[arg(long, global = true)]
    mock: bool,

    /// Chat model to use (overrides OPENAI_MODEL)
    #[arg(long, global = true)]
    model: Option<String>,

    /// Language the recommendations are written in
    #[arg(long, global = true, default_value = DEFAULT_LANGUAGE)]
    language: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let container = Container::new(ContainerConfig {
        mock: cli.mock,
        model: cli.model,
        language: cli.language,
    });

    if let Commands::Session {
        min_price,
        max_price,
    } = cli.command
    {
        let controller =
            SessionController::new(&container).with_price_range(min_price, max_price);
        let stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = std::io::stdout();
        return controller.run(stdin, &mut stdout).await;
    }

    let router = Router::new(&container);
    let output = router.route(cli.command).await?;
    println!("{}", output);

    Ok(())
}
