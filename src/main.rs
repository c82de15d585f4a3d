use anyhow::Result;
use clap::Parser;
use giftcard_broker::ai::openai::OpenAiHttpClient;
use giftcard_broker::ai::{OpenAiChatClient, OpenAiImageClient};
use giftcard_broker::config::Config;
use giftcard_broker::generation::GenerationService;
use giftcard_broker::server::{self, AppState};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "giftcard-broker")]
#[command(about = "Two-tier gift card description and image generation API")]
struct CliArgs {
    /// Address to bind. Overrides HOST.
    #[arg(long)]
    host: Option<String>,

    /// Port to bind. Overrides PORT.
    #[arg(long)]
    port: Option<u16>,
}

fn build_state(config: &Config) -> AppState {
    // Reuse one HTTP connection pool across provider clients.
    let http =
        OpenAiHttpClient::new_with_client(config.openai_api_key.clone(), reqwest::Client::new())
            .with_base_url(config.openai_base_url.clone())
            .with_timeout(config.provider_timeout);

    AppState::new(GenerationService::new(
        Box::new(OpenAiChatClient::new(http.clone())),
        Box::new(OpenAiImageClient::new(http)),
    ))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "giftcard_broker=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting giftcard-broker");

    let args = CliArgs::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let host = args.host.unwrap_or_else(|| config.host.clone());
    let port = args.port.unwrap_or(config.port);

    match config.provider_timeout {
        Some(timeout) => info!("Provider timeout: {}s", timeout.as_secs()),
        None => info!("Provider timeout: none"),
    }

    if let Err(e) = server::serve(build_state(&config), &host, port).await {
        error!("Server failed: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
