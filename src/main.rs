use clap::Parser;
use marketing_assistant::server::{self, AppState};
use marketing_assistant::utils::logger;
use marketing_assistant::{AppConfig, CliConfig, HuggingFaceClient, MarketingAssistant};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // .env 不存在時忽略
    dotenvy::dotenv().ok();

    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting marketing-assistant");

    let config = match AppConfig::resolve(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };
    if cli.verbose {
        tracing::debug!("Resolved config: {:?}", config);
    }

    let client = match HuggingFaceClient::new(&config.backend) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("❌ Failed to build inference client: {}", e);
            std::process::exit(e.exit_code());
        }
    };
    tracing::info!("Using model {} via {}", config.backend.model_id, config.backend.api_base);

    let assistant = MarketingAssistant::with_settings(Arc::new(client), config.generation);
    let router = server::create_router(AppState::new(assistant), &config.server.static_dir);

    if let Err(e) = server::serve(router, &config.server.bind_address()).await {
        tracing::error!("❌ Server failed: {}", e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}
