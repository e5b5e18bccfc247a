use clap::Parser;
use marketing_assistant::adapters::huggingface::{TOKEN_CHECK_MODEL, TOKEN_CHECK_PROMPT};
use marketing_assistant::config::TOKEN_ENV;
use marketing_assistant::utils::logger;
use marketing_assistant::{AppConfig, CliConfig, HuggingFaceClient};

/// 檢查 Hugging Face token：是否存在、身分是否有效、能否呼叫推論
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // 與伺服器共用同一組旗標、環境變數與設定檔
    let cli = CliConfig::parse();
    logger::init_cli_logger(cli.verbose);

    let token = match cli.api_token.as_deref() {
        Some(token) if !token.trim().is_empty() => token,
        _ => {
            println!("❌ {} not found in environment variables!", TOKEN_ENV);
            std::process::exit(1);
        }
    };

    println!("✅ Token loaded successfully!");
    println!("Token length: {} characters", token.chars().count());

    let mut config = match AppConfig::resolve(&cli) {
        Ok(config) => config,
        Err(e) => {
            println!("❌ {}", e.user_friendly_message());
            println!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };
    config.backend.model_id = TOKEN_CHECK_MODEL.to_string();
    let client = HuggingFaceClient::new(&config.backend)?;

    let check = match client.check_token().await {
        Ok(check) => check,
        Err(e) => {
            println!("\n❌ Error testing token:");
            println!("Error: {}", e);
            println!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    println!("\n✅ Token is valid!");
    println!("Username: {}", check.user.name);
    println!(
        "Email: {}",
        check.user.email.as_deref().unwrap_or("(not shared)")
    );

    println!("\nRunning inference with {}: {:?}", TOKEN_CHECK_MODEL, TOKEN_CHECK_PROMPT);
    match check.inference {
        Ok(output) => {
            println!("✅ Inference test successful!");
            println!("Model response: {}", output.into_text());
        }
        Err(e) => {
            println!("❌ Inference test failed: {}", e);
            println!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
