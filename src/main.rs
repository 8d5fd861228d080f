use std::sync::Arc;

use anyhow::{Context, Result};
use mcbot::{bot::run_bot, config::BotConfig, query::HttpTransport};
use teloxide::prelude::*;
use tracing_subscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("🤖 Starting Minecraft status bot...");

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let token = parse_token_arg(&args)?;
    let config = load_config(&args)?;

    tracing::info!("Connecting to Telegram bot...");

    // Create Telegram bot
    let bot = Bot::new(&token);

    // Get bot info
    let me = bot.get_me().await.context("Failed to connect to Telegram")?;
    let bot_username = me.username.clone().unwrap_or_else(|| "unknown".to_string());

    tracing::info!("✅ Bot connected: @{}", bot_username);

    // One shared transport; every lookup goes through it
    let transport = HttpTransport::new(&config.query.endpoint, config.query.timeout())
        .context("Failed to build status transport")?;

    tracing::info!(
        "🚀 Bot @{} is ready! Trigger: '{}', default server: {}",
        bot_username,
        config.command.trigger,
        config.server.address()
    );

    run_bot(bot, config, Arc::new(transport)).await;

    tracing::info!("👋 Shutting down...");
    Ok(())
}

fn parse_token_arg(args: &[String]) -> Result<String> {
    for arg in args.iter().skip(1) {
        if let Some(token) = arg.strip_prefix("--token=") {
            if token.is_empty() {
                anyhow::bail!("Bot token cannot be empty");
            }
            return Ok(token.to_string());
        }
    }

    // Try environment variable as fallback
    if let Ok(token) = std::env::var("TELEGRAM_BOT_TOKEN") {
        return Ok(token);
    }

    anyhow::bail!(
        "Bot token not provided. Use: cargo run -- --token=YOUR_BOT_TOKEN\nOr set TELEGRAM_BOT_TOKEN environment variable"
    )
}

fn load_config(args: &[String]) -> Result<BotConfig> {
    for arg in args.iter().skip(1) {
        if let Some(path) = arg.strip_prefix("--config=") {
            tracing::info!("Loading config from {}", path);
            return BotConfig::load(path).map_err(anyhow::Error::msg);
        }
    }

    Ok(BotConfig::default())
}
