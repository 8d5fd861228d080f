use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::Message as TelegramMessage;

use crate::bot::commands;
use crate::bot::reply;
use crate::config::BotConfig;
use crate::query::{self, StatusTransport};

/// Runs the bot dispatch loop until shutdown. Message handling stays on the
/// dispatcher's event loop; each status lookup runs on its own worker task,
/// so one slow server cannot stall other chats.
pub async fn run_bot(bot: Bot, config: BotConfig, transport: Arc<dyn StatusTransport>) {
    let config = Arc::new(config);

    let handler = Update::filter_message().endpoint(move |bot: Bot, msg: TelegramMessage| {
        let config = config.clone();
        let transport = transport.clone();

        async move {
            if let Some(text) = msg.text() {
                if let Some(lines) = respond_to(text, &config, transport).await {
                    if let Err(e) = bot.send_message(msg.chat.id, lines.join("\n")).await {
                        tracing::error!("Failed to send reply: {}", e);
                    }
                }
            }
            respond(())
        }
    });

    Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

/// Handle one incoming message. `None` means the message is not a
/// status-query command and gets no reply at all. Parse errors never reach
/// the network.
pub async fn respond_to(
    text: &str,
    config: &BotConfig,
    transport: Arc<dyn StatusTransport>,
) -> Option<Vec<String>> {
    let default = config.server.address();

    let address = match commands::parse(text, &config.command.trigger, &default)? {
        Ok(address) => address,
        Err(e) => {
            tracing::info!("Rejected command {:?}: {:?}", text, e);
            return Some(reply::render_parse_error(&e));
        }
    };

    tracing::info!("📨 Status query for {}", address);
    let result = query::query(transport, address.clone()).await;

    Some(reply::render_result(&address, &result))
}
