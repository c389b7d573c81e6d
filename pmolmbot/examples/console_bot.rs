//! Example: answer `lm` commands typed on stdin
//!
//! Stands in for the chat framework: each input line is handled as a
//! command and the replies are printed in order.
//!
//! Run with: cargo run --example console_bot
//! Optional YAML override: cargo run --example console_bot -- bot.yaml

use futures::StreamExt;
use pmolmbot::{BotConfig, LmHandler, Reply};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => BotConfig::from_yaml_str(&tokio::fs::read_to_string(path).await?)?,
        None => BotConfig::default(),
    };

    println!("Spotify now playing - type `{}`, `{} list 10`, ...", config.trigger, config.trigger);

    let handler = LmHandler::new(config)?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let mut replies = handler.handle(&line);
        while let Some(reply) = replies.next().await {
            match reply {
                Reply::Text(text) => println!("{}", text),
                Reply::Image { url } => println!("🖼  {}", url),
            }
        }
    }

    Ok(())
}
