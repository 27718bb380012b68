use anyhow::{bail, Context, Result};
use tracing::{error, info, warn};

use telegram_alert::{AlertError, ApiReply, Config, Notifier};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("telegram_alert=info")),
        )
        .init();

    let message = match alert_message(std::env::args()) {
        Some(m) => m,
        None => bail!("usage: telegram-alert <message>"),
    };

    let config = Config::from_env().context("Failed to load config")?;
    info!(chat_id = %config.chat_id, api_base = %config.api_base, "Sending alert");

    let notifier = Notifier::new(config).context("Failed to build HTTP client")?;

    match notifier.send_alert(&message).await {
        Ok(resp) => {
            match resp.json::<ApiReply>() {
                Ok(reply) => info!(
                    status = %resp.status,
                    message_id = ?reply.message_id(),
                    "Alert sent"
                ),
                Err(e) => warn!(status = %resp.status, error = %e, "Alert sent, reply not JSON"),
            }
            Ok(())
        }
        Err(e) => {
            match &e {
                AlertError::Api { status, .. } => error!(
                    status = %status,
                    description = ?e.api_description(),
                    "Telegram rejected alert"
                ),
                AlertError::Transport(source) => error!(error = %source, "Alert request failed"),
            }
            Err(e).context("Failed to send alert")
        }
    }
}

/// Joins everything after the program name. An explicitly empty argument
/// is still a message; only a missing one is a usage error.
fn alert_message<I>(args: I) -> Option<String>
where
    I: IntoIterator<Item = String>,
{
    let words: Vec<String> = args.into_iter().skip(1).collect();
    if words.is_empty() {
        return None;
    }
    Some(words.join(" "))
}
