use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::config::Config;
use crate::error::AlertError;
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::types::HttpResponse;

/// Sends alert text to one configured Telegram chat via `sendMessage`.
///
/// Each call issues exactly one GET and nothing else: no retries, no
/// logging, no state shared between calls besides the read-only config.
pub struct Notifier<T: HttpTransport = ReqwestTransport> {
    config: Config,
    transport: Arc<T>,
}

impl<T: HttpTransport> Clone for Notifier<T> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl Notifier<ReqwestTransport> {
    pub fn new(config: Config) -> Result<Self, AlertError> {
        Ok(Self::with_transport(config, ReqwestTransport::new()?))
    }
}

impl<T: HttpTransport> Notifier<T> {
    pub fn with_transport(config: Config, transport: T) -> Self {
        Self {
            config,
            transport: Arc::new(transport),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// `{api_base}/bot{token}/sendMessage`. Contains the bot token.
    pub fn request_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.config.api_base, self.config.bot_token)
    }

    /// Send `message` as-is. Resolves with the reply on a 2xx status;
    /// any other status or a transport failure is returned unchanged.
    pub async fn send_alert(&self, message: &str) -> Result<HttpResponse, AlertError> {
        let url = self.request_url();
        let params = [("chat_id", self.config.chat_id.as_str()), ("text", message)];

        let resp = self.transport.get(&url, &params).await?;
        if !resp.is_success() {
            return Err(AlertError::Api {
                status: resp.status,
                body: resp.body,
            });
        }
        Ok(resp)
    }
}

impl<T: HttpTransport + 'static> Notifier<T> {
    /// Start sending right away on the current tokio runtime. Dropping the
    /// handle detaches the task; the request still goes out.
    pub fn spawn_alert(
        &self,
        message: impl Into<String>,
    ) -> JoinHandle<Result<HttpResponse, AlertError>> {
        let notifier = self.clone();
        let message = message.into();
        tokio::spawn(async move { notifier.send_alert(&message).await })
    }
}
