//! Send alert text to a Telegram chat through the Bot API `sendMessage`
//! endpoint.
//!
//! ```rust,ignore
//! use telegram_alert::{Config, Notifier};
//!
//! let notifier = Notifier::new(Config::new("123:ABC", "-1001"))?;
//! notifier.send_alert("disk almost full").await?;
//! ```

pub mod config;
pub mod error;
pub mod telegram;
pub mod transport;
pub mod types;

pub use config::Config;
pub use error::AlertError;
pub use telegram::Notifier;
pub use transport::{HttpTransport, ReqwestTransport};
pub use types::{ApiReply, HttpResponse};
