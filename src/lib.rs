//! Typed Rust client for the Nexmo SMS and number management HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer for
//! wire-format quirks (form encoding, credentials in URL paths, quoted numbers),
//! and a small client layer orchestrating requests.
//!
//! ```rust,no_run
//! use nexmo::{ClientConfig, NexmoClient, SmsMessage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), nexmo::NexmoError> {
//!     let client = NexmoClient::new(ClientConfig::with_credentials("key", "secret")?);
//!     let msg = SmsMessage::text("Acme", "447700900123", "hello");
//!     let resp = client.sms().send(&msg).await?;
//!     for report in &resp.messages {
//!         println!("{}: {}", report.status, report.message_id.as_deref().unwrap_or("-"));
//!     }
//!
//!     let found = client.numbers().search_available("US").await?;
//!     println!("{} numbers available", found.count);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod domain;
mod transport;

pub use client::{NexmoClient, NexmoClientBuilder, NexmoError, Numbers, Sms};
pub use config::{ClientConfig, ConfigError};
pub use domain::{
    ApiKey, ApiSecret, AvailableNumber, KnownResponseCode, MessageClass, MessageReport,
    MessageResponse, MessageType, NumberSearchOptions, NumberSearchResponse, PhoneNumber,
    ResponseCode, SmsMessage, ValidationError,
};
