//! Typed Rust client for the Raven messaging HTTP API.
//!
//! Raven queues outgoing emails and text messages. This crate covers the two
//! sending endpoints: a domain layer of plain value types, a transport layer for
//! the wire format, and a small client layer orchestrating requests.
//!
//! ```rust,no_run
//! use raven_client::RavenClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), raven_client::RavenError> {
//!     let client = RavenClient::new("https://raven.example.com/api/", "token");
//!     let id = client
//!         .send_mail("user@example.com", "noreply@example.com", "Hi", "Hello there")
//!         .await?;
//!     println!("queued email {id}");
//!
//!     let id = client.send_sms("+15551234567", "Hello there").await?;
//!     println!("queued sms {id}");
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{RavenClient, RavenClientBuilder, RavenError};
pub use domain::{BearerToken, MessageId, SendEmail, SendSms};
