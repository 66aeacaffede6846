//! Client for the HTTP management API of a Wowza-style media server.
//!
//! ```no_run
//! use wowza_rest::{CallOptions, ClientConfig, WowzaClient};
//!
//! # async fn run() -> wowza_rest::Result<()> {
//! let client = WowzaClient::new(ClientConfig::new("media.example.com"))?;
//! let files = client.list_stream_files(&CallOptions::new()).await?;
//! let recorders = client
//!     .list_recorders(&CallOptions::new().application("vod"))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod dto;
pub mod endpoints;
pub mod error;

pub use client::WowzaClient;
pub use config::{CallOptions, ClientConfig};
pub use dto::{ParamValue, RecorderParameters};
pub use error::{ClientError, Result};
