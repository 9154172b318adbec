//! Read-only client for a Cosmos SDK light-client daemon (LCD): distribution
//! queries plus a validator / voting-power join.

pub mod blocking;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use client::LcdClient;
pub use config::Config;
pub use error::{LcdError, Result};
