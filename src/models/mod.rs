// src/models/mod.rs

//! Domain models for the receipt processor.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod money;
mod receipt;
mod request;

// Re-export all public types
pub use config::{Config, LoggingConfig, ServerConfig, StoreConfig};
pub use money::{Money, ParseMoneyError};
pub use receipt::{Item, Receipt};
pub use request::{ItemRequest, ReceiptRequest};
