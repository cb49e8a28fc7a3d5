// src/lib.rs

//! Receipt Processor Library
//!
//! Scores purchase receipts against seven fixed points rules, stores the
//! scored receipts and looks up their points by generated id.

pub mod config;
pub mod error;
#[cfg(feature = "server")]
pub mod http;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;
