//! Service layer for the receipt processor.
//!
//! This module contains the business logic for:
//! - The seven points rules (`rules`)
//! - Scoring a whole receipt (`RulesCalculator`)
//! - Processing and querying receipts (`ReceiptService`)

mod calculator;
mod receipts;
pub mod rules;

use std::sync::Arc;

pub use calculator::{
    PointsBreakdown, PointsCalculator, RulesCalculator, parse_purchase_date, parse_purchase_time,
};
pub use receipts::ReceiptService;

use crate::models::Config;
use crate::storage::MemoryStore;

/// Wire the standard calculator and an in-memory store into a service.
pub fn build_receipt_service(config: &Config) -> ReceiptService {
    let store = match config.store.capacity() {
        Some(capacity) => MemoryStore::with_capacity(capacity),
        None => MemoryStore::new(),
    };
    ReceiptService::new(Arc::new(RulesCalculator::new()), Arc::new(store))
}
