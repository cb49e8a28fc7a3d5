// src/services/receipts.rs

//! Receipt service.
//!
//! Combines a points calculator with a receipt store into the two
//! operations callers see: processing a receipt and looking up its points.

use std::sync::Arc;

use crate::error::Result;
use crate::models::Receipt;
use crate::services::PointsCalculator;
use crate::storage::ReceiptStore;

/// Service for scoring, storing and querying receipts.
#[derive(Clone)]
pub struct ReceiptService {
    calculator: Arc<dyn PointsCalculator>,
    store: Arc<dyn ReceiptStore>,
}

impl ReceiptService {
    /// Create a new receipt service from its collaborators.
    pub fn new(calculator: Arc<dyn PointsCalculator>, store: Arc<dyn ReceiptStore>) -> Self {
        Self { calculator, store }
    }

    /// Score a receipt and store it, returning the generated id.
    ///
    /// A calculation failure is returned as-is and nothing is stored.
    pub async fn process_receipt(&self, mut receipt: Receipt) -> Result<String> {
        let points = self.calculator.calculate(&receipt).map_err(|e| {
            log::warn!("Rejected receipt from '{}': {}", receipt.retailer, e);
            e
        })?;

        receipt.points = points;
        receipt.id.clear();

        let id = self.store.save(receipt).await?;
        log::info!("Processed receipt {} worth {} points", id, points);
        Ok(id)
    }

    /// Look up the points awarded to a stored receipt.
    pub async fn get_points(&self, id: &str) -> Result<u64> {
        let receipt = self.store.find(id).await?;
        Ok(receipt.points)
    }

    /// Number of receipts held by the underlying store.
    pub async fn receipt_count(&self) -> Result<usize> {
        self.store.count().await
    }
}
