//! Storage abstractions for scored receipts.
//!
//! A store owns the persisted copy of every receipt. Records are written
//! once, keyed by a store-generated id, and never updated or deleted.

pub mod memory;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Receipt;

// Re-export for convenience
pub use memory::MemoryStore;

/// Trait for receipt storage backends.
#[async_trait]
pub trait ReceiptStore: Send + Sync {
    /// Persist a snapshot of the receipt under a fresh, unique id.
    ///
    /// The stored copy carries the generated id; any id on the input is
    /// replaced.
    async fn save(&self, receipt: Receipt) -> Result<String>;

    /// Look up a stored receipt.
    ///
    /// Fails with `AppError::NotFound` for an unknown id.
    async fn find(&self, id: &str) -> Result<Receipt>;

    /// Number of stored receipts.
    async fn count(&self) -> Result<usize>;
}
