//! In-memory receipt store.
//!
//! Receipts live in a `HashMap` behind a single `RwLock`. Inserts take the
//! write lock, so id generation and the collision check cannot race with
//! another insert; lookups share the read lock. Contents last only as long
//! as the process.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::Receipt;
use crate::storage::ReceiptStore;

/// Process-local receipt store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    receipts: RwLock<HashMap<String, Receipt>>,
    capacity: Option<usize>,
}

impl MemoryStore {
    /// Create an unbounded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that refuses writes once it holds `capacity` receipts.
    ///
    /// The limit is only a ceiling; the map still grows on demand.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            receipts: RwLock::new(HashMap::new()),
            capacity: Some(capacity),
        }
    }

    fn generate_id(existing: &HashMap<String, Receipt>) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if !existing.contains_key(&id) {
                return id;
            }
        }
    }
}

#[async_trait]
impl ReceiptStore for MemoryStore {
    async fn save(&self, mut receipt: Receipt) -> Result<String> {
        let mut receipts = self.receipts.write();

        if let Some(capacity) = self.capacity {
            if receipts.len() >= capacity {
                return Err(AppError::storage(format!(
                    "receipt store is full ({capacity} receipts)"
                )));
            }
        }

        let id = Self::generate_id(&receipts);
        receipt.id = id.clone();
        receipts.insert(id.clone(), receipt);

        log::debug!("Stored receipt {} ({} total)", id, receipts.len());
        Ok(id)
    }

    async fn find(&self, id: &str) -> Result<Receipt> {
        self.receipts
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::not_found(id))
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.receipts.read().len())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;
    use crate::models::Item;

    fn sample_receipt(points: u64) -> Receipt {
        let mut receipt = Receipt::new(
            "Walgreens",
            "2022-01-02",
            "08:13",
            vec![Item::new("Pepsi - 12-oz", "1.25")],
            "1.25",
        );
        receipt.points = points;
        receipt
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let store = MemoryStore::new();

        let id = store.save(sample_receipt(15)).await.unwrap();
        let found = store.find(&id).await.unwrap();

        assert_eq!(found.id, id);
        assert_eq!(found.points, 15);
        assert_eq!(found.retailer, "Walgreens");
    }

    #[tokio::test]
    async fn test_find_unknown_id_is_not_found() {
        let store = MemoryStore::new();
        store.save(sample_receipt(1)).await.unwrap();

        let err = store.find("does-not-exist").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(id) if id == "does-not-exist"));
    }

    #[tokio::test]
    async fn test_ids_are_uuids_and_replace_caller_ids() {
        let store = MemoryStore::new();
        let mut receipt = sample_receipt(1);
        receipt.id = "caller-chosen".to_string();

        let id = store.save(receipt).await.unwrap();

        assert!(Uuid::parse_str(&id).is_ok());
        assert!(store.find("caller-chosen").await.is_err());
        assert_eq!(store.find(&id).await.unwrap().id, id);
    }

    #[tokio::test]
    async fn test_equal_receipts_get_distinct_ids() {
        let store = MemoryStore::new();
        let first = store.save(sample_receipt(7)).await.unwrap();
        let second = store.save(sample_receipt(7)).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_capacity_limit_is_a_storage_error() {
        let store = MemoryStore::with_capacity(1);
        store.save(sample_receipt(1)).await.unwrap();

        let err = store.save(sample_receipt(2)).await.unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_huge_capacity_does_not_preallocate() {
        let store = MemoryStore::with_capacity(usize::MAX);
        let id = store.save(sample_receipt(7)).await.unwrap();

        assert_eq!(store.find(&id).await.unwrap().points, 7);
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_saves_keep_every_receipt() {
        let store = Arc::new(MemoryStore::new());

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.save(sample_receipt(i)).await })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap().unwrap());
        }

        assert_eq!(ids.len(), 64);
        assert_eq!(store.count().await.unwrap(), 64);
        for id in &ids {
            assert_eq!(&store.find(id).await.unwrap().id, id);
        }
    }
}
