//! Caller-supplied receipt payloads.
//!
//! Every field is optional at the decoding stage so that a missing field is
//! reported by name instead of as a generic decode failure. `id` and
//! `points` are server-assigned and silently ignored if present.

use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::{Item, Receipt};

/// A line item as submitted by the caller.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequest {
    pub short_description: Option<String>,
    pub price: Option<String>,
}

/// A receipt as submitted by the caller.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptRequest {
    pub retailer: Option<String>,
    pub purchase_date: Option<String>,
    pub purchase_time: Option<String>,
    pub items: Option<Vec<ItemRequest>>,
    pub total: Option<String>,
}

fn required(value: Option<String>, field: &str) -> Result<String> {
    value.ok_or_else(|| AppError::validation(format!("missing required field '{field}'")))
}

impl ReceiptRequest {
    /// Decode a request from raw JSON bytes.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes)
            .map_err(|e| AppError::validation(format!("invalid receipt payload: {e}")))
    }

    /// Check required fields and build an unsaved receipt.
    pub fn into_receipt(self) -> Result<Receipt> {
        let retailer = required(self.retailer, "retailer")?;
        let purchase_date = required(self.purchase_date, "purchaseDate")?;
        let purchase_time = required(self.purchase_time, "purchaseTime")?;
        let items = self
            .items
            .ok_or_else(|| AppError::validation("missing required field 'items'"))?;
        let total = required(self.total, "total")?;

        if items.is_empty() {
            return Err(AppError::validation("receipt must contain at least one item"));
        }

        let items = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                Ok(Item {
                    short_description: required(
                        item.short_description,
                        &format!("items[{i}].shortDescription"),
                    )?,
                    price: required(item.price, &format!("items[{i}].price"))?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Receipt::new(
            retailer,
            purchase_date,
            purchase_time,
            items,
            total,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [{"shortDescription": "Mountain Dew 12PK", "price": "6.49"}],
        "total": "6.49"
    }"#;

    #[test]
    fn test_valid_payload_builds_receipt() {
        let receipt = ReceiptRequest::from_json(VALID.as_bytes())
            .unwrap()
            .into_receipt()
            .unwrap();
        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.items[0].price, "6.49");
        assert!(receipt.id.is_empty());
    }

    #[test]
    fn test_server_assigned_fields_are_ignored() {
        let json = r#"{
            "id": "caller-chosen",
            "points": 9000,
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [{"shortDescription": "Gum", "price": "1.00"}],
            "total": "1.00"
        }"#;
        let receipt = ReceiptRequest::from_json(json.as_bytes())
            .unwrap()
            .into_receipt()
            .unwrap();
        assert!(receipt.id.is_empty());
        assert_eq!(receipt.points, 0);
    }

    #[test]
    fn test_missing_field_is_named() {
        let request = ReceiptRequest {
            retailer: Some("Target".to_string()),
            purchase_date: Some("2022-01-01".to_string()),
            purchase_time: None,
            items: Some(vec![ItemRequest::default()]),
            total: Some("1.00".to_string()),
        };
        let err = request.into_receipt().unwrap_err();
        assert!(err.to_string().contains("purchaseTime"));
    }

    #[test]
    fn test_missing_item_field_is_named_with_index() {
        let json = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [
                {"shortDescription": "Gum", "price": "1.00"},
                {"shortDescription": "Soda"}
            ],
            "total": "1.00"
        }"#;
        let err = ReceiptRequest::from_json(json.as_bytes())
            .unwrap()
            .into_receipt()
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.to_string().contains("items[1].price"));
    }

    #[test]
    fn test_empty_items_rejected() {
        let json = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [],
            "total": "0.00"
        }"#;
        let err = ReceiptRequest::from_json(json.as_bytes())
            .unwrap()
            .into_receipt()
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_malformed_json_is_validation_error() {
        let err = ReceiptRequest::from_json(b"{\"retailer\": ").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_numeric_price_is_rejected() {
        let json = r#"{"items": [{"shortDescription": "Gum", "price": 1.25}]}"#;
        assert!(ReceiptRequest::from_json(json.as_bytes()).is_err());
    }
}
