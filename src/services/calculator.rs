// src/services/calculator.rs

//! Points calculator.
//!
//! Parses the raw receipt fields, then runs every rule in `rules` over the
//! parsed values. Parsing happens up front in a fixed order (date, time,
//! total, item prices) so the first bad field is the one reported.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::error::CalculationError;
use crate::models::{Money, Receipt};
use crate::services::rules;

/// Computes the points score of a receipt.
pub trait PointsCalculator: Send + Sync {
    /// Score a receipt. Pure: the same receipt always yields the same result.
    fn calculate(&self, receipt: &Receipt) -> Result<u64, CalculationError>;
}

/// Per-rule contributions to a receipt's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PointsBreakdown {
    pub retailer_name: u64,
    pub round_dollar: u64,
    pub quarter_multiple: u64,
    pub item_pairs: u64,
    pub item_descriptions: u64,
    pub odd_day: u64,
    pub afternoon: u64,
}

impl PointsBreakdown {
    /// Labelled contributions, in rule order.
    pub fn entries(&self) -> [(&'static str, u64); 7] {
        [
            ("retailer name", self.retailer_name),
            ("round dollar total", self.round_dollar),
            ("multiple of 0.25", self.quarter_multiple),
            ("item pairs", self.item_pairs),
            ("item descriptions", self.item_descriptions),
            ("odd purchase day", self.odd_day),
            ("afternoon purchase", self.afternoon),
        ]
    }

    pub fn total(&self) -> u64 {
        self.entries()
            .iter()
            .fold(0u64, |sum, (_, points)| sum.saturating_add(*points))
    }
}

/// Receipt fields after parsing.
#[derive(Debug, Clone)]
struct ParsedReceipt {
    date: NaiveDate,
    time: NaiveTime,
    total: Money,
    prices: Vec<Money>,
}

/// True when `value` has exactly the layout of `shape`, where `9` stands for
/// any ASCII digit and every other character must match literally.
fn matches_shape(value: &str, shape: &str) -> bool {
    value.len() == shape.len()
        && value
            .bytes()
            .zip(shape.bytes())
            .all(|(v, s)| if s == b'9' { v.is_ascii_digit() } else { v == s })
}

/// Parse a `YYYY-MM-DD` purchase date.
pub fn parse_purchase_date(value: &str) -> Result<NaiveDate, CalculationError> {
    if !matches_shape(value, "9999-99-99") {
        return Err(CalculationError::InvalidDateFormat(value.to_string()));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| CalculationError::InvalidDateFormat(value.to_string()))
}

/// Parse a 24-hour `HH:MM` purchase time.
pub fn parse_purchase_time(value: &str) -> Result<NaiveTime, CalculationError> {
    if !matches_shape(value, "99:99") {
        return Err(CalculationError::InvalidTimeFormat(value.to_string()));
    }
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| CalculationError::InvalidTimeFormat(value.to_string()))
}

/// The standard calculator: the seven fixed rules, summed.
#[derive(Debug, Clone, Copy, Default)]
pub struct RulesCalculator;

impl RulesCalculator {
    pub fn new() -> Self {
        Self
    }

    fn parse(receipt: &Receipt) -> Result<ParsedReceipt, CalculationError> {
        let date = parse_purchase_date(&receipt.purchase_date)?;
        let time = parse_purchase_time(&receipt.purchase_time)?;
        let total = receipt
            .total
            .parse::<Money>()
            .map_err(|_| CalculationError::InvalidTotalFormat(receipt.total.clone()))?;
        let prices = receipt
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                item.price
                    .parse::<Money>()
                    .map_err(|_| CalculationError::InvalidPriceFormat {
                        index,
                        price: item.price.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ParsedReceipt {
            date,
            time,
            total,
            prices,
        })
    }

    /// Score a receipt rule by rule.
    pub fn breakdown(&self, receipt: &Receipt) -> Result<PointsBreakdown, CalculationError> {
        let parsed = Self::parse(receipt)?;

        let item_descriptions = receipt
            .items
            .iter()
            .zip(&parsed.prices)
            .map(|(item, price)| rules::item_description_points(item, *price))
            .fold(0u64, u64::saturating_add);

        Ok(PointsBreakdown {
            retailer_name: rules::retailer_name_points(&receipt.retailer),
            round_dollar: rules::round_dollar_points(parsed.total),
            quarter_multiple: rules::quarter_multiple_points(parsed.total),
            item_pairs: rules::item_pair_points(receipt.item_count()),
            item_descriptions,
            odd_day: rules::odd_day_points(parsed.date),
            afternoon: rules::afternoon_points(parsed.time),
        })
    }
}

impl PointsCalculator for RulesCalculator {
    fn calculate(&self, receipt: &Receipt) -> Result<u64, CalculationError> {
        let breakdown = self.breakdown(receipt)?;
        log::debug!("Points breakdown for {}: {:?}", receipt.retailer, breakdown);
        Ok(breakdown.total())
    }
}
