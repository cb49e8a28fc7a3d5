//! Plain-text reports printed by the CLI.

use std::fmt;
use std::path::Path;

use crate::models::{Config, Receipt};
use crate::services::PointsBreakdown;

use super::total_mismatch;

const LABEL_WIDTH: usize = 32;
const VALUE_WIDTH: usize = 10;

/// A scored receipt: the item table followed by the per-rule points.
pub struct ReceiptReport<'a> {
    receipt: &'a Receipt,
    breakdown: &'a PointsBreakdown,
}

impl<'a> ReceiptReport<'a> {
    pub fn new(receipt: &'a Receipt, breakdown: &'a PointsBreakdown) -> Self {
        Self { receipt, breakdown }
    }
}

fn row(f: &mut fmt::Formatter<'_>, label: &str, value: impl fmt::Display) -> fmt::Result {
    writeln!(f, "  {label:<LABEL_WIDTH$} {value:>VALUE_WIDTH$}")
}

impl fmt::Display for ReceiptReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let receipt = self.receipt;
        writeln!(
            f,
            "{} ({} {})",
            receipt.retailer.trim(),
            receipt.purchase_date,
            receipt.purchase_time
        )?;

        for item in &receipt.items {
            row(f, item.short_description.trim(), &item.price)?;
        }
        row(f, "TOTAL", &receipt.total)?;
        if let Some((stated, summed)) = total_mismatch(receipt) {
            writeln!(
                f,
                "  note: stated total {stated} differs from item sum {summed}; scored on the stated total"
            )?;
        }

        writeln!(f)?;
        for (rule, points) in self.breakdown.entries() {
            row(f, rule, points)?;
        }
        row(f, "points", self.breakdown.total())
    }
}

/// The effective configuration after file loading and env overrides.
pub struct ConfigReport<'a> {
    path: &'a Path,
    config: &'a Config,
}

impl<'a> ConfigReport<'a> {
    pub fn new(path: &'a Path, config: &'a Config) -> Self {
        Self { path, config }
    }
}

impl fmt::Display for ConfigReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.config;
        writeln!(f, "{}", self.path.display())?;
        row(f, "bind address", &config.server.bind_address)?;
        row(
            f,
            "shutdown grace",
            format!("{}s", config.server.shutdown_grace_secs),
        )?;
        row(f, "log level", &config.logging.level)?;
        row(f, "json logs", config.logging.json)?;
        match config.store.capacity() {
            Some(capacity) => row(f, "store capacity", capacity),
            None => row(f, "store capacity", "unlimited"),
        }
    }
}
