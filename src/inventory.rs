// ABOUTME: Pantry inventory sources feeding the suggestion engine
// ABOUTME: In-memory and JSON-file readers plus a tolerant snapshot decoder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Inventory
//!
//! The engine only ever asks for "every ingredient right now". Anything that
//! can answer that (a database, a sync service, a file) implements
//! [`InventoryReader`].

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use serde_json::Value;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::models::{IngredientCategory, PantryItem};

/// Read access to the current pantry snapshot
#[async_trait]
pub trait InventoryReader: Send + Sync {
    /// Every ingredient currently recorded
    ///
    /// # Errors
    ///
    /// Returns an error when the inventory cannot be loaded at all
    async fn get_all_ingredients(&self) -> AppResult<Vec<PantryItem>>;
}

/// Decode a raw JSON snapshot, skipping entries that are not valid items
///
/// Accepts an array of items or an object with an `items` array. Anything
/// else decodes to an empty pantry.
#[must_use]
pub fn parse_inventory_snapshot(value: &Value) -> Vec<PantryItem> {
    let entries = match value {
        Value::Array(entries) => entries.as_slice(),
        Value::Object(map) => map
            .get("items")
            .and_then(Value::as_array)
            .map_or(&[][..], Vec::as_slice),
        _ => &[],
    };

    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            if !entry.is_object() {
                debug!(index, "Skipping non-object pantry entry");
                return None;
            }
            match serde_json::from_value::<PantryItem>(entry.clone()) {
                Ok(item) => Some(item),
                Err(e) => {
                    debug!(index, error = %e, "Skipping invalid pantry entry");
                    None
                }
            }
        })
        .collect()
}

/// Pantry held in memory, replaceable at runtime
#[derive(Debug, Default)]
pub struct InMemoryInventory {
    items: RwLock<Vec<PantryItem>>,
}

impl InMemoryInventory {
    /// Inventory with a fixed starting snapshot
    #[must_use]
    pub fn new(items: Vec<PantryItem>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    /// Replace the whole snapshot
    pub async fn replace(&self, items: Vec<PantryItem>) {
        *self.items.write().await = items;
    }

    /// A small, realistic pantry for local runs, dated relative to `today`
    #[must_use]
    pub fn demo(today: NaiveDate) -> Self {
        Self::new(demo_pantry(today))
    }
}

#[async_trait]
impl InventoryReader for InMemoryInventory {
    async fn get_all_ingredients(&self) -> AppResult<Vec<PantryItem>> {
        Ok(self.items.read().await.clone())
    }
}

/// Pantry read from a JSON file on every request
#[derive(Debug, Clone)]
pub struct JsonFileInventory {
    path: PathBuf,
}

impl JsonFileInventory {
    /// Reader for the file at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl InventoryReader for JsonFileInventory {
    async fn get_all_ingredients(&self) -> AppResult<Vec<PantryItem>> {
        let raw = fs::read_to_string(&self.path).await.map_err(|e| {
            AppError::from(e).with_resource_id(self.path.display().to_string())
        })?;
        let value: Value = serde_json::from_str(&raw)?;
        if !value.is_array() && !value.is_object() {
            return Err(AppError::invalid_format(format!(
                "Pantry file {} must contain an array or an object with an items array",
                self.path.display()
            )));
        }
        let items = parse_inventory_snapshot(&value);
        debug!(path = %self.path.display(), count = items.len(), "Loaded pantry file");
        Ok(items)
    }
}

fn demo_pantry(today: NaiveDate) -> Vec<PantryItem> {
    vec![
        PantryItem::new("Chicken breast", IngredientCategory::Protein)
            .with_id("demo-1")
            .with_quantity("2", "pieces")
            .with_expiry(today + Duration::days(2))
            .with_purchase_date(today - Duration::days(1)),
        PantryItem::new("Spinach", IngredientCategory::Vegetables)
            .with_id("demo-2")
            .with_quantity("1", "bag")
            .with_expiry(today + Duration::days(1))
            .with_usage_frequency(4),
        PantryItem::new("Bell pepper", IngredientCategory::Vegetables)
            .with_id("demo-3")
            .with_quantity("3", "pieces")
            .with_expiry(today + Duration::days(5)),
        PantryItem::new("Rice", IngredientCategory::Grains)
            .with_id("demo-4")
            .with_quantity("2", "kg")
            .with_usage_frequency(12),
        PantryItem::new("Spaghetti", IngredientCategory::Grains)
            .with_id("demo-5")
            .with_quantity("500", "g")
            .with_usage_frequency(3),
        PantryItem::new("Eggs", IngredientCategory::Protein)
            .with_id("demo-6")
            .with_quantity("6", "pieces")
            .with_expiry(today + Duration::days(10))
            .with_usage_frequency(8),
        PantryItem::new("Cheddar", IngredientCategory::Dairy)
            .with_id("demo-7")
            .with_quantity("200", "g")
            .with_expiry(today + Duration::days(14)),
        PantryItem::new("Tomatoes", IngredientCategory::Vegetables)
            .with_id("demo-8")
            .with_quantity("4", "pieces")
            .with_expiry(today + Duration::days(3)),
        PantryItem::new("Olive oil", IngredientCategory::Oils)
            .with_id("demo-9")
            .with_quantity("1", "bottle")
            .with_usage_frequency(20),
        PantryItem::new("Cumin", IngredientCategory::Spices)
            .with_id("demo-10")
            .with_quantity("1", "jar")
            .with_usage_frequency(2),
    ]
}
