// ABOUTME: Integration tests for pantry inventory readers
// ABOUTME: Covers JSON file loading, tolerant snapshot decoding, and the in-memory store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::fs;

use anyhow::Result;
use chrono::{Duration, NaiveDate};
use pantry_chef::errors::ErrorCode;
use pantry_chef::inventory::{
    parse_inventory_snapshot, InMemoryInventory, InventoryReader, JsonFileInventory,
};
use pantry_chef::models::{IngredientCategory, PantryItem};
use serde_json::json;
use tempfile::TempDir;

fn write_pantry(dir: &TempDir, contents: &str) -> JsonFileInventory {
    let path = dir.path().join("pantry.json");
    fs::write(&path, contents).unwrap();
    JsonFileInventory::new(path)
}

#[tokio::test]
async fn test_json_file_with_array() -> Result<()> {
    let dir = TempDir::new()?;
    let inventory = write_pantry(
        &dir,
        r#"[
            {"id": "1", "name": "Spinach", "category": "vegetables", "quantity": 1, "unit": "bag",
             "expiry_date": "2025-03-11", "usage_frequency": 4},
            {"name": "Lentils", "category": "protein", "quantity": "500", "unit": "g"}
        ]"#,
    );

    let items = inventory.get_all_ingredients().await?;
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "Spinach");
    assert_eq!(items[0].quantity, "1");
    assert_eq!(
        items[0].expiry_date,
        Some(NaiveDate::from_ymd_opt(2025, 3, 11).unwrap())
    );
    assert_eq!(items[0].usage_frequency, Some(4));
    assert_eq!(items[1].category, IngredientCategory::Protein);
    assert!(items[1].id.is_empty());
    assert!(items[1].usage_frequency.is_none());

    Ok(())
}

#[tokio::test]
async fn test_json_file_with_items_object_and_camel_case() -> Result<()> {
    let dir = TempDir::new()?;
    let inventory = write_pantry(
        &dir,
        r#"{"items": [
            {"name": "Yogurt", "category": "Dairy", "quantity": "2", "unit": "cups",
             "expiryDate": "2025-03-12", "purchaseDate": "2025-03-09", "usageFrequency": 1}
        ]}"#,
    );

    let items = inventory.get_all_ingredients().await?;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].category, IngredientCategory::Dairy);
    assert_eq!(
        items[0].purchase_date,
        Some(NaiveDate::from_ymd_opt(2025, 3, 9).unwrap())
    );
    assert_eq!(items[0].usage_frequency, Some(1));

    Ok(())
}

#[tokio::test]
async fn test_missing_file_is_not_found() -> Result<()> {
    let dir = TempDir::new()?;
    let inventory = JsonFileInventory::new(dir.path().join("absent.json"));

    let error = inventory.get_all_ingredients().await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert!(error.context.resource_id.unwrap().ends_with("absent.json"));

    Ok(())
}

#[tokio::test]
async fn test_scalar_top_level_is_rejected() -> Result<()> {
    let dir = TempDir::new()?;
    let inventory = write_pantry(&dir, "42");

    let error = inventory.get_all_ingredients().await.unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);

    Ok(())
}

#[tokio::test]
async fn test_malformed_json_is_a_serialization_error() -> Result<()> {
    let dir = TempDir::new()?;
    let inventory = write_pantry(&dir, "[{\"name\": ");

    let error = inventory.get_all_ingredients().await.unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);

    Ok(())
}

#[test]
fn test_snapshot_skips_invalid_entries() {
    let value = json!([
        {"name": "Carrots", "category": "veggies"},
        "not an object",
        {"category": "protein"},
        {"name": "Mystery", "category": "unknown-aisle"},
        {"name": "Oats", "category": "grains", "expiry_date": "not-a-date"}
    ]);

    let items = parse_inventory_snapshot(&value);
    let names: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["Carrots", "Mystery", "Oats"]);
    assert_eq!(items[0].category, IngredientCategory::Vegetables);
    assert_eq!(items[1].category, IngredientCategory::Other);
    assert!(items[2].expiry_date.is_none());
}

#[test]
fn test_snapshot_keeps_items_with_timestamp_dates() {
    let value = json!([
        {"name": "Tomato", "category": "vegetables", "expiryDate": "2025-03-12T00:00:00.000Z"},
        {"name": "Rice", "category": "grains"}
    ]);

    let items = parse_inventory_snapshot(&value);
    let names: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["Tomato", "Rice"]);
    assert_eq!(items[0].expiry_date, NaiveDate::from_ymd_opt(2025, 3, 12));
}

#[test]
fn test_snapshot_of_unexpected_shape_is_empty() {
    assert!(parse_inventory_snapshot(&json!("pantry")).is_empty());
    assert!(parse_inventory_snapshot(&json!({"ingredients": []})).is_empty());
}

#[tokio::test]
async fn test_in_memory_replace() -> Result<()> {
    let inventory = InMemoryInventory::new(Vec::new());
    assert!(inventory.get_all_ingredients().await?.is_empty());

    inventory
        .replace(vec![PantryItem::new("Tofu", IngredientCategory::Protein)])
        .await;

    let items = inventory.get_all_ingredients().await?;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Tofu");

    Ok(())
}

#[tokio::test]
async fn test_demo_pantry_is_usable() -> Result<()> {
    let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    let items = InMemoryInventory::demo(today).get_all_ingredients().await?;

    assert!(items.len() >= 3);
    assert!(items.iter().all(PantryItem::is_usable));
    assert!(items
        .iter()
        .any(|item| item.expiry_date.is_some_and(|date| date <= today + Duration::days(3))));

    Ok(())
}
