// ABOUTME: Pantry inventory item model with category, quantity, and freshness metadata
// ABOUTME: Includes the PrioritizedItem produced by each prioritization pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

const DATE_PREFIX_LEN: usize = "YYYY-MM-DD".len();

/// Fixed set of pantry categories
///
/// Deserialization is lenient: singular forms and a few common synonyms map
/// onto the canonical category, anything unrecognized becomes [`Self::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum IngredientCategory {
    /// Meat, fish, eggs, tofu, legumes
    Protein,
    /// Fresh or frozen vegetables
    Vegetables,
    /// Fresh or dried fruit
    Fruits,
    /// Rice, pasta, bread, oats
    Grains,
    /// Milk, cheese, yogurt
    Dairy,
    /// Dried spices and blends
    Spices,
    /// Fresh or dried herbs
    Herbs,
    /// Cooking oils and fats
    Oils,
    /// Shelf-stable basics (canned goods, sauces, sugar)
    PantryStaples,
    /// Anything else
    #[default]
    Other,
}

impl IngredientCategory {
    /// Canonical label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Protein => "protein",
            Self::Vegetables => "vegetables",
            Self::Fruits => "fruits",
            Self::Grains => "grains",
            Self::Dairy => "dairy",
            Self::Spices => "spices",
            Self::Herbs => "herbs",
            Self::Oils => "oils",
            Self::PantryStaples => "pantry_staples",
            Self::Other => "other",
        }
    }

    /// Map a free-form label onto a category
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "protein" | "proteins" | "meat" | "fish" | "seafood" => Self::Protein,
            "vegetables" | "vegetable" | "veggies" | "veg" | "produce" => Self::Vegetables,
            "fruits" | "fruit" => Self::Fruits,
            "grains" | "grain" | "carbs" | "starch" => Self::Grains,
            "dairy" => Self::Dairy,
            "spices" | "spice" | "seasoning" => Self::Spices,
            "herbs" | "herb" => Self::Herbs,
            "oils" | "oil" | "fats" => Self::Oils,
            "pantry_staples" | "pantry_staple" | "pantry" | "staples" => Self::PantryStaples,
            _ => Self::Other,
        }
    }
}

impl From<String> for IngredientCategory {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

/// A single ingredient on hand, as read from the inventory store
///
/// The engine never mutates these; every pass works on a fresh snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PantryItem {
    /// Identifier assigned by the inventory store
    #[serde(default)]
    pub id: String,
    /// Display name ("Chicken breast")
    pub name: String,
    /// Category used for template substitution and protein bonus
    #[serde(default)]
    pub category: IngredientCategory,
    /// Free-text magnitude ("2", "1.5", "1/2")
    #[serde(default, deserialize_with = "quantity_text")]
    pub quantity: String,
    /// Unit for the magnitude ("kg", "pieces")
    #[serde(default)]
    pub unit: String,
    /// Best-before date
    #[serde(default, alias = "expiryDate", deserialize_with = "lenient_date")]
    pub expiry_date: Option<NaiveDate>,
    /// Date the item was bought
    #[serde(default, alias = "purchaseDate", deserialize_with = "lenient_date")]
    pub purchase_date: Option<NaiveDate>,
    /// How many times the item has been cooked with
    #[serde(default, alias = "usageFrequency")]
    pub usage_frequency: Option<u32>,
}

/// Accept both `"quantity": 3` and `"quantity": "3"`
fn quantity_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        _ => String::new(),
    })
}

/// Accept `"2025-03-12"` or a timestamp such as `"2025-03-12T00:00:00.000Z"`
///
/// The calendar date as written is kept; anything unreadable becomes `None`
/// so the item itself survives.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::String(text) = value else {
        return Ok(None);
    };
    let text = text.trim();
    Ok(NaiveDate::parse_from_str(text, "%Y-%m-%d").ok().or_else(|| {
        text.get(..DATE_PREFIX_LEN)
            .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
    }))
}

impl PantryItem {
    /// Create an item with a name and category
    #[must_use]
    pub fn new(name: impl Into<String>, category: IngredientCategory) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            category,
            quantity: String::new(),
            unit: String::new(),
            expiry_date: None,
            purchase_date: None,
            usage_frequency: None,
        }
    }

    /// Set the inventory identifier
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set quantity and unit
    #[must_use]
    pub fn with_quantity(mut self, quantity: impl Into<String>, unit: impl Into<String>) -> Self {
        self.quantity = quantity.into();
        self.unit = unit.into();
        self
    }

    /// Set the expiry date
    #[must_use]
    pub const fn with_expiry(mut self, date: NaiveDate) -> Self {
        self.expiry_date = Some(date);
        self
    }

    /// Set the purchase date
    #[must_use]
    pub const fn with_purchase_date(mut self, date: NaiveDate) -> Self {
        self.purchase_date = Some(date);
        self
    }

    /// Set the usage counter
    #[must_use]
    pub const fn with_usage_frequency(mut self, count: u32) -> Self {
        self.usage_frequency = Some(count);
        self
    }

    /// Whether the item carries enough data to be cooked with
    #[must_use]
    pub fn is_usable(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Numeric magnitude parsed from the free-text quantity
    ///
    /// Understands integers, decimals, simple fractions and mixed numbers
    /// ("1 1/2"). Trailing text such as a unit is ignored.
    #[must_use]
    pub fn quantity_value(&self) -> Option<f64> {
        parse_magnitude(&self.quantity)
    }

    /// Quantity rendered for prompts ("2 kg"), empty when unknown
    #[must_use]
    pub fn display_quantity(&self) -> String {
        match (self.quantity.trim(), self.unit.trim()) {
            ("", _) => String::new(),
            (quantity, "") => quantity.to_owned(),
            (quantity, unit) => format!("{quantity} {unit}"),
        }
    }
}

fn parse_fraction(token: &str) -> Option<f64> {
    if let Some((numerator, denominator)) = token.split_once('/') {
        let numerator: f64 = numerator.parse().ok()?;
        let denominator: f64 = denominator.parse().ok()?;
        if denominator.abs() < f64::EPSILON {
            return None;
        }
        return Some(numerator / denominator);
    }
    token.parse().ok()
}

fn parse_magnitude(text: &str) -> Option<f64> {
    let mut tokens = text.split_whitespace();
    let first = tokens.next()?;
    // "2kg" -> "2"
    let numeric: String = first
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == '/')
        .collect();
    let whole = parse_fraction(&numeric)?;
    if numeric.len() == first.len() && !numeric.contains('/') {
        if let Some(fraction) = tokens.next().filter(|t| t.contains('/')).and_then(parse_fraction)
        {
            return Some(whole + fraction);
        }
    }
    Some(whole)
}

/// A pantry item annotated by the prioritizer
///
/// Created fresh on each prioritization pass and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrioritizedItem {
    /// The underlying inventory item
    #[serde(flatten)]
    pub item: PantryItem,
    /// Accumulated urgency score, higher means cook sooner
    pub priority: i32,
    /// Whole days until the expiry date, negative once expired
    pub days_until_expiry: Option<i64>,
    /// Expires within three days (or already has)
    pub is_expiring: bool,
    /// Held in a quantity above two units
    pub is_abundant: bool,
}

impl PrioritizedItem {
    /// Item display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.item.name
    }

    /// Item category
    #[must_use]
    pub const fn category(&self) -> IngredientCategory {
        self.item.category
    }
}
