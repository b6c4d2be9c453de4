//! Domain types for the cookbook registry.
//!
//! Validated types ([`Entry`], [`EntryKind`], [`RequiredItem`]) only ever hold
//! normalized names. Unvalidated input arrives as [`RawEntry`], whose serde
//! shape is the JSON / YAML wire format.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A normalized entry name; the registry key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryName(pub String);

impl EntryName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for EntryName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EntryName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Validated entries
// ---------------------------------------------------------------------------

/// One `(name, quantity)` dependency of a recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredItem {
    pub name: EntryName,
    pub quantity: u64,
}

/// Ingredient or recipe payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    /// Atomic ingredient; `cook_time` is per single unit.
    Ingredient { cook_time: u64 },
    /// Composite recipe; items keep their registration order.
    Recipe { required_items: Vec<RequiredItem> },
}

impl EntryKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Ingredient { .. } => "ingredient",
            EntryKind::Recipe { .. } => "recipe",
        }
    }
}

/// A registered cookbook entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: EntryName,
    pub kind: EntryKind,
}

// ---------------------------------------------------------------------------
// Raw input
// ---------------------------------------------------------------------------

/// A required item as submitted, before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRequiredItem {
    pub name: String,
    pub quantity: i64,
}

/// An entry as submitted over HTTP or listed in a seed file.
///
/// Numeric fields are signed so that negative values reach validation
/// instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntry {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_items: Option<Vec<RawRequiredItem>>,
}

impl RawEntry {
    pub fn ingredient(name: impl Into<String>, cook_time: i64) -> Self {
        Self {
            kind: Some("ingredient".to_string()),
            name: name.into(),
            cook_time: Some(cook_time),
            required_items: None,
        }
    }

    pub fn recipe<N: Into<String>>(
        name: impl Into<String>,
        items: impl IntoIterator<Item = (N, i64)>,
    ) -> Self {
        Self {
            kind: Some("recipe".to_string()),
            name: name.into(),
            cook_time: None,
            required_items: Some(
                items
                    .into_iter()
                    .map(|(name, quantity)| RawRequiredItem {
                        name: name.into(),
                        quantity,
                    })
                    .collect(),
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Flattened expansion of a recipe.
///
/// `ingredients` keeps first-discovery order; repeated ingredients are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub name: EntryName,
    pub cook_time: u64,
    pub ingredients: IndexMap<EntryName, u64>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
