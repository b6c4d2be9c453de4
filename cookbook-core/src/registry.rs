//! In-memory entry registry and registration validation.
//!
//! # API pattern
//!
//! - [`validate`] is pure: it checks a [`RawEntry`] against a registry and
//!   returns the normalized [`Entry`] without inserting it.
//! - [`Registry::register`] runs `validate` and inserts on success. A failed
//!   registration never touches the map.
//!
//! Required-item references are not checked for existence here; recipes may
//! be registered before the entries they use. Dangling names surface at
//! summarization time.

use std::collections::{BTreeMap, HashSet};

use crate::error::CookbookError;
use crate::normalize::normalize;
use crate::types::{Entry, EntryKind, EntryName, RawEntry, RawRequiredItem, RequiredItem};

// ---------------------------------------------------------------------------
// 1. Registry
// ---------------------------------------------------------------------------

/// Owned mapping from normalized name to entry. Iterates in name order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: BTreeMap<EntryName, Entry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every entry in order, stopping at the first failure.
    pub fn from_entries(
        entries: impl IntoIterator<Item = RawEntry>,
    ) -> Result<Self, CookbookError> {
        let mut registry = Self::new();
        for raw in entries {
            registry.register(raw)?;
        }
        Ok(registry)
    }

    /// Validate `raw` and insert it under its normalized name.
    pub fn register(&mut self, raw: RawEntry) -> Result<EntryName, CookbookError> {
        let entry = validate(&raw, self)?;
        let name = entry.name.clone();
        self.entries.insert(name.clone(), entry);
        Ok(name)
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(&EntryName::from(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }
}

// ---------------------------------------------------------------------------
// 2. Validation
// ---------------------------------------------------------------------------

/// Check `raw` against `registry` and build the normalized entry.
///
/// Order of checks: name, duplicate name, then kind-specific fields.
pub fn validate(raw: &RawEntry, registry: &Registry) -> Result<Entry, CookbookError> {
    let name = normalize_name(&raw.name)?;
    if registry.entries.contains_key(&name) {
        return Err(CookbookError::DuplicateName { name });
    }

    let kind = match raw.kind.as_deref().map(str::to_ascii_lowercase).as_deref() {
        Some("ingredient") => validate_ingredient(&name, raw.cook_time)?,
        Some("recipe") => validate_recipe(&name, raw.required_items.as_deref().unwrap_or_default())?,
        _ => {
            return Err(CookbookError::UnknownKind {
                kind: raw.kind.clone(),
            })
        }
    };

    Ok(Entry { name, kind })
}

fn validate_ingredient(name: &EntryName, cook_time: Option<i64>) -> Result<EntryKind, CookbookError> {
    match cook_time.and_then(|t| u64::try_from(t).ok()) {
        Some(cook_time) => Ok(EntryKind::Ingredient { cook_time }),
        None => Err(CookbookError::InvalidCookTime { name: name.clone() }),
    }
}

fn validate_recipe(
    recipe: &EntryName,
    items: &[RawRequiredItem],
) -> Result<EntryKind, CookbookError> {
    let mut seen: HashSet<EntryName> = HashSet::with_capacity(items.len());
    let mut required_items = Vec::with_capacity(items.len());

    for item in items {
        let name = normalize_name(&item.name)?;
        let quantity = match u64::try_from(item.quantity) {
            Ok(q) if q > 0 => q,
            _ => {
                return Err(CookbookError::InvalidQuantity {
                    recipe: recipe.clone(),
                    item: name,
                    quantity: item.quantity,
                })
            }
        };
        if !seen.insert(name.clone()) {
            return Err(CookbookError::DuplicateRequiredItem {
                recipe: recipe.clone(),
                item: name,
            });
        }
        required_items.push(RequiredItem { name, quantity });
    }

    Ok(EntryKind::Recipe { required_items })
}

fn normalize_name(raw: &str) -> Result<EntryName, CookbookError> {
    normalize(raw)
        .map(EntryName::from)
        .ok_or_else(|| CookbookError::InvalidName {
            raw: raw.to_owned(),
        })
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
