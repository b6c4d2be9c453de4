//! Error types for cookbook-core.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::EntryName;

/// All errors that can arise from registration, summarization, and seeding.
#[derive(Debug, Error)]
pub enum CookbookError {
    /// Normalization left nothing usable (empty after stripping non-letters).
    #[error("invalid name '{raw}': nothing left after normalization")]
    InvalidName { raw: String },

    /// An entry with the same normalized name is already registered.
    #[error("an entry named '{name}' already exists")]
    DuplicateName { name: EntryName },

    /// Ingredient cook time is negative or missing.
    #[error("ingredient '{name}' has an invalid cook time")]
    InvalidCookTime { name: EntryName },

    /// A required item asks for zero or fewer units.
    #[error("recipe '{recipe}' requires {quantity} of '{item}'; quantity must be positive")]
    InvalidQuantity {
        recipe: EntryName,
        item: EntryName,
        quantity: i64,
    },

    /// Two required items of one recipe normalize to the same name.
    #[error("recipe '{recipe}' lists '{item}' more than once")]
    DuplicateRequiredItem { recipe: EntryName, item: EntryName },

    /// The `type` discriminator is missing or not `ingredient`/`recipe`.
    #[error("unknown entry type {kind:?}; expected 'ingredient' or 'recipe'")]
    UnknownKind { kind: Option<String> },

    /// No entry is registered under the requested name.
    #[error("no entry named '{name}'")]
    NotFound { name: String },

    /// The requested entry is an ingredient; only recipes can be summarized.
    #[error("'{name}' is an ingredient, not a recipe")]
    NotARecipe { name: EntryName },

    /// A recipe requires an entry that is not registered.
    #[error("recipe '{recipe}' requires '{missing}', which is not registered")]
    DanglingReference { recipe: EntryName, missing: EntryName },

    /// A recipe transitively requires itself. `path` starts and ends with the
    /// repeated name.
    #[error("cyclic reference: {}", format_path(.path))]
    CyclicReference { path: Vec<EntryName> },

    /// Quantity or cook-time arithmetic exceeded `u64`.
    #[error("arithmetic overflow while expanding '{name}'")]
    Overflow { name: EntryName },

    /// Underlying I/O failure while reading a seed file.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Seed file is not a valid YAML list of entries.
    #[error("failed to parse seed file at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl CookbookError {
    /// Stable machine-readable code for this failure, surfaced by transports.
    pub fn code(&self) -> &'static str {
        match self {
            CookbookError::InvalidName { .. } => "invalid_name",
            CookbookError::DuplicateName { .. } => "duplicate_name",
            CookbookError::InvalidCookTime { .. } => "invalid_cook_time",
            CookbookError::InvalidQuantity { .. } => "invalid_quantity",
            CookbookError::DuplicateRequiredItem { .. } => "duplicate_required_item",
            CookbookError::UnknownKind { .. } => "unknown_kind",
            CookbookError::NotFound { .. } => "not_found",
            CookbookError::NotARecipe { .. } => "not_a_recipe",
            CookbookError::DanglingReference { .. } => "dangling_reference",
            CookbookError::CyclicReference { .. } => "cyclic_reference",
            CookbookError::Overflow { .. } => "overflow",
            CookbookError::Io { .. } => "io",
            CookbookError::Parse { .. } => "parse",
        }
    }
}

fn format_path(path: &[EntryName]) -> String {
    path.iter()
        .map(|name| name.0.as_str())
        .collect::<Vec<_>>()
        .join(" -> ")
}
