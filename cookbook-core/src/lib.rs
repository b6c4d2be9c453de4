//! Cookbook core library: entry types, name normalization, the registry, and
//! recipe summarization.
//!
//! Public API surface:
//! - [`types`] — newtypes, validated entries, raw input, [`Summary`]
//! - [`error`] — [`CookbookError`]
//! - [`normalize`](normalize()) — handwriting cleanup for names
//! - [`registry`] — [`Registry`] and registration validation
//! - [`resolver`] — [`summarize`]
//! - [`seed`] — YAML seed files

pub mod error;
pub mod normalize;
pub mod registry;
pub mod resolver;
pub mod seed;
pub mod types;

pub use error::CookbookError;
pub use normalize::normalize;
pub use registry::Registry;
pub use resolver::summarize;
pub use types::{Entry, EntryKind, EntryName, RawEntry, RawRequiredItem, RequiredItem, Summary};
