//! Seed files: YAML lists of raw entries registered at startup.
//!
//! ```yaml
//! - type: ingredient
//!   name: Egg
//!   cookTime: 5
//! - type: recipe
//!   name: Omelette
//!   requiredItems:
//!     - name: Egg
//!       quantity: 2
//! ```
//!
//! Seeding is read-only; the registry is never written back to disk.

use std::path::Path;

use crate::error::CookbookError;
use crate::registry::Registry;
use crate::types::RawEntry;

/// Read the raw entries listed in the YAML file at `path`.
///
/// Returns `CookbookError::Io` if unreadable, `CookbookError::Parse` (with
/// path) if the YAML is not a list of entries.
pub fn load_entries_at(path: &Path) -> Result<Vec<RawEntry>, CookbookError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CookbookError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&contents).map_err(|source| CookbookError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Build a registry from the seed file at `path`, registering entries in file order.
pub fn registry_from_file(path: &Path) -> Result<Registry, CookbookError> {
    Registry::from_entries(load_entries_at(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_missing_file_returns_io_error_with_path() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("absent.yaml");
        let err = load_entries_at(&path).unwrap_err();
        assert!(matches!(err, CookbookError::Io { .. }));
        assert!(err.to_string().contains("absent.yaml"));
    }

    #[test]
    fn empty_list_yields_empty_registry() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("entries.yaml");
        std::fs::write(&path, "[]\n").expect("write");
        let registry = registry_from_file(&path).expect("seed");
        assert!(registry.is_empty());
    }
}
