//! Loading candidate lists from JSON.
//!
//! A list is a JSON array of objects with at least `name` and `slug`; any
//! other fields are ignored.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::candidate::{Candidate, PickerItem};
use crate::error::{PickerError, Result};

/// Parse a candidate list from a JSON string.
pub fn parse_candidates(json: &str) -> Result<Vec<Candidate>> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a candidate list file.
pub fn load_candidates(path: impl AsRef<Path>) -> Result<Vec<Candidate>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| PickerError::io(path, e))?;
    let candidates = parse_candidates(&contents)?;
    log::debug!("Loaded {} candidates from {}", candidates.len(), path.display());
    Ok(candidates)
}

/// Fail on the first key that appears twice.
///
/// Row identity depends on unique keys. The selector never checks this
/// itself; hosts that take lists from untrusted sources can.
pub fn ensure_unique_slugs<T: PickerItem>(items: &[T]) -> Result<()> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.item_key()) {
            return Err(PickerError::DuplicateSlug(item.item_key().to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_people_list() {
        let json = r#"[
            {"name": "Carolus Haverbeke", "born": 1832, "slug": "carolus-haverbeke-1832"},
            {"name": "Emma de Milliano", "born": 1876, "slug": "emma-de-milliano-1876"}
        ]"#;
        let people = parse_candidates(json).unwrap();
        assert_eq!(people.len(), 2);
        assert_eq!(people[1].name, "Emma de Milliano");
        assert_eq!(people[1].slug, "emma-de-milliano-1876");
    }

    #[test]
    fn test_parse_rejects_missing_slug() {
        let err = parse_candidates(r#"[{"name": "Nobody"}]"#).unwrap_err();
        assert!(matches!(err, PickerError::Json(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_candidates("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, PickerError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn test_load_roundtrip_through_file() {
        let path = std::env::temp_dir().join(format!("picker-catalog-{}.json", std::process::id()));
        fs::write(&path, r#"[{"name": "Alice", "slug": "a"}]"#).unwrap();
        let people = load_candidates(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(people, vec![Candidate::new("Alice", "a")]);
    }

    #[test]
    fn test_duplicate_slugs() {
        let people = vec![
            Candidate::new("Alice", "a"),
            Candidate::new("Alicia", "a"),
        ];
        assert!(matches!(
            ensure_unique_slugs(&people),
            Err(PickerError::DuplicateSlug(slug)) if slug == "a"
        ));
        assert!(ensure_unique_slugs(&people[..1]).is_ok());
    }
}
