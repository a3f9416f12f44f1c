//! Group labels
//!
//! The display layer may supply localized labels per raw group name; absent
//! an override, a normalized fallback is used.

use std::collections::HashMap;

/// Normalized fallback label: lowercased, with every character outside
/// `a-z` replaced by `_`.
pub fn fallback_label(group: &str) -> String {
    group
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_lowercase() { c } else { '_' })
        .collect()
}

/// Resolves display labels for raw group names.
#[derive(Debug, Clone, Default)]
pub struct LabelResolver {
    overrides: HashMap<String, String>,
}

impl LabelResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overrides(overrides: HashMap<String, String>) -> Self {
        Self { overrides }
    }

    pub fn insert(&mut self, group: impl Into<String>, label: impl Into<String>) {
        self.overrides.insert(group.into(), label.into());
    }

    pub fn resolve(&self, group: &str) -> String {
        self.overrides
            .get(group)
            .cloned()
            .unwrap_or_else(|| fallback_label(group))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_normalization() {
        assert_eq!(fallback_label("Location"), "location");
        assert_eq!(fallback_label("Get identifiers"), "get_identifiers");
        assert_eq!(fallback_label("café"), "caf_");
        assert_eq!(fallback_label("WiFi 2.4GHz"), "wifi____ghz");
    }

    #[test]
    fn test_override_wins() {
        let mut resolver = LabelResolver::new();
        resolver.insert("Location", "Standort");

        assert_eq!(resolver.resolve("Location"), "Standort");
        assert_eq!(resolver.resolve("Contacts"), "contacts");
    }
}
