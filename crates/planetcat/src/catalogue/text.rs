//! Bounded text fields.

use serde::{Deserialize, Serialize};

use crate::config::CatalogueConfig;

/// Character limits applied to text fields when records enter a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextLimits {
    /// Maximum characters for names, planet types and emails.
    pub name: usize,
    /// Maximum characters for descriptions.
    pub description: usize,
}

impl TextLimits {
    /// Truncate a name-like field to the name limit.
    #[must_use]
    pub fn name(&self, value: impl Into<String>) -> String {
        truncate(value.into(), self.name)
    }

    /// Truncate a description to the description limit.
    #[must_use]
    pub fn description(&self, value: impl Into<String>) -> String {
        truncate(value.into(), self.description)
    }

    /// Truncate a lookup key the same way stored names are truncated.
    #[must_use]
    pub fn key<'a>(&self, key: &'a str) -> &'a str {
        match key.char_indices().nth(self.name) {
            Some((end, _)) => &key[..end],
            None => key,
        }
    }
}

impl Default for TextLimits {
    fn default() -> Self {
        Self::from(&CatalogueConfig::default())
    }
}

impl From<&CatalogueConfig> for TextLimits {
    fn from(config: &CatalogueConfig) -> Self {
        Self {
            name: config.max_name_length,
            description: config.max_description_length,
        }
    }
}

/// Keep at most `max_chars` characters, never splitting a character.
fn truncate(mut value: String, max_chars: usize) -> String {
    if let Some((end, _)) = value.char_indices().nth(max_chars) {
        value.truncate(end);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits(name: usize, description: usize) -> TextLimits {
        TextLimits { name, description }
    }

    #[test]
    fn test_short_values_unchanged() {
        let limits = limits(10, 20);
        assert_eq!(limits.name("Mars"), "Mars");
        assert_eq!(limits.description("Red and dusty"), "Red and dusty");
    }

    #[test]
    fn test_long_values_truncated() {
        let limits = limits(4, 6);
        assert_eq!(limits.name("Jupiter"), "Jupi");
        assert_eq!(limits.description("Gas giant"), "Gas gi");
    }

    #[test]
    fn test_exact_length_kept() {
        assert_eq!(limits(5, 5).name("Venus"), "Venus");
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let limits = limits(3, 3);
        assert_eq!(limits.name("Érèbe"), "Érè");
        assert_eq!(limits.key("Érèbe"), "Érè");
    }

    #[test]
    fn test_key_matches_stored_name() {
        let limits = limits(6, 10);
        let stored = limits.name("Kepler-452b");
        assert_eq!(limits.key("Kepler-452b"), stored);
    }

    #[test]
    fn test_default_limits_follow_config() {
        let limits = TextLimits::default();
        assert_eq!(limits.name, 49);
        assert_eq!(limits.description, 199);
    }
}
