//! Token configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for a [`Token`](crate::Token).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    /// Token label, recorded on log lines.
    pub label: String,
    /// Upper bound applied to every `find` page request. `None` for no cap.
    pub max_find_page: Option<usize>,
    /// Refuse objects that carry two attributes of the same type.
    pub reject_duplicate_attributes: bool,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            label: String::from("token"),
            max_find_page: None,
            reject_duplicate_attributes: false,
        }
    }
}

impl TokenConfig {
    /// Check the configuration for values the token cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_find_page == Some(0) {
            return Err(ConfigError::ZeroFindPage);
        }
        if self.label.len() > 32 {
            return Err(ConfigError::LabelTooLong(self.label.len()));
        }
        Ok(())
    }

    /// Apply the page cap to a caller's request.
    pub fn page_size(&self, requested: usize) -> usize {
        match self.max_find_page {
            Some(cap) => requested.min(cap),
            None => requested,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = TokenConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.page_size(1000), 1000);
    }

    #[test]
    fn test_page_cap() {
        let config = TokenConfig {
            max_find_page: Some(8),
            ..TokenConfig::default()
        };
        assert_eq!(config.page_size(100), 8);
        assert_eq!(config.page_size(3), 3);
    }

    #[test]
    fn test_invalid_values() {
        let zero = TokenConfig {
            max_find_page: Some(0),
            ..TokenConfig::default()
        };
        assert_eq!(zero.validate(), Err(ConfigError::ZeroFindPage));

        let long = TokenConfig {
            label: "x".repeat(33),
            ..TokenConfig::default()
        };
        assert_eq!(long.validate(), Err(ConfigError::LabelTooLong(33)));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: TokenConfig = serde_json::from_str(r#"{"max_find_page": 4}"#).unwrap();
        assert_eq!(config.max_find_page, Some(4));
        assert_eq!(config.label, "token");
        assert!(!config.reject_duplicate_attributes);
    }
}
