//! Application configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a Petal application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application name.
    pub name: String,
    /// Document language (the `lang` attribute on `<html>`).
    pub lang: String,
    /// Default page title when a page sets none.
    pub default_title: String,
    /// CSS file path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "PetalApp".to_string(),
            lang: "en".to_string(),
            default_title: "Petal".to_string(),
            css_path: None,
        }
    }
}

impl AppConfig {
    /// Create a new configuration with the given app name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the document language.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Set the default page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.default_title = title.into();
        self
    }

    /// Set the CSS file path.
    pub fn with_css(mut self, path: impl Into<String>) -> Self {
        self.css_path = Some(path.into());
        self
    }
}
