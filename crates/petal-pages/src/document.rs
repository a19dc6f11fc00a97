//! Site document.

use petal_core::AppConfig;
use petal_shell::Document;

/// Document for every page of the site. Always declares `lang="en"`.
pub fn site_document(config: &AppConfig) -> Document {
    Document::from_config(config).with_lang("en")
}
