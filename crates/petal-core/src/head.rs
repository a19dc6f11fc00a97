//! Document head content contributed by pages.

use serde::Serialize;

use crate::html_escape;

/// Head content for a page or document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeadContent {
    /// Page title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Meta tags (name, content).
    pub meta: Vec<(String, String)>,
    /// Stylesheet hrefs.
    pub stylesheets: Vec<String>,
}

impl HeadContent {
    /// Create new head content with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add a stylesheet link.
    pub fn with_stylesheet(mut self, href: &str) -> Self {
        self.stylesheets.push(href.to_string());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.meta.is_empty() && self.stylesheets.is_empty()
    }

    /// Layer `page` over `self`.
    ///
    /// The page title wins when set. A page meta tag replaces a default one
    /// with the same name; other tags and stylesheets are appended.
    pub fn merged_with(&self, page: &HeadContent) -> HeadContent {
        let mut merged = self.clone();

        if page.title.is_some() {
            merged.title = page.title.clone();
        }

        for (name, content) in &page.meta {
            match merged.meta.iter_mut().find(|(n, _)| n == name) {
                Some(existing) => existing.1 = content.clone(),
                None => merged.meta.push((name.clone(), content.clone())),
            }
        }

        for href in &page.stylesheets {
            if !merged.stylesheets.contains(href) {
                merged.stylesheets.push(href.clone());
            }
        }

        merged
    }

    /// Render head content to HTML.
    pub fn render(&self) -> String {
        let mut html = String::new();

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", html_escape(title)));
        }

        for (name, content) in &self.meta {
            html.push_str(&format!(
                r#"<meta name="{}" content="{}">"#,
                html_escape(name),
                html_escape(content)
            ));
            html.push('\n');
        }

        for href in &self.stylesheets {
            html.push_str(&format!(
                r#"<link rel="stylesheet" href="{}">"#,
                html_escape(href)
            ));
            html.push('\n');
        }

        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_title_meta_links() {
        let head = HeadContent::new("Sample Title")
            .with_meta("description", "demo")
            .with_stylesheet("/style.css");

        assert_eq!(
            head.render(),
            "<title>Sample Title</title>\n\
             <meta name=\"description\" content=\"demo\">\n\
             <link rel=\"stylesheet\" href=\"/style.css\">\n"
        );
    }

    #[test]
    fn test_empty_head_renders_nothing() {
        let head = HeadContent::default();
        assert!(head.is_empty());
        assert_eq!(head.render(), "");
    }

    #[test]
    fn test_merge_page_title_wins() {
        let defaults = HeadContent::new("Site");
        let merged = defaults.merged_with(&HeadContent::new("Sample Title"));
        assert_eq!(merged.title.as_deref(), Some("Sample Title"));
    }

    #[test]
    fn test_merge_keeps_default_title() {
        let defaults = HeadContent::new("Site").with_meta("viewport", "width=device-width");
        let merged = defaults.merged_with(&HeadContent::default());
        assert_eq!(merged, defaults);
    }

    #[test]
    fn test_merge_meta_replaces_by_name() {
        let defaults = HeadContent::default()
            .with_meta("description", "site")
            .with_meta("viewport", "width=device-width");
        let page = HeadContent::default()
            .with_meta("description", "page")
            .with_meta("robots", "noindex");

        let merged = defaults.merged_with(&page);
        assert_eq!(
            merged.meta,
            vec![
                ("description".to_string(), "page".to_string()),
                ("viewport".to_string(), "width=device-width".to_string()),
                ("robots".to_string(), "noindex".to_string()),
            ]
        );
    }

    #[test]
    fn test_merge_stylesheets_dedup() {
        let defaults = HeadContent::default().with_stylesheet("/a.css");
        let page = HeadContent::default()
            .with_stylesheet("/a.css")
            .with_stylesheet("/b.css");

        assert_eq!(
            defaults.merged_with(&page).stylesheets,
            vec!["/a.css", "/b.css"]
        );
    }
}
