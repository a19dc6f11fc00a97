//! Document template.

use petal_core::{html_escape, AppConfig, HeadContent, Node};

/// Id of the element the page tree is mounted into.
pub const ROOT_ID: &str = "__petal";

/// Document template wrapping every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Include doctype declaration.
    pub doctype: bool,
    /// `lang` attribute on `<html>`.
    pub lang: Option<String>,
    /// Head content every page starts from.
    pub head: HeadContent,
    /// HTML before the page root (opening body, wrapper divs, etc.).
    pub body_start: String,
    /// HTML after the page root (closing tags).
    pub body_end: String,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(HeadContent::default())
    }
}

impl Document {
    /// Create a document with the standard structure and no language.
    pub fn new(head: HeadContent) -> Self {
        Self {
            doctype: true,
            lang: None,
            head,
            body_start: "<body>\n".to_string(),
            body_end: "</body>\n</html>".to_string(),
        }
    }

    /// Create a document from application configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        let mut head = HeadContent::new(config.default_title.as_str())
            .with_meta("viewport", "width=device-width, initial-scale=1");
        if let Some(css) = &config.css_path {
            head = head.with_stylesheet(css);
        }

        Self::new(head).with_lang(config.lang.as_str())
    }

    /// Set the `lang` attribute.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Set custom body start HTML.
    pub fn with_body_start(mut self, html: impl Into<String>) -> Self {
        self.body_start = html.into();
        self
    }

    /// Set custom body end HTML.
    pub fn with_body_end(mut self, html: impl Into<String>) -> Self {
        self.body_end = html.into();
        self
    }

    /// Render the opening part of the document, with `page_head` layered
    /// over the document head.
    pub fn render_opening(&self, page_head: &HeadContent) -> String {
        let mut html = String::new();

        if self.doctype {
            html.push_str("<!DOCTYPE html>\n");
        }

        match &self.lang {
            Some(lang) => html.push_str(&format!("<html lang=\"{}\">\n", html_escape(lang))),
            None => html.push_str("<html>\n"),
        }
        html.push_str("<head>\n<meta charset=\"utf-8\">\n");
        html.push_str(&self.head.merged_with(page_head).render());
        html.push_str("</head>\n");
        html.push_str(&self.body_start);

        html
    }

    /// Render the closing part of the document.
    pub fn render_closing(&self) -> String {
        self.body_end.clone()
    }

    /// Render a full document around a page tree.
    pub fn render(&self, page_head: &HeadContent, page: &Node) -> String {
        format!(
            "{}<div id=\"{}\">{}</div>\n{}",
            self.render_opening(page_head),
            ROOT_ID,
            page.to_html(),
            self.render_closing()
        )
    }
}

#[cfg(test)]
mod tests {
    use petal_core::Element;

    use super::*;

    // === Document Tests ===

    #[test]
    fn test_default_document() {
        let doc = Document::default();
        let html = doc.render_opening(&HeadContent::default());

        assert!(html.starts_with("<!DOCTYPE html>\n<html>\n<head>\n"));
        assert!(html.ends_with("</head>\n<body>\n"));
        assert_eq!(doc.render_closing(), "</body>\n</html>");
    }

    #[test]
    fn test_lang_attribute() {
        let doc = Document::default().with_lang("en");
        let html = doc.render_opening(&HeadContent::default());

        assert!(html.contains("<html lang=\"en\">"));
    }

    #[test]
    fn test_without_doctype() {
        let mut doc = Document::default();
        doc.doctype = false;

        assert!(doc
            .render_opening(&HeadContent::default())
            .starts_with("<html>"));
    }

    #[test]
    fn test_page_title_overrides_default() {
        let doc = Document::new(HeadContent::new("Site"));
        let html = doc.render_opening(&HeadContent::new("Sample Title"));

        assert!(html.contains("<title>Sample Title</title>"));
        assert!(!html.contains("<title>Site</title>"));
    }

    #[test]
    fn test_from_config() {
        let config = AppConfig::new("blog")
            .with_lang("de")
            .with_title("Blog")
            .with_css("/style.css");
        let doc = Document::from_config(&config);
        let html = doc.render_opening(&HeadContent::default());

        assert!(html.contains("<html lang=\"de\">"));
        assert!(html.contains("<title>Blog</title>"));
        assert!(html.contains(r#"<link rel="stylesheet" href="/style.css">"#));
        assert!(html.contains(r#"<meta name="viewport""#));
    }

    #[test]
    fn test_custom_body() {
        let doc = Document::default()
            .with_body_start("<body class=\"app\">\n")
            .with_body_end("<script src=\"/app.js\"></script>\n</body>\n</html>");
        let page = Node::from(Element::new("p").child("hi"));
        let html = doc.render(&HeadContent::default(), &page);

        assert!(html.contains(
            "<body class=\"app\">\n<div id=\"__petal\"><p>hi</p></div>\n<script"
        ));
        assert!(html.ends_with("</html>"));
    }
}
