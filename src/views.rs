//! HTML preview pages, rendered with handlebars.

use handlebars::{Handlebars, RenderError, TemplateError};
use serde::Serialize;

const EMBED_FILE_TEMPLATE: &str = include_str!("../templates/embed_file.hbs");
const FILE_TEMPLATE: &str = include_str!("../templates/file.hbs");

/// The named views the delivery flow can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Rich preview with title, description and theme color.
    EmbedFile,
    /// Plain link preview.
    File,
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            View::EmbedFile => "embedFile",
            View::File => "file",
        }
    }
}

/// Template registry with the built-in views loaded.
pub struct Views {
    registry: Handlebars<'static>,
}

impl Views {
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.register_template_string(View::EmbedFile.name(), EMBED_FILE_TEMPLATE)?;
        registry.register_template_string(View::File.name(), FILE_TEMPLATE)?;
        Ok(Self { registry })
    }

    pub fn render<T: Serialize>(&self, view: View, data: &T) -> Result<String, RenderError> {
        self.registry.render(view.name(), data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_embed_file() {
        let views = Views::new().unwrap();
        let html = views
            .render(
                View::EmbedFile,
                &json!({
                    "url": "https://cdn.example.com/u1/cat.png",
                    "uploader": "alice",
                    "date": "Tue Mar 02 2021 14:05:09 UTC",
                    "embed": { "title": "Cat", "description": "A cat", "color": "#ff0000" },
                }),
            )
            .unwrap();

        assert!(html.contains(r#"<meta property="og:title" content="Cat">"#));
        assert!(html.contains(r#"<meta property="og:description" content="A cat">"#));
        assert!(html.contains(r##"<meta name="theme-color" content="#ff0000">"##));
        assert!(html.contains("https://cdn.example.com/u1/cat.png"));
    }

    #[test]
    fn test_render_embed_file_without_color() {
        let views = Views::new().unwrap();
        let html = views
            .render(
                View::EmbedFile,
                &json!({
                    "url": "https://cdn.example.com/u1/cat.png",
                    "uploader": "alice",
                    "date": "today",
                    "embed": { "title": "Cat", "description": "A cat", "color": null },
                }),
            )
            .unwrap();

        assert!(!html.contains("theme-color"));
    }

    #[test]
    fn test_render_escapes_html() {
        let views = Views::new().unwrap();
        let html = views
            .render(
                View::File,
                &json!({
                    "url": "https://cdn.example.com/u1/x.png",
                    "uploader": "<script>alert(1)</script>",
                    "date": "today",
                }),
            )
            .unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
