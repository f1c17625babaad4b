//! JSON block files: a page of content described as data.
//!
//! ```json
//! {
//!   "page": { "width": 612, "height": 792 },
//!   "background": { "r": 1, "g": 1, "b": 1 },
//!   "layout": { "margins": { "left": 72 } },
//!   "blocks": [
//!     { "type": "title", "text": "Release Notes" },
//!     { "type": "paragraph", "text": "...", "max_chars": 80 },
//!     { "type": "bullets", "items": ["one", "two"] },
//!     { "type": "spacer", "height": 12 }
//!   ]
//! }
//! ```

use onepage_pdf::{Color, LayoutConfig, PageFlow, PageSize, Result, SinglePageDocument};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockFile {
    #[serde(default)]
    pub page: Option<PageSize>,
    #[serde(default)]
    pub background: Option<Rgb>,
    #[serde(default)]
    pub layout: LayoutConfig,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Title {
        text: String,
    },
    Heading {
        text: String,
    },
    Paragraph {
        text: String,
        #[serde(default)]
        max_chars: Option<usize>,
    },
    Bullets {
        items: Vec<String>,
        #[serde(default)]
        max_chars: Option<usize>,
    },
    Spacer {
        height: f64,
    },
}

impl BlockFile {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Lays out every block in order. `fallback_size` applies when the file
    /// does not name a page size.
    pub fn render(&self, fallback_size: PageSize) -> Result<Vec<u8>> {
        let page_size = self.page.unwrap_or(fallback_size);
        let mut flow = PageFlow::with_config(page_size, self.layout.clone());

        if let Some(Rgb { r, g, b }) = self.background {
            flow.fill_background(Color::rgb(r, g, b));
        }

        for block in &self.blocks {
            match block {
                Block::Title { text } => flow.title(text)?,
                Block::Heading { text } => flow.heading(text)?,
                Block::Paragraph { text, max_chars } => match max_chars {
                    Some(width) => flow.paragraph_with_width(text, *width)?,
                    None => flow.paragraph(text)?,
                },
                Block::Bullets { items, max_chars } => match max_chars {
                    Some(width) => flow.bullets_with_width(items, *width)?,
                    None => flow.bullets(items)?,
                },
                Block::Spacer { height } => flow.spacer(*height)?,
            };
        }

        tracing::debug!(blocks = self.blocks.len(), "laid out block file");
        SinglePageDocument::new(page_size, flow.finish()?).to_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onepage_pdf::PdfError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_all_block_types() {
        let file = BlockFile::from_json(
            r#"{
                "blocks": [
                    {"type": "title", "text": "T"},
                    {"type": "heading", "text": "H"},
                    {"type": "paragraph", "text": "P", "max_chars": 40},
                    {"type": "bullets", "items": ["a", "b"]},
                    {"type": "spacer", "height": 8.5}
                ]
            }"#,
        )
        .unwrap();

        assert!(file.page.is_none());
        assert_eq!(file.layout, LayoutConfig::default());
        assert_eq!(
            file.blocks,
            vec![
                Block::Title { text: "T".into() },
                Block::Heading { text: "H".into() },
                Block::Paragraph {
                    text: "P".into(),
                    max_chars: Some(40)
                },
                Block::Bullets {
                    items: vec!["a".into(), "b".into()],
                    max_chars: None
                },
                Block::Spacer { height: 8.5 },
            ]
        );
    }

    #[test]
    fn test_partial_layout_config_keeps_defaults() {
        let file = BlockFile::from_json(
            r#"{"layout": {"margins": {"left": 72}, "bullet_marker": "* "}, "blocks": []}"#,
        )
        .unwrap();

        assert_eq!(file.layout.margins.left, 72.0);
        assert_eq!(file.layout.margins.top, 54.0);
        assert_eq!(file.layout.bullet_marker, "* ");
        assert_eq!(file.layout.paragraph_width, 92);
    }

    #[test]
    fn test_unknown_block_type_is_rejected() {
        assert!(BlockFile::from_json(r#"{"blocks": [{"type": "image", "src": "x.png"}]}"#).is_err());
    }

    #[test]
    fn test_render_uses_file_page_size_and_background() {
        let file = BlockFile::from_json(
            r#"{
                "page": {"width": 300, "height": 400},
                "background": {"r": 1, "g": 0.5, "b": 0},
                "blocks": [{"type": "heading", "text": "Hello"}]
            }"#,
        )
        .unwrap();

        let bytes = file.render(PageSize::letter()).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/MediaBox [0 0 300 400]"));
        assert!(text.contains("q 1 0.5 0 rg 0 0 300 400 re f Q\n"));
        assert!(text.contains("BT /F1 12.00 Tf 1 0 0 1 54.00 346.00 Tm (Hello) Tj ET"));
    }

    #[test]
    fn test_render_overflow() {
        let blocks = (0..100)
            .map(|i| format!(r#"{{"type": "heading", "text": "Heading {i}"}}"#))
            .collect::<Vec<_>>()
            .join(",");
        let file = BlockFile::from_json(&format!(r#"{{"blocks": [{blocks}]}}"#)).unwrap();

        assert!(matches!(
            file.render(PageSize::letter()),
            Err(PdfError::LayoutOverflow { .. })
        ));
    }
}
