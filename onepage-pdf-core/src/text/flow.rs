use crate::content::{ContentStream, Instruction};
use crate::error::{PdfError, Result};
use crate::graphics::Color;
use crate::page::{Margins, PageSize};
use crate::text::{wrap_words, TextStyle};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed layout constants for a [`PageFlow`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    pub margins: Margins,
    /// Cursor advance after a title (larger than the title leading)
    pub title_advance: f64,
    /// Cursor advance after a heading (larger than the heading leading)
    pub heading_advance: f64,
    /// Spacer applied after every paragraph and bullet list
    pub block_spacing: f64,
    /// Extra indent for continuation lines of a bullet item
    pub bullet_indent: f64,
    pub bullet_marker: String,
    /// Default wrap width of paragraphs, in characters
    pub paragraph_width: usize,
    /// Default wrap width of bullet items, in characters
    pub bullet_width: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margins: Margins::default(),
            title_advance: 26.0,
            heading_advance: 16.0,
            block_spacing: 6.0,
            bullet_indent: 14.0,
            bullet_marker: "- ".to_string(),
            paragraph_width: 92,
            bullet_width: 90,
        }
    }
}

/// Lays out text blocks top to bottom on a single page.
///
/// Every call that moves the cursor checks it against the bottom margin. The
/// first overflow fails the call with [`PdfError::LayoutOverflow`] and poisons
/// the flow: every later call, and [`PageFlow::finish`], fails the same way.
///
/// ```rust
/// use onepage_pdf::{PageFlow, PageSize};
///
/// # fn main() -> onepage_pdf::Result<()> {
/// let mut flow = PageFlow::new(PageSize::letter());
/// flow.title("Quarterly Summary")?
///     .heading("Highlights")?
///     .paragraph("Revenue grew in every region.")?
///     .bullets(["North: +4%", "South: +7%"])?;
/// let content = flow.finish()?;
/// assert!(!content.is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PageFlow {
    page_size: PageSize,
    config: LayoutConfig,
    cursor_y: f64,
    instructions: Vec<Instruction>,
    overflowed_at: Option<f64>,
}

impl PageFlow {
    pub fn new(page_size: PageSize) -> Self {
        Self::with_config(page_size, LayoutConfig::default())
    }

    pub fn with_config(page_size: PageSize, config: LayoutConfig) -> Self {
        Self {
            cursor_y: page_size.height - config.margins.top,
            page_size,
            config,
            instructions: Vec::new(),
            overflowed_at: None,
        }
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn cursor_y(&self) -> f64 {
        self.cursor_y
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn has_overflowed(&self) -> bool {
        self.overflowed_at.is_some()
    }

    pub fn spacer(&mut self, height: f64) -> Result<&mut Self> {
        self.check_poisoned()?;
        self.advance(height)?;
        Ok(self)
    }

    pub fn title(&mut self, text: &str) -> Result<&mut Self> {
        self.check_poisoned()?;
        tracing::trace!(y = self.cursor_y, "title");
        self.draw_text(text, self.config.margins.left, TextStyle::TITLE);
        self.advance(self.config.title_advance)?;
        Ok(self)
    }

    pub fn heading(&mut self, text: &str) -> Result<&mut Self> {
        self.check_poisoned()?;
        tracing::trace!(y = self.cursor_y, "heading");
        self.draw_text(text, self.config.margins.left, TextStyle::HEADING);
        self.advance(self.config.heading_advance)?;
        Ok(self)
    }

    /// Wraps `text` at the configured paragraph width.
    pub fn paragraph(&mut self, text: &str) -> Result<&mut Self> {
        self.paragraph_with_width(text, self.config.paragraph_width)
    }

    pub fn paragraph_with_width(&mut self, text: &str, max_chars: usize) -> Result<&mut Self> {
        self.check_poisoned()?;
        let lines = wrap_words(text, max_chars);
        tracing::trace!(y = self.cursor_y, lines = lines.len(), "paragraph");

        let style = TextStyle::BODY;
        for line in &lines {
            self.draw_text(line, self.config.margins.left, style);
            self.advance(style.leading)?;
        }

        self.advance(self.config.block_spacing)?;
        Ok(self)
    }

    /// Wraps each item at the configured bullet width.
    pub fn bullets<I, S>(&mut self, items: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.bullets_with_width(items, self.config.bullet_width)
    }

    /// Draws one bullet per item. Continuation lines of an item are indented
    /// under its text; the block spacing follows the whole list.
    pub fn bullets_with_width<I, S>(&mut self, items: I, max_chars: usize) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.check_poisoned()?;
        let style = TextStyle::BODY;
        let bullet_x = self.config.margins.left;
        let continuation_x = bullet_x + self.config.bullet_indent;

        for item in items {
            let lines = wrap_words(item.as_ref(), max_chars);
            tracing::trace!(y = self.cursor_y, lines = lines.len(), "bullet item");

            let mut lines = lines.iter();
            if let Some(first) = lines.next() {
                let marked = format!("{}{}", self.config.bullet_marker, first);
                self.draw_text(&marked, bullet_x, style);
                self.advance(style.leading)?;
            }

            for line in lines {
                self.draw_text(line, continuation_x, style);
                self.advance(style.leading)?;
            }
        }

        self.advance(self.config.block_spacing)?;
        Ok(self)
    }

    /// Paints the whole page in `color` beneath all text, regardless of when
    /// it is called. The cursor does not move.
    pub fn fill_background(&mut self, color: Color) -> &mut Self {
        let background = Instruction::fill_rect(
            color,
            0.0,
            0.0,
            self.page_size.width,
            self.page_size.height,
        );
        self.instructions.insert(0, background);
        self
    }

    /// Appends operators to the content stream verbatim. The cursor does not
    /// move.
    pub fn push_raw(&mut self, operators: impl Into<String>) -> &mut Self {
        self.instructions.push(Instruction::raw(operators));
        self
    }

    /// Joins the laid-out instructions into the page's content stream.
    pub fn finish(self) -> Result<ContentStream> {
        self.check_poisoned()?;
        tracing::debug!(
            instructions = self.instructions.len(),
            remaining = self.cursor_y - self.config.margins.bottom,
            "layout finished"
        );
        Ok(ContentStream::from_instructions(&self.instructions))
    }

    fn draw_text(&mut self, text: &str, x: f64, style: TextStyle) {
        self.instructions
            .push(Instruction::show_text(text, x, self.cursor_y, style));
    }

    fn advance(&mut self, height: f64) -> Result<()> {
        self.cursor_y -= height;
        self.ensure_space()
    }

    fn ensure_space(&mut self) -> Result<()> {
        if self.cursor_y < self.config.margins.bottom {
            tracing::warn!(
                y = self.cursor_y,
                bottom = self.config.margins.bottom,
                "content does not fit on a single page"
            );
            self.overflowed_at = Some(self.cursor_y);
            return Err(self.overflow_error(self.cursor_y));
        }
        Ok(())
    }

    fn check_poisoned(&self) -> Result<()> {
        match self.overflowed_at {
            Some(y) => Err(self.overflow_error(y)),
            None => Ok(()),
        }
    }

    fn overflow_error(&self, y: f64) -> PdfError {
        PdfError::LayoutOverflow {
            y,
            bottom: self.config.margins.bottom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text_of(instruction: &Instruction) -> (&str, f64, f64, TextStyle) {
        match instruction {
            Instruction::ShowText {
                style,
                x,
                y,
                escaped,
            } => (escaped.as_str(), *x, *y, *style),
            other => panic!("Expected ShowText, got {other:?}"),
        }
    }

    #[test]
    fn test_cursor_starts_below_top_margin() {
        let flow = PageFlow::new(PageSize::letter());
        assert_eq!(flow.cursor_y(), 738.0);
        assert_eq!(flow.page_size(), PageSize::letter());
        assert_eq!(flow.config(), &LayoutConfig::default());
        assert!(flow.instructions().is_empty());
        assert!(!flow.has_overflowed());
    }

    #[test]
    fn test_title_and_heading_advance() -> Result<()> {
        let mut flow = PageFlow::new(PageSize::letter());
        flow.title("Report")?;
        assert_eq!(flow.cursor_y(), 712.0);
        flow.heading("Section")?;
        assert_eq!(flow.cursor_y(), 696.0);

        let (text, x, y, style) = text_of(&flow.instructions()[0]);
        assert_eq!((text, x, y, style), ("Report", 54.0, 738.0, TextStyle::TITLE));
        let (text, x, y, style) = text_of(&flow.instructions()[1]);
        assert_eq!((text, x, y, style), ("Section", 54.0, 712.0, TextStyle::HEADING));
        Ok(())
    }

    #[test]
    fn test_paragraph_one_instruction_per_line() -> Result<()> {
        let mut flow = PageFlow::new(PageSize::letter());
        flow.paragraph_with_width("alpha bravo charlie", 10)?;

        let lines: Vec<(&str, f64)> = flow
            .instructions()
            .iter()
            .map(|i| {
                let (text, _, y, _) = text_of(i);
                (text, y)
            })
            .collect();
        assert_eq!(lines, vec![("alpha", 738.0), ("bravo", 726.0), ("charlie", 714.0)]);
        // three leadings plus the trailing block spacing
        assert_eq!(flow.cursor_y(), 738.0 - 36.0 - 6.0);
        Ok(())
    }

    #[test]
    fn test_empty_paragraph_still_draws_a_line() -> Result<()> {
        let mut flow = PageFlow::new(PageSize::letter());
        flow.paragraph("   ")?;
        assert_eq!(flow.instructions().len(), 1);
        assert_eq!(text_of(&flow.instructions()[0]).0, "");
        Ok(())
    }

    #[test]
    fn test_bullets_marker_and_continuation_indent() -> Result<()> {
        let mut flow = PageFlow::new(PageSize::letter());
        flow.bullets_with_width(["one two three", "four"], 7)?;

        let drawn: Vec<(&str, f64, f64)> = flow
            .instructions()
            .iter()
            .map(|i| {
                let (text, x, y, _) = text_of(i);
                (text, x, y)
            })
            .collect();
        assert_eq!(
            drawn,
            vec![
                ("- one two", 54.0, 738.0),
                ("three", 68.0, 726.0),
                ("- four", 54.0, 714.0),
            ]
        );
        // spacing is applied once for the whole list
        assert_eq!(flow.cursor_y(), 738.0 - 36.0 - 6.0);
        Ok(())
    }

    #[test]
    fn test_default_bullet_width_is_narrower_than_paragraph() -> Result<()> {
        // 45 + 1 + 45 = 91 characters
        let item = format!("{} {}", "a".repeat(45), "b".repeat(45));

        let mut flow = PageFlow::new(PageSize::letter());
        flow.bullets([item.as_str()])?;
        assert_eq!(flow.instructions().len(), 2);
        assert_eq!(text_of(&flow.instructions()[1]).0, "b".repeat(45));

        let mut flow = PageFlow::new(PageSize::letter());
        flow.paragraph(&item)?;
        assert_eq!(flow.instructions().len(), 1);
        assert_eq!(text_of(&flow.instructions()[0]).0, item);
        Ok(())
    }

    #[test]
    fn test_bullets_default_width_is_configurable() -> Result<()> {
        let config = LayoutConfig {
            bullet_width: 3,
            bullet_marker: "* ".to_string(),
            ..LayoutConfig::default()
        };
        let mut flow = PageFlow::with_config(PageSize::letter(), config);
        flow.bullets(vec!["ab cd".to_string()])?;

        assert_eq!(text_of(&flow.instructions()[0]).0, "* ab");
        assert_eq!(text_of(&flow.instructions()[1]).0, "cd");
        Ok(())
    }

    #[test]
    fn test_spacer_moves_cursor() -> Result<()> {
        let mut flow = PageFlow::new(PageSize::letter());
        flow.spacer(100.0)?;
        assert_eq!(flow.cursor_y(), 638.0);
        assert!(flow.instructions().is_empty());
        Ok(())
    }

    #[test]
    fn test_heading_overflows_on_tiny_page() {
        let size = PageSize::new(200.0, 54.0 + 54.0 + 0.5);
        let mut flow = PageFlow::new(size);

        let err = flow.heading("Hi").unwrap_err();
        match err {
            PdfError::LayoutOverflow { y, bottom } => {
                assert_eq!(bottom, 54.0);
                assert!(y < bottom);
            }
            other => panic!("Expected LayoutOverflow, got {other:?}"),
        }
        assert!(flow.has_overflowed());
    }

    #[test]
    fn test_constructing_tiny_page_does_not_overflow() -> Result<()> {
        let flow = PageFlow::new(PageSize::new(200.0, 108.5));
        let content = flow.finish()?;
        assert_eq!(content.as_bytes(), b"\n");
        Ok(())
    }

    #[test]
    fn test_cursor_exactly_on_bottom_margin_fits() -> Result<()> {
        let mut flow = PageFlow::new(PageSize::new(200.0, 54.0 + 54.0 + 16.0));
        flow.heading("Fits")?;
        assert_eq!(flow.cursor_y(), 54.0);
        flow.finish()?;
        Ok(())
    }

    #[test]
    fn test_overflow_poisons_flow() {
        let mut flow = PageFlow::new(PageSize::new(200.0, 120.0));
        assert!(flow.heading("Hi").is_err());

        let before = flow.instructions().len();
        assert!(matches!(
            flow.paragraph("more"),
            Err(PdfError::LayoutOverflow { .. })
        ));
        assert!(matches!(flow.spacer(0.0), Err(PdfError::LayoutOverflow { .. })));
        assert_eq!(flow.instructions().len(), before);
        assert!(matches!(flow.finish(), Err(PdfError::LayoutOverflow { .. })));
    }

    #[test]
    fn test_paragraph_overflow_mid_block() {
        let mut flow = PageFlow::new(PageSize::new(612.0, 54.0 + 54.0 + 30.0));
        let result = flow.paragraph_with_width("a b c d e f", 1);
        assert!(matches!(result, Err(PdfError::LayoutOverflow { .. })));
        // the line that crossed the margin was drawn before the check failed
        assert_eq!(flow.instructions().len(), 3);
    }

    #[test]
    fn test_fill_background_goes_first() -> Result<()> {
        let mut flow = PageFlow::new(PageSize::new(200.0, 300.0));
        flow.heading("Hi")?;
        flow.fill_background(Color::white());

        assert_eq!(
            flow.instructions()[0],
            Instruction::fill_rect(Color::white(), 0.0, 0.0, 200.0, 300.0)
        );
        assert!(flow.instructions()[1].is_text());
        assert_eq!(flow.cursor_y(), 300.0 - 54.0 - 16.0);
        Ok(())
    }

    #[test]
    fn test_push_raw_and_finish() -> Result<()> {
        let mut flow = PageFlow::new(PageSize::letter());
        flow.fill_background(Color::white())
            .push_raw("0 0 1 rg");
        flow.title("T")?;
        let content = flow.finish()?;

        let text = String::from_utf8(content.into_bytes()).unwrap();
        assert_eq!(
            text,
            "q 1 1 1 rg 0 0 612 792 re f Q\n\
             0 0 1 rg\n\
             BT /F1 18.00 Tf 1 0 0 1 54.00 738.00 Tm (T) Tj ET\n"
        );
        Ok(())
    }
}
