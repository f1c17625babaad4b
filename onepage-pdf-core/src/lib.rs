//! # onepage-pdf
//!
//! Single-page PDF reports built from first principles, with no PDF library
//! underneath.
//!
//! The crate has two halves:
//!
//! - a text flow engine ([`PageFlow`]) that turns titles, headings,
//!   paragraphs and bullet lists into positioned text instructions, wrapping
//!   words and tracking the vertical space left on the page;
//! - a serializer ([`SinglePageDocument`], [`writer::PdfWriter`]) that wraps
//!   the resulting content stream in a fixed six-object graph and writes the
//!   header, objects, cross-reference table and trailer with exact byte
//!   offsets.
//!
//! Content that does not fit is never clipped: the layout call that crosses
//! the bottom margin fails with [`PdfError::LayoutOverflow`].
//!
//! ## Quick Start
//!
//! ```rust
//! use onepage_pdf::{Color, PageFlow, PageSize, Result, SinglePageDocument};
//!
//! # fn main() -> Result<()> {
//! let page_size = PageSize::letter();
//! let mut flow = PageFlow::new(page_size);
//! flow.fill_background(Color::white());
//! flow.title("Team Offsite")?
//!     .heading("Agenda")?
//!     .bullets(["Kickoff (9:00)", "Planning \\ retro"])?
//!     .paragraph("Lunch is provided.")?;
//!
//! let document = SinglePageDocument::new(page_size, flow.finish()?);
//! let bytes = document.to_bytes()?;
//! assert!(bytes.starts_with(b"%PDF-1.4"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`text`] - escaping, word wrapping, styles and the flow engine
//! - [`content`] - drawing instructions and the content stream
//! - [`document`] - the fixed object graph
//! - [`writer`] - byte-level serialization
//! - [`objects`] - object identities and values

pub mod content;
pub mod document;
pub mod error;
pub mod graphics;
pub mod objects;
pub mod page;
pub mod text;
pub mod writer;

pub use content::{ContentStream, Instruction};
pub use document::{DocumentObject, SinglePageDocument};
pub use error::{PdfError, Result};
pub use graphics::Color;
pub use page::{Margins, PageSize};
pub use text::{
    escape_text, wrap_words, FontResource, LayoutConfig, PageFlow, TextStyle,
};

/// Current version of onepage-pdf
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_string() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_types_are_send() {
        fn assert_send<T: Send>() {}
        assert_send::<PageFlow>();
        assert_send::<SinglePageDocument>();
        assert_send::<PdfError>();
    }
}
