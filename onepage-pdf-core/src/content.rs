//! Drawing instructions and the content stream they are joined into.

use crate::graphics::Color;
use crate::objects::format_real;
use crate::text::{escape_text, TextStyle};
use std::fmt;

/// A single drawing command in a page's content stream.
///
/// Instructions are immutable once built. Text is escaped when the
/// instruction is created, so rendering never fails.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// One line of text in a text object: `BT /F1 18.00 Tf 1 0 0 1 x y Tm (..) Tj ET`
    ShowText {
        style: TextStyle,
        x: f64,
        y: f64,
        escaped: String,
    },
    /// A filled rectangle wrapped in a saved graphics state.
    FillRect {
        color: Color,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    /// Operator text copied into the stream verbatim.
    Raw(String),
}

impl Instruction {
    pub fn show_text(text: &str, x: f64, y: f64, style: TextStyle) -> Self {
        Instruction::ShowText {
            style,
            x,
            y,
            escaped: escape_text(text),
        }
    }

    pub fn fill_rect(color: Color, x: f64, y: f64, width: f64, height: f64) -> Self {
        Instruction::FillRect {
            color,
            x,
            y,
            width,
            height,
        }
    }

    pub fn raw(operators: impl Into<String>) -> Self {
        Instruction::Raw(operators.into())
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Instruction::ShowText { .. })
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::ShowText {
                style,
                x,
                y,
                escaped,
            } => write!(
                f,
                "BT /{} {:.2} Tf 1 0 0 1 {:.2} {:.2} Tm ({}) Tj ET",
                style.font.resource_name(),
                style.size,
                x,
                y,
                escaped
            ),
            Instruction::FillRect {
                color,
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "q {} {} {} {} {} re f Q",
                color,
                format_real(*x),
                format_real(*y),
                format_real(*width),
                format_real(*height)
            ),
            Instruction::Raw(operators) => f.write_str(operators),
        }
    }
}

/// The page's content stream: instructions separated by newlines, with a
/// trailing newline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentStream {
    data: Vec<u8>,
}

impl ContentStream {
    pub fn from_instructions(instructions: &[Instruction]) -> Self {
        let joined = instructions
            .iter()
            .map(Instruction::to_string)
            .collect::<Vec<_>>()
            .join("\n");

        let mut data = joined.into_bytes();
        data.push(b'\n');
        Self { data }
    }

    /// Wraps bytes produced elsewhere; they are written to the page as-is.
    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
