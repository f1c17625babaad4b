mod escape;
mod flow;
mod style;
mod wrap;

pub use escape::escape_text;
pub use flow::{LayoutConfig, PageFlow};
pub use style::{FontResource, TextStyle};
pub use wrap::wrap_words;
