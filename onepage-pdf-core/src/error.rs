use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "Layout overflow: content does not fit on a single page (cursor {y:.2} below bottom margin {bottom:.2})"
    )]
    LayoutOverflow { y: f64, bottom: f64 },
}

pub type Result<T> = std::result::Result<T, PdfError>;
