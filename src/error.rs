use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum PDFError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error("font is not registered with the document")]
    /// Text refers to a font that was never added to the document
    FontMissing,

    #[error("page is not part of the document")]
    /// The document's page order refers to a page that no longer exists
    PageMissing,

    #[error("font has no glyph for {0:?}, nor a replacement glyph")]
    /// A character can't be drawn with its font, and the font has neither a
    /// replacement character nor a question mark to draw instead
    MissingGlyph(char),
}
