//! Full-justified, multi-line text blocks for PDF pages.
//!
//! The heart of the crate is [layout::layout], which breaks text into lines for a
//! given width and stretches every line but the last to fill it. It works against any
//! width measure and returns plain line records. The rest of the crate is a small PDF
//! surface to put those lines on: fonts, pages, and documents, with
//! [JustifiedLabel] tying a block of text to a rectangle on a page.

mod colour;
pub use colour::*;

mod document;
pub use document::*;

mod font;
pub use font::*;

mod info;
pub use info::*;

mod label;
pub use label::*;

/// Breaking text into lines and justifying them
pub mod layout;

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;
