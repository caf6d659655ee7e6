//! Full-justified text layout.
//!
//! Laying out a block of text happens in three steps:
//!
//! 1. the text is split into whitespace-free words ([split_words]),
//! 2. the words are greedily broken into lines no wider than the target width
//!    ([partition]),
//! 3. every line except the last has its gaps widened so that it stretches towards
//!    the target width ([distribute]).
//!
//! [layout] runs all three and hands back plain [LaidOutLine] records. Nothing here
//! touches a [Page](crate::Page); placing the records is up to the caller, either by
//! hand or through [Page::add_lines](crate::Page::add_lines) and
//! [JustifiedLabel](crate::JustifiedLabel).
//!
//! Text width comes from a [Measure], usually a [Font](crate::Font) at a given size
//! (see [Font::measure](crate::Font::measure)), but any `Fn(&str) -> Pt` works.
//!
//! # Example
//!
//! ```
//! use pdf_justify::layout::layout;
//! use pdf_justify::Pt;
//!
//! let monospace = |text: &str| Pt(text.chars().count() as f32);
//! let lines = layout("The quick brown fox", Pt(18.0), Pt(10.0), &monospace);
//!
//! assert_eq!(lines.len(), 2);
//! assert_eq!(lines[0].text, "The  quick  brown");
//! assert_eq!(lines[1].text, "fox");
//! assert_eq!(lines[1].y, Pt(10.0));
//! ```

mod distribute;
mod margins;
mod measure;
mod partition;
mod words;

pub use distribute::*;
pub use margins::*;
pub use measure::*;
pub use partition::*;
pub use words::*;

use crate::units::Pt;
use tracing::debug;

/// One line of laid out text, ready to be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutLine {
    /// The literal line, including any spaces added for justification
    pub text: String,
    /// 0-based line number, counting from the top
    pub index: usize,
    /// Horizontal offset from the left edge of the text block; always 0
    pub x: Pt,
    /// Vertical offset from the top of the text block, growing downwards
    pub y: Pt,
}

/// Lay `text` out as full-justified lines no wider than `target_width`, spaced
/// `line_height` apart.
///
/// Every line but the last is stretched with [distribute]; the last line is kept
/// single-spaced. A word too wide for `target_width` on its own gets a line to itself
/// and is allowed to overflow. Empty or blank text produces no lines.
///
/// Nothing is cached between calls: when the text, the width, or the measure
/// changes, call this again and replace whatever was drawn before.
pub fn layout<M>(text: &str, target_width: Pt, line_height: Pt, measure: &M) -> Vec<LaidOutLine>
where
    M: Measure + ?Sized,
{
    let words = split_words(text);
    let lines = partition(&words, target_width, measure);

    debug!(
        words = words.len(),
        lines = lines.len(),
        %target_width,
        "laid out text"
    );

    lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let text = if line.is_last {
                line.plain()
            } else {
                distribute(line, target_width, measure)
            };

            LaidOutLine {
                text,
                index,
                x: Pt(0.0),
                y: line_height * index as f32,
            }
        })
        .collect()
}
