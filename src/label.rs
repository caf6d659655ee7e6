use crate::colour::Colour;
use crate::document::Document;
use crate::font::Font;
use crate::layout::{layout, LaidOutLine, Measure};
use crate::page::{Page, SpanFont};
use crate::rect::Rect;
use crate::units::Pt;
use crate::PDFError;
use id_arena::Id;

/// A block of full-justified text that fills the width of a rectangle.
///
/// The label only remembers what to draw and where: its text, its bounds, and its
/// font. Changing any of them never touches lines that were already laid out; the next
/// call to [layout](JustifiedLabel::layout) or [render](JustifiedLabel::render) works
/// everything out again from scratch.
///
/// Text is not clipped to the bounds vertically: if it needs more lines than fit, the
/// extra lines carry on below the bottom edge.
#[derive(Debug, Clone, PartialEq)]
pub struct JustifiedLabel {
    text: String,
    bounds: Rect,
    font: SpanFont,
    colour: Colour,
}

impl JustifiedLabel {
    /// An empty label drawn in black
    pub fn new(font: Id<Font>, size: Pt, bounds: Rect) -> JustifiedLabel {
        JustifiedLabel {
            text: String::new(),
            bounds,
            font: SpanFont { id: font, size },
            colour: Colour::default(),
        }
    }

    pub fn with_text<S: Into<String>>(mut self, text: S) -> JustifiedLabel {
        self.set_text(text);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn font(&self) -> SpanFont {
        self.font
    }

    pub fn set_text<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
    }

    /// Move or resize the label; the width of `bounds` is the width lines are justified to
    pub fn resize(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn set_font(&mut self, font: Id<Font>, size: Pt) {
        self.font = SpanFont { id: font, size };
    }

    pub fn set_colour(&mut self, colour: Colour) {
        self.colour = colour;
    }

    /// Lay the text out in the label's font, as registered with `document`
    pub fn layout(&self, document: &Document) -> Result<Vec<LaidOutLine>, PDFError> {
        let font = document.font(self.font.id)?;
        let size = self.font.size;
        Ok(self.layout_with(&font.measure(size), font.line_height(size)))
    }

    /// Lay the text out against an arbitrary measure instead of the label's font
    pub fn layout_with<M>(&self, measure: &M, line_height: Pt) -> Vec<LaidOutLine>
    where
        M: Measure + ?Sized,
    {
        layout(&self.text, self.bounds.width(), line_height, measure)
    }

    /// Lay the text out and add it to `page`, with the first line's ascenders touching
    /// the top of the label. Returns how many lines were placed.
    pub fn render(&self, document: &Document, page: &mut Page) -> Result<usize, PDFError> {
        let font = document.font(self.font.id)?;
        let size = self.font.size;
        let lines = self.layout_with(&font.measure(size), font.line_height(size));

        let (x, top) = self.bounds.top_left();
        page.add_lines(&lines, (x, top - font.ascent(size)), self.font, self.colour);
        Ok(lines.len())
    }
}
