use crate::colour::Colour;
use crate::font::Font;
use crate::layout::{LaidOutLine, Margins};
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use crate::PDFError;
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Name, Pdf};
use std::io::Write;

/// Which font a span is drawn in, and how large
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub id: Id<Font>,
    pub size: Pt,
}

/// A run of text drawn in one font and colour, starting at a baseline position in PDF
/// user space
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    /// The laid out text
    pub spans: Vec<SpanLayout>,
}

impl Page {
    /// Create an empty page. Without margins the content box covers the whole page.
    pub fn new(size: PageSize, margins: Option<Margins>) -> Page {
        let media_box = Rect::new(Pt(0.0), Pt(0.0), size.0, size.1);
        let content_box = margins
            .map(|margins| margins.inset(media_box))
            .unwrap_or(media_box);

        Page {
            media_box,
            content_box,
            spans: Vec::default(),
        }
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        self.spans.push(span);
    }

    /// Place laid out lines on the page. `baseline` is where the first line's baseline
    /// starts; later lines are moved down the page by their `y` offset.
    pub fn add_lines(
        &mut self,
        lines: &[LaidOutLine],
        baseline: (Pt, Pt),
        font: SpanFont,
        colour: Colour,
    ) {
        let (x, y) = baseline;
        self.spans.extend(lines.iter().map(|line| SpanLayout {
            text: line.text.clone(),
            font,
            colour,
            coords: (x + line.x, y - line.y),
        }));
    }

    /// Render the page's spans into a content stream, switching font and colour only
    /// when they change from one span to the next
    #[allow(clippy::write_with_newline)]
    pub(crate) fn render(&self, fonts: &Arena<Font>) -> Result<Vec<u8>, PDFError> {
        let mut content: Vec<u8> = Vec::default();
        let Some(first) = self.spans.first() else {
            return Ok(content);
        };

        write!(content, "q\n")?;
        let mut current_font = first.font;
        let mut current_colour = first.colour;
        write!(
            content,
            "/F{} {} Tf\n",
            current_font.id.index(),
            current_font.size.0
        )?;
        current_colour.write_fill(&mut content)?;

        for span in self.spans.iter() {
            if span.font != current_font {
                current_font = span.font;
                write!(
                    content,
                    "/F{} {} Tf\n",
                    current_font.id.index(),
                    current_font.size.0
                )?;
            }
            if span.colour != current_colour {
                current_colour = span.colour;
                current_colour.write_fill(&mut content)?;
            }

            let font = fonts.get(span.font.id).ok_or(PDFError::FontMissing)?;
            write!(content, "BT\n")?;
            write!(content, "{} {} Td\n", span.coords.0 .0, span.coords.1 .0)?;
            write!(content, "<")?;
            for ch in span.text.chars() {
                write!(content, "{:04x}", font.drawable_glyph_id(ch)?)?;
            }
            write!(content, "> Tj\n")?;
            write!(content, "ET\n")?;
        }

        write!(content, "Q\n")?;
        Ok(content)
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        fonts: &Arena<Font>,
        writer: &mut Pdf,
    ) -> Result<(), PDFError> {
        // render first so a bad span fails before anything is written for this page
        let rendered = self.render(fonts)?;

        let id = refs
            .get(RefType::Page(page_index))
            .ok_or(PDFError::PageMissing)?;
        let parent = refs.get(RefType::PageTree).ok_or(PDFError::PageMissing)?;
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        page.parent(parent);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for (font_id, _) in fonts.iter() {
            let font_ref = refs
                .get(RefType::Font(font_id.index()))
                .ok_or(PDFError::FontMissing)?;
            resource_fonts.pair(Name(format!("F{}", font_id.index()).as_bytes()), font_ref);
        }
        resource_fonts.finish();
        resources.finish();

        page.contents(content_id);
        page.finish();

        writer.stream(content_id, rendered.as_slice());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;
    use crate::pagesize::LETTER;
    use crate::units::In;

    fn unregistered_font() -> SpanFont {
        let fonts: Arena<Font> = Arena::new();
        SpanFont {
            id: fonts.next_id(),
            size: Pt(12.0),
        }
    }

    fn line(text: &str, index: usize, y: Pt) -> LaidOutLine {
        LaidOutLine {
            text: text.to_string(),
            index,
            x: Pt(0.0),
            y,
        }
    }

    #[test]
    fn margins_shape_the_content_box() {
        let page = Page::new(LETTER, Some(Margins::all(In(1.0))));
        assert_eq!(page.media_box, Rect::new(Pt(0.0), Pt(0.0), Pt(612.0), Pt(792.0)));
        assert_eq!(
            page.content_box,
            Rect::new(Pt(72.0), Pt(72.0), Pt(540.0), Pt(720.0))
        );

        let bare = Page::new(LETTER, None);
        assert_eq!(bare.content_box, bare.media_box);
    }

    #[test]
    fn lines_move_down_the_page() {
        let font = unregistered_font();
        let mut page = Page::new(LETTER, None);
        page.add_lines(
            &[
                line("The  quick  brown", 0, Pt(0.0)),
                line("fox", 1, Pt(14.0)),
            ],
            (Pt(72.0), Pt(700.0)),
            font,
            colours::BLACK,
        );

        assert_eq!(
            page.spans,
            vec![
                SpanLayout {
                    text: "The  quick  brown".to_string(),
                    font,
                    colour: colours::BLACK,
                    coords: (Pt(72.0), Pt(700.0)),
                },
                SpanLayout {
                    text: "fox".to_string(),
                    font,
                    colour: colours::BLACK,
                    coords: (Pt(72.0), Pt(686.0)),
                },
            ]
        );
    }

    #[test]
    fn empty_page_renders_nothing() {
        let fonts: Arena<Font> = Arena::new();
        let page = Page::new(LETTER, None);
        assert!(page.render(&fonts).unwrap().is_empty());
    }

    #[test]
    fn rendering_with_an_unknown_font_fails() {
        let fonts: Arena<Font> = Arena::new();
        let mut page = Page::new(LETTER, None);
        page.add_lines(
            &[line("fox", 0, Pt(0.0))],
            (Pt(0.0), Pt(0.0)),
            unregistered_font(),
            colours::BLACK,
        );
        assert!(matches!(page.render(&fonts), Err(PDFError::FontMissing)));
    }
}
