use crate::layout::FontMeasure;
use crate::{PDFError, Pt};
use owned_ttf_parser::{AsFaceRef, OwnedFace};

mod embed;

/// A parsed TTF or OTF font. Fonts are embedded in their entirety in the generated PDF,
/// so large fonts will noticeably increase the size of the output.
///
/// Fonts are registered with a [Document](crate::Document) and referred to everywhere
/// else by the [Id](id_arena::Id) the document hands back.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, returning an error if the font could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, PDFError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    /// Load a font file from disk
    pub fn load_path<P: AsRef<std::path::Path>>(path: P) -> Result<Font, PDFError> {
        let bytes = std::fs::read(path)?;
        Font::load(bytes)
    }

    fn name_record(&self, name_id: u16) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == name_id && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// The full name of the font, if the font carries one
    pub fn name(&self) -> Option<String> {
        self.name_record(owned_ttf_parser::name_id::FULL_NAME)
    }

    /// The family name of the font, if the font carries one
    pub fn family(&self) -> Option<String> {
        self.name_record(owned_ttf_parser::name_id::FAMILY)
    }

    /// Factor converting font units into points at the given size
    fn scaling(&self, size: Pt) -> Pt {
        size / self.face.as_face_ref().units_per_em() as f32
    }

    /// Distance from the baseline to the top of the font at the given size
    pub fn ascent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().ascender() as f32
    }

    /// Distance from the baseline to the bottom of the font at the given size.
    /// Note: this is usually negative
    pub fn descent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().descender() as f32
    }

    /// Extra space the font asks for between lines at the given size
    pub fn leading(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().line_gap() as f32
    }

    /// How far apart consecutive baselines are at the given size
    pub fn line_height(&self, size: Pt) -> Pt {
        self.leading(size) + self.ascent(size) - self.descent(size)
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }

    pub fn replacement_glyph_id(&self) -> Option<u16> {
        self.glyph_id('\u{FFFD}')
    }

    /// The glyph `ch` is drawn with: its own glyph if the font has one, otherwise the
    /// replacement character, otherwise a question mark
    pub fn drawable_glyph_id(&self, ch: char) -> Result<u16, PDFError> {
        self.glyph_id(ch)
            .or_else(|| self.replacement_glyph_id())
            .or_else(|| self.glyph_id('?'))
            .ok_or(PDFError::MissingGlyph(ch))
    }

    /// Calculate the width of `text` at the given size by summing glyph advances. Each
    /// character is measured as the glyph it would be drawn with; characters that can't
    /// be drawn at all take up no space.
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let scaling = self.scaling(size);
        text.chars()
            .filter_map(|ch| self.drawable_glyph_id(ch).ok())
            .map(|gid| {
                scaling
                    * self
                        .face
                        .as_face_ref()
                        .glyph_hor_advance(owned_ttf_parser::GlyphId(gid))
                        .unwrap_or_default() as f32
            })
            .sum()
    }

    /// A [Measure](crate::layout::Measure) for laying out text in this font at the given size
    pub fn measure(&self, size: Pt) -> FontMeasure<'_> {
        FontMeasure::new(self, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_is_not_a_font() {
        let err = Font::load(b"definitely not a font".to_vec()).err();
        assert!(matches!(err, Some(PDFError::FaceParsingError(_))));
    }

    #[test]
    fn missing_font_file_is_an_io_error() {
        let err = Font::load_path("/nonexistent/fonts/Missing-Regular.ttf").err();
        assert!(matches!(err, Some(PDFError::Io(_))));
    }
}
