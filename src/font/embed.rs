//! Embedding fonts in the PDF as Type0 fonts with an Identity-H encoding, so content
//! streams address glyphs directly by glyph id.

use super::Font;
use crate::refs::{ObjectReferences, RefType};
use id_arena::Id;
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use owned_ttf_parser::{AsFaceRef, GlyphId};
use pdf_writer::types::{CidFontType, FontFlags, SystemInfo};
use pdf_writer::{Filter, Finish, Name, Pdf, Ref, Str};
use std::collections::{BTreeMap, HashMap};

/// A glyph reachable from the font's unicode cmap
struct Glyph {
    cid: u16,
    ch: char,
    advance: u16,
    height: i16,
}

impl Font {
    /// Every glyph mapped from a unicode codepoint, ordered by glyph id. When several
    /// codepoints map to the same glyph, the first one the cmap lists wins.
    fn glyph_table(&self) -> Vec<Glyph> {
        let face = self.face.as_face_ref();

        let mut chars: BTreeMap<u16, char> = BTreeMap::new();
        if let Some(cmap) = face.tables().cmap {
            for subtable in cmap.subtables.into_iter().filter(|table| table.is_unicode()) {
                subtable.codepoints(|codepoint: u32| {
                    let Ok(ch) = char::try_from(codepoint) else {
                        return;
                    };
                    if let Some(gid) = subtable.glyph_index(codepoint).filter(|gid| gid.0 > 0) {
                        chars.entry(gid.0).or_insert(ch);
                    }
                });
            }
        }

        chars
            .into_iter()
            .filter_map(|(cid, ch)| {
                let gid = GlyphId(cid);
                let advance = face.glyph_hor_advance(gid)?;
                let height = face
                    .glyph_bounding_box(gid)
                    .map(|bbox| bbox.y_max - bbox.y_min - face.descender())
                    .unwrap_or(1000);
                Some(Glyph {
                    cid,
                    ch,
                    advance,
                    height,
                })
            })
            .collect()
    }

    /// Font units to PDF glyph space (1000 units per em)
    fn glyph_space_scaling(&self) -> f32 {
        1000.0 / self.face.as_face_ref().units_per_em() as f32
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, id: Id<Font>, writer: &mut Pdf) {
        let font_index = id.index();
        let glyphs = self.glyph_table();

        let font_id = refs.gen(RefType::Font(font_index));
        let cid_font_id = self.write_cid(refs, font_index, &glyphs, writer);
        let to_unicode_id = self.write_to_unicode(refs, font_index, &glyphs, writer);

        let mut font = writer.type0_font(font_id);
        font.base_font(Name(format!("F{font_index}").as_bytes()));
        font.encoding_predefined(Name(b"Identity-H"));
        font.descendant_font(cid_font_id);
        font.to_unicode(to_unicode_id);
    }

    fn write_cid(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        glyphs: &[Glyph],
        writer: &mut Pdf,
    ) -> Ref {
        let descriptor_id = self.write_descriptor(refs, font_index, glyphs, writer);
        let id = refs.gen(RefType::CidFont(font_index));
        let scaling = self.glyph_space_scaling();

        let mut cid_font = writer.cid_font(id);
        cid_font.subtype(CidFontType::Type2);
        cid_font.base_font(Name(format!("F{font_index}").as_bytes()));
        cid_font.system_info(SystemInfo {
            registry: Str(b"Adobe"),
            ordering: Str(b"Identity"),
            supplement: 0,
        });
        cid_font.font_descriptor(descriptor_id);

        // the most common advance becomes the default, everything is still listed
        let mut advance_counts: HashMap<u16, usize> = HashMap::new();
        for glyph in glyphs {
            *advance_counts.entry(glyph.advance).or_insert(0) += 1;
        }
        let default_width = advance_counts
            .into_iter()
            .max_by_key(|&(advance, count)| (count, advance))
            .map(|(advance, _)| advance as f32 * scaling)
            .unwrap_or(1000.0);

        let notdef_width = self
            .face
            .as_face_ref()
            .glyph_hor_advance(GlyphId(0))
            .map(|advance| advance as f32 * scaling)
            .unwrap_or(default_width);

        let mut widths = cid_font.widths();
        widths.consecutive(0, [notdef_width]);

        // one entry per run of consecutive glyph ids
        let mut run_start: Option<u16> = None;
        let mut run: Vec<f32> = Vec::new();
        for glyph in glyphs {
            match run_start {
                Some(start) if glyph.cid as usize == start as usize + run.len() => {}
                Some(start) => {
                    widths.consecutive(start, run.drain(..));
                    run_start = Some(glyph.cid);
                }
                None => run_start = Some(glyph.cid),
            }
            run.push(glyph.advance as f32 * scaling);
        }
        if let Some(start) = run_start {
            widths.consecutive(start, run);
        }
        widths.finish();

        cid_font.default_width(default_width);
        cid_font.cid_to_gid_map_predefined(Name(b"Identity"));

        id
    }

    fn write_font_data(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        writer: &mut Pdf,
    ) -> Ref {
        let id = refs.gen(RefType::FontData(font_index));

        writer
            .stream(id, self.face.as_slice())
            .pair(Name(b"Length1"), self.face.as_slice().len() as i32);

        id
    }

    fn write_descriptor(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        glyphs: &[Glyph],
        writer: &mut Pdf,
    ) -> Ref {
        let font_data_id = self.write_font_data(refs, font_index, writer);
        let face = self.face.as_face_ref();
        let scaling = self.glyph_space_scaling();

        let max_width = glyphs.iter().map(|g| g.advance).max().unwrap_or_default();
        let max_height = glyphs.iter().map(|g| g.height).max().unwrap_or_default();
        let sum_width: usize = glyphs.iter().map(|g| g.advance as usize).sum();
        let avg_width = if glyphs.is_empty() {
            0.0
        } else {
            sum_width as f32 / glyphs.len() as f32
        };

        // postscript names can't contain spaces
        let name = self
            .name()
            .map(|name| name.replace(' ', ""))
            .unwrap_or_else(|| format!("F{font_index}"));
        let family = self.family().unwrap_or_else(|| name.clone());

        let id = refs.gen(RefType::FontDescriptor(font_index));
        let mut descriptor = writer.font_descriptor(id);
        descriptor.name(Name(name.as_bytes()));
        descriptor.family(Str(family.as_bytes()));
        descriptor.weight(face.weight().to_number());

        let mut flags = FontFlags::empty();
        flags.set(FontFlags::FIXED_PITCH, face.is_monospaced());
        flags.set(FontFlags::ITALIC, face.is_italic());
        descriptor.flags(flags);

        descriptor.bbox(pdf_writer::Rect {
            x1: 0.0,
            y1: 0.0,
            x2: sum_width as f32 * scaling,
            y2: max_height as f32 * scaling,
        });
        descriptor.italic_angle(face.italic_angle());
        descriptor.ascent(face.ascender() as f32 * scaling);
        descriptor.descent(face.descender() as f32 * scaling);
        descriptor.leading(face.line_gap() as f32 * scaling);
        let cap_height = face
            .capital_height()
            .map(|h| h as f32 * scaling)
            .unwrap_or(1000.0);
        descriptor.cap_height(cap_height);
        descriptor.x_height(
            face.x_height()
                .map(|h| h as f32 * scaling)
                .unwrap_or(cap_height),
        );
        // ttf has no stem width; 80 is what most producers write for regular weights
        descriptor.stem_v(80.0);
        descriptor.avg_width(avg_width * scaling);
        descriptor.max_width(max_width as f32 * scaling);
        descriptor.missing_width(max_width as f32 * scaling);
        descriptor.font_file2(font_data_id);

        id
    }

    fn write_to_unicode(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        glyphs: &[Glyph],
        writer: &mut Pdf,
    ) -> Ref {
        let id = refs.gen(RefType::ToUnicode(font_index));

        let cmap = to_unicode_cmap(glyphs.iter().map(|g| (g.cid, g.ch)));
        let compressed =
            compress_to_vec_zlib(cmap.as_bytes(), CompressionLevel::DefaultCompression as u8);
        let mut stream = writer.stream(id, compressed.as_slice());
        stream.filter(Filter::FlateDecode);

        id
    }
}

/// Build a ToUnicode CMap from `(glyph id, char)` pairs sorted by glyph id. bfchar
/// blocks hold at most 100 entries and never straddle a change of high byte.
fn to_unicode_cmap<I: IntoIterator<Item = (u16, char)>>(mappings: I) -> String {
    let mut cmap = String::from(
        "/CIDInit /ProcSet findresource begin
12 dict begin
begincmap
/CIDSystemInfo
<< /Registry (Adobe)
/Ordering (UCS) /Supplement 0 >> def
/CMapName /Adobe-Identity-UCS def
/CMapType 2 def
1 begincodespacerange
<0000> <FFFF>
endcodespacerange
",
    );

    let mut blocks: Vec<Vec<(u16, char)>> = Vec::new();
    for (cid, ch) in mappings {
        let starts_block = match blocks.last() {
            Some(block) => block.len() >= 100 || (block[0].0 >> 8) != (cid >> 8),
            None => true,
        };
        if starts_block {
            blocks.push(Vec::new());
        }
        if let Some(block) = blocks.last_mut() {
            block.push((cid, ch));
        }
    }

    for block in blocks {
        cmap.push_str(&format!("{} beginbfchar\n", block.len()));
        for (cid, ch) in block {
            let mut units = [0u16; 2];
            let utf16: String = ch
                .encode_utf16(&mut units)
                .iter()
                .map(|unit| format!("{unit:04x}"))
                .collect();
            cmap.push_str(&format!("<{cid:04x}> <{utf16}>\n"));
        }
        cmap.push_str("endbfchar\n");
    }

    cmap.push_str("endcmap CMapName currentdict /CMap defineresource pop end end\n");
    cmap
}
