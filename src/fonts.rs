use pdf_writer::{Name, Pdf, Rect, Ref};
use ttf_parser::Face;

use crate::config::FontSource;
use crate::error::{Error, Result};

/// Base fonts every PDF reader provides without embedding.
const STANDARD_14: &[&str] = &[
    "Helvetica",
    "Helvetica-Bold",
    "Helvetica-Oblique",
    "Helvetica-BoldOblique",
    "Times-Roman",
    "Times-Bold",
    "Times-Italic",
    "Times-BoldItalic",
    "Courier",
    "Courier-Bold",
    "Courier-Oblique",
    "Courier-BoldOblique",
    "Symbol",
    "ZapfDingbats",
];

pub(crate) struct FontEntry {
    pub(crate) pdf_name: String,
    pub(crate) font_ref: Ref,
}

/// Windows-1252 (WinAnsi) byte to Unicode char mapping.
/// Bytes 0x80-0x9F are remapped; all others map directly to their Unicode codepoint.
fn winansi_to_char(byte: u8) -> char {
    match byte {
        0x80 => '\u{20AC}',
        0x82 => '\u{201A}',
        0x83 => '\u{0192}',
        0x84 => '\u{201E}',
        0x85 => '\u{2026}',
        0x86 => '\u{2020}',
        0x87 => '\u{2021}',
        0x88 => '\u{02C6}',
        0x89 => '\u{2030}',
        0x8A => '\u{0160}',
        0x8B => '\u{2039}',
        0x8C => '\u{0152}',
        0x8E => '\u{017D}',
        0x91 => '\u{2018}',
        0x92 => '\u{2019}',
        0x93 => '\u{201C}',
        0x94 => '\u{201D}',
        0x95 => '\u{2022}', // bullet
        0x96 => '\u{2013}',
        0x97 => '\u{2014}',
        0x98 => '\u{02DC}',
        0x99 => '\u{2122}',
        0x9A => '\u{0161}',
        0x9B => '\u{203A}',
        0x9C => '\u{0153}',
        0x9E => '\u{017E}',
        0x9F => '\u{0178}',
        _ => byte as char,
    }
}

/// Convert a UTF-8 string to WinAnsi (Windows-1252) bytes for PDF Str encoding.
/// Characters with no WinAnsi code are dropped.
pub(crate) fn to_winansi_bytes(s: &str) -> Vec<u8> {
    s.chars()
        .filter_map(|c| match c as u32 {
            0x0020..=0x007E => Some(c as u8),
            0x00A0..=0x00FF => Some(c as u8), // Latin-1 supplement maps directly
            _ => (0x80u8..=0x9F).find(|&b| b != 0x81 && winansi_to_char(b) == c),
        })
        .collect()
}

/// First and last WinAnsi codes given a width in embedded fonts.
const FIRST_CHAR: u8 = 32;
const LAST_CHAR: u8 = 255;

/// Face metrics scaled to PDF glyph space (1000 units per em).
struct GlyphSpace {
    bbox: Rect,
    ascent: f32,
    descent: f32,
    cap_height: f32,
    widths: Vec<f32>,
}

impl GlyphSpace {
    fn of(face: &Face) -> Self {
        let scale = 1000.0 / f32::from(face.units_per_em());
        let bb = face.global_bounding_box();
        let widths = (FIRST_CHAR..=LAST_CHAR)
            .map(|byte| {
                face.glyph_index(winansi_to_char(byte))
                    .and_then(|gid| face.glyph_hor_advance(gid))
                    .map_or(0.0, |advance| f32::from(advance) * scale)
            })
            .collect();

        GlyphSpace {
            bbox: Rect::new(
                f32::from(bb.x_min) * scale,
                f32::from(bb.y_min) * scale,
                f32::from(bb.x_max) * scale,
                f32::from(bb.y_max) * scale,
            ),
            ascent: f32::from(face.ascender()) * scale,
            descent: f32::from(face.descender()) * scale,
            cap_height: face.capital_height().map_or(700.0, |h| f32::from(h) * scale),
            widths,
        }
    }
}

/// Base font name for an embedded file: its stem with everything but ASCII
/// letters, digits and `-` removed.
fn postscript_name(stem: &str) -> String {
    let name: String = stem
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();
    if name.is_empty() { "EmbeddedFont".to_string() } else { name }
}

/// Embed a TrueType font file as a simple WinAnsi-encoded font.
/// Returns `None` when the data is not a parseable font face.
fn embed_truetype(
    pdf: &mut Pdf,
    font_ref: Ref,
    descriptor_ref: Ref,
    data_ref: Ref,
    base_font: &str,
    font_data: &[u8],
) -> Option<()> {
    let face = Face::parse(font_data, 0).ok()?;
    let metrics = GlyphSpace::of(&face);
    let data_len = i32::try_from(font_data.len()).ok()?;

    pdf.stream(data_ref, font_data).pair(Name(b"Length1"), data_len);

    pdf.font_descriptor(descriptor_ref)
        .name(Name(base_font.as_bytes()))
        .flags(pdf_writer::types::FontFlags::NON_SYMBOLIC)
        .bbox(metrics.bbox)
        .italic_angle(0.0)
        .ascent(metrics.ascent)
        .descent(metrics.descent)
        .cap_height(metrics.cap_height)
        .stem_v(80.0)
        .font_file2(data_ref);

    {
        let mut font = pdf.indirect(font_ref).dict();
        font.pair(Name(b"Type"), Name(b"Font"))
            .pair(Name(b"Subtype"), Name(b"TrueType"))
            .pair(Name(b"BaseFont"), Name(base_font.as_bytes()))
            .pair(Name(b"Encoding"), Name(b"WinAnsiEncoding"))
            .pair(Name(b"FirstChar"), i32::from(FIRST_CHAR))
            .pair(Name(b"LastChar"), i32::from(LAST_CHAR))
            .pair(Name(b"FontDescriptor"), descriptor_ref);
        font.insert(Name(b"Widths")).array().items(metrics.widths);
    }

    Some(())
}

fn write_type1(pdf: &mut Pdf, font_ref: Ref, base_font: &str) {
    pdf.type1_font(font_ref)
        .base_font(Name(base_font.as_bytes()))
        .encoding_predefined(Name(b"WinAnsiEncoding"));
}

/// Write the font object(s) for `source` and return the resource name pages
/// use to select it.
///
/// An unknown standard-14 name is a configuration error. A font file that
/// cannot be read propagates the IO error; one that reads but does not parse
/// falls back to Helvetica.
pub(crate) fn register_font(
    pdf: &mut Pdf,
    source: &FontSource,
    pdf_name: String,
    alloc: &mut impl FnMut() -> Ref,
) -> Result<FontEntry> {
    let font_ref = alloc();

    match source {
        FontSource::Builtin(name) => {
            if !STANDARD_14.contains(&name.as_str()) {
                return Err(Error::Font(format!(
                    "{name} is not a standard PDF font; use a font file instead"
                )));
            }
            write_type1(pdf, font_ref, name);
        }
        FontSource::File(path) => {
            let data = std::fs::read(path)?;
            let descriptor_ref = alloc();
            let data_ref = alloc();
            let base_font = postscript_name(
                path.file_stem().and_then(|s| s.to_str()).unwrap_or_default(),
            );
            if embed_truetype(pdf, font_ref, descriptor_ref, data_ref, &base_font, &data).is_none() {
                log::warn!("Font file {} could not be parsed, using Helvetica", path.display());
                write_type1(pdf, font_ref, "Helvetica");
            }
        }
    }

    Ok(FontEntry { pdf_name, font_ref })
}
