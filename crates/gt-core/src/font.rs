//! Built-in 8x8 bitmap font: codepoint lookup over ordered glyph ranges.

use crate::font_data;

/// Glyph cell dimensions in pixels. The engine only supports the built-in
/// 8x8 font; this exists so downstream code never hardcodes the constant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharSize {
    pub width: u32,
    pub height: u32,
}

impl Default for CharSize {
    fn default() -> Self {
        Self { width: 8, height: 8 }
    }
}

/// One contiguous span of codepoints `[start, stop)`.
///
/// `bytes` is either a single shared 8-byte glyph reused by every codepoint
/// in the span, or `(stop - start) * 8` contiguous bytes, one 8-byte glyph
/// per codepoint in ascending order.
#[derive(Clone, Copy)]
struct GlyphRange {
    start: u32,
    stop: u32,
    bytes: &'static [u8],
}

/// Codepoint -> 8x8 glyph lookup over an ordered sequence of ranges.
///
/// Only the built-in font is supported (no external font loading); `Font`
/// exists as a distinct type so the rasterizer and layout stages depend on
/// an interface rather than the raw static tables.
pub struct Font {
    char_size: CharSize,
    ranges: Vec<GlyphRange>,
}

impl Font {
    /// The single built-in font: Basic Latin, Latin-1 Supplement, a
    /// CP437-reachable Greek subset, Box Drawing, Block Elements, Geometric
    /// Shapes, and a handful of Symbols.
    #[must_use]
    pub fn builtin() -> Self {
        let mut ranges = Vec::new();
        for table in [
            font_data::BASIC_LATIN,
            font_data::LATIN1_SUPPLEMENT,
            font_data::GREEK_SUBSET,
            font_data::BOX_DRAWING,
            font_data::BLOCK_ELEMENTS,
            font_data::GEOMETRIC_SHAPES,
            font_data::SYMBOLS,
        ] {
            for &(start, stop, bytes) in table {
                ranges.push(GlyphRange { start, stop, bytes });
            }
        }
        Self { char_size: CharSize::default(), ranges }
    }

    #[must_use]
    pub fn char_size(&self) -> CharSize {
        self.char_size
    }

    /// Returns the 8-byte glyph for `codepoint`, or the notdef glyph if no
    /// range covers it. Bit 7 of each byte is the leftmost pixel.
    #[must_use]
    pub fn glyph_data(&self, codepoint: u32) -> [u8; 8] {
        for range in &self.ranges {
            if codepoint < range.start || codepoint >= range.stop {
                continue;
            }
            if range.bytes.len() == 8 {
                return range.bytes.try_into().expect("checked len == 8 above");
            }
            let offset = (codepoint - range.start) as usize * 8;
            return range.bytes[offset..offset + 8]
                .try_into()
                .expect("glyph range sliced to exactly 8 bytes");
        }
        font_data::NOTDEF
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::builtin()
    }
}
