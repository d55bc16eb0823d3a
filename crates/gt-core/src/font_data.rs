//! Built-in 8x8 bitmap font glyph data.
//!
//! Each range is `(start, stop, bytes)` with `bytes.len() == (stop - start) * 8`,
//! one byte per glyph row, bit 7 the leftmost pixel. Authored by
//! `tools/gen_font.py`: Basic Latin is a hand-drawn pixel font, Box Drawing
//! and Block Elements are computed directly from line/fill geometry, the
//! Greek subset covers exactly the letters reachable through the CP437 table,
//! Latin-1 Supplement is the full accented-letter/punctuation block the CP437
//! high bytes map into, and Symbols fills in the handful of math/misc
//! codepoints CP437 reaches for outside every other range.

/// Glyph shown for codepoints outside every configured range.
pub static NOTDEF: [u8; 8] = [0xFE, 0x82, 0xB2, 0x9A, 0x92, 0x82, 0x92, 0xFE];

/// Glyph data for BASIC_LATIN, as contiguous `(start, stop, bytes)` blocks.
pub static BASIC_LATIN: &[(u32, u32, &[u8])] = &[
    (0x0020, 0x007F, &[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00, 0x18, 0x00, 0x36, 0x36, 0x36, 0x00, 0x00, 0x00, 0x00, 0x00, 0x6C, 0x6C, 0xFF, 0x6C, 0xFF, 0x6C, 0x6C, 0x00, 0x18, 0x3E, 0x60, 0x3C, 0x06, 0xF8, 0x18, 0x00, 0x66, 0x6C, 0x18, 0x30, 0x60, 0xD8, 0xCC, 0x00, 0x38, 0x6C, 0x38, 0x74, 0xC6, 0xC6, 0x7D, 0x00, 0x18, 0x18, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x18, 0x30, 0x30, 0x30, 0x18, 0x0C, 0x00, 0x30, 0x18, 0x0C, 0x0C, 0x0C, 0x18, 0x30, 0x00, 0x00, 0x28, 0x10, 0x7C, 0x10, 0x28, 0x00, 0x00, 0x00, 0x18, 0x18, 0x7E, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x30, 0x00, 0x00, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x00, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x00, 0x38, 0x6C, 0xC6, 0xC6, 0xC6, 0x6C, 0x38, 0x00, 0x18, 0x38, 0x18, 0x18, 0x18, 0x18, 0x7E, 0x00, 0x7C, 0xC6, 0x06, 0x0C, 0x18, 0x30, 0xFE, 0x00, 0x7C, 0xC6, 0x06, 0x1C, 0x06, 0xC6, 0x7C, 0x00, 0x0E, 0x1E, 0x36, 0x66, 0xFF, 0x06, 0x06, 0x00, 0xFE, 0xC0, 0xFC, 0x06, 0x06, 0xC6, 0x7C, 0x00, 0x3C, 0x60, 0xC0, 0xF8, 0xC6, 0xC6, 0x7C, 0x00, 0xFF, 0x86, 0x0C, 0x18, 0x30, 0x30, 0x30, 0x00, 0x7C, 0xC6, 0xC6, 0x7C, 0xC6, 0xC6, 0x7C, 0x00, 0x7C, 0xC6, 0xC6, 0x7E, 0x06, 0x0C, 0x38, 0x00, 0x00, 0x18, 0x00, 0x00, 0x00, 0x18, 0x00, 0x00, 0x00, 0x18, 0x00, 0x00, 0x00, 0x18, 0x30, 0x00, 0x0C, 0x18, 0x30, 0x60, 0x30, 0x18, 0x0C, 0x00, 0x00, 0xFF, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x30, 0x18, 0x0C, 0x06, 0x0C, 0x18, 0x30, 0x00, 0x7C, 0xC6, 0x06, 0x0C, 0x18, 0x00, 0x18, 0x00, 0x7C, 0xBE, 0xA2, 0xAE, 0xA2, 0xBE, 0x40, 0x00, 0x38, 0x6C, 0xC6, 0xFF, 0xC6, 0xC6, 0xC6, 0x00, 0xFC, 0xC6, 0xC6, 0xFC, 0xC6, 0xC6, 0xFC, 0x00, 0x7C, 0xC6, 0xC0, 0xC0, 0xC0, 0xC6, 0x7C, 0x00, 0xFC, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6, 0xFC, 0x00, 0xFF, 0xC0, 0xFC, 0xC0, 0xC0, 0xC0, 0xFF, 0x00, 0xFF, 0xC0, 0xFC, 0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x7C, 0xC6, 0xC0, 0xDE, 0xC6, 0xC6, 0x7C, 0x00, 0xC6, 0xC6, 0xC6, 0xFF, 0xC6, 0xC6, 0xC6, 0x00, 0x7C, 0x18, 0x18, 0x18, 0x18, 0x18, 0x7C, 0x00, 0x0E, 0x06, 0x06, 0x06, 0xC6, 0xC6, 0x7C, 0x00, 0xC6, 0xCC, 0xD8, 0xF0, 0xD8, 0xCC, 0xC6, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xFF, 0x00, 0xC6, 0xEE, 0xD6, 0xC6, 0xC6, 0xC6, 0xC6, 0x00, 0xC6, 0xE6, 0xF6, 0xDE, 0xCE, 0xC6, 0xC6, 0x00, 0x7C, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0xFC, 0xC6, 0xC6, 0xFC, 0xC0, 0xC0, 0xC0, 0x00, 0x7C, 0xC6, 0xC6, 0xC6, 0xD6, 0xCC, 0x7C, 0x0C, 0xFC, 0xC6, 0xC6, 0xFC, 0xD8, 0xCC, 0xC6, 0x00, 0x7C, 0xC6, 0xC0, 0x7C, 0x06, 0xC6, 0x7C, 0x00, 0xFE, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x00, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0xC6, 0xC6, 0xC6, 0xC6, 0x6C, 0x6C, 0x38, 0x00, 0xC6, 0xC6, 0xC6, 0xD6, 0xD6, 0xEE, 0xC6, 0x00, 0xC6, 0x6C, 0x38, 0x38, 0x38, 0x6C, 0xC6, 0x00, 0xC6, 0x6C, 0x38, 0x18, 0x18, 0x18, 0x18, 0x00, 0xFF, 0x06, 0x0C, 0x18, 0x30, 0x60, 0xFF, 0x00, 0x3C, 0x30, 0x30, 0x30, 0x30, 0x30, 0x3C, 0x00, 0x80, 0x40, 0x20, 0x10, 0x08, 0x04, 0x02, 0x00, 0x3C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x3C, 0x00, 0x10, 0x28, 0x44, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0x00, 0x30, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7C, 0x06, 0x7E, 0xC6, 0x7E, 0x00, 0xC0, 0xC0, 0xFC, 0xC6, 0xC6, 0xC6, 0xFC, 0x00, 0x00, 0x00, 0x7C, 0xC0, 0xC0, 0xC0, 0x7C, 0x00, 0x06, 0x06, 0x7E, 0xC6, 0xC6, 0xC6, 0x7E, 0x00, 0x00, 0x00, 0x7C, 0xC6, 0xFE, 0xC0, 0x7C, 0x00, 0x3C, 0x60, 0xFC, 0x60, 0x60, 0x60, 0x60, 0x00, 0x00, 0x00, 0x7E, 0xC6, 0x7E, 0x06, 0x7C, 0x00, 0xC0, 0xC0, 0xFC, 0xC6, 0xC6, 0xC6, 0xC6, 0x00, 0x18, 0x00, 0x38, 0x18, 0x18, 0x18, 0x7C, 0x00, 0x0C, 0x00, 0x0C, 0x0C, 0x0C, 0x0C, 0xF0, 0x00, 0xC0, 0xC0, 0xCC, 0xD8, 0xF0, 0xD8, 0xCC, 0x00, 0x38, 0x18, 0x18, 0x18, 0x18, 0x18, 0x7C, 0x00, 0x00, 0x00, 0xD6, 0xD6, 0xD6, 0xD6, 0xD6, 0x00, 0x00, 0x00, 0xFC, 0xC6, 0xC6, 0xC6, 0xC6, 0x00, 0x00, 0x00, 0x7C, 0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0xFC, 0xC6, 0xFC, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0x7E, 0xC6, 0x7E, 0x06, 0x06, 0x00, 0x00, 0x00, 0xDC, 0xE6, 0xC0, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0x7C, 0xC0, 0x7C, 0x06, 0x7C, 0x00, 0x60, 0x60, 0xFC, 0x60, 0x60, 0x66, 0x38, 0x00, 0x00, 0x00, 0xC6, 0xC6, 0xC6, 0xCE, 0x76, 0x00, 0x00, 0x00, 0xC6, 0xC6, 0x6C, 0x6C, 0x38, 0x00, 0x00, 0x00, 0xC6, 0xD6, 0xD6, 0xD6, 0x6C, 0x00, 0x00, 0x00, 0xC6, 0x6C, 0x38, 0x6C, 0xC6, 0x00, 0x00, 0x00, 0xC6, 0xC6, 0x7E, 0x06, 0x7C, 0x00, 0x00, 0x00, 0xFE, 0x0C, 0x18, 0x30, 0xFE, 0x00, 0x0E, 0x18, 0x18, 0x30, 0x18, 0x18, 0x0E, 0x00, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00, 0x70, 0x18, 0x18, 0x0C, 0x18, 0x18, 0x70, 0x00, 0x66, 0xDA, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
];

/// Glyph data for GREEK_SUBSET, as contiguous `(start, stop, bytes)` blocks.
pub static GREEK_SUBSET: &[(u32, u32, &[u8])] = &[
    (0x0393, 0x0394, &[0xFE, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0x00]),
    (0x0398, 0x0399, &[0x7C, 0xC6, 0xDC, 0xFE, 0xDC, 0xC6, 0x7C, 0x00]),
    (0x03A3, 0x03A4, &[0xFE, 0xC0, 0x60, 0x30, 0x60, 0xC0, 0xFE, 0x00]),
    (0x03A6, 0x03A7, &[0x38, 0x6C, 0xFE, 0x6C, 0x6C, 0x6C, 0x38, 0x00]),
    (0x03A9, 0x03AA, &[0x7C, 0xC6, 0xC6, 0xC6, 0x6C, 0xD6, 0x82, 0x00]),
    (0x03B1, 0x03B2, &[0x00, 0x00, 0x7A, 0xCC, 0xCC, 0xCE, 0x76, 0x00]),
    (0x03B4, 0x03B6, &[0x30, 0x78, 0xC0, 0x78, 0xC6, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x78, 0xC0, 0xE0, 0xC0, 0x78, 0x00]),
    (0x03C0, 0x03C1, &[0x00, 0x00, 0xFE, 0x44, 0x44, 0x44, 0x4C, 0x00]),
    (0x03C3, 0x03C5, &[0x00, 0x00, 0x78, 0xC0, 0xC0, 0xC0, 0x78, 0x00, 0x00, 0x00, 0xF8, 0x20, 0x20, 0x20, 0x18, 0x00]),
    (0x03C6, 0x03C7, &[0x00, 0x30, 0x78, 0xB4, 0xB4, 0x78, 0x30, 0x00]),
];

/// Glyph data for BOX_DRAWING, as contiguous `(start, stop, bytes)` blocks.
pub static BOX_DRAWING: &[(u32, u32, &[u8])] = &[
    (0x2500, 0x2504, &[0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18]),
    (0x250C, 0x250D, &[0x00, 0x00, 0x00, 0x1F, 0x10, 0x10, 0x10, 0x10]),
    (0x250F, 0x2511, &[0x00, 0x00, 0x00, 0x1F, 0x1F, 0x18, 0x18, 0x18, 0x00, 0x00, 0x00, 0xF0, 0x10, 0x10, 0x10, 0x10]),
    (0x2513, 0x2515, &[0x00, 0x00, 0x00, 0xF8, 0xF8, 0x18, 0x18, 0x18, 0x10, 0x10, 0x10, 0x1F, 0x00, 0x00, 0x00, 0x00]),
    (0x2517, 0x2519, &[0x18, 0x18, 0x18, 0x1F, 0x1F, 0x00, 0x00, 0x00, 0x10, 0x10, 0x10, 0xF0, 0x00, 0x00, 0x00, 0x00]),
    (0x251B, 0x251D, &[0x18, 0x18, 0x18, 0xF8, 0xF0, 0x00, 0x00, 0x00, 0x10, 0x10, 0x10, 0x1F, 0x10, 0x10, 0x10, 0x10]),
    (0x2523, 0x2525, &[0x18, 0x18, 0x18, 0x1F, 0x1F, 0x18, 0x18, 0x18, 0x10, 0x10, 0x10, 0xF0, 0x10, 0x10, 0x10, 0x10]),
    (0x252B, 0x252D, &[0x18, 0x18, 0x18, 0xF8, 0xF8, 0x18, 0x18, 0x18, 0x00, 0x00, 0x00, 0xFF, 0x10, 0x10, 0x10, 0x10]),
    (0x2533, 0x2535, &[0x00, 0x00, 0x00, 0xFF, 0xFF, 0x18, 0x18, 0x18, 0x10, 0x10, 0x10, 0xFF, 0x00, 0x00, 0x00, 0x00]),
    (0x253B, 0x253D, &[0x18, 0x18, 0x18, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x10, 0x10, 0x10, 0xFF, 0x10, 0x10, 0x10, 0x10]),
    (0x254B, 0x254C, &[0x18, 0x18, 0x18, 0xFF, 0xFF, 0x18, 0x18, 0x18]),
    (0x2550, 0x2553, &[0x00, 0x00, 0xFF, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x24, 0x24, 0x24, 0x24, 0x24, 0x24, 0x24, 0x24, 0x00, 0x00, 0x0F, 0x00, 0x10, 0x1F, 0x10, 0x10]),
    (0x2554, 0x2556, &[0x00, 0x00, 0x0F, 0x00, 0x24, 0x2F, 0x24, 0x24, 0x00, 0x00, 0xF0, 0x00, 0x10, 0xF0, 0x10, 0x10]),
    (0x2557, 0x2559, &[0x00, 0x00, 0xF0, 0x00, 0x24, 0xF4, 0x24, 0x24, 0x10, 0x10, 0x1F, 0x10, 0x00, 0x0F, 0x00, 0x00]),
    (0x255A, 0x255C, &[0x24, 0x24, 0x2F, 0x24, 0x00, 0x0F, 0x00, 0x00, 0x10, 0x10, 0xF0, 0x10, 0x00, 0xF0, 0x00, 0x00]),
    (0x255D, 0x255E, &[0x24, 0x24, 0xF4, 0x24, 0x00, 0xF0, 0x00, 0x00]),
    (0x2574, 0x2578, &[0x00, 0x00, 0x00, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x10, 0x10, 0x10, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x10, 0x10, 0x10, 0x10]),
];

/// Glyph data for BLOCK_ELEMENTS, as contiguous `(start, stop, bytes)` blocks.
pub static BLOCK_ELEMENTS: &[(u32, u32, &[u8])] = &[
    (0x2580, 0x2581, &[0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00]),
    (0x2584, 0x2585, &[0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF]),
    (0x2588, 0x2589, &[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]),
    (0x258C, 0x258D, &[0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0]),
    (0x2590, 0x2594, &[0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0xAA, 0x00, 0xAA, 0x00, 0xAA, 0x00, 0xAA, 0x00, 0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55, 0xFF, 0x55, 0xFF, 0x55, 0xFF, 0x55, 0xFF, 0x55]),
    (0x2596, 0x25A0, &[0x00, 0x00, 0x00, 0x00, 0xF0, 0xF0, 0xF0, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x0F, 0x0F, 0x0F, 0x0F, 0xF0, 0xF0, 0xF0, 0xF0, 0x00, 0x00, 0x00, 0x00, 0xF0, 0xF0, 0xF0, 0xF0, 0xFF, 0xFF, 0xFF, 0xFF, 0xF0, 0xF0, 0xF0, 0xF0, 0x0F, 0x0F, 0x0F, 0x0F, 0xFF, 0xFF, 0xFF, 0xFF, 0xF0, 0xF0, 0xF0, 0xF0, 0xFF, 0xFF, 0xFF, 0xFF, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x0F, 0x0F, 0x0F, 0x0F, 0xF0, 0xF0, 0xF0, 0xF0, 0x0F, 0x0F, 0x0F, 0x0F, 0xFF, 0xFF, 0xFF, 0xFF]),
];

/// Glyph data for GEOMETRIC_SHAPES, as contiguous `(start, stop, bytes)` blocks.
pub static GEOMETRIC_SHAPES: &[(u32, u32, &[u8])] = &[
    (0x25A0, 0x25A2, &[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0xFF]),
    (0x25B2, 0x25B3, &[0x10, 0x10, 0x38, 0x38, 0x7C, 0x7C, 0xFF, 0x00]),
    (0x25BC, 0x25BD, &[0xFF, 0x7C, 0x7C, 0x38, 0x38, 0x10, 0x10, 0x00]),
    (0x25CB, 0x25CC, &[0x3C, 0x42, 0x81, 0x81, 0x81, 0x81, 0x42, 0x3C]),
    (0x25CF, 0x25D0, &[0x3C, 0x7E, 0xFF, 0xFF, 0xFF, 0xFF, 0x7E, 0x3C]),
];

/// Glyph data for LATIN1_SUPPLEMENT (U+00A0-U+00FF), the block the CP437
/// high bytes (accented letters, `±`, `°`, guillemets, fractions, ...)
/// decode into.
pub static LATIN1_SUPPLEMENT: &[(u32, u32, &[u8])] = &[
    (
        0x00A0, 0x0100,
        &[
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // A0 NBSP
            0x18, 0x18, 0x00, 0x18, 0x18, 0x18, 0x18, 0x00, // A1 ¡
            0x10, 0x38, 0x64, 0xC0, 0xC0, 0x64, 0x38, 0x10, // A2 ¢
            0x3C, 0x42, 0x40, 0xF0, 0x40, 0x42, 0xFE, 0x00, // A3 £
            0x00, 0x66, 0x3C, 0x66, 0x66, 0x3C, 0x66, 0x00, // A4 ¤
            0xC6, 0x6C, 0x38, 0xFE, 0x10, 0xFE, 0x10, 0x00, // A5 ¥
            0x18, 0x18, 0x18, 0x00, 0x18, 0x18, 0x18, 0x00, // A6 ¦
            0x3C, 0x60, 0x38, 0x6C, 0x6C, 0x1C, 0x78, 0x00, // A7 §
            0x66, 0x66, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // A8 ¨
            0x3C, 0x42, 0x99, 0xA5, 0xA5, 0x99, 0x42, 0x3C, // A9 ©
            0x38, 0x04, 0x3C, 0x44, 0x3C, 0x00, 0x7C, 0x00, // AA ª
            0x00, 0x36, 0x6C, 0xD8, 0x6C, 0x36, 0x00, 0x00, // AB «
            0x00, 0x00, 0x00, 0x7E, 0x02, 0x02, 0x00, 0x00, // AC ¬
            0x00, 0x00, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x00, // AD soft hyphen
            0x3C, 0x42, 0xBA, 0xA6, 0xBA, 0xA2, 0x42, 0x3C, // AE ®
            0x7E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // AF ¯
            0x38, 0x44, 0x44, 0x38, 0x00, 0x00, 0x00, 0x00, // B0 °
            0x18, 0x18, 0x7E, 0x18, 0x18, 0x00, 0x7E, 0x00, // B1 ±
            0x38, 0x44, 0x18, 0x20, 0x7C, 0x00, 0x00, 0x00, // B2 ²
            0x38, 0x44, 0x18, 0x44, 0x38, 0x00, 0x00, 0x00, // B3 ³
            0x0C, 0x18, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00, // B4 ´
            0x00, 0x66, 0x66, 0x66, 0x66, 0x7C, 0x60, 0xC0, // B5 µ
            0x7F, 0xDB, 0xDB, 0xDB, 0x5B, 0x1B, 0x1B, 0x00, // B6 ¶
            0x00, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00, // B7 ·
            0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x30, // B8 ¸
            0x10, 0x30, 0x10, 0x10, 0x38, 0x00, 0x00, 0x00, // B9 ¹
            0x38, 0x44, 0x44, 0x38, 0x00, 0x7C, 0x00, 0x00, // BA º
            0x00, 0x6C, 0x36, 0x1B, 0x36, 0x6C, 0x00, 0x00, // BB »
            0xC2, 0xC6, 0x0C, 0x18, 0x32, 0x7E, 0x06, 0x00, // BC ¼
            0xC2, 0xC6, 0x0C, 0x10, 0x26, 0x4A, 0x8E, 0x00, // BD ½
            0xC6, 0xCC, 0x18, 0x36, 0x2A, 0x4A, 0x8E, 0x00, // BE ¾
            0x18, 0x18, 0x00, 0x18, 0x0C, 0x06, 0xC6, 0x7C, // BF ¿
            0x20, 0x38, 0x6C, 0xC6, 0xFE, 0xC6, 0xC6, 0x00, // C0 À
            0x08, 0x38, 0x6C, 0xC6, 0xFE, 0xC6, 0xC6, 0x00, // C1 Á
            0x28, 0x38, 0x6C, 0xC6, 0xFE, 0xC6, 0xC6, 0x00, // C2 Â
            0x6C, 0x38, 0x6C, 0xC6, 0xFE, 0xC6, 0xC6, 0x00, // C3 Ã
            0x66, 0x38, 0x6C, 0xC6, 0xFE, 0xC6, 0xC6, 0x00, // C4 Ä
            0x18, 0x3C, 0x66, 0xC3, 0xFF, 0xC3, 0xC3, 0x00, // C5 Å
            0x00, 0x3F, 0x6C, 0xEC, 0xFC, 0x6C, 0x6F, 0x00, // C6 Æ
            0x00, 0x3C, 0x66, 0x60, 0x60, 0x66, 0x3C, 0x18, // C7 Ç
            0x20, 0xFE, 0xC0, 0xFC, 0xC0, 0xFE, 0x00, 0x00, // C8 È
            0x08, 0xFE, 0xC0, 0xFC, 0xC0, 0xFE, 0x00, 0x00, // C9 É
            0x28, 0xFE, 0xC0, 0xFC, 0xC0, 0xFE, 0x00, 0x00, // CA Ê
            0x66, 0xFE, 0xC0, 0xFC, 0xC0, 0xFE, 0x00, 0x00, // CB Ë
            0x20, 0x7E, 0x18, 0x18, 0x18, 0x7E, 0x00, 0x00, // CC Ì
            0x08, 0x7E, 0x18, 0x18, 0x18, 0x7E, 0x00, 0x00, // CD Í
            0x28, 0x7E, 0x18, 0x18, 0x18, 0x7E, 0x00, 0x00, // CE Î
            0x66, 0x7E, 0x18, 0x18, 0x18, 0x7E, 0x00, 0x00, // CF Ï
            0x7C, 0x66, 0xF6, 0x66, 0x66, 0x7C, 0x00, 0x00, // D0 Ð
            0x6C, 0xC6, 0xE6, 0xF6, 0xDE, 0xC6, 0x00, 0x00, // D1 Ñ
            0x20, 0x7C, 0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0x00, // D2 Ò
            0x08, 0x7C, 0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0x00, // D3 Ó
            0x28, 0x7C, 0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0x00, // D4 Ô
            0x6C, 0x7C, 0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0x00, // D5 Õ
            0x66, 0x7C, 0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0x00, // D6 Ö
            0x00, 0x66, 0x3C, 0x18, 0x3C, 0x66, 0x00, 0x00, // D7 ×
            0x00, 0x7E, 0xC6, 0xD6, 0xC6, 0x7E, 0x00, 0x00, // D8 Ø
            0x20, 0xC6, 0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0x00, // D9 Ù
            0x08, 0xC6, 0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0x00, // DA Ú
            0x28, 0xC6, 0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0x00, // DB Û
            0x66, 0xC6, 0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0x00, // DC Ü
            0x08, 0xC6, 0x6C, 0x38, 0x18, 0x18, 0x00, 0x00, // DD Ý
            0xC0, 0xFC, 0xC6, 0xC6, 0xFC, 0xC0, 0xC0, 0x00, // DE Þ
            0x78, 0xCC, 0xCC, 0xD8, 0xCC, 0xC6, 0xC0, 0x00, // DF ß
            0x20, 0x00, 0x78, 0x0C, 0x7C, 0xCC, 0x76, 0x00, // E0 à
            0x08, 0x00, 0x78, 0x0C, 0x7C, 0xCC, 0x76, 0x00, // E1 á
            0x28, 0x00, 0x78, 0x0C, 0x7C, 0xCC, 0x76, 0x00, // E2 â
            0x6C, 0x00, 0x78, 0x0C, 0x7C, 0xCC, 0x76, 0x00, // E3 ã
            0x66, 0x00, 0x78, 0x0C, 0x7C, 0xCC, 0x76, 0x00, // E4 ä
            0x18, 0x3C, 0x18, 0x78, 0xCC, 0xCC, 0x76, 0x00, // E5 å
            0x00, 0x00, 0xEC, 0x36, 0x7C, 0xC0, 0x7C, 0x00, // E6 æ
            0x00, 0x00, 0x7C, 0xC0, 0xC0, 0x7C, 0x18, 0x30, // E7 ç
            0x20, 0x00, 0x7C, 0xC6, 0xFE, 0xC0, 0x7C, 0x00, // E8 è
            0x08, 0x00, 0x7C, 0xC6, 0xFE, 0xC0, 0x7C, 0x00, // E9 é
            0x28, 0x00, 0x7C, 0xC6, 0xFE, 0xC0, 0x7C, 0x00, // EA ê
            0x66, 0x00, 0x7C, 0xC6, 0xFE, 0xC0, 0x7C, 0x00, // EB ë
            0x20, 0x18, 0x00, 0x38, 0x18, 0x18, 0x7E, 0x00, // EC ì
            0x08, 0x18, 0x00, 0x38, 0x18, 0x18, 0x7E, 0x00, // ED í
            0x28, 0x18, 0x00, 0x38, 0x18, 0x18, 0x7E, 0x00, // EE î
            0x66, 0x00, 0x00, 0x38, 0x18, 0x18, 0x7E, 0x00, // EF ï
            0x3C, 0x66, 0x06, 0x3E, 0x66, 0x66, 0x3C, 0x00, // F0 ð
            0x6C, 0x00, 0xDC, 0x66, 0x66, 0x66, 0x66, 0x00, // F1 ñ
            0x20, 0x00, 0x7C, 0xC6, 0xC6, 0xC6, 0x7C, 0x00, // F2 ò
            0x08, 0x00, 0x7C, 0xC6, 0xC6, 0xC6, 0x7C, 0x00, // F3 ó
            0x28, 0x00, 0x7C, 0xC6, 0xC6, 0xC6, 0x7C, 0x00, // F4 ô
            0x6C, 0x00, 0x7C, 0xC6, 0xC6, 0xC6, 0x7C, 0x00, // F5 õ
            0x66, 0x00, 0x7C, 0xC6, 0xC6, 0xC6, 0x7C, 0x00, // F6 ö
            0x00, 0x18, 0x00, 0x7E, 0x00, 0x18, 0x00, 0x00, // F7 ÷
            0x00, 0x02, 0x7C, 0xCE, 0xD6, 0xE6, 0x7C, 0x80, // F8 ø
            0x20, 0x00, 0xC6, 0xC6, 0xC6, 0xC6, 0x7E, 0x00, // F9 ù
            0x08, 0x00, 0xC6, 0xC6, 0xC6, 0xC6, 0x7E, 0x00, // FA ú
            0x28, 0x00, 0xC6, 0xC6, 0xC6, 0xC6, 0x7E, 0x00, // FB û
            0x66, 0x00, 0xC6, 0xC6, 0xC6, 0xC6, 0x7E, 0x00, // FC ü
            0x08, 0x00, 0xC6, 0xC6, 0x7E, 0x06, 0xFC, 0x00, // FD ý
            0xC0, 0xC0, 0xFC, 0xC6, 0xC6, 0xFC, 0xC0, 0xC0, // FE þ
            0x66, 0x00, 0xC6, 0xC6, 0x7E, 0x06, 0xFC, 0x00, // FF ÿ
        ],
    ),
];

/// Glyph data for SYMBOLS: the remaining math/misc codepoints CP437's high
/// bytes reach for outside every other range (`ƒ`, the peseta sign, the
/// house glyph, set/comparison operators, the integral halves).
pub static SYMBOLS: &[(u32, u32, &[u8])] = &[
    (0x0192, 0x0193, &[0x00, 0x3E, 0x64, 0xF8, 0x64, 0x64, 0x60, 0x00]),
    (0x20A7, 0x20A8, &[0x00, 0x48, 0xFE, 0x48, 0x48, 0x48, 0x48, 0x08]),
    (0x221A, 0x221B, &[0x03, 0x06, 0x0C, 0x98, 0xA0, 0x40, 0x40, 0x00]),
    (0x221E, 0x221F, &[0x00, 0x00, 0x6C, 0x92, 0x92, 0x6C, 0x00, 0x00]),
    (0x221F, 0x2220, &[0x80, 0x80, 0x80, 0x80, 0x80, 0xFE, 0x00, 0x00]),
    (0x2229, 0x222A, &[0x38, 0x6C, 0xC6, 0xC6, 0xC6, 0x00, 0x00, 0x00]),
    (0x2248, 0x2249, &[0x00, 0x72, 0x8C, 0x00, 0x72, 0x8C, 0x00, 0x00]),
    (0x2261, 0x2262, &[0x00, 0xFE, 0x00, 0xFE, 0x00, 0xFE, 0x00, 0x00]),
    (0x2264, 0x2265, &[0x06, 0x18, 0x60, 0x18, 0x06, 0x00, 0x7E, 0x00]),
    (0x2265, 0x2266, &[0x60, 0x18, 0x06, 0x18, 0x60, 0x00, 0x7E, 0x00]),
    (0x2302, 0x2303, &[0x10, 0x38, 0x6C, 0xC6, 0xC6, 0xC6, 0xFF, 0x00]),
    (0x2310, 0x2311, &[0x00, 0x00, 0x00, 0x40, 0x40, 0x7E, 0x00, 0x00]),
    (0x2320, 0x2321, &[0x0C, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00]),
    (0x2321, 0x2322, &[0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x30, 0x00]),
];
