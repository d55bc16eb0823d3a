//! Compressed grid loader: gzip-wrapped raw DEFLATE payload describing one
//! or more cell layers, as produced by REXPaint-style `.xp` exporters.

use std::io::Read;

use flate2::read::DeflateDecoder;
use gt_core::cell::{style, Grid};
use gt_core::palette::Palette;

use crate::cp437::decode_byte;
use crate::error::XpError;
use crate::write::write_cell;

const TRANSPARENT_BG: (u8, u8, u8) = (255, 0, 255);

/// Decompresses `bytes` (a full gzip stream) and writes every opaque cell
/// of every unmasked layer at `(base_x + x, base_y + y)`. Bit `i` of
/// `layer_mask` hides layer `i` when set. Any failure -- bad header,
/// inflate error, truncated payload -- stops at that point; cells already
/// written from earlier layers stand.
pub fn load(
    bytes: &[u8],
    layer_mask: u32,
    base_x: i32,
    base_y: i32,
    grid: &mut Grid,
    palette: &Palette,
) -> Result<(), XpError> {
    if bytes.len() < 18 {
        return Err(XpError::TooShort);
    }
    if bytes[0] != 0x1F || bytes[1] != 0x8B {
        return Err(XpError::BadMagic);
    }
    if bytes[2] != 0x08 {
        return Err(XpError::UnsupportedMethod);
    }
    if bytes[3] != 0 {
        return Err(XpError::UnsupportedFlags(bytes[3]));
    }

    let len = bytes.len();
    let uncompressed_size = u32::from_le_bytes([bytes[len - 4], bytes[len - 3], bytes[len - 2], bytes[len - 1]]);

    let mut payload = Vec::with_capacity(uncompressed_size as usize);
    let mut decoder = DeflateDecoder::new(&bytes[10..len - 8]);
    decoder.read_to_end(&mut payload)?;

    let mut cursor = Cursor { data: &payload, pos: 0 };
    let version = cursor.read_i32().ok_or(XpError::TruncatedPayload(-1))?;
    let _ = version;
    let layer_count = cursor.read_i32().ok_or(XpError::TruncatedPayload(-1))?;
    if !(1..=9).contains(&layer_count) {
        return Err(XpError::BadLayerCount(layer_count));
    }
    let width = cursor.read_i32().ok_or(XpError::TruncatedPayload(0))?;
    let height = cursor.read_i32().ok_or(XpError::TruncatedPayload(0))?;

    for layer in 0..layer_count {
        for x in 0..width {
            for y in 0..height {
                let cp437_index = cursor.read_u32().ok_or(XpError::TruncatedPayload(layer))?;
                let fg = cursor.read_rgb().ok_or(XpError::TruncatedPayload(layer))?;
                let bg = cursor.read_rgb().ok_or(XpError::TruncatedPayload(layer))?;

                if bg == TRANSPARENT_BG {
                    continue;
                }
                if layer_mask & (1 << layer) != 0 {
                    continue;
                }

                let glyph = decode_byte((cp437_index & 0xFF) as u8);
                let fg_index = palette.find_color_match(fg.0, fg.1, fg.2);
                let bg_index = palette.find_color_match(bg.0, bg.1, bg.2);
                write_cell(grid, base_x + x, base_y + y, glyph, fg_index, bg_index, style::NONE);
            }
        }
    }

    Ok(())
}

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl Cursor<'_> {
    fn read_i32(&mut self) -> Option<i32> {
        self.read_u32().map(|v| v as i32)
    }

    fn read_u32(&mut self) -> Option<u32> {
        let bytes = self.data.get(self.pos..self.pos + 4)?;
        self.pos += 4;
        Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn read_rgb(&mut self) -> Option<(u8, u8, u8)> {
        let bytes = self.data.get(self.pos..self.pos + 3)?;
        self.pos += 3;
        Some((bytes[0], bytes[1], bytes[2]))
    }
}
