//! ANSI/CP437 art interpreter: walks a byte stream, applying control codes
//! and SGR attributes, and writing glyphs at `(baseX + col, baseY + row)`.
//! Never touches the grid's persistent cursor or state stack.

use gt_core::cell::Grid;
use gt_core::palette::Palette;

use crate::cp437::decode_byte as cp437_decode;
use crate::decode::decode_one;
use crate::sgr::{self, Pen};
use crate::write::write_cell;

/// Which byte encoding the text payload is in. Control bytes (`\n \r ESC
/// SUB`) are recognized the same way regardless of encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Cp437,
}

/// Interprets `bytes` starting at grid coordinates `(base_x, base_y)`.
pub fn interpret(bytes: &[u8], encoding: Encoding, base_x: i32, base_y: i32, grid: &mut Grid, palette: &Palette) {
    let mut pen = Pen::default();
    let mut col = base_x;
    let mut row = base_y;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                col = base_x;
                row += 1;
                i += 1;
            }
            b'\r' => {
                col = base_x;
                i += 1;
            }
            0x1A => break,
            0x1B => {
                i += 1;
                match bytes.get(i) {
                    Some(b'[') => i = handle_csi(bytes, i + 1, &mut pen, &mut col, row, palette),
                    Some(b']') => i = skip_osc(bytes, i + 1),
                    _ => {}
                }
            }
            _ => match encoding {
                Encoding::Cp437 => {
                    let glyph = cp437_decode(bytes[i]);
                    write_cell(grid, col, row, glyph, pen.fg, pen.bg, pen.style);
                    col += 1;
                    i += 1;
                }
                Encoding::Utf8 => match decode_one(&bytes[i..]) {
                    Some((ch, len)) => {
                        write_cell(grid, col, row, ch as u32, pen.fg, pen.bg, pen.style);
                        col += 1;
                        i += len;
                    }
                    None => break,
                },
            },
        }
    }
}

/// Parses a CSI body starting right after `ESC [`: optional `=`, up to 8
/// `;`-separated decimal arguments, then a terminating letter. Returns the
/// index just past the terminator, or `bytes.len()` if none was found
/// (an unterminated CSI silently consumes the rest of the stream).
fn handle_csi(bytes: &[u8], start: usize, pen: &mut Pen, col: &mut i32, row: i32, palette: &Palette) -> usize {
    let mut i = start;
    if bytes.get(i) == Some(&b'=') {
        i += 1;
    }

    let mut args = Vec::with_capacity(8);
    let mut current: Option<i64> = None;
    loop {
        match bytes.get(i) {
            Some(b'0'..=b'9') => {
                let digit = i64::from(bytes[i] - b'0');
                current = Some(current.unwrap_or(0) * 10 + digit);
                i += 1;
            }
            Some(b';') => {
                args.push(current.take().unwrap_or(0));
                i += 1;
            }
            Some(&terminator) if terminator.is_ascii_alphabetic() => {
                args.push(current.take().unwrap_or(0));
                i += 1;
                apply_csi(terminator, &args, pen, col, palette);
                return i;
            }
            Some(_) => {
                // Unexpected byte inside a CSI body: stop parsing this
                // sequence but don't terminate the whole stream.
                i += 1;
            }
            None => return i,
        }
    }
}

fn apply_csi(terminator: u8, args: &[i64], pen: &mut Pen, col: &mut i32, palette: &Palette) {
    match terminator {
        b'm' => sgr::apply(pen, args, palette),
        b'C' => {
            if let [n] = args {
                *col += *n as i32;
            }
        }
        _ => {}
    }
}

/// Consumes bytes until `BEL` (0x07), inclusive. Per the wire format, an
/// OSC body's content is never interpreted, only skipped.
fn skip_osc(bytes: &[u8], start: usize) -> usize {
    let mut i = start;
    while i < bytes.len() {
        if bytes[i] == 0x07 {
            return i + 1;
        }
        i += 1;
    }
    bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gt_core::palette::Preset;

    fn grid_and_palette() -> (Grid, Palette) {
        (Grid::new(10, 5), Palette::from_preset(Preset::Vga))
    }

    #[test]
    fn plain_text_writes_glyphs_left_to_right() {
        let (mut grid, palette) = grid_and_palette();
        interpret(b"AB", Encoding::Utf8, 0, 0, &mut grid, &palette);
        assert_eq!(grid.char_at_ref(0, 0).unwrap().glyph, 'A' as u32);
        assert_eq!(grid.char_at_ref(1, 0).unwrap().glyph, 'B' as u32);
    }

    #[test]
    fn newline_returns_to_base_x_on_next_row() {
        let (mut grid, palette) = grid_and_palette();
        interpret(b"A\nB", Encoding::Utf8, 2, 0, &mut grid, &palette);
        assert_eq!(grid.char_at_ref(2, 0).unwrap().glyph, 'A' as u32);
        assert_eq!(grid.char_at_ref(2, 1).unwrap().glyph, 'B' as u32);
    }

    #[test]
    fn sgr_sets_colors_for_subsequent_glyphs() {
        let (mut grid, palette) = grid_and_palette();
        interpret(b"\x1b[31mA", Encoding::Utf8, 0, 0, &mut grid, &palette);
        assert_eq!(grid.char_at_ref(0, 0).unwrap().fg(), 1);
    }

    #[test]
    fn sgr_style_codes_land_on_the_written_cell() {
        use gt_core::cell::style;
        let (mut grid, palette) = grid_and_palette();
        interpret(b"\x1b[1;4mA\x1b[0mB", Encoding::Utf8, 0, 0, &mut grid, &palette);
        assert_eq!(grid.char_at_ref(0, 0).unwrap().style, style::BOLD | style::UNDERLINE);
        assert_eq!(grid.char_at_ref(1, 0).unwrap().style, style::NONE);
    }

    #[test]
    fn csi_c_advances_column() {
        let (mut grid, palette) = grid_and_palette();
        interpret(b"\x1b[3CA", Encoding::Utf8, 0, 0, &mut grid, &palette);
        assert_eq!(grid.char_at_ref(3, 0).unwrap().glyph, 'A' as u32);
        assert!(grid.char_at_ref(0, 0).unwrap().glyph != 'A' as u32);
    }

    #[test]
    fn sub_terminates_parsing() {
        let (mut grid, palette) = grid_and_palette();
        interpret(b"A\x1aB", Encoding::Utf8, 0, 0, &mut grid, &palette);
        assert_eq!(grid.char_at_ref(0, 0).unwrap().glyph, 'A' as u32);
        assert_eq!(grid.char_at_ref(1, 0).unwrap().glyph, ' ' as u32);
    }

    #[test]
    fn osc_consumes_until_bel_without_side_effects() {
        let (mut grid, palette) = grid_and_palette();
        interpret(b"\x1b]0;title\x07A", Encoding::Utf8, 0, 0, &mut grid, &palette);
        assert_eq!(grid.char_at_ref(0, 0).unwrap().glyph, 'A' as u32);
    }

    #[test]
    fn cp437_mode_maps_high_bytes_through_the_table() {
        let (mut grid, palette) = grid_and_palette();
        interpret(&[0xDB], Encoding::Cp437, 0, 0, &mut grid, &palette);
        assert_eq!(grid.char_at_ref(0, 0).unwrap().glyph, 0x2588);
    }

    #[test]
    fn malformed_utf8_ends_interpretation() {
        let (mut grid, palette) = grid_and_palette();
        interpret(&[b'A', 0xFF, b'B'], Encoding::Utf8, 0, 0, &mut grid, &palette);
        assert_eq!(grid.char_at_ref(0, 0).unwrap().glyph, 'A' as u32);
        assert_eq!(grid.char_at_ref(1, 0).unwrap().glyph, ' ' as u32);
    }
}
