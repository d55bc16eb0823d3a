//! Back-buffer rasterizer: renders each dirty cell's 8x8 glyph into the
//! unscaled per-cell pixel plane, tagging each pixel foreground-or-background.

use gt_core::cell::{style, Grid};
use gt_core::font::Font;
use gt_core::palette::{Palette, Rgba};
use rayon::prelude::*;

/// Bit 0 of a back-buffer flag byte: set iff the pixel came from the
/// foreground color.
pub const FOREGROUND_FLAG: u8 = 1;

const CELL_W: i32 = 8;
const CELL_H: i32 = 8;

/// Unscaled per-cell pixel plane: `columns*8 x rows*8` RGBA pixels plus a
/// parallel foreground/background flag byte per pixel.
pub struct BackBuffer {
    width: i32,
    height: i32,
    pixels: Vec<Rgba>,
    flags: Vec<u8>,
}

impl BackBuffer {
    #[must_use]
    pub fn new(columns: i32, rows: i32) -> Self {
        let width = columns * CELL_W;
        let height = rows * CELL_H;
        let len = (width * height).max(0) as usize;
        Self { width, height, pixels: vec![Rgba::default(); len], flags: vec![0; len] }
    }

    /// Reallocates for new grid dimensions, discarding prior contents (the
    /// caller must force a full redraw alongside any resize).
    pub fn resize(&mut self, columns: i32, rows: i32) {
        *self = Self::new(columns, rows);
    }

    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    #[must_use]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    #[must_use]
    pub fn flags(&self) -> &[u8] {
        &self.flags
    }

    /// Rasterizes every cell `grid` has flagged dirty. Parallel across
    /// cell-rows: each cell-row owns a disjoint `8`-pixel-tall band of the
    /// back buffer, so rows rasterize independently.
    pub fn rasterize_dirty(&mut self, grid: &Grid, font: &Font, palette: &Palette, blink_on: bool) {
        let columns = grid.columns();
        let cells = grid.characters();
        let dirty = grid.char_dirty();
        let back_width = self.width;
        let band_len = (back_width * CELL_H) as usize;

        self.pixels
            .par_chunks_exact_mut(band_len)
            .zip(self.flags.par_chunks_exact_mut(band_len))
            .enumerate()
            .for_each(|(cell_row, (pixel_band, flag_band))| {
                let cell_row = cell_row as i32;
                for col in 0..columns {
                    let idx = (cell_row * columns + col) as usize;
                    if !dirty[idx] {
                        continue;
                    }
                    rasterize_cell(pixel_band, flag_band, back_width, col, cells[idx], font, palette, blink_on);
                }
            });
    }
}

fn rasterize_cell(
    pixel_band: &mut [Rgba],
    flag_band: &mut [u8],
    back_width: i32,
    col: i32,
    cell: gt_core::cell::CharData,
    font: &Font,
    palette: &Palette,
    blink_on: bool,
) {
    let glyph = font.glyph_data(cell.glyph);
    let fg = palette.get_entry(cell.fg());
    let bg = palette.get_entry_as_background(cell.bg());
    let hidden_by_blink = (cell.style & style::BLINK != 0) && !blink_on;
    let bold = cell.style & style::BOLD != 0;
    let underline = cell.style & style::UNDERLINE != 0;

    for gy in 0..CELL_H {
        let row_byte = glyph[gy as usize];
        for gx in 0..CELL_W {
            let mut lit = !hidden_by_blink && (row_byte & (1 << (7 - gx))) != 0;
            if bold && !lit && !hidden_by_blink && gx > 0 {
                lit = (row_byte & (1 << (7 - (gx - 1)))) != 0;
            }
            if underline && gy == CELL_H - 1 {
                lit = true;
            }
            let px = col * CELL_W + gx;
            let offset = (gy * back_width + px) as usize;
            pixel_band[offset] = if lit { fg } else { bg };
            flag_band[offset] = if lit { FOREGROUND_FLAG } else { 0 };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gt_core::cell::Grid;
    use gt_core::font::Font;
    use gt_core::palette::Preset;

    #[test]
    fn rasterizes_only_dirty_cells() {
        let mut grid = Grid::new(2, 1);
        grid.print("A");
        let font = Font::builtin();
        let palette = Palette::from_preset(Preset::Vga);
        let mut back = BackBuffer::new(2, 1);
        back.rasterize_dirty(&grid, &font, &palette, true);
        assert_eq!(back.width(), 16);
        assert_eq!(back.height(), 8);
        // Column 1 (space) was also dirty from the initial full-redraw flag,
        // so just check a foreground pixel exists somewhere in column 0.
        let any_fg = (0..8).any(|gy| back.flags()[(gy * back.width()) as usize] & FOREGROUND_FLAG != 0);
        assert!(any_fg);
    }

    #[test]
    fn blink_off_hides_blinking_glyph() {
        let mut grid = Grid::new(1, 1);
        grid.set_style(style::BLINK);
        grid.print("A");
        let font = Font::builtin();
        let palette = Palette::from_preset(Preset::Vga);
        let mut back = BackBuffer::new(1, 1);
        back.rasterize_dirty(&grid, &font, &palette, false);
        assert!(back.flags().iter().all(|f| f & FOREGROUND_FLAG == 0));
    }

    #[test]
    fn underline_lights_bottom_row() {
        let mut grid = Grid::new(1, 1);
        grid.set_style(style::UNDERLINE);
        grid.print(" ");
        let font = Font::builtin();
        let palette = Palette::from_preset(Preset::Vga);
        let mut back = BackBuffer::new(1, 1);
        back.rasterize_dirty(&grid, &font, &palette, true);
        let w = back.width();
        for px in 0..w {
            let offset = (7 * w + px) as usize;
            assert_ne!(back.flags()[offset] & FOREGROUND_FLAG, 0);
        }
    }
}
