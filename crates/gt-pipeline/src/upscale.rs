//! Back->post upscaler: nearest-neighbor blit at output resolution plus
//! the premultiplied emissive buffer for "shiny" pixels.

use gt_core::cell::Grid;
use gt_core::config::Options;
use gt_core::geom::Rect;
use gt_core::palette::{linear_u16_premul, Palette, Rgba};

use crate::layout::Layout;
use crate::rasterize::{BackBuffer, FOREGROUND_FLAG};

/// Premultiplied linear-u16 RGBA, the unit the emit/blur planes trade in.
pub type EmitPixel = (u16, u16, u16, u16);

/// Output-sized buffers: `post` (the upscaled cell image) and `emit` (the
/// premultiplied emissive source for the blur pass). `emitH`/`blur`/`final`
/// live alongside for allocation-locality but are owned/written by the
/// blur and compose stages.
pub struct PostBuffers {
    width: i32,
    height: i32,
    pub post: Vec<Rgba>,
    pub emit: Vec<EmitPixel>,
    /// Horizontally-blurred emissive values, stored transposed:
    /// `emit_h[x * height + y]` holds the value conceptually at `(x, y)`.
    pub emit_h: Vec<EmitPixel>,
    pub blur: Vec<(f32, f32, f32, f32)>,
    pub final_buf: Vec<Rgba>,
}

impl PostBuffers {
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        let len = (width * height).max(0) as usize;
        Self {
            width,
            height,
            post: vec![Rgba::default(); len],
            emit: vec![(0, 0, 0, 0); len],
            emit_h: vec![(0, 0, 0, 0); len],
            blur: vec![(0.0, 0.0, 0.0, 0.0); len],
            final_buf: vec![Rgba::default(); len],
        }
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        *self = Self::new(width, height);
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
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Rgba, emit: EmitPixel) {
        if !self.in_bounds(x, y) {
            return;
        }
        let idx = (y * self.width + x) as usize;
        self.post[idx] = color;
        self.emit[idx] = emit;
    }

    /// Fills every post pixel outside the grid area with `palette[border]`,
    /// contributing to `emit` only when `border_shiny` is set.
    pub fn fill_border(&mut self, layout: &Layout, grid: &Grid, palette: &Palette, options: &Options) {
        let border = palette.get_entry(options.border_color);
        let border_emit = if options.border_shiny { linear_u16_premul(border) } else { (0, 0, 0, 0) };
        let grid_left = layout.margin_x;
        let grid_top = layout.margin_y;
        let grid_right = grid_left + grid.columns() * 8 * layout.scale;
        let grid_bottom = grid_top + grid.rows() * 8 * layout.scale;
        for y in 0..self.height {
            for x in 0..self.width {
                if x >= grid_left && x < grid_right && y >= grid_top && y < grid_bottom {
                    continue;
                }
                self.set_pixel(x, y, border, border_emit);
            }
        }
    }

    /// Upscales every back-buffer pixel belonging to a dirty cell within
    /// `change_rect` (text-space) by nearest duplication, and writes the
    /// corresponding `emit` pixel per §4.10.
    pub fn upscale_dirty(&mut self, back: &BackBuffer, grid: &Grid, layout: &Layout, options: &Options, change_rect: Rect) {
        if change_rect.is_empty() {
            return;
        }
        let columns = grid.columns();
        let dirty = grid.char_dirty();
        let cells = grid.characters();
        let back_width = back.width();
        let scale = layout.scale;

        for row in change_rect.top..change_rect.bottom {
            for col in change_rect.left..change_rect.right {
                let idx = (row * columns + col) as usize;
                if !dirty[idx] {
                    continue;
                }
                let shiny = cells[idx].is_shiny();
                for gy in 0..8i32 {
                    for gx in 0..8i32 {
                        let back_x = col * 8 + gx;
                        let back_y = row * 8 + gy;
                        let back_idx = (back_y * back_width + back_x) as usize;
                        let color = back.pixels()[back_idx];
                        let is_fg = back.flags()[back_idx] & FOREGROUND_FLAG != 0;
                        let contributes = shiny
                            && ((is_fg && options.blur_foreground) || (!is_fg && options.blur_background));
                        let emit = if contributes { linear_u16_premul(color) } else { (0, 0, 0, 0) };

                        let out_x0 = layout.margin_x + back_x * scale;
                        let out_y0 = layout.margin_y + back_y * scale;
                        for dy in 0..scale {
                            for dx in 0..scale {
                                self.set_pixel(out_x0 + dx, out_y0 + dy, color, emit);
                            }
                        }
                    }
                }
            }
        }
    }
}
