//! `Console`: the facade a host links against. Wires a cell grid, a
//! palette, the built-in font and a render pipeline behind the public API
//! surface a caller actually needs, hiding the multi-crate plumbing.

use gt_core::cell::{BoxStyle, CharData, Grid};
use gt_core::config::Options;
use gt_core::error::CoreError;
use gt_core::font::Font;
use gt_core::geom::Rect;
use gt_core::palette::{Palette, Preset, Rgba};
use gt_pipeline::layout::Layout;
use gt_pipeline::Pipeline;

/// Owns every buffer the engine needs beyond the caller's output
/// framebuffer, which is borrowed fresh for each [`Console::render`] call
/// (see the concurrency notes on the type itself: single-threaded,
/// non-overlapping calls per instance).
pub struct Console {
    grid: Grid,
    palette: Palette,
    font: Font,
    pipeline: Pipeline,
    options: Options,
    columns: i32,
    rows: i32,
    out_w: i32,
    out_h: i32,
    scratch: Vec<Rgba>,
    last_touched: Option<Rect>,
}

impl Console {
    /// Builds a console for a `columns x rows` text grid rendered into an
    /// `out_w x out_h` pixel framebuffer, using the VGA preset palette and
    /// default options.
    #[must_use]
    pub fn new(columns: i32, rows: i32, out_w: i32, out_h: i32) -> Self {
        let columns = columns.max(1);
        let rows = rows.max(1);
        let out_w = out_w.max(1);
        let out_h = out_h.max(1);
        let options = Options::default();
        Self {
            grid: Grid::new(columns, rows),
            palette: Palette::from_preset(Preset::Vga),
            font: Font::builtin(),
            pipeline: Pipeline::new(columns, rows, out_w, out_h, options.blink_time_ms),
            options,
            columns,
            rows,
            out_w,
            out_h,
            scratch: vec![Rgba::default(); (out_w * out_h) as usize],
            last_touched: None,
        }
    }

    // --- Configuration -----------------------------------------------

    /// Reallocates the text grid for a new `columns x rows`. Forces a full
    /// redraw next render. Precondition: both dimensions should be >= 1;
    /// non-positive values are clamped rather than rejected, matching
    /// [`Grid::new`]'s contract.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidGridSize`] if either dimension is
    /// non-positive; the grid is still resized (clamped to `1`) so the
    /// console remains usable, this only flags the precondition violation.
    pub fn size(&mut self, columns: i32, rows: i32) -> Result<(), CoreError> {
        let result = if columns < 1 || rows < 1 {
            Err(CoreError::InvalidGridSize { columns, rows })
        } else {
            Ok(())
        };
        self.columns = columns.max(1);
        self.rows = rows.max(1);
        self.grid.size(self.columns, self.rows);
        self.pipeline.resize(self.columns, self.rows, self.out_w, self.out_h);
        result
    }

    /// Resizes the output pixel framebuffer the console renders into.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidGridSize`] if either dimension is
    /// non-positive, reusing the grid-size error variant since both are the
    /// same class of precondition violation (a zero-area buffer).
    pub fn set_output_size(&mut self, out_w: i32, out_h: i32) -> Result<(), CoreError> {
        let result = if out_w < 1 || out_h < 1 {
            Err(CoreError::InvalidGridSize { columns: out_w, rows: out_h })
        } else {
            Ok(())
        };
        self.out_w = out_w.max(1);
        self.out_h = out_h.max(1);
        self.scratch = vec![Rgba::default(); (self.out_w * self.out_h) as usize];
        self.pipeline.resize(self.columns, self.rows, self.out_w, self.out_h);
        result
    }

    #[must_use]
    pub const fn font(&self) -> &Font {
        &self.font
    }

    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Switches the active palette preset, marking every entry dirty (the
    /// next render redraws every cell, since any of them might use any
    /// index).
    pub fn set_palette(&mut self, preset: Preset) {
        self.palette.set_preset(preset);
    }

    /// # Errors
    /// Returns [`CoreError::InvalidPaletteIndex`] if `index` is outside
    /// `0..15`; the entry is still written (masked into range) so a
    /// release build without error checking still degrades sensibly.
    pub fn set_palette_entry(&mut self, index: u8, color: Rgba) -> Result<(), CoreError> {
        let result = if index > 15 {
            Err(CoreError::PaletteIndexOutOfRange { index: i32::from(index) })
        } else {
            Ok(())
        };
        self.palette.set_entry(index, color);
        result
    }

    #[must_use]
    pub fn get_palette_entry(&self, index: u8) -> Rgba {
        self.palette.get_entry(index)
    }

    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Replaces the options record wholesale. A `blink_time_ms` change
    /// takes effect on the next [`Console::render`] tick.
    pub fn set_options(&mut self, options: Options) {
        self.options = options;
    }

    // --- Text API ------------------------------------------------------

    pub fn print(&mut self, text: &str) {
        self.grid.print(text);
    }

    pub fn print_char(&mut self, codepoint: u32) {
        self.grid.print_char(codepoint);
    }

    pub fn println(&mut self, text: &str) {
        self.grid.println(text);
    }

    pub fn newline(&mut self) {
        self.grid.newline();
    }

    pub fn cls(&mut self) {
        self.grid.cls();
    }

    pub fn locate(&mut self, col: i32, row: i32) {
        self.grid.locate(col, row);
    }

    pub fn column(&mut self, col: i32) {
        self.grid.column(col);
    }

    pub fn row(&mut self, row: i32) {
        self.grid.row(row);
    }

    #[must_use]
    pub fn cursor(&self) -> (i32, i32) {
        self.grid.cursor()
    }

    pub fn set_fg(&mut self, index: u8) {
        self.grid.set_fg(index);
    }

    pub fn set_bg(&mut self, index: u8) {
        self.grid.set_bg(index);
    }

    pub fn set_style(&mut self, flags: u8) {
        self.grid.set_style(flags);
    }

    #[must_use]
    pub fn fg(&self) -> u8 {
        self.grid.fg()
    }

    #[must_use]
    pub fn bg(&self) -> u8 {
        self.grid.bg()
    }

    #[must_use]
    pub fn style(&self) -> u8 {
        self.grid.style()
    }

    pub fn save(&mut self) {
        self.grid.save();
    }

    pub fn restore(&mut self) {
        self.grid.restore();
    }

    pub fn char_at(&mut self, col: i32, row: i32) -> Option<&mut CharData> {
        self.grid.char_at(col, row)
    }

    #[must_use]
    pub fn char_at_ref(&self, col: i32, row: i32) -> Option<&CharData> {
        self.grid.char_at_ref(col, row)
    }

    /// Read-only view of every cell, row-major, for host-side hit-testing
    /// or snapshotting without going through per-cell accessors.
    #[must_use]
    pub fn characters(&self) -> &[CharData] {
        self.grid.characters()
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, ch: u32) {
        self.grid.fill_rect(x, y, w, h, ch);
    }

    pub fn draw_box(&mut self, x: i32, y: i32, w: i32, h: i32, style: BoxStyle) {
        self.grid.draw_box(x, y, w, h, style);
    }

    /// Interprets `markup` as CCL (angle-bracket tags and HTML entities)
    /// and writes the result at the cursor.
    pub fn cprint(&mut self, markup: &str) {
        gt_markup::interpret(markup, &mut self.grid);
    }

    pub fn cprintln(&mut self, markup: &str) {
        gt_markup::interpret(markup, &mut self.grid);
        self.grid.newline();
    }

    /// Interprets `bytes` as a UTF-8 ANSI/CP437 art stream, drawing at
    /// `(base_x, base_y)` without touching the persistent cursor.
    pub fn print_ans(&mut self, bytes: &[u8], base_x: i32, base_y: i32) {
        gt_ansi::interpret(bytes, gt_ansi::Encoding::Utf8, base_x, base_y, &mut self.grid, &self.palette);
    }

    pub fn print_ans_cp437(&mut self, bytes: &[u8], base_x: i32, base_y: i32) {
        gt_ansi::interpret(bytes, gt_ansi::Encoding::Cp437, base_x, base_y, &mut self.grid, &self.palette);
    }

    /// Loads a gzip-wrapped `.xp` compressed grid at `(base_x, base_y)`.
    /// Any parse failure is logged at `debug` and otherwise swallowed: the
    /// grid is left exactly as far as the loader got, per the no-retry,
    /// always-total contract the rest of the console follows.
    pub fn print_xp(&mut self, bytes: &[u8], layer_mask: u32, base_x: i32, base_y: i32) {
        if let Err(err) = gt_ansi::load_xp(bytes, layer_mask, base_x, base_y, &mut self.grid, &self.palette) {
            log::debug!("printXP: {err}");
        }
    }

    // --- Rendering -------------------------------------------------------

    /// Advances the blink clock and runs one full render cycle, writing
    /// into `out` (row-major RGBA8, `out_pitch_bytes` bytes per row). With
    /// `allow_out_caching` off, the whole framebuffer is refreshed on any
    /// change since the caller hasn't promised to preserve prior pixels
    /// outside the dirty rect; with it on, only the touched rect is
    /// touched. Returns the touched output-space rect, or `None` if nothing
    /// changed.
    pub fn render(&mut self, dt_seconds: f32, out: &mut [u8], out_pitch_bytes: i32) -> Option<Rect> {
        let blink_changed = self.pipeline.tick(dt_seconds);
        let touched = self.pipeline.render(
            &mut self.grid,
            &mut self.palette,
            &self.font,
            &self.options,
            blink_changed,
            &mut self.scratch,
            self.out_w,
        );
        self.last_touched = touched;
        if let Some(rect) = touched {
            let flush_rect = if self.options.allow_out_caching {
                rect
            } else {
                Rect::new(0, 0, self.out_w, self.out_h)
            };
            flush(&self.scratch, self.out_w, out, out_pitch_bytes, flush_rect);
        }
        touched
    }

    /// Whether the most recent [`Console::render`] call touched any pixel.
    #[must_use]
    pub const fn has_pending_update(&self) -> bool {
        self.last_touched.is_some()
    }

    /// The output-space rect touched by the most recent render, if any.
    #[must_use]
    pub const fn get_update_rect(&self) -> Option<Rect> {
        self.last_touched
    }

    /// Inverts the layout transform: given an output-space pixel, returns
    /// the `(col, row)` it falls within, or `None` outside the text area
    /// or before the first render (scale not yet computed).
    #[must_use]
    pub fn hit(&self, x: i32, y: i32) -> Option<(i32, i32)> {
        let Layout { scale, margin_x, margin_y, .. } = self.pipeline.layout();
        if scale <= 0 {
            return None;
        }
        let cell_w = self.font.char_size().width as i32 * scale;
        let cell_h = self.font.char_size().height as i32 * scale;
        if x < margin_x || y < margin_y {
            return None;
        }
        let col = (x - margin_x) / cell_w;
        let row = (y - margin_y) / cell_h;
        if col >= self.columns || row >= self.rows {
            return None;
        }
        Some((col, row))
    }
}

fn flush(scratch: &[Rgba], out_w: i32, out: &mut [u8], pitch_bytes: i32, rect: Rect) {
    for y in rect.top..rect.bottom {
        let src_row = (y * out_w) as usize;
        let dst_row = (y * pitch_bytes) as usize;
        for x in rect.left..rect.right {
            let px = scratch[src_row + x as usize];
            let o = dst_row + (x as usize) * 4;
            out[o] = px.r;
            out[o + 1] = px.g;
            out[o + 2] = px.b;
            out[o + 3] = px.a;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn out_buf(w: i32, h: i32) -> Vec<u8> {
        vec![0u8; (w * h * 4) as usize]
    }

    #[test]
    fn first_render_touches_the_whole_buffer() {
        let mut console = Console::new(4, 2, 32, 16);
        console.print("hi");
        let mut out = out_buf(32, 16);
        let touched = console.render(0.0, &mut out, 32 * 4);
        assert!(touched.is_some());
        assert!(console.has_pending_update());
    }

    #[test]
    fn idle_second_render_reports_no_update() {
        let mut console = Console::new(4, 2, 32, 16);
        console.print("hi");
        let mut out = out_buf(32, 16);
        console.render(0.0, &mut out, 32 * 4);
        let touched = console.render(0.0, &mut out, 32 * 4);
        assert!(touched.is_none());
        assert!(!console.has_pending_update());
        assert!(console.get_update_rect().is_none());
    }

    #[test]
    fn hit_before_any_render_is_none() {
        let console = Console::new(4, 2, 32, 16);
        assert_eq!(console.hit(4, 4), None);
    }

    #[test]
    fn hit_maps_a_pixel_back_to_its_cell() {
        let mut console = Console::new(4, 2, 32, 16);
        let mut out = out_buf(32, 16);
        console.render(0.0, &mut out, 32 * 4);
        // 4 cols * 8px = 32 == out_w, so scale == 1 and there's no margin.
        assert_eq!(console.hit(0, 0), Some((0, 0)));
        assert_eq!(console.hit(9, 0), Some((1, 0)));
    }

    #[test]
    fn hit_outside_the_grid_area_is_none() {
        let mut console = Console::new(4, 2, 320, 160);
        let mut out = out_buf(320, 160);
        console.render(0.0, &mut out, 320 * 4);
        assert_eq!(console.hit(100_000, 0), None);
    }

    #[test]
    fn palette_preset_switch_forces_a_redraw() {
        let mut console = Console::new(4, 2, 32, 16);
        let mut out = out_buf(32, 16);
        console.render(0.0, &mut out, 32 * 4);
        assert!(console.render(0.0, &mut out, 32 * 4).is_none());
        console.set_palette(Preset::Tango);
        assert!(console.render(0.0, &mut out, 32 * 4).is_some());
    }

    #[test]
    fn markup_applies_color_and_preserves_cursor_semantics() {
        let mut console = Console::new(10, 2, 80, 16);
        console.cprint("<red>hi</red>!");
        assert_eq!(console.char_at_ref(0, 0).unwrap().fg(), 1);
        assert_eq!(console.char_at_ref(3, 0).unwrap().glyph, '!' as u32);
    }

    #[test]
    fn malformed_xp_leaves_the_grid_untouched() {
        let mut console = Console::new(4, 4, 32, 32);
        console.print_xp(&[0u8; 4], 0, 0, 0);
        assert_eq!(console.char_at_ref(0, 0).unwrap().glyph, 0x0020);
    }
}
