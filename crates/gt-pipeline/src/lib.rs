//! Render pipeline: turns a dirty `Grid` into pixels in a caller-owned
//! framebuffer. Stages run in a fixed order every frame; each stage is a
//! free module so it can be tested and reasoned about independently, and
//! [`Pipeline`] just wires them together.

pub mod blit;
pub mod blur;
pub mod compose;
pub mod invalidate;
pub mod layout;
mod noise_data;
pub mod rasterize;
pub mod upscale;

use gt_core::cell::Grid;
use gt_core::clock::BlinkClock;
use gt_core::config::Options;
use gt_core::font::Font;
use gt_core::geom::Rect;
use gt_core::kernel;
use gt_core::palette::{Palette, Rgba};

use invalidate::Validator;
use layout::Layout;
use rasterize::BackBuffer;
use upscale::PostBuffers;

/// Owns every buffer the render cycle touches beyond the caller's `Grid`
/// and `Palette`: the back buffer, the output-space planes, layout state,
/// the dirty-rect validator and the blink clock.
pub struct Pipeline {
    back: BackBuffer,
    post: PostBuffers,
    layout: Layout,
    validator: Validator,
    clock: BlinkClock,
    columns: i32,
    rows: i32,
    out_w: i32,
    out_h: i32,
}

impl Pipeline {
    #[must_use]
    pub fn new(columns: i32, rows: i32, out_w: i32, out_h: i32, blink_period_ms: u32) -> Self {
        Self {
            back: BackBuffer::new(columns, rows),
            post: PostBuffers::new(out_w, out_h),
            layout: Layout::default(),
            validator: Validator::new(),
            clock: BlinkClock::new(blink_period_ms),
            columns,
            rows,
            out_w,
            out_h,
        }
    }

    /// Resizes every buffer for a new grid or output size. The caller must
    /// also force a full grid redraw (`Grid::size` already does).
    pub fn resize(&mut self, columns: i32, rows: i32, out_w: i32, out_h: i32) {
        self.back.resize(columns, rows);
        self.post.resize(out_w, out_h);
        self.columns = columns;
        self.rows = rows;
        self.out_w = out_w;
        self.out_h = out_h;
        self.validator.mark_blur_globally_dirty();
    }

    /// Advances the blink clock by `dt_seconds`. Returns whether the phase
    /// flipped, which the caller should feed into [`Pipeline::render`].
    pub fn tick(&mut self, dt_seconds: f32) -> bool {
        self.clock.update(dt_seconds)
    }

    /// The output-space placement computed by the most recent `render` call
    /// (or the all-zero default before the first one). Lets a host invert a
    /// pixel coordinate back to a grid cell without duplicating the scale
    /// and margin arithmetic.
    #[must_use]
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    /// Runs one full render cycle: recompute layout, invalidate, rasterize,
    /// upscale, blur, compose, blit. Returns the output-space rect that was
    /// touched, or `None` if nothing changed. `out` must be at least
    /// `out_stride * out_h` pixels; `out_stride` may exceed `self.out_w`.
    #[allow(clippy::too_many_arguments)]
    pub fn render(
        &mut self,
        grid: &mut Grid,
        palette: &mut Palette,
        font: &Font,
        options: &Options,
        blink_changed: bool,
        out: &mut [Rgba],
        out_stride: i32,
    ) -> Option<Rect> {
        self.layout = Layout::compute(
            8,
            8,
            self.columns,
            self.rows,
            self.out_w,
            self.out_h,
            options.halign,
            options.valign,
            options.blur_scale,
        );

        let (change_rect, blur_rect) = self.validator.validate(grid, palette, blink_changed);
        if change_rect.is_empty() && blur_rect.is_empty() {
            return None;
        }

        self.back.rasterize_dirty(grid, font, palette, self.clock.is_on());
        self.post.upscale_dirty(&self.back, grid, &self.layout, options, change_rect);

        let scale_px = |r: Rect| -> Rect {
            Rect::new(
                self.layout.margin_x + r.left * 8 * self.layout.scale,
                self.layout.margin_y + r.top * 8 * self.layout.scale,
                self.layout.margin_x + r.right * 8 * self.layout.scale,
                self.layout.margin_y + r.bottom * 8 * self.layout.scale,
            )
        };
        let change_px = scale_px(change_rect);
        let blur_px = scale_px(blur_rect);

        if !blur_px.is_empty() {
            let kernel = kernel::build(self.layout.filter_width);
            blur::run(&mut self.post, &kernel, blur_px, options.noise_amount, options.noise_texture);
        }

        let final_rect = change_px.merge(&blur_px.grow(self.layout.filter_width as i32 / 2));
        compose::compose(&mut self.post, options, final_rect);
        blit::blit(&self.post, options, final_rect, out, out_stride);

        grid.commit_cache();
        grid.clear_dirty_all_chars();
        palette.clear_all_dirty();

        Some(final_rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gt_core::palette::Preset;

    #[test]
    fn first_frame_renders_full_grid() {
        let mut grid = Grid::new(4, 2);
        grid.print("hi");
        let mut palette = Palette::from_preset(Preset::Vga);
        let font = Font::builtin();
        let options = Options::default();
        let mut pipeline = Pipeline::new(4, 2, 32, 16, 1200);
        let mut out = vec![Rgba::default(); (32 * 16) as usize];
        let touched = pipeline.render(&mut grid, &mut palette, &font, &options, false, &mut out, 32);
        assert!(touched.is_some());
    }

    #[test]
    fn second_frame_with_no_changes_renders_nothing() {
        let mut grid = Grid::new(4, 2);
        grid.print("hi");
        let mut palette = Palette::from_preset(Preset::Vga);
        let font = Font::builtin();
        let options = Options::default();
        let mut pipeline = Pipeline::new(4, 2, 32, 16, 1200);
        let mut out = vec![Rgba::default(); (32 * 16) as usize];
        pipeline.render(&mut grid, &mut palette, &font, &options, false, &mut out, 32);
        let touched = pipeline.render(&mut grid, &mut palette, &font, &options, false, &mut out, 32);
        assert!(touched.is_none());
    }
}
