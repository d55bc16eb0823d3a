//! Scale factor, alignment margins, and derived blur filter width.

use gt_core::config::{HAlign, VAlign};
use gt_core::kernel::MAX_FILTER_WIDTH;

/// Output-space placement of the text grid: integer upscale factor plus
/// letterbox margins, and the blur filter width derived from them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Layout {
    pub scale: i32,
    pub margin_x: i32,
    pub margin_y: i32,
    pub filter_width: u32,
}

impl Layout {
    /// `scale = max(1, min(outW / (cols*cw), outH / (rows*ch)))` (integer
    /// division); remainder pixels distributed by alignment.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn compute(
        cell_w: i32,
        cell_h: i32,
        columns: i32,
        rows: i32,
        out_w: i32,
        out_h: i32,
        halign: HAlign,
        valign: VAlign,
        blur_scale: f32,
    ) -> Self {
        let grid_w = (cell_w * columns).max(1);
        let grid_h = (cell_h * rows).max(1);
        let scale = (out_w / grid_w).min(out_h / grid_h).max(1);

        let rem_x = (out_w - grid_w * scale).max(0);
        let rem_y = (out_h - grid_h * scale).max(0);
        let margin_x = match halign {
            HAlign::Left => 0,
            HAlign::Center => rem_x / 2,
            HAlign::Right => rem_x,
        };
        let margin_y = match valign {
            VAlign::Top => 0,
            VAlign::Middle => rem_y / 2,
            VAlign::Bottom => rem_y,
        };

        let raw_width = (cell_w as f32 * scale as f32 * blur_scale * 2.5).round();
        let filter_width = force_odd_clamped(raw_width as i32);

        Self { scale, margin_x, margin_y, filter_width }
    }
}

fn force_odd_clamped(width: i32) -> u32 {
    let clamped = width.clamp(1, MAX_FILTER_WIDTH as i32) as u32;
    clamped | 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_is_at_least_one_even_for_undersized_output() {
        let l = Layout::compute(8, 8, 80, 25, 1, 1, HAlign::Center, VAlign::Middle, 1.0);
        assert_eq!(l.scale, 1);
    }

    #[test]
    fn remainder_distributed_by_alignment() {
        let l = Layout::compute(8, 8, 1, 1, 20, 20, HAlign::Left, VAlign::Top, 1.0);
        assert_eq!(l.margin_x, 0);
        assert_eq!(l.margin_y, 0);
        let l2 = Layout::compute(8, 8, 1, 1, 20, 20, HAlign::Right, VAlign::Bottom, 1.0);
        assert_eq!(l2.margin_x, 20 - 8 * l2.scale);
    }

    #[test]
    fn filter_width_always_odd_and_capped() {
        for blur_scale in [0.1, 1.0, 50.0] {
            let l = Layout::compute(8, 8, 80, 25, 1920, 1080, HAlign::Center, VAlign::Middle, blur_scale);
            assert_eq!(l.filter_width % 2, 1);
            assert!(l.filter_width <= MAX_FILTER_WIDTH);
        }
    }
}
