//! Compositor: adds the blurred emissive layer on top of `post`, with an
//! optional over-range channel bleed that spreads clipped highlights
//! across the other channels instead of hard-clipping them.

use gt_core::config::Options;
use gt_core::geom::Rect;
use gt_core::palette::Rgba;

use crate::upscale::PostBuffers;

/// Writes `buffers.final_buf` over `rect` (already extended by the blur
/// radius by the caller) as `post + blur * blurAmount`, tonemapped if
/// `options.tonemapping` is set.
pub fn compose(buffers: &mut PostBuffers, options: &Options, rect: Rect) {
    let width = buffers.width();
    let height = buffers.height();
    let bounds = Rect::new(0, 0, width, height);
    let rect = rect.intersection(&bounds);
    if rect.is_empty() {
        return;
    }

    for y in rect.top..rect.bottom {
        for x in rect.left..rect.right {
            let idx = (y * width + x) as usize;
            let base = buffers.post[idx];
            let (br, bg, bb, _ba) = buffers.blur[idx];
            let amount = options.blur_amount;

            let mut r = f32::from(base.r) + br * amount;
            let mut g = f32::from(base.g) + bg * amount;
            let mut b = f32::from(base.b) + bb * amount;

            if options.tonemapping {
                let excess_r = (r - 255.0).max(0.0);
                let excess_g = (g - 255.0).max(0.0);
                let excess_b = (b - 255.0).max(0.0);
                let exceed_luma = (excess_r + excess_g + excess_b) / 3.0;
                let bleed = exceed_luma * options.tonemapping_ratio;
                r += bleed;
                g += bleed;
                b += bleed;
            }

            buffers.final_buf[idx] = Rgba::new(clamp_u8(r), clamp_u8(g), clamp_u8(b), base.a);
        }
    }
}

fn clamp_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}
