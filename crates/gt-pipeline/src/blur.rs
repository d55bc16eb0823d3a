//! Separable Gaussian blur of the emissive buffer. The horizontal pass
//! writes a transposed intermediate so the vertical pass reads
//! contiguous memory; the vertical pass also recovers pseudo-linear
//! magnitude via `sqrt` and optionally applies blue-noise modulation.
//!
//! Dirty-rect sizing follows directly from how a change propagates
//! through the two passes: a change within `rect` can only shift a
//! horizontal-pass output within `k` columns of it (same rows), and can
//! only shift a vertical-pass output within `k` rows of *that* (so `k`
//! columns and `k` rows of the original). Everything outside the grown
//! rect keeps its prior value, which is still correct because nothing
//! upstream of it changed.

use gt_core::geom::Rect;

use crate::noise_data::NOISE_16X16;
use crate::upscale::{EmitPixel, PostBuffers};

/// Runs both passes over `rect` (the emissive-change rect from
/// invalidation) using `kernel` (from `gt_core::kernel::build`).
pub fn run(buffers: &mut PostBuffers, kernel: &[f64], rect: Rect, noise_amount: f32, noise_enabled: bool) {
    if rect.is_empty() || kernel.is_empty() {
        return;
    }
    let k = (kernel.len() / 2) as i32;
    let bounds = Rect::new(0, 0, buffers.width(), buffers.height());

    let h_rect = rect.grow_xy(k, 0).intersection(&bounds);
    horizontal_pass(buffers, kernel, k, h_rect);

    let v_rect = rect.grow(k).intersection(&bounds);
    vertical_pass(buffers, kernel, k, v_rect, noise_amount, noise_enabled);
}

fn horizontal_pass(buffers: &mut PostBuffers, kernel: &[f64], k: i32, rect: Rect) {
    let width = buffers.width();
    let height = buffers.height();
    for y in rect.top..rect.bottom {
        for x in rect.left..rect.right {
            let mut acc = (0.0f64, 0.0f64, 0.0f64, 0.0f64);
            for n in -k..=k {
                let sx = x + n;
                if sx < 0 || sx >= width {
                    continue;
                }
                let w = kernel[(n + k) as usize];
                accumulate(&mut acc, buffers.emit[(y * width + sx) as usize], w);
            }
            let out: EmitPixel = (sat_u16(acc.0), sat_u16(acc.1), sat_u16(acc.2), sat_u16(acc.3));
            // Transposed write: emit_h[x * height + y] holds the value at (x, y).
            buffers.emit_h[(x * height + y) as usize] = out;
        }
    }
}

fn vertical_pass(
    buffers: &mut PostBuffers,
    kernel: &[f64],
    k: i32,
    rect: Rect,
    noise_amount: f32,
    noise_enabled: bool,
) {
    let width = buffers.width();
    let height = buffers.height();
    for y in rect.top..rect.bottom {
        for x in rect.left..rect.right {
            let mut acc = (0.0f64, 0.0f64, 0.0f64, 0.0f64);
            for n in -k..=k {
                let sy = y + n;
                if sy < 0 || sy >= height {
                    continue;
                }
                let w = kernel[(n + k) as usize];
                accumulate(&mut acc, buffers.emit_h[(x * height + sy) as usize], w);
            }
            let mut r = acc.0.max(0.0).sqrt();
            let mut g = acc.1.max(0.0).sqrt();
            let mut b = acc.2.max(0.0).sqrt();
            let a = acc.3.max(0.0).sqrt();
            if noise_enabled {
                let n = NOISE_16X16[((x & 15) * 16 + (y & 15)) as usize];
                let factor = 1.0 + (f64::from(n) - 127.5) * f64::from(noise_amount) * 0.0006;
                r *= factor;
                g *= factor;
                b *= factor;
            }
            buffers.blur[(y * width + x) as usize] = (r as f32, g as f32, b as f32, a as f32);
        }
    }
}

fn accumulate(acc: &mut (f64, f64, f64, f64), p: EmitPixel, w: f64) {
    acc.0 += f64::from(p.0) * w;
    acc.1 += f64::from(p.1) * w;
    acc.2 += f64::from(p.2) * w;
    acc.3 += f64::from(p.3) * w;
}

fn sat_u16(v: f64) -> u16 {
    v.round().clamp(0.0, f64::from(u16::MAX)) as u16
}
