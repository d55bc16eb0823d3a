//! Final copy from `PostBuffers::final_buf` into the caller's framebuffer,
//! respecting an arbitrary row pitch and the configured blend mode.

use gt_core::config::{BlendMode, Options};
use gt_core::geom::Rect;
use gt_core::palette::{blend_color, Rgba};

use crate::upscale::PostBuffers;

/// Copies `buffers.final_buf` over `rect` into `out`, a caller-owned RGBA8
/// framebuffer `out_stride` pixels wide per row (may exceed `buffers.width()`
/// for a sub-rect blit into a larger surface). `rect` is clipped to both
/// buffers; out-of-range rects are a silent no-op.
pub fn blit(buffers: &PostBuffers, options: &Options, rect: Rect, out: &mut [Rgba], out_stride: i32) {
    let width = buffers.width();
    let height = buffers.height();
    let bounds = Rect::new(0, 0, width, height);
    let rect = rect.intersection(&bounds);
    if rect.is_empty() || out_stride <= 0 {
        return;
    }

    for y in rect.top..rect.bottom {
        for x in rect.left..rect.right {
            let src = buffers.final_buf[(y * width + x) as usize];
            let dst_idx = (y * out_stride + x) as usize;
            let Some(dst) = out.get_mut(dst_idx) else { continue };
            *dst = match options.blend_mode {
                BlendMode::Copy => src,
                BlendMode::SourceOver => blend_color(src, *dst, src.a),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_mode_overwrites_destination_regardless_of_alpha() {
        let mut buffers = PostBuffers::new(2, 2);
        buffers.final_buf[0] = Rgba::new(10, 20, 30, 0);
        let options = Options { blend_mode: BlendMode::Copy, ..Options::default() };
        let mut out = vec![Rgba::new(255, 255, 255, 255); 4];
        blit(&buffers, &options, Rect::new(0, 0, 1, 1), &mut out, 2);
        assert_eq!(out[0], Rgba::new(10, 20, 30, 0));
    }

    #[test]
    fn source_over_opaque_src_replaces_destination() {
        let mut buffers = PostBuffers::new(2, 2);
        buffers.final_buf[0] = Rgba::new(10, 20, 30, 255);
        let options = Options { blend_mode: BlendMode::SourceOver, ..Options::default() };
        let mut out = vec![Rgba::new(0, 0, 0, 255); 4];
        blit(&buffers, &options, Rect::new(0, 0, 1, 1), &mut out, 2);
        assert_eq!(out[0], Rgba::new(10, 20, 30, 255));
    }

    #[test]
    fn respects_output_stride_wider_than_buffer() {
        let mut buffers = PostBuffers::new(2, 2);
        buffers.final_buf[2] = Rgba::new(1, 2, 3, 255);
        let options = Options { blend_mode: BlendMode::Copy, ..Options::default() };
        let mut out = vec![Rgba::default(); 5 * 2];
        blit(&buffers, &options, Rect::new(0, 0, 2, 2), &mut out, 5);
        assert_eq!(out[5], Rgba::new(1, 2, 3, 255));
        assert_eq!(out[1], Rgba::default());
    }
}
