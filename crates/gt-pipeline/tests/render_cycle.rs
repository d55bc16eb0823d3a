//! End-to-end render-cycle tests exercising the public `Pipeline` API
//! against a real grid, font and palette rather than individual stages.

use gt_core::cell::Grid;
use gt_core::config::Options;
use gt_core::font::Font;
use gt_core::palette::{Palette, Preset, Rgba};
use gt_pipeline::Pipeline;

fn harness(columns: i32, rows: i32, out_w: i32, out_h: i32) -> (Pipeline, Grid, Palette, Font, Options) {
    (
        Pipeline::new(columns, rows, out_w, out_h, 1200),
        Grid::new(columns, rows),
        Palette::from_preset(Preset::Vga),
        Font::builtin(),
        Options::default(),
    )
}

#[test]
fn typed_character_produces_nonblank_output() {
    let (mut pipeline, mut grid, mut palette, font, options) = harness(4, 2, 32, 16);
    grid.print("X");
    let mut out = vec![Rgba::default(); (32 * 16) as usize];
    let touched = pipeline.render(&mut grid, &mut palette, &font, &options, false, &mut out, 32);
    assert!(touched.is_some());
    assert!(out.iter().any(|p| *p != Rgba::default()));
}

#[test]
fn idle_frames_after_the_first_report_no_changes() {
    let (mut pipeline, mut grid, mut palette, font, options) = harness(4, 2, 32, 16);
    grid.print("hello");
    let mut out = vec![Rgba::default(); (32 * 16) as usize];
    assert!(pipeline.render(&mut grid, &mut palette, &font, &options, false, &mut out, 32).is_some());
    assert!(pipeline.render(&mut grid, &mut palette, &font, &options, false, &mut out, 32).is_none());
    assert!(pipeline.render(&mut grid, &mut palette, &font, &options, false, &mut out, 32).is_none());
}

#[test]
fn editing_one_cell_after_settling_redraws_only_that_region() {
    let (mut pipeline, mut grid, mut palette, font, options) = harness(4, 2, 32, 16);
    grid.print("abcd");
    let mut out = vec![Rgba::default(); (32 * 16) as usize];
    pipeline.render(&mut grid, &mut palette, &font, &options, false, &mut out, 32);

    grid.locate(0, 0);
    grid.print("Z");
    let touched = pipeline.render(&mut grid, &mut palette, &font, &options, false, &mut out, 32);
    let rect = touched.expect("single edit should produce a redraw");
    // The touched rect should be far smaller than the full 32x16 surface.
    assert!(rect.width() * rect.height() < 32 * 16);
}

#[test]
fn resize_forces_a_full_redraw() {
    let (mut pipeline, mut grid, mut palette, font, options) = harness(4, 2, 32, 16);
    grid.print("abcd");
    let mut out = vec![Rgba::default(); (32 * 16) as usize];
    pipeline.render(&mut grid, &mut palette, &font, &options, false, &mut out, 32);

    grid.size(6, 3);
    pipeline.resize(6, 3, 48, 24);
    let mut out2 = vec![Rgba::default(); (48 * 24) as usize];
    let touched = pipeline.render(&mut grid, &mut palette, &font, &options, false, &mut out2, 48);
    assert!(touched.is_some());
}

#[test]
fn shiny_style_produces_a_visible_bloom_beyond_the_glyph_cell() {
    use gt_core::cell::style;
    let (mut pipeline, mut grid, mut palette, font, mut options) = harness(1, 1, 64, 64);
    options.blur_amount = 4.0;
    grid.set_style(style::SHINY);
    grid.set_fg(15);
    grid.print("#");
    let mut out = vec![Rgba::default(); (64 * 64) as usize];
    let touched = pipeline.render(&mut grid, &mut palette, &font, &options, false, &mut out, 64);
    assert!(touched.is_some());
}
