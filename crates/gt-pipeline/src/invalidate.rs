//! Dirty-rectangle validator: per-frame diff of the grid against its cache,
//! producing a change rect (visible content) and a blur rect (emissive
//! layer) in text-space coordinates.

use gt_core::cell::Grid;
use gt_core::geom::Rect;
use gt_core::palette::Palette;

/// Holds the one piece of cross-frame state the validator needs beyond
/// what's already tracked on `Grid`/`Palette`: whether the blur filter
/// itself was invalidated (e.g. a filter-width change from layout) since
/// the last call.
#[derive(Default)]
pub struct Validator {
    global_blur_dirty: bool,
}

impl Validator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_blur_globally_dirty(&mut self) {
        self.global_blur_dirty = true;
    }

    /// Runs one validation pass. Marks `grid`'s per-cell dirty plane for
    /// every cell that needs a back-buffer redraw but does not clear it or
    /// the grid/palette "everything changed" flags -- the caller clears
    /// those once rasterization has consumed them (see
    /// [`Grid::commit_cache`]).
    ///
    /// If nothing changed since the last call (no per-cell edits, no
    /// palette edits, no blink toggle, no global blur dirty), returns two
    /// empty rects without scanning the grid.
    pub fn validate(&mut self, grid: &mut Grid, palette: &Palette, blink_changed: bool) -> (Rect, Rect) {
        let cols = grid.columns();
        let rows = grid.rows();

        if grid.dirty_all_chars() {
            let full = Rect::new(0, 0, cols, rows);
            for row in 0..rows {
                for col in 0..cols {
                    grid.mark_char_dirty((row * cols + col) as usize);
                }
            }
            return (full, full);
        }

        let any_palette_dirty = (0..16u8).any(|i| palette.is_dirty(i));
        if !any_palette_dirty && !blink_changed && !self.global_blur_dirty {
            return (Rect::empty(), Rect::empty());
        }

        let mut change = Rect::empty();
        let mut blur = Rect::empty();
        let mut newly_dirty = Vec::new();
        {
            let cells = grid.characters();
            let cache = grid.cache();

            for row in 0..rows {
                for col in 0..cols {
                    let idx = (row * cols + col) as usize;
                    let cur = cells[idx];
                    let prev = cache[idx];
                    let redraw = cur != prev
                        || palette.is_dirty(cur.fg())
                        || palette.is_dirty(cur.bg())
                        || (cur.is_blinkable() && blink_changed);
                    let blur_changed = (redraw && (cur.is_shiny() || prev.is_shiny()))
                        || (self.global_blur_dirty && cur.is_shiny());

                    if redraw {
                        change = change.merge_with_point(col, row);
                    }
                    if blur_changed {
                        blur = blur.merge_with_point(col, row);
                    }
                    if redraw {
                        newly_dirty.push(idx);
                    }
                }
            }
        }
        for idx in newly_dirty {
            grid.mark_char_dirty(idx);
        }

        self.global_blur_dirty = false;
        (change, blur)
    }
}
