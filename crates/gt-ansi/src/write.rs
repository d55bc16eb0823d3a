//! Direct cell writes at absolute grid coordinates, bypassing the cursor
//! and state stack -- used by both the ANSI stream interpreter and the
//! `.xp` loader, neither of which touches the grid's persistent cursor.

use gt_core::cell::Grid;

pub fn write_cell(grid: &mut Grid, col: i32, row: i32, glyph: u32, fg: u8, bg: u8, style: u8) {
    if col < 0 || col >= grid.columns() || row < 0 || row >= grid.rows() {
        return;
    }
    if let Some(cell) = grid.char_at(col, row) {
        cell.glyph = glyph;
        cell.set_fg(fg);
        cell.set_bg(bg);
        cell.style = style;
    }
    let index = (row * grid.columns() + col) as usize;
    grid.mark_char_dirty(index);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_within_bounds() {
        let mut grid = Grid::new(4, 4);
        write_cell(&mut grid, 1, 1, 'Z' as u32, 3, 2, gt_core::cell::style::BOLD);
        let cell = grid.char_at_ref(1, 1).unwrap();
        assert_eq!(cell.glyph, 'Z' as u32);
        assert_eq!(cell.fg(), 3);
        assert_eq!(cell.bg(), 2);
        assert_eq!(cell.style, gt_core::cell::style::BOLD);
    }

    #[test]
    fn out_of_bounds_write_is_noop() {
        let mut grid = Grid::new(4, 4);
        write_cell(&mut grid, -1, 0, 'Z' as u32, 0, 0, 0);
        write_cell(&mut grid, 100, 0, 'Z' as u32, 0, 0, 0);
    }
}
