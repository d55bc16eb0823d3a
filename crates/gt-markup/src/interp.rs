//! CCL interpreter: drives a [`Grid`] from a token stream produced by
//! [`crate::lexer::Lexer`].

use gt_core::cell::{style, Grid};
use gt_core::palette::name_to_index;

use crate::lexer::{Event, Lexer};

/// Interprets `markup` against `grid`. Tokenizer failures (see
/// [`crate::lexer`]) end interpretation at the point of failure; everything
/// written before that point stands.
pub fn interpret(markup: &str, grid: &mut Grid) {
    for event in Lexer::new(markup) {
        match event {
            Event::Char(c) => grid.print_char(c as u32),
            Event::Open(name) => open_tag(grid, name),
            Event::SelfClose(name) => {
                open_tag(grid, name);
                close_tag(grid);
            }
            // Mismatched close-tag names are ignored -- a restore happens
            // regardless of what name the tag claims to close.
            Event::Close(_name) => close_tag(grid),
        }
    }
}

fn open_tag(grid: &mut Grid, name: &str) {
    grid.save();
    apply_tag(grid, name);
}

/// Restores the saved state, then re-asserts the cursor from just before
/// the restore: a tag boundary never rewinds where printing left off,
/// only the colors/style it set.
fn close_tag(grid: &mut Grid) {
    let cursor = grid.cursor();
    grid.restore();
    grid.set_cursor(cursor.0, cursor.1);
}

fn apply_tag(grid: &mut Grid, name: &str) {
    if let Some(index) = name_to_index(name) {
        grid.set_fg(index);
        return;
    }
    if let Some(bg_name) = name.strip_prefix("on_") {
        if let Some(index) = name_to_index(bg_name) {
            grid.set_bg(index);
        }
        return;
    }
    let flag = match name {
        "b" | "strong" => style::BOLD,
        "u" => style::UNDERLINE,
        "blink" => style::BLINK,
        "shiny" => style::SHINY,
        _ => return,
    };
    grid.set_style(grid.style() | flag);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_tag_sets_fg_for_enclosed_text_only() {
        let mut grid = Grid::new(10, 1);
        interpret("<red>x</red>y", &mut grid);
        let red = name_to_index("red").unwrap();
        let default_fg = gt_core::cell::CharData::default().fg();
        assert_eq!(grid.characters()[0].fg(), red);
        assert_eq!(grid.characters()[1].fg(), default_fg);
    }

    #[test]
    fn background_tag_uses_on_prefix() {
        let mut grid = Grid::new(10, 1);
        interpret("<on_blue>x</on_blue>", &mut grid);
        let blue = name_to_index("blue").unwrap();
        assert_eq!(grid.characters()[0].bg(), blue);
    }

    #[test]
    fn style_tags_set_their_bit() {
        let mut grid = Grid::new(10, 1);
        interpret("<b>x</b><u>y</u>", &mut grid);
        assert_eq!(grid.characters()[0].style & style::BOLD, style::BOLD);
        assert_eq!(grid.characters()[1].style & style::UNDERLINE, style::UNDERLINE);
    }

    #[test]
    fn closing_tag_preserves_cursor_not_full_state() {
        let mut grid = Grid::new(10, 1);
        interpret("<red>ab</red>c", &mut grid);
        // "ab" printed under <red>, "c" printed after </red>: cursor should
        // sit right after "ab" (column 2), not rewind to where <red> opened.
        assert_eq!(grid.characters()[2].glyph, 'c' as u32);
    }

    #[test]
    fn unknown_tag_is_a_silent_noop_but_still_saves_and_restores() {
        let mut grid = Grid::new(10, 1);
        interpret("<frobnicate>x</frobnicate>", &mut grid);
        let default_fg = gt_core::cell::CharData::default().fg();
        assert_eq!(grid.characters()[0].fg(), default_fg);
    }

    #[test]
    fn mismatched_close_name_still_restores() {
        let mut grid = Grid::new(10, 1);
        interpret("<red>x</blue>y", &mut grid);
        let red = name_to_index("red").unwrap();
        let default_fg = gt_core::cell::CharData::default().fg();
        assert_eq!(grid.characters()[0].fg(), red);
        assert_eq!(grid.characters()[1].fg(), default_fg);
    }

    #[test]
    fn unclosed_tag_at_end_of_input_is_accepted() {
        let mut grid = Grid::new(10, 1);
        interpret("<red>x", &mut grid);
        let red = name_to_index("red").unwrap();
        assert_eq!(grid.characters()[0].fg(), red);
    }

    #[test]
    fn entities_decode_to_literal_characters() {
        let mut grid = Grid::new(10, 1);
        interpret("&lt;&amp;&gt;", &mut grid);
        assert_eq!(grid.characters()[0].glyph, '<' as u32);
        assert_eq!(grid.characters()[1].glyph, '&' as u32);
        assert_eq!(grid.characters()[2].glyph, '>' as u32);
    }
}
