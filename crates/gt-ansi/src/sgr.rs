//! SGR (`ESC [ ... m`) attribute handling: maps numeric codes onto a pen
//! state, including the xterm 256-color and 24-bit extended forms matched
//! down to the active 16-color palette.

use gt_core::cell::style;
use gt_core::palette::Palette;

/// The subset of `Grid::State` that SGR codes mutate, tracked locally by
/// the ANSI interpreter rather than through the grid's save/restore stack
/// (ANSI art never saves/restores -- each code just overwrites a field).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pen {
    pub fg: u8,
    pub bg: u8,
    pub style: u8,
}

impl Default for Pen {
    fn default() -> Self {
        Self { fg: 8, bg: 0, style: style::NONE }
    }
}

/// Applies one fully-parsed list of `;`-separated SGR arguments to `pen`.
/// Unknown codes are ignored. `38`/`48` consume one or more following
/// arguments from `args` (handled via the shared index cursor `i`).
pub fn apply(pen: &mut Pen, args: &[i64], palette: &Palette) {
    let mut i = 0;
    while i < args.len() {
        let code = args[i];
        match code {
            0 => *pen = Pen::default(),
            1 | 21 => set_flag(pen, style::BOLD, code == 1),
            3 | 5 | 6 => set_flag(pen, style::BLINK, true),
            25 => set_flag(pen, style::BLINK, false),
            4 => set_flag(pen, style::UNDERLINE, true),
            24 => set_flag(pen, style::UNDERLINE, false),
            30..=37 => pen.fg = (code - 30) as u8,
            40..=47 => pen.bg = (code - 40) as u8,
            90..=97 => pen.fg = (code - 90 + 8) as u8,
            100..=107 => pen.bg = (code - 100 + 8) as u8,
            39 => pen.fg = 8,
            49 => pen.bg = 0,
            38 | 48 => {
                if let Some(consumed) = apply_extended(pen, code == 38, &args[i + 1..], palette) {
                    i += consumed;
                }
            }
            _ => {}
        }
        i += 1;
    }
}

fn set_flag(pen: &mut Pen, flag: u8, on: bool) {
    pen.style = if on { pen.style | flag } else { pen.style & !flag };
}

/// Handles the arguments following a `38`/`48` code. Returns how many
/// extra arguments (beyond the `38`/`48` itself) were consumed, or `None`
/// if the form wasn't recognized (in which case nothing is consumed and
/// the unrecognized arguments are left for the outer loop, which ignores
/// them one at a time).
fn apply_extended(pen: &mut Pen, is_fg: bool, rest: &[i64], palette: &Palette) -> Option<usize> {
    match rest.first()? {
        5 => {
            let index = *rest.get(1)? as u8;
            let matched = if index < 16 {
                index
            } else {
                let (r, g, b) = xterm_256_rgb(index);
                palette.find_color_match(r, g, b)
            };
            if is_fg {
                pen.fg = matched;
            } else {
                pen.bg = matched;
            }
            Some(2)
        }
        2 => {
            let r = *rest.get(1)? as u8;
            let g = *rest.get(2)? as u8;
            let b = *rest.get(3)? as u8;
            let matched = palette.find_color_match(r, g, b);
            if is_fg {
                pen.fg = matched;
            } else {
                pen.bg = matched;
            }
            Some(4)
        }
        _ => None,
    }
}

/// Decodes an xterm 256-color palette index `16..=255` into RGB: `16..=231`
/// as a 6x6x6 cube, `232..=255` as a 24-step greyscale. Indices `0..=15`
/// are handled by the caller before reaching here -- they pass through as
/// literal palette indices, not RGB to be matched.
fn xterm_256_rgb(index: u8) -> (u8, u8, u8) {
    if index >= 232 {
        let v = u32::from(index) - 232;
        let level = (((255 * v) + 12) / 23) as u8;
        return (level, level, level);
    }
    let n = u32::from(index) - 16;
    let b = n % 6;
    let g = (n / 6) % 6;
    let r = n / 36;
    (cube_level(r), cube_level(g), cube_level(b))
}

fn cube_level(v: u32) -> u8 {
    (((255 * v) + 3) / 5) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use gt_core::palette::Preset;

    #[test]
    fn reset_restores_defaults() {
        let palette = Palette::from_preset(Preset::Vga);
        let mut pen = Pen { fg: 3, bg: 2, style: style::BOLD };
        apply(&mut pen, &[0], &palette);
        assert_eq!(pen, Pen::default());
    }

    #[test]
    fn basic_fg_bg_codes() {
        let palette = Palette::from_preset(Preset::Vga);
        let mut pen = Pen::default();
        apply(&mut pen, &[31, 44], &palette);
        assert_eq!(pen.fg, 1);
        assert_eq!(pen.bg, 4);
    }

    #[test]
    fn bright_fg_bg_codes() {
        let palette = Palette::from_preset(Preset::Vga);
        let mut pen = Pen::default();
        apply(&mut pen, &[91, 104], &palette);
        assert_eq!(pen.fg, 9);
        assert_eq!(pen.bg, 12);
    }

    #[test]
    fn bold_and_blink_set_and_clear() {
        let palette = Palette::from_preset(Preset::Vga);
        let mut pen = Pen::default();
        apply(&mut pen, &[1, 5], &palette);
        assert_eq!(pen.style, style::BOLD | style::BLINK);
        apply(&mut pen, &[21, 25], &palette);
        assert_eq!(pen.style, style::NONE);
    }

    #[test]
    fn extended_256_color_matches_into_palette() {
        let palette = Palette::from_preset(Preset::Vga);
        let mut pen = Pen::default();
        // 196 is a pure-red-ish cube entry; should land on a red-family slot.
        apply(&mut pen, &[38, 5, 196], &palette);
        assert_ne!(pen.fg, Pen::default().fg);
    }

    #[test]
    fn extended_24bit_color_matches_into_palette() {
        let palette = Palette::from_preset(Preset::Vga);
        let mut pen = Pen::default();
        apply(&mut pen, &[48, 2, 0, 0, 255], &palette);
        assert_ne!(pen.bg, Pen::default().bg);
    }
}
