//! The linkable facade: [`Console`] wires the cell grid, palette, font and
//! render pipeline behind the public surface a host actually calls, plus a
//! host-only TOML options loader.

mod config;
mod console;

pub use config::load_options;
pub use console::Console;

pub use gt_ansi::Encoding;
pub use gt_core::cell::{style, BoxStyle, CharData};
pub use gt_core::config::{BlendMode, HAlign, Options, VAlign};
pub use gt_core::error::CoreError;
pub use gt_core::geom::Rect;
pub use gt_core::palette::{Preset, Rgba};
