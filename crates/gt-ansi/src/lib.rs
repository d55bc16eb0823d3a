//! CP437/ANSI art and `.xp` compressed-grid interpretation, layered on top
//! of `gt-core`'s `Grid` and `Palette`.

pub mod cp437;
mod cp437_data;
pub mod decode;
pub mod error;
pub mod sgr;
pub mod stream;
pub mod write;
pub mod xp;

pub use error::XpError;
pub use stream::{interpret, Encoding};
pub use xp::load as load_xp;
