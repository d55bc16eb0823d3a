//! CCL: the angle-bracket markup language accepted by `cprint`/`cprintln`,
//! layered on top of `gt-core`'s cell grid.

pub mod interp;
pub mod lexer;

pub use interp::interpret;
