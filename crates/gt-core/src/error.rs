//! Core error type. The rendering pipeline itself is total (§7: every
//! public method returns, no exceptional control flow); `CoreError` exists
//! only for the handful of precondition violations worth surfacing to a
//! caller in debug builds rather than silently clamping.

use thiserror::Error;

/// Precondition violations on core setup calls. Production callers should
/// never hit these in practice since `size`/`font` are fixed at startup;
/// they exist so a debug build can `log::warn!` instead of silently
/// clamping into a degenerate grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("grid size must be at least 1x1, got {columns}x{rows}")]
    InvalidGridSize { columns: i32, rows: i32 },

    #[error("palette index {index} out of range 0..15")]
    PaletteIndexOutOfRange { index: i32 },
}
