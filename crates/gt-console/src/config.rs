//! TOML options loading: a host-facing convenience, not part of the core's
//! own surface (file I/O stays out of `gt-core`/`gt-pipeline`). Parses
//! straight into [`Options`] since every field there is already
//! `#[serde(default)]`, so a partial TOML document naturally fills in
//! whatever the caller didn't mention.

use std::path::Path;

use anyhow::{Context, Result};
use gt_core::config::Options;

/// Reads and parses `path` as a TOML [`Options`] document, merged onto
/// [`Options::default`] field by field (a key the file omits keeps its
/// default).
///
/// # Errors
/// Returns an error if the file cannot be read or fails to parse.
pub fn load_options(path: &Path) -> Result<Options> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading options file {}", path.display()))?;
    let options: Options =
        toml::from_str(&content).with_context(|| format!("parsing options TOML in {}", path.display()))?;
    Ok(options)
}
