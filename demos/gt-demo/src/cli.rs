use std::path::PathBuf;

use clap::Parser;

/// glowterm-demo — renders one frame through the console library and
/// writes it to a PPM image.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Markup text to print via `cprint` (CCL tags and HTML entities).
    #[arg(long)]
    pub text: Option<String>,

    /// UTF-8 ANSI/CP437 art file, decoded as UTF-8.
    #[arg(long)]
    pub ans: Option<PathBuf>,

    /// ANSI art file, decoded byte-for-byte as CP437.
    #[arg(long)]
    pub ans_cp437: Option<PathBuf>,

    /// Gzip-wrapped `.xp` compressed grid file.
    #[arg(long)]
    pub xp: Option<PathBuf>,

    /// Text grid width in columns.
    #[arg(long, default_value_t = 80)]
    pub columns: i32,

    /// Text grid height in rows.
    #[arg(long, default_value_t = 25)]
    pub rows: i32,

    /// Output framebuffer width in pixels.
    #[arg(long, default_value_t = 640)]
    pub width: i32,

    /// Output framebuffer height in pixels.
    #[arg(long, default_value_t = 400)]
    pub height: i32,

    /// Palette preset: vintage, campbell, `one_half_light`, tango, vga.
    #[arg(long, default_value = "vga")]
    pub palette: String,

    /// Options TOML file; omit to use library defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Destination PPM (P6) file.
    #[arg(short, long, default_value = "out.ppm")]
    pub out: PathBuf,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Validates that exactly one content source was given.
    ///
    /// # Errors
    /// Returns an error if zero or more than one of `--text`, `--ans`,
    /// `--ans-cp437`, `--xp` is specified.
    pub fn validate_source(&self) -> anyhow::Result<()> {
        let count = usize::from(self.text.is_some())
            + usize::from(self.ans.is_some())
            + usize::from(self.ans_cp437.is_some())
            + usize::from(self.xp.is_some());

        if count == 0 {
            anyhow::bail!("no content source given; use --text, --ans, --ans-cp437, or --xp");
        }
        if count > 1 {
            anyhow::bail!("specify exactly one of --text, --ans, --ans-cp437, --xp");
        }
        Ok(())
    }

    pub fn parse_palette(&self) -> gt_console::Preset {
        use gt_console::Preset;
        match self.palette.as_str() {
            "vintage" => Preset::Vintage,
            "campbell" => Preset::Campbell,
            "one_half_light" => Preset::OneHalfLight,
            "tango" => Preset::Tango,
            _ => {
                if self.palette != "vga" {
                    log::warn!("unknown palette '{}', falling back to vga", self.palette);
                }
                Preset::Vga
            }
        }
    }
}
