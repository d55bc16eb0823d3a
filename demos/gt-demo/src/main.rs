use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    env_logger::Builder::new().filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn)).init();

    cli.validate_source()?;

    let options = match &cli.config {
        Some(path) => gt_console::load_options(path)?,
        None => gt_console::Options::default(),
    };

    let mut console = gt_console::Console::new(cli.columns, cli.rows, cli.width, cli.height);
    console.set_palette(cli.parse_palette());
    console.set_options(options);

    if let Some(text) = &cli.text {
        console.cprint(text);
    } else if let Some(path) = &cli.ans {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        console.print_ans(&bytes, 0, 0);
    } else if let Some(path) = &cli.ans_cp437 {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        console.print_ans_cp437(&bytes, 0, 0);
    } else if let Some(path) = &cli.xp {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        console.print_xp(&bytes, 0, 0, 0);
    }

    let pitch = cli.width * 4;
    let mut framebuffer = vec![0u8; (pitch * cli.height) as usize];
    console.render(0.0, &mut framebuffer, pitch);

    write_ppm(&cli.out, &framebuffer, cli.width, cli.height, pitch)?;
    log::info!("wrote {}", cli.out.display());
    Ok(())
}

/// Writes a binary PPM (P6): RGB only, so the alpha channel is dropped.
fn write_ppm(path: &std::path::Path, rgba: &[u8], width: i32, height: i32, pitch: i32) -> Result<()> {
    let file = fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = std::io::BufWriter::new(file);
    write!(out, "P6\n{width} {height}\n255\n")?;
    for y in 0..height {
        let row_start = (y * pitch) as usize;
        for x in 0..width {
            let o = row_start + (x as usize) * 4;
            out.write_all(&rgba[o..o + 3])?;
        }
    }
    Ok(())
}
