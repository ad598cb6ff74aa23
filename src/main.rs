use clap::Parser;
use std::path::Path;

mod app;
mod config;
mod draw;
mod export;
mod history;
mod input;
mod pad;
mod util;

use config::Config;
use input::Tool;

#[derive(Parser, Debug)]
#[command(name = "sketchpad")]
#[command(
    version,
    about = "Freehand and shape drawing pad with snapshot undo and PNG export"
)]
struct Cli {
    /// Canvas width in pixels
    #[arg(long, value_name = "PIXELS", value_parser = clap::value_parser!(u32).range(16..=8192))]
    width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long, value_name = "PIXELS", value_parser = clap::value_parser!(u32).range(16..=8192))]
    height: Option<u32>,

    /// Initial drawing tool (line, rect, circle, or pen)
    #[arg(long, short = 't', value_name = "TOOL", value_parser = parse_tool)]
    tool: Option<Tool>,

    /// Output file path for exported drawings
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<String>,
}

fn parse_tool(value: &str) -> Result<Tool, String> {
    util::name_to_tool(value)
        .ok_or_else(|| format!("unknown tool '{value}', expected line, rect, circle, or pen"))
}

/// Splits an output path override into the export directory and filename
/// template, so `--output ~/shots/sketch.png` lands at exactly that path.
fn apply_output_override(config: &mut Config, output: &str) {
    let path = Path::new(output);

    if let Some(extension) = path.extension()
        && !extension.eq_ignore_ascii_case("png")
    {
        log::warn!("Only PNG output is supported, saving with a .png extension");
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        config.export.directory = parent.to_string_lossy().into_owned();
    }
    if let Some(stem) = path.file_stem() {
        config.export.filename = stem.to_string_lossy().into_owned();
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = Config::load()?;

    // CLI flags override the config file
    if let Some(width) = cli.width {
        config.canvas.width = width;
    }
    if let Some(height) = cli.height {
        config.canvas.height = height;
    }
    if let Some(output) = cli.output.as_deref() {
        apply_output_override(&mut config, output);
    }

    let tool = cli.tool.unwrap_or_default();

    log::info!("Starting sketchpad");
    log::info!("Controls:");
    log::info!("  - Draw: drag with the left mouse button");
    log::info!("  - Tools: L (line), R (rect), C (circle), P (pen)");
    log::info!("  - Undo: U");
    log::info!("  - Clear canvas: E");
    log::info!("  - Save PNG: S");
    log::info!("  - Exit: Escape");

    app::run(&config, tool)?;

    log::info!("sketchpad closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_override_splits_directory_and_stem() {
        let mut config = Config::default();
        apply_output_override(&mut config, "~/shots/sketch.png");

        assert_eq!(config.export.directory, "~/shots");
        assert_eq!(config.export.filename, "sketch");
        assert_eq!(config.export.format, "png");
    }

    #[test]
    fn test_output_override_with_bare_name_keeps_directory() {
        let mut config = Config::default();
        config.export.directory = "/tmp/exports".to_string();
        apply_output_override(&mut config, "sketch");

        assert_eq!(config.export.directory, "/tmp/exports");
        assert_eq!(config.export.filename, "sketch");
    }

    #[test]
    fn test_output_override_with_non_png_extension_saves_as_png() {
        let mut config = Config::default();
        apply_output_override(&mut config, "shot.jpg");

        assert_eq!(config.export.filename, "shot");
        assert_eq!(config.export.format, "png");
    }
}
