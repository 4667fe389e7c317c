use anyhow::{Context, Result};
use clap::Parser;
use logo_palette_wasm::{Extractor, ExtractorConfig};
use std::fs;
use std::path::PathBuf;

/// Extract brand palettes from logo images (native wrapper).
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// One or more input image paths
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Maximum number of palette colors
    #[arg(short = 'n', long, default_value_t = 6)]
    max_colors: usize,

    /// Square canvas size the logo is rasterized onto
    #[arg(short = 's', long, default_value_t = 150)]
    canvas_size: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = ExtractorConfig {
        max_colors: args.max_colors,
        canvas_size: args.canvas_size,
        ..ExtractorConfig::default()
    };
    let extractor = Extractor::new(config).context("invalid configuration")?;

    for input in &args.inputs {
        let bytes =
            fs::read(input).with_context(|| format!("reading {}", input.display()))?;
        let palette = extractor.extract(&bytes);
        let entry = serde_json::json!({
            "file": input.display().to_string(),
            "palette": palette,
        });
        println!("{entry}");
    }

    Ok(())
}
