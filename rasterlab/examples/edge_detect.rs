//! Example: Edge Detection
//!
//! Runs every edge operator on a bitmap and writes one result per operator,
//! plus an inverted Sobel map and a binarized Laplacian map.
//!
//! Without an input path a synthetic image (a colored disc on a gradient)
//! is used. Results go to `test_output/` unless an output directory is given.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example edge_detect -- [input.bmp] [output_dir]
//! ```

use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context;
use common::log_setup::setup_logging;
use common::test_utils::test_output_path;
use rasterlab::prelude::*;
use strum::IntoEnumIterator;

fn main() -> anyhow::Result<()> {
    setup_logging("info");

    let args: Vec<String> = env::args().collect();
    let image = match args.get(1) {
        Some(path) => bmp::read_file(path).with_context(|| format!("failed to read {}", path))?,
        None => synthetic_image(160, 120)?,
    };
    let output_dir = args.get(2).map(PathBuf::from);

    tracing::info!(%image, alpha = image.has_alpha_channel(), "loaded");
    save(&image, output_dir.as_deref(), "edges_input.bmp")?;

    for operator in EdgeOperator::iter() {
        let config = EdgeDetectionConfig {
            operator,
            ..Default::default()
        };
        run(&image, &config, output_dir.as_deref(), &format!("edges_{}.bmp", operator))?;
    }

    let inverted = EdgeDetectionConfig {
        operator: EdgeOperator::Sobel,
        invert: true,
        ..Default::default()
    };
    run(&image, &inverted, output_dir.as_deref(), "edges_sobel_inverted.bmp")?;

    let binary = EdgeDetectionConfig {
        operator: EdgeOperator::Laplacian8,
        luminance: LuminanceSource::Luma,
        threshold: Some(0.2),
        ..Default::default()
    };
    run(&image, &binary, output_dir.as_deref(), "edges_laplacian8_binary.bmp")?;

    Ok(())
}

fn run(
    image: &Image,
    config: &EdgeDetectionConfig,
    output_dir: Option<&Path>,
    name: &str,
) -> anyhow::Result<()> {
    let mut edges = image.clone();
    apply_edge_detection(&mut edges, config)?;
    save(&edges, output_dir, name)
}

fn save(image: &Image, output_dir: Option<&Path>, name: &str) -> anyhow::Result<()> {
    let path = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            dir.join(name)
        }
        None => test_output_path(name),
    };
    bmp::write_file(image, &path).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "saved");
    Ok(())
}

/// A disc in one Lab color on a horizontal lightness ramp.
fn synthetic_image(width: usize, height: usize) -> anyhow::Result<Image> {
    let mut image = Image::new(width, height)?;
    let disc = "lab(60, 50, -40)".parse::<Lab>()?.to_rgb();
    let (cx, cy) = (width as f64 / 2.0, height as f64 / 2.0);
    let radius = width.min(height) as f64 / 3.0;

    for (x, y) in image.pixels().collect::<Vec<_>>() {
        let (dx, dy) = (x as f64 - cx, y as f64 - cy);
        let color = if dx.hypot(dy) <= radius {
            disc
        } else {
            lab_to_rgb(20.0 + 60.0 * x as f64 / width as f64, 0.0, 0.0)
        };
        image.set_rgb(x, y, color);
    }

    Ok(image)
}
