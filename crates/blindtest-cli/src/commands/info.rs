use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use blindtest_core::config::{LayoutConfig, SurveyConfig};
use blindtest_core::geometry::{ContainerPreset, Size};
use clap::Args;

use crate::summary;

const PRESETS: [ContainerPreset; 2] = [ContainerPreset::Normal, ContainerPreset::Expanded];

#[derive(Args)]
pub struct InfoArgs {
    /// Image files to inspect
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Survey config providing the container presets
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let layout = match args.config {
        Some(ref path) => load_layout(path)?,
        None => LayoutConfig::default(),
    };

    for file in &args.files {
        let (width, height) = image::image_dimensions(file)
            .with_context(|| format!("Failed to read image header of {}", file.display()))?;
        let natural = Size::new(width as f64, height as f64);
        summary::print_image_info(file, natural, &layout, &PRESETS);
    }

    Ok(())
}

fn load_layout(path: &Path) -> Result<LayoutConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: SurveyConfig = toml::from_str(&text)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    config.validate()?;
    Ok(config.layout)
}
