use std::path::PathBuf;

use anyhow::{Context, Result};
use blindtest_core::script::{replay, Script, Step};
use clap::Args;
use serde::Serialize;
use tracing::info;

use crate::summary;

#[derive(Args)]
pub struct ReplayArgs {
    /// Interaction script (TOML)
    pub script: PathBuf,

    /// Write the recorded steps as TOML instead of printing a table
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Serialize)]
struct Report<'a> {
    steps: &'a [Step],
}

pub fn run(args: &ReplayArgs) -> Result<()> {
    let text = std::fs::read_to_string(&args.script)
        .with_context(|| format!("Failed to read script {}", args.script.display()))?;
    let script: Script = toml::from_str(&text)
        .with_context(|| format!("Failed to parse script {}", args.script.display()))?;

    let steps = replay(&script)?;
    info!(events = steps.len(), "replay finished");

    if let Some(ref path) = args.output {
        let toml_str = toml::to_string_pretty(&Report { steps: &steps })?;
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write steps to {}", path.display()))?;
        println!("{} steps saved to {}", steps.len(), path.display());
    } else {
        summary::print_steps(&steps);
    }

    Ok(())
}
