//! Show the resolved view configuration.

use crate::Format;
use anyhow::{Context, Result};
use fieldview::ConfigLoader;

pub fn run(project: &str, format: Format) -> Result<()> {
    let config = ConfigLoader::new()
        .with_project_dir(project)
        .load()
        .context("Failed to load view configuration")?;

    match format {
        Format::Json => {
            let json = serde_json::to_string_pretty(&config)?;
            println!("{json}");
        }
        Format::Toml => {
            let toml_str = toml::to_string_pretty(&config)?;
            println!("{toml_str}");
        }
        Format::Text => {
            println!("View Configuration");
            println!("==================\n");

            for (view, tag) in config.views() {
                println!("  {view:<16} {tag}");
            }
            println!();

            println!("Logging: {}", config.log_enabled());
            println!("Matching: {:?}", config.match_mode());
        }
    }

    Ok(())
}
