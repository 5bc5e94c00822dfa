//! Project the sample account into a view.

use crate::sample::SampleAccount;
use anyhow::{Context, Result};
use fieldview::{ConfigLoader, ViewId, trim};

pub fn run(project: &str, view: &str, log: bool) -> Result<()> {
    let mut config = ConfigLoader::new()
        .with_project_dir(project)
        .load()
        .context("Failed to load view configuration")?;
    if log {
        config = config.enable_logs();
    }

    let view: ViewId = view.into();
    let trimmed = trim(&SampleAccount::new(), &view, &config)?;

    println!("{}", serde_json::to_string_pretty(&trimmed)?);
    Ok(())
}
