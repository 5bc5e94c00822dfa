//! Check the sample account for conflicting annotations.

use crate::sample::SampleAccount;
use anyhow::Result;
use fieldview::{Project, validate};

pub fn run() -> Result<()> {
    let conflicts = validate::<SampleAccount>();

    if conflicts.is_empty() {
        println!("No conflicting annotations in {}", SampleAccount::NAME);
        return Ok(());
    }

    for conflict in &conflicts {
        println!(
            "  {}: {} + {}",
            conflict.field, conflict.tags.0, conflict.tags.1
        );
    }
    anyhow::bail!(
        "{} conflicting annotation(s) in {}",
        conflicts.len(),
        SampleAccount::NAME
    )
}
