use crate::output::{print_json, print_table};
use anyhow::{Context, Result};
use roster_core::config::Config;
use std::path::PathBuf;

pub fn run(mut config: Config, seed: Option<PathBuf>, json: bool) -> Result<()> {
    if seed.is_some() {
        config.seed = seed;
    }
    let roster = config.roster().context("failed to load activity catalog")?;
    let catalog = roster.list_activities();

    if json {
        return print_json(&catalog);
    }

    let rows = catalog
        .iter()
        .map(|a| {
            vec![
                a.name.clone(),
                a.schedule.clone(),
                format!("{}/{}", a.participants.len(), a.max_participants),
                a.spots_left().to_string(),
            ]
        })
        .collect();
    print_table(&["ACTIVITY", "SCHEDULE", "ENROLLED", "SPOTS"], rows);
    Ok(())
}
