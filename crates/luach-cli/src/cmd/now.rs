use crate::output::{clock_line, print_json};
use anyhow::Context;
use chrono::Local;
use luach_core::calendar::IcuHebrewCalendar;
use luach_core::format::snapshot;
use std::path::Path;

pub fn run(config_path: &Path, json: bool) -> anyhow::Result<()> {
    let config = super::load_valid_config(config_path)?;
    let snap = snapshot(
        &Local::now(),
        &IcuHebrewCalendar::new(),
        &config.snapshot_options(),
    )
    .context("failed to compute the Hebrew date")?;

    if json {
        print_json(&snap)?;
    } else {
        println!("{}", clock_line(&snap, config.display.show_part_of_day));
    }
    Ok(())
}
