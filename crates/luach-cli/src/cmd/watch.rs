use crate::output::{clock_line, print_json_line};
use luach_core::calendar::IcuHebrewCalendar;
use luach_core::clock::{ClockHandle, ClockOptions};
use luach_core::format::ClockSnapshot;
use std::io::{IsTerminal, Write};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::watch;

pub fn run(config_path: &Path, ticks: Option<u64>, json: bool) -> anyhow::Result<()> {
    let config = super::load_valid_config(config_path)?;
    let options = ClockOptions::from_config(&config);
    let show_part_of_day = config.display.show_part_of_day;
    let redraw = !json && std::io::stdout().is_terminal();

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let handle = ClockHandle::spawn(Arc::new(IcuHebrewCalendar::new()), options);
        let mut rx = handle.subscribe();

        let result = tokio::select! {
            res = render(&mut rx, ticks, json, show_part_of_day, redraw) => res,
            _ = tokio::signal::ctrl_c() => Ok(()),
        };

        handle.shutdown().await;
        if redraw {
            println!();
        }
        result
    })
}

async fn render(
    rx: &mut watch::Receiver<Option<ClockSnapshot>>,
    ticks: Option<u64>,
    json: bool,
    show_part_of_day: bool,
    redraw: bool,
) -> anyhow::Result<()> {
    let mut shown = 0u64;
    loop {
        if rx.changed().await.is_err() {
            anyhow::bail!("clock stopped unexpectedly");
        }
        let Some(snap) = rx.borrow_and_update().clone() else {
            continue;
        };

        if json {
            print_json_line(&snap)?;
        } else if redraw {
            // Clear the line and draw over it.
            let mut stdout = std::io::stdout().lock();
            write!(stdout, "\r\x1b[2K{}", clock_line(&snap, show_part_of_day))?;
            stdout.flush()?;
        } else {
            println!("{}", clock_line(&snap, show_part_of_day));
        }

        shown += 1;
        if ticks.is_some_and(|n| shown >= n) {
            return Ok(());
        }
    }
}
