use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use luach_core::gematria::{encode_day_number, encode_number, encode_year_number};

#[derive(Subcommand)]
pub enum GematriaSubcommand {
    /// Encode a Hebrew year (5000-6000), thousands omitted
    Year {
        #[arg(allow_negative_numbers = true)]
        year: i32,
    },

    /// Encode a day of the month (1-30)
    Day { day: u32 },

    /// Encode any number from 1 to 999
    Number { number: u32 },
}

pub fn run(subcmd: GematriaSubcommand, json: bool) -> anyhow::Result<()> {
    let (input, encoded) = match subcmd {
        GematriaSubcommand::Year { year } => {
            let encoded =
                encode_year_number(year).with_context(|| format!("cannot encode year {year}"))?;
            (i64::from(year), encoded)
        }
        GematriaSubcommand::Day { day } => (i64::from(day), encode_day_number(day)),
        GematriaSubcommand::Number { number } => {
            if !(1..=999).contains(&number) {
                anyhow::bail!("number must be between 1 and 999, got {number}");
            }
            (i64::from(number), encode_number(number))
        }
    };

    if json {
        print_json(&serde_json::json!({
            "input": input,
            "gematria": encoded,
        }))?;
    } else {
        println!("{encoded}");
    }
    Ok(())
}
