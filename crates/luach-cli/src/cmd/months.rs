use crate::output::{print_json, print_table};
use luach_core::types::HebrewMonth;

pub fn run(json: bool) -> anyhow::Result<()> {
    if json {
        let months: Vec<serde_json::Value> = HebrewMonth::all()
            .iter()
            .map(|m| {
                serde_json::json!({
                    "month": m,
                    "name": m.canonical_name(),
                    "hebrew": m.hebrew_name(),
                })
            })
            .collect();
        print_json(&months)?;
        return Ok(());
    }

    let rows: Vec<Vec<String>> = HebrewMonth::all()
        .iter()
        .map(|m| vec![m.canonical_name().to_string(), m.hebrew_name().to_string()])
        .collect();
    print_table(&["MONTH", "HEBREW"], rows);
    Ok(())
}
