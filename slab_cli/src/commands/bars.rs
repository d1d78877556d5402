//! `slab bars` command

use anyhow::Result;

use crate::cli::BarsArgs;
use slab_core::bar_catalog;

pub fn execute(args: BarsArgs) -> Result<()> {
    let catalog = bar_catalog();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    println!("{:<6} {:>10} {:>12}", "Bar", "Dia (mm)", "Area (mm²)");
    for bar in &catalog {
        println!(
            "{:<6} {:>10.1} {:>12.0}",
            bar.designation, bar.diameter_mm, bar.area_mm2
        );
    }

    Ok(())
}
