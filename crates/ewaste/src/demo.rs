//! The fixed sample run executed when `ewaste` is started without a subcommand.

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::Result;
use crate::inventory::{Inventory, LoadOutcome};

/// Devices added by the sample run, as `(name, purchase_date, expected_lifetime)`.
pub const SAMPLE_ITEMS: [(&str, &str, i64); 2] =
    [("Laptop", "2022-01-01", 3), ("Smartphone", "2023-06-15", 2)];

/// Name recycled at the end of the sample run.
pub const SAMPLE_RECYCLE: &str = "Laptop";

/// What happened during a sample run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    /// Outcome of the initial load.
    pub load: LoadOutcome,
    /// Items that were due after the samples were added, with their replacement dates.
    pub due: Vec<(String, NaiveDate)>,
    /// Number of items removed by the recycle step.
    pub recycled: usize,
}

/// Load `data_file`, add the sample devices, collect the due items as of `now`,
/// recycle [`SAMPLE_RECYCLE`], and save back to `data_file`.
///
/// # Errors
///
/// Returns an error if loading, adding, or saving fails.
pub fn run(
    inventory: &mut Inventory,
    data_file: &Path,
    indent: usize,
    now: NaiveDateTime,
) -> Result<DemoReport> {
    let load = inventory.load_data(data_file)?;

    for (name, purchase_date, lifetime) in SAMPLE_ITEMS {
        inventory.add_item(name, purchase_date, lifetime)?;
    }

    let due = inventory
        .monitor_items_at(now)
        .into_iter()
        .map(|item| (item.name().to_string(), item.replacement_date()))
        .collect();

    let recycled = inventory.recycle_item(SAMPLE_RECYCLE);
    inventory.save_data_with_indent(data_file, indent)?;

    Ok(DemoReport {
        load,
        due,
        recycled,
    })
}
