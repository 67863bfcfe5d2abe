//! Plan command: print the byte ranges for a size and part count.

use anyhow::Result;
use splitdl_core::plan_parts;

pub fn run_plan(size: u64, parts: usize) -> Result<()> {
    let plan = plan_parts(size, parts)?;
    println!("{} bytes in {} parts", plan.total_size(), plan.len());
    for range in &plan {
        println!(
            "{:>4}  {}  ({} bytes)",
            range.index,
            range.range_header_value(),
            range.len()
        );
    }
    Ok(())
}
