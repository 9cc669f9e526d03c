//! Imagery query window command

use crate::cli::WindowArgs;
use crate::output::OutputWriter;
use crate::output_types::WindowOutput;
use anyhow::{Context, Result};
use fieldgeo_geo::{image_query_window, IMAGE_QUERY_WINDOW_DAYS};

pub fn execute(args: WindowArgs, output: &OutputWriter) -> Result<()> {
    let (start, end) =
        image_query_window(&args.planting_date).context("Failed to compute query window")?;

    if output.is_json() {
        output.result(WindowOutput {
            planting_date: args.planting_date,
            start,
            end,
            days: IMAGE_QUERY_WINDOW_DAYS,
        })?;
    } else {
        output.kv("Start", start);
        output.kv("End", end);
    }
    Ok(())
}
