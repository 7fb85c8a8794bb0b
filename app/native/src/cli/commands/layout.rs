//! Layout CLI commands.
//!
//! `layout` computes and prints window frames, `symbol` prints the layout
//! symbol. Both run against a simulated platform.

use colored::Colorize;

use super::types::LayoutArgs;
use crate::cli::output;
use crate::config::get_config;
use crate::error::TesseraError;
use crate::tiling::{Layout, LayoutResult};

/// Execute the `layout` command.
///
/// # Errors
///
/// Returns an error if the JSON output cannot be serialized.
pub fn execute_layout(args: &LayoutArgs, json: bool) -> Result<(), TesseraError> {
    let mut layout = args.build_layout(&get_config().tiling);
    layout.reflow();

    let frames = layout.compute_frames(&args.area);
    let symbol = layout.layout_symbol(args.counted_windows());
    let master_count = layout.params().master_count.min(frames.len());

    if json {
        let value = serde_json::json!({
            "layout": layout.layout_name(),
            "symbol": symbol,
            "workingArea": args.area,
            "params": layout.params(),
            "frames": frames_json(&frames, master_count),
        });
        output::print_highlighted_json(&value);
        return Ok(());
    }

    if frames.is_empty() {
        println!("{}", "No windows to lay out.".dimmed());
        return Ok(());
    }

    println!("{} {}", format!("{} layout", layout.layout_name()).bold(), symbol.cyan());
    println!("{}", output::frames_table(&frames, layout.windows(), master_count));
    Ok(())
}

/// Execute the `symbol` command.
#[allow(clippy::unnecessary_wraps)] // Consistent return type with other CLI functions
pub fn execute_symbol(args: &LayoutArgs, visible: Option<usize>) -> Result<(), TesseraError> {
    let layout = args.build_layout(&get_config().tiling);
    println!("{}", layout.layout_symbol(visible.unwrap_or_else(|| args.counted_windows())));
    Ok(())
}

/// Converts frames into JSON objects, labelling the master area.
pub fn frames_json(frames: &LayoutResult, master_count: usize) -> serde_json::Value {
    frames
        .iter()
        .enumerate()
        .map(|(index, (window, frame))| {
            serde_json::json!({
                "window": window,
                "area": if index < master_count { "master" } else { "stack" },
                "frame": frame,
            })
        })
        .collect()
}
