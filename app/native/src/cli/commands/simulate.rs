//! `simulate` command.
//!
//! Replays a script of window events through the lifecycle channel on a
//! simulated platform and reports what every event did.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use clap::Args;
use colored::Colorize;
use json_comments::StripComments;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::layout::frames_json;
use super::types::DEFAULT_AREA;
use crate::cli::output;
use crate::config::get_config;
use crate::error::TesseraError;
use crate::tiling::{
    Layout, LifecycleAdapter, Rect, SimulatedPlatform, TileLayout, WindowEvent, WindowId,
};

/// Arguments of the `simulate` command.
#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    /// JSONC file holding an array of window events.
    #[arg(value_name = "EVENTS")]
    pub script: PathBuf,

    /// Working area as x,y,width,height.
    #[arg(long, short, default_value = DEFAULT_AREA, value_name = "RECT", allow_hyphen_values = true)]
    pub area: Rect,

    /// Hung windows; they are skipped by every reflow.
    #[arg(long, value_name = "ID", value_delimiter = ',')]
    pub unresponsive: Vec<WindowId>,

    /// Output in JSON format instead of table format.
    #[arg(long, short = 'j')]
    pub json: bool,
}

/// Outcome of one replayed event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepReport {
    /// 1-based position in the script.
    pub step: usize,
    /// The event applied.
    pub event: WindowEvent,
    /// Window order after the event, head first.
    pub order: Vec<WindowId>,
    /// Number of batches committed by the event.
    pub batches: usize,
    /// Windows moved across those batches.
    pub moves: usize,
}

#[derive(Tabled)]
struct StepRow {
    #[tabled(rename = "#")]
    step: usize,
    #[tabled(rename = "Event")]
    event: String,
    #[tabled(rename = "Order")]
    order: String,
    #[tabled(rename = "Reflows")]
    batches: usize,
    #[tabled(rename = "Moves")]
    moves: usize,
}

/// Reads a JSONC event script.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not a JSON array of
/// window events.
pub fn load_event_script(path: &Path) -> Result<Vec<WindowEvent>, TesseraError> {
    let file = File::open(path).map_err(|err| {
        TesseraError::InvalidArguments(format!("Cannot open event script {}: {err}", path.display()))
    })?;
    let reader = StripComments::new(BufReader::new(file));
    Ok(serde_json::from_reader(reader)?)
}

/// Replays `events` one by one through the lifecycle channel.
pub fn replay(layout: &mut TileLayout<SimulatedPlatform>, events: Vec<WindowEvent>) -> Vec<StepReport> {
    let (mut adapter, sender) = LifecycleAdapter::channel();

    events
        .into_iter()
        .enumerate()
        .map(|(index, event)| {
            let before = layout.platform().batches().len();
            sender.send(event.clone());
            adapter.drain(layout);

            let committed = &layout.platform().batches()[before..];
            StepReport {
                step: index + 1,
                event,
                order: layout.windows().ids().collect(),
                batches: committed.len(),
                moves: committed.iter().map(Vec::len).sum(),
            }
        })
        .collect()
}

/// Execute the `simulate` command.
///
/// # Errors
///
/// Returns an error if the script cannot be loaded.
pub fn execute(args: &SimulateArgs) -> Result<(), TesseraError> {
    let events = load_event_script(&args.script)?;
    tracing::debug!(events = events.len(), script = %args.script.display(), "replaying event script");

    let mut platform = SimulatedPlatform::new(args.area);
    for &window in &args.unresponsive {
        platform.set_responsive(window, false);
    }
    let mut layout = TileLayout::from_config(platform, &get_config().tiling);

    let steps = replay(&mut layout, events);
    let frames = layout.compute_frames(&args.area);
    let master_count = layout.params().master_count.min(frames.len());
    let visible = layout.windows().iter().filter(|w| w.counted).count();
    let symbol = layout.layout_symbol(visible);

    if args.json {
        let value = serde_json::json!({
            "steps": steps,
            "symbol": symbol,
            "frames": frames_json(&frames, master_count),
        });
        output::print_highlighted_json(&value);
        return Ok(());
    }

    let rows: Vec<StepRow> = steps
        .iter()
        .map(|step| StepRow {
            step: step.step,
            event: describe(&step.event),
            order: format!("{:?}", step.order),
            batches: step.batches,
            moves: step.moves,
        })
        .collect();

    println!("{}", format!("Events ({})", steps.len()).bold());
    println!("{}", Table::new(rows).with(Style::rounded()));

    println!("\n{} {}", "Final layout".bold(), symbol.cyan());
    if frames.is_empty() {
        println!("{}", "No windows left.".dimmed());
    } else {
        println!("{}", output::frames_table(&frames, layout.windows(), master_count));
    }
    Ok(())
}

/// Short human-readable description of an event.
fn describe(event: &WindowEvent) -> String {
    match event {
        WindowEvent::Created { window, reflow } => format!("created {}{}", window.id, no_reflow(*reflow)),
        WindowEvent::Destroyed { window, reflow } => format!("destroyed {window}{}", no_reflow(*reflow)),
        WindowEvent::Minimized { window } => format!("minimized {window}"),
        WindowEvent::Restored { window } => format!("restored {}", window.id),
        WindowEvent::Reconciled { windows } => {
            let ids: Vec<WindowId> = windows.iter().map(|w| w.id).collect();
            format!("reconciled {ids:?}")
        }
        WindowEvent::TitlebarToggled { window } => format!("titlebar {window}"),
        WindowEvent::BorderToggled { window } => format!("border {window}"),
    }
}

const fn no_reflow(reflow: bool) -> &'static str { if reflow { "" } else { " (deferred)" } }
