//! CLI output formatting utilities.
//!
//! This module provides utilities for formatting CLI output including:
//! - Tables of window frames
//! - JSON syntax highlighting

use colored::Colorize;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::tiling::{LayoutResult, WindowOrder};

/// One row of the frame table.
#[derive(Tabled)]
struct FrameRow {
    #[tabled(rename = "Window")]
    window: u32,
    #[tabled(rename = "Area")]
    area: &'static str,
    #[tabled(rename = "X")]
    x: i32,
    #[tabled(rename = "Y")]
    y: i32,
    #[tabled(rename = "Width")]
    width: i32,
    #[tabled(rename = "Height")]
    height: i32,
    #[tabled(rename = "Counted")]
    counted: String,
}

/// Renders computed frames as a table.
///
/// The first `master_count` entries are labelled as the master area.
#[must_use]
pub fn frames_table(frames: &LayoutResult, windows: &WindowOrder, master_count: usize) -> String {
    let rows: Vec<FrameRow> = frames
        .iter()
        .enumerate()
        .map(|(index, (window, frame))| FrameRow {
            window: *window,
            area: if index < master_count { "master" } else { "stack" },
            x: frame.x,
            y: frame.y,
            width: frame.width,
            height: frame.height,
            counted: format_bool(windows.iter().find(|w| w.id == *window).is_none_or(|w| w.counted)),
        })
        .collect();

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(2..6)).with(Alignment::right()))
        .with(Modify::new(Columns::last()).with(Alignment::center()))
        .to_string()
}

/// Prints JSON with syntax highlighting.
///
/// Colors:
/// - Keys: Cyan
/// - Strings: Green
/// - Numbers: Yellow
/// - Booleans/Null: Magenta
/// - Brackets/Braces: White (default)
pub fn print_highlighted_json(value: &serde_json::Value) {
    let json_str = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
    println!("{}", highlight_json(&json_str));
}

/// Colors a pretty-printed JSON string.
fn highlight_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len() * 2);
    let mut in_string = false;
    let mut is_key = false;
    let mut escape_next = false;
    let mut current_token = String::new();
    let mut after_colon = false;

    for ch in json.chars() {
        if escape_next {
            current_token.push(ch);
            escape_next = false;
            continue;
        }

        if ch == '\\' && in_string {
            current_token.push(ch);
            escape_next = true;
            continue;
        }

        match ch {
            '"' if in_string => {
                current_token.push(ch);
                let colored = if is_key { current_token.cyan() } else { current_token.green() };
                out.push_str(&colored.to_string());
                current_token.clear();
                in_string = false;
                is_key = false;
            }
            '"' => {
                flush_token(&mut out, &mut current_token, after_colon);
                current_token.push(ch);
                in_string = true;
                // Strings not following a colon are keys (or array items)
                is_key = !after_colon;
                after_colon = false;
            }
            ':' if !in_string => {
                flush_token(&mut out, &mut current_token, false);
                out.push_str(&":".white().to_string());
                after_colon = true;
            }
            ',' if !in_string => {
                flush_token(&mut out, &mut current_token, after_colon);
                out.push_str(&",".white().to_string());
                after_colon = false;
            }
            '{' | '}' | '[' | ']' if !in_string => {
                flush_token(&mut out, &mut current_token, after_colon);
                out.push_str(&ch.to_string().white().bold().to_string());
                after_colon = false;
            }
            _ => current_token.push(ch),
        }
    }

    flush_token(&mut out, &mut current_token, after_colon);
    out
}

/// Appends the current token with appropriate coloring.
fn flush_token(out: &mut String, token: &mut String, is_value: bool) {
    if token.is_empty() {
        return;
    }

    let start = token.find(|c: char| !c.is_whitespace());
    match start {
        Some(start) if is_value => {
            let end = token.rfind(|c: char| !c.is_whitespace()).map_or(token.len(), |i| i + 1);
            let (prefix, value, suffix) = (&token[..start], &token[start..end], &token[end..]);

            let colored = if matches!(value, "true" | "false" | "null") {
                value.magenta().to_string()
            } else if value.parse::<f64>().is_ok() {
                value.yellow().to_string()
            } else {
                value.to_string()
            };
            out.push_str(prefix);
            out.push_str(&colored);
            out.push_str(suffix);
        }
        _ => out.push_str(token),
    }

    token.clear();
}

/// Formats a boolean as a colored string.
#[must_use]
pub fn format_bool(value: bool) -> String {
    if value {
        "✓".green().to_string()
    } else {
        "✗".red().to_string()
    }
}
