//! Terminal output helpers: dual-mode: styled text for humans, structured JSON for machines.
//!
//! Uses:
//! - `console` for colors (respects NO_COLOR, auto-disables when piped)
//! - `comfy-table` for palettes, with a true-color swatch column
//! - `indicatif` for spinners

use std::sync::atomic::{AtomicBool, Ordering};

use comfy_table::{Attribute, Cell, Color as CellColor, ContentArrangement, Table, presets::UTF8_FULL};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use serde_json::Value as JsonValue;
use tema_color::{Color, Theme};

use crate::cli::OutputFormat;

// ── Global format flag ─────────────────────────────────────────────

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(format: OutputFormat) {
    if matches!(format, OutputFormat::Json) {
        JSON_MODE.store(true, Ordering::Relaxed);
    }
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

// ── JSON envelope ──────────────────────────────────────────────────

#[derive(Serialize)]
struct Msg<'a> {
    level: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a JsonValue>,
}

fn to_json(level: &str, message: &str, data: Option<&JsonValue>) -> String {
    let msg = Msg {
        level,
        message,
        data,
    };
    serde_json::to_string(&msg)
        .unwrap_or_else(|_| format!("{{\"level\":\"{level}\",\"message\":\"{message}\"}}"))
}

fn emit_json(level: &str, message: &str, data: Option<&JsonValue>) {
    println!("{}", to_json(level, message, data));
}

// ── Public helpers ─────────────────────────────────────────────────

pub fn header(text: &str) {
    if is_json() {
        emit_json("info", text, None);
    } else {
        println!("{}", style(text).bold().cyan());
    }
}

pub fn error(text: &str) {
    if is_json() {
        eprintln!("{}", to_json("error", text, None));
    } else {
        eprintln!("{} {}", style("✗").red(), style(text).bright());
    }
}

pub fn warning(text: &str) {
    if is_json() {
        emit_json("warning", text, None);
    } else {
        println!("{} {}", style("!").yellow(), style(text).bright());
    }
}

pub fn dim(text: &str) {
    if is_json() {
        emit_json("info", text, None);
    } else {
        println!("{}", style(text).dim());
    }
}

/// Log sink for JSON mode: one envelope per log line, on stderr.
pub fn log_line(line: String) {
    eprintln!("{}", to_json("log", line.trim_end(), None));
}

/// Emit an arbitrary serializable value as structured output.
pub fn data<T: Serialize>(label: &str, value: &T) {
    let json_val = serde_json::to_value(value).unwrap_or(JsonValue::Null);
    if is_json() {
        emit_json("data", label, Some(&json_val));
    } else {
        let formatted =
            serde_json::to_string_pretty(&json_val).unwrap_or_else(|_| format!("{label}: <?>"));
        println!("{formatted}");
    }
}

/// Print a key-value pair with styled key.
pub fn kv(key: &str, value: &str) {
    if is_json() {
        let data = serde_json::json!({ key: value });
        emit_json("info", key, Some(&data));
    } else {
        println!("  {} {}", style(key).cyan().bold(), value);
    }
}

/// Print raw text as-is (CSS blocks); wrapped in an envelope in JSON mode.
pub fn raw(label: &str, text: &str) {
    if is_json() {
        let data = serde_json::json!({ label: text });
        emit_json("data", label, Some(&data));
    } else {
        print!("{text}");
    }
}

// ── Tables ─────────────────────────────────────────────────────────

/// Create a styled table.
pub fn table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Add a bold cyan header row to the table.
pub fn table_header(table: &mut Table, columns: &[&str]) {
    table.set_header(
        columns
            .iter()
            .map(|c| Cell::new(c).fg(CellColor::Cyan).add_attribute(Attribute::Bold)),
    );
}

fn swatch(color: Color) -> Cell {
    let (r, g, b) = color.tuple();
    Cell::new("██████").fg(CellColor::Rgb { r, g, b })
}

/// Print a palette: a variable/value/swatch table, or the theme object in JSON mode.
pub fn theme(theme: &Theme, revision: Option<u64>) {
    if is_json() {
        let mut value = serde_json::to_value(theme).unwrap_or(JsonValue::Null);
        if let (Some(revision), JsonValue::Object(map)) = (revision, &mut value) {
            map.insert("revision".into(), revision.into());
        }
        emit_json("theme", "", Some(&value));
        return;
    }

    let mut table = table();
    table_header(&mut table, &["Variable", "Value", ""]);
    for (name, color) in theme.css_variables() {
        table.add_row(vec![
            Cell::new(name).fg(CellColor::Green),
            Cell::new(color.to_string()),
            swatch(color),
        ]);
    }
    if let Some(revision) = revision {
        println!("{}", style(format!("revision {revision}")).dim());
    }
    println!("{table}");
}

// ── Spinners ───────────────────────────────────────────────────────

/// Create a spinner for async operations. Hidden in JSON mode.
pub fn spinner(message: &str) -> ProgressBar {
    if is_json() {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

/// Finish spinner with success message.
pub fn spinner_success(spinner: &ProgressBar, message: &str) {
    spinner.finish_and_clear();
    if is_json() {
        emit_json("success", message, None);
    } else {
        println!("{} {}", style("✓").green(), message);
    }
}

/// Finish spinner with error message.
pub fn spinner_error(spinner: &ProgressBar, message: &str) {
    spinner.finish_and_clear();
    if is_json() {
        eprintln!("{}", to_json("error", message, None));
    } else {
        eprintln!("{} {}", style("✗").red(), message);
    }
}
