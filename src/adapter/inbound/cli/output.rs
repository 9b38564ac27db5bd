//! Terminal output for CLI handlers.
//!
//! Human-readable lines go to stdout with colored markers; `--json` switches
//! every helper to one JSON object per line for scripting. Errors always go
//! to stderr.

use std::fmt::Display;
use std::sync::{OnceLock, PoisonError, RwLock};

use owo_colors::OwoColorize;
use serde_json::json;

use crate::domain::{Side, Trade};

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
}

static MODE: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn mode() -> &'static RwLock<OutputConfig> {
    MODE.get_or_init(RwLock::default)
}

fn current() -> OutputConfig {
    *mode().read().unwrap_or_else(PoisonError::into_inner)
}

fn json_line(kind: &str, payload: serde_json::Value) {
    println!("{}", json!({ "type": kind, "payload": payload }));
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    *mode().write().unwrap_or_else(PoisonError::into_inner) = config;
}

#[must_use]
pub fn is_json() -> bool {
    current().json
}

/// Print a section header.
pub fn section(title: &str) {
    let config = current();
    if config.json {
        json_line("section", json!({ "title": title }));
        return;
    }
    if config.quiet {
        return;
    }
    println!();
    println!("{}", title.bold());
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let config = current();
    let value = value.to_string();
    if config.json {
        json_line("field", json!({ "label": label, "value": value }));
        return;
    }
    if config.quiet {
        return;
    }
    println!("  {:<12} {}", label.dimmed(), value);
}

/// Print a plain list item.
pub fn item(value: impl Display) {
    let value = value.to_string();
    if is_json() {
        json_line("item", json!({ "value": value }));
        return;
    }
    println!("  {value}");
}

/// Print one trade. Never suppressed: trades are the payload of `watch`.
pub fn trade(trade: &Trade) {
    if is_json() {
        json_line("trade", json!(trade));
        return;
    }
    let line = trade.to_string();
    match trade.side {
        Side::Buy => println!("{}", line.green()),
        Side::Sell => println!("{}", line.red()),
    }
}

/// Print a pre-rendered table, indented.
pub fn table(rendered: &str) {
    for line in rendered.lines() {
        println!("  {line}");
    }
}

pub fn warning(message: &str) {
    if is_json() {
        json_line("warning", json!({ "message": message }));
        return;
    }
    eprintln!("  {} {}", "⚠".yellow(), message);
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    if is_json() {
        eprintln!("{}", json!({ "type": "error", "payload": { "message": message } }));
        return;
    }
    eprintln!("  {} {}", "×".red(), message);
}

#[must_use]
pub fn muted(value: impl Display) -> String {
    value.to_string().dimmed().to_string()
}
