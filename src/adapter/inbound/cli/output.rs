//! Terminal output for every CLI handler.
//!
//! Three switches come from the global flags: `--json` turns every line into
//! a `{"type", "payload"}` object, `--quiet` drops everything that is not
//! essential, and `-v` adds detail. Per-venue status lines and errors are
//! essential and survive `--quiet`.
//!
//! Colors go through `if_supports_color`, so `--color` and terminal
//! detection decide whether escape codes are written.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::{OwoColorize, Stream};
use serde_json::{json, Value};

use crate::domain::rate::CanonicalRate;
use crate::error::FetchError;

use super::command::ColorChoice;

/// Output switches taken from the global CLI flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    pub json: bool,
    pub quiet: bool,
    pub verbose: u8,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            json,
            quiet,
            verbose,
        }
    }

    /// Human-readable, non-essential text is hidden.
    const fn hides_text(self) -> bool {
        self.quiet && !self.json
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn current() -> OutputConfig {
    match cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    match cell().write() {
        Ok(mut slot) => *slot = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Force colors on or off, or leave it to terminal detection.
pub fn configure_color(choice: ColorChoice) {
    match choice {
        ColorChoice::Auto => owo_colors::unset_override(),
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
    }
}

#[must_use]
pub fn is_json() -> bool {
    current().json
}

#[must_use]
pub fn is_quiet() -> bool {
    current().quiet
}

/// Number of `-v` flags.
#[must_use]
pub fn verbosity() -> u8 {
    current().verbose
}

/// Print one logical line: as JSON under `--json`, otherwise through `text`.
///
/// Non-essential lines are skipped in quiet mode.
fn emit(kind: &str, payload: Value, essential: bool, text: impl FnOnce(OutputConfig)) {
    let config = current();
    if config.json {
        println!("{}", json!({ "type": kind, "payload": payload }));
    } else if essential || !config.hides_text() {
        text(config);
    }
}

pub fn header(version: &str) {
    emit(
        "header",
        json!({ "app": "dashrates", "version": version }),
        false,
        |_| {
            println!(
                "{} {}",
                "dashrates".if_supports_color(Stream::Stdout, |t| t.bold()),
                version.if_supports_color(Stream::Stdout, |t| t.dimmed())
            );
        },
    );
}

/// A labeled value, aligned under the current section.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();
    emit(
        "field",
        json!({ "label": label, "value": value }),
        false,
        |_| {
            println!(
                "  {:<14} {value}",
                label.if_supports_color(Stream::Stdout, |t| t.dimmed())
            );
        },
    );
}

pub fn success(message: &str) {
    emit("success", json!({ "message": message }), false, |_| {
        println!("  {} {message}", "✓".if_supports_color(Stream::Stdout, |t| t.green()));
    });
}

pub fn warning(message: &str) {
    emit("warning", json!({ "message": message }), true, |_| {
        println!("  {} {message}", "⚠".if_supports_color(Stream::Stdout, |t| t.yellow()));
    });
}

/// `error: <message>` on stderr, in every mode.
pub fn error(message: &str) {
    if is_json() {
        eprintln!("{}", json!({ "type": "error", "payload": { "message": message } }));
    } else {
        eprintln!("{}: {message}", "error".if_supports_color(Stream::Stderr, |t| t.red()));
    }
}

pub fn section(title: &str) {
    emit("section", json!({ "title": title }), false, |_| {
        println!();
        println!("{}", title.if_supports_color(Stream::Stdout, |t| t.bold()));
    });
}

pub fn note(message: &str) {
    emit("note", json!({ "message": message }), false, |_| {
        println!("  {}", message.if_supports_color(Stream::Stdout, |t| t.dimmed()));
    });
}

/// Indented block, e.g. a rendered table.
pub fn lines(content: &str) {
    emit("lines", json!({ "content": content }), false, |_| {
        for line in content.lines() {
            println!("  {line}");
        }
    });
}

/// A whole JSON document, for commands with their own JSON shape.
pub fn json_output(value: Value) {
    println!("{value}");
}

/// `<Venue> OK`, plus pair, price and volume under `-v`.
pub fn source_ok(source: &str, rate: &CanonicalRate) {
    emit(
        "source",
        json!({ "source": source, "status": "ok", "rate": rate }),
        true,
        |config| {
            println!("{source} {}", "OK".if_supports_color(Stream::Stdout, |t| t.green()));
            if config.verbose > 0 {
                println!(
                    "  {} {} {}",
                    rate.pair_label().if_supports_color(Stream::Stdout, |t| t.dimmed()),
                    rate.last_price(),
                    volume_label(rate).if_supports_color(Stream::Stdout, |t| t.dimmed())
                );
            }
        },
    );
}

/// `<Venue> ERROR` on stdout, `error: <message>` on stderr.
pub fn source_error(source: &str, err: &FetchError) {
    emit(
        "source",
        json!({
            "source": source,
            "status": "error",
            "kind": err.kind(),
            "message": err.to_string(),
        }),
        true,
        |_| {
            println!("{source} {}", "ERROR".if_supports_color(Stream::Stdout, |t| t.red()));
            eprintln!("{}: {err}", "error".if_supports_color(Stream::Stderr, |t| t.red()));
        },
    );
}

/// Volume with its unit, or `n/a` when the venue does not report one.
#[must_use]
pub fn volume_label(rate: &CanonicalRate) -> String {
    if rate.has_volume() {
        format!("{} {}", rate.base_asset_volume(), rate.base_currency())
    } else {
        "n/a".to_string()
    }
}
