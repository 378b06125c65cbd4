//! User-facing messages: the tool's only logging channel.
//!
//! Informational lines go to stdout, failures to stderr, each prefixed by
//! a colored icon.

use ansi_term::Colour;
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Blue.bold().paint(ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Green.bold().paint(ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Yellow.bold().paint(ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", Colour::Red.bold().paint(ICON_ERR), msg);
}

/// Section header, e.g. `====== Weekly totals`.
pub fn header<T: fmt::Display>(msg: T) {
    println!(
        "{}",
        Colour::Blue
            .bold()
            .paint(format!("====================== {msg}"))
    );
}

/// Prints `text` wrapped at `width` columns, continuation lines indented.
pub fn wrapped(text: &str, width: usize) {
    let opts = textwrap::Options::new(width.max(20)).subsequent_indent("    ");
    for line in text.lines() {
        for piece in textwrap::wrap(line, &opts) {
            println!("{piece}");
        }
    }
}
