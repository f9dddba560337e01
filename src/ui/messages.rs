//! User-facing status lines: icon + colour, one line each.

use crate::utils::colors::{BLUE, BOLD, GREEN, RED, RESET, YELLOW, use_color};
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn styled(color: &str, icon: &str, msg: &dyn fmt::Display) -> String {
    if use_color() {
        format!("{color}{BOLD}{icon}{RESET} {msg}")
    } else {
        format!("{icon} {msg}")
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", styled(BLUE, ICON_INFO, &msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", styled(GREEN, ICON_OK, &msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", styled(YELLOW, ICON_WARN, &msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", styled(RED, ICON_ERR, &msg));
}

/// Section header, e.g. the month title above a calendar grid.
pub fn header<T: fmt::Display>(msg: T) {
    if use_color() {
        println!("{BLUE}{BOLD}=== {msg} ==={RESET}");
    } else {
        println!("=== {msg} ===");
    }
}
