/// ANSI color helper utilities for terminal output.
use crate::models::DayClass;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";

/// Colours are disabled when `NO_COLOR` is set (any value).
pub fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Day-number colour in the calendar grid:
/// holiday → magenta, weekend → red, workday → reset
pub fn color_for_class(class: DayClass) -> &'static str {
    match class {
        DayClass::Holiday => MAGENTA,
        DayClass::Weekend => RED,
        DayClass::Workday => RESET,
    }
}

/// Remaining days colour: negative → red, zero → grey, otherwise green.
pub fn color_for_remaining(value: i64) -> &'static str {
    if value < 0 {
        RED
    } else if value == 0 {
        GREY
    } else {
        GREEN
    }
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = (h % 360.0) / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    let to_u8 = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (to_u8(r), to_u8(g), to_u8(b))
}

/// RGB value of a color tag: `#rrggbb` or `hsl(h, s%, l%)`.
pub fn tag_to_rgb(tag: &str) -> Option<(u8, u8, u8)> {
    let t = tag.trim();

    if let Some(hex) = t.strip_prefix('#') {
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let rgb = u32::from_str_radix(hex, 16).ok()?;
        return Some(((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8));
    }

    let inner = t.strip_prefix("hsl(")?.strip_suffix(')')?;
    let parts: Vec<&str> = inner.split(',').map(|p| p.trim()).collect();
    if parts.len() != 3 {
        return None;
    }
    let h: f64 = parts[0].parse().ok()?;
    let s: f64 = parts[1].trim_end_matches('%').parse().ok()?;
    let l: f64 = parts[2].trim_end_matches('%').parse().ok()?;
    Some(hsl_to_rgb(h, s / 100.0, l / 100.0))
}

/// Paint `text` in the employee's tag colour (24-bit ANSI).
/// Unknown tags and `NO_COLOR` leave the text untouched.
pub fn paint_tag(text: &str, tag: &str) -> String {
    match tag_to_rgb(tag) {
        Some((r, g, b)) if use_color() => format!("\x1b[38;2;{r};{g};{b}m{text}{RESET}"),
        _ => text.to_string(),
    }
}

pub fn paint(text: &str, color: &str) -> String {
    if use_color() && color != RESET {
        format!("{color}{text}{RESET}")
    } else {
        text.to_string()
    }
}
