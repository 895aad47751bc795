/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// True when a waypoint label is the "lat/lon" fallback rather than a name.
pub fn is_coordinate_label(label: &str) -> bool {
    match label.split_once('/') {
        Some((lat, lon)) => {
            lat.trim().parse::<f64>().is_ok() && lon.trim().parse::<f64>().is_ok()
        }
        None => false,
    }
}

/// Waypoint color:
/// named → cyan
/// coordinate fallback → grey
pub fn colorize_waypoint(label: &str) -> String {
    if is_coordinate_label(label) {
        format!("{GREY}{label}{RESET}")
    } else {
        format!("{CYAN}{label}{RESET}")
    }
}

/// Count color:
/// 0 → grey
/// >0 → `color`
pub fn colorize_count(value: usize, color: &str) -> String {
    if value == 0 {
        format!("{GREY}{value}{RESET}")
    } else {
        format!("{color}{value}{RESET}")
    }
}
