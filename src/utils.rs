//! Utility helpers shared across the WASM frontend.

use chrono::{DateTime, Utc};

/// Human-readable file size, e.g. `"8.0 KB"`.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

/// Format a modification time given in (fractional) seconds since the UNIX
/// epoch.  Missing or out-of-range values render as `"unknown"`.
pub fn format_modified(epoch_secs: f64) -> String {
    if !epoch_secs.is_finite() || epoch_secs <= 0.0 {
        return "unknown".to_string();
    }
    let secs = epoch_secs.trunc() as i64;
    let nanos = (epoch_secs.fract() * 1e9) as u32;
    match DateTime::<Utc>::from_timestamp(secs, nanos) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M UTC").to_string(),
        None => "unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(8192), "8.0 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
    }

    #[test]
    fn modified_timestamps() {
        assert_eq!(format_modified(1_700_000_000.75), "2023-11-14 22:13 UTC");
        assert_eq!(format_modified(0.0), "unknown");
        assert_eq!(format_modified(f64::NAN), "unknown");
    }
}
