//! Text formatting utilities for the gallery viewer.

use minigallery::Millis;

/// Formats a widget clock value as seconds with millisecond precision.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_millis(1234.0), "1.234 s");
/// assert_eq!(format_millis(61_000.0), "1:01.000");
/// ```
pub fn format_millis(ms: Millis) -> String {
    let total = ms.max(0.0).round() as u64;
    let minutes = total / 60_000;
    let seconds = (total % 60_000) / 1000;
    let millis = total % 1000;
    if minutes > 0 {
        format!("{}:{:02}.{:03}", minutes, seconds, millis)
    } else {
        format!("{}.{:03} s", seconds, millis)
    }
}
