//! Human-readable byte sizes for the result view.

/// Unit table of the result view. Inputs past the last entry clamp to it, so a
/// multi-TiB input renders as a GB count of 1024 or more.
const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Decimal places shown by default.
const DEFAULT_DECIMALS: i32 = 2;

/// Format `bytes` with the default two decimal places.
pub fn format_bytes(bytes: u64) -> String {
    format_bytes_with(bytes, DEFAULT_DECIMALS)
}

/// Format `bytes` as a human-readable size.
///
/// Zero is the literal `"0 Bytes"`. Otherwise the unit is picked by
/// `floor(log1024(bytes))`, clamped to the last table entry, and the scaled
/// value is rounded to `decimals` digits with trailing zeros stripped:
/// `1024` → `"1 KB"`, `1536` → `"1.5 KB"`. Negative `decimals` counts as 0.
pub fn format_bytes_with(bytes: u64, decimals: i32) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let dm = decimals.max(0) as usize;
    let index = (((bytes as f64).ln() / 1024f64.ln()).floor() as usize).min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(index as i32);
    let mut text = format!("{value:.dm$}");
    if text.contains('.') {
        text.truncate(text.trim_end_matches('0').trim_end_matches('.').len());
    }
    format!("{} {}", text, UNITS[index])
}
