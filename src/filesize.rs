//! Human-readable byte counts for upload limit messages.

const KB: f64 = 1024.0;
const MB: f64 = KB * 1024.0;
const GB: f64 = MB * 1024.0;
const TB: f64 = GB * 1024.0;

/// Renders a byte count in the largest 1024-based unit where the value is
/// at least one, rounded to one decimal place ("1.0 MB"). Counts below a
/// kilobyte are shown as plain bytes.
pub fn filesizeformat(bytes: u64) -> String {
    let size = bytes as f64;
    if bytes == 1 {
        "1 byte".to_string()
    } else if size < KB {
        format!("{} bytes", bytes)
    } else if size < MB {
        format!("{:.1} KB", size / KB)
    } else if size < GB {
        format!("{:.1} MB", size / MB)
    } else if size < TB {
        format!("{:.1} GB", size / GB)
    } else {
        format!("{:.1} TB", size / TB)
    }
}
