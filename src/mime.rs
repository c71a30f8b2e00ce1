//! Content sniffing through libmagic.

use anyhow::{anyhow, Result};
use magic::cookie::{DatabasePaths, Flags};
use magic::Cookie;

/// Sniffs the MIME type and text encoding of a byte buffer.
///
/// Returns the `(mime_type, encoding)` pair libmagic reports for the
/// buffer, e.g. `("text/plain", "us-ascii")`. A cookie is opened per call;
/// libmagic handles cannot be shared between threads.
pub fn get_mime_type(raw: &[u8]) -> Result<(String, String)> {
    let cookie = Cookie::open(Flags::MIME_TYPE | Flags::MIME_ENCODING)
        .map_err(|e| anyhow!("failed to open libmagic cookie: {}", e))?;
    let cookie = cookie
        .load(&DatabasePaths::default())
        .map_err(|e| anyhow!("failed to load the magic database: {}", e))?;
    let description = cookie
        .buffer(raw)
        .map_err(|e| anyhow!("libmagic could not inspect the buffer: {}", e))?;
    Ok(split_mime_description(&description))
}

/// Splits `"type/subtype; charset=enc"` into its two halves. libmagic omits
/// the charset parameter for some inputs; the encoding defaults to utf-8.
fn split_mime_description(description: &str) -> (String, String) {
    match description.split_once(';') {
        Some((mime_type, params)) => {
            let encoding = params.trim().strip_prefix("charset=").unwrap_or("utf-8");
            (mime_type.trim().to_string(), encoding.to_string())
        }
        None => (description.trim().to_string(), "utf-8".to_string()),
    }
}
