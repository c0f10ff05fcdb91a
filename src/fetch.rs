//! Upstream blocklist retrieval and sanitization.

use std::io::Read;
use std::time::Duration;

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Fetch raw text content from a URL.
///
/// Any transport error, non-success status, or unreadable body is logged and
/// mapped to `None`; callers treat an absent body as "skip this target".
pub fn fetch(url: &str) -> Option<String> {
    let agent = ureq::builder().timeout(FETCH_TIMEOUT).build();

    let response = match agent.get(url).call() {
        Ok(response) => response,
        Err(e) => {
            log::warn!("failed to fetch {}: {}", url, e);
            return None;
        }
    };

    let mut body = String::new();
    match response.into_reader().read_to_string(&mut body) {
        Ok(_) => Some(body),
        Err(e) => {
            log::warn!("failed to read response body from {}: {}", url, e);
            None
        }
    }
}

/// Strip comments and blank lines from raw fetched content.
///
/// Lines opening with `!`, `#`, or `/` are treated as comments; everything
/// else survives trimmed, in input order. Deduplication and sorting happen
/// downstream when the body is written.
pub fn sanitize(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(['!', '#', '/']))
        .map(str::to_string)
        .collect()
}
