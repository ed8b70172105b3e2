//! Completion summary sharing.
//!
//! When the platform opener is available (and not disabled in config),
//! the summary is handed off as a pre-filled mail draft carrying the
//! title, summary text, and page URL. Invocation failures are logged
//! only. When sharing is disabled the summary falls back to the
//! terminal for manual copy.

use serde::Serialize;

use crate::config::ShareConfig;

/// Title passed to the share handler
pub const SHARE_TITLE: &str = "Mental Clutter Reduction Progress";

/// The shared summary string
pub fn summary_text(completed: usize) -> String {
    format!("I've completed {completed} mental clutter reduction tasks today! \u{1f9e0}\u{2728}")
}

/// How the summary left the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShareOutcome {
    /// Handed to the platform share handler
    Shared,
    /// No handler available; summary surfaced for manual copy
    CopyFallback,
}

/// Share the summary, falling back to manual copy when no handler is
/// available.
pub fn share(config: &ShareConfig, summary: &str) -> ShareOutcome {
    if !config.enabled {
        return ShareOutcome::CopyFallback;
    }

    let target = share_target(config, summary);
    if let Err(err) = open::that_detached(&target) {
        tracing::warn!(error = %err, "share handler failed");
    }
    ShareOutcome::Shared
}

fn share_target(config: &ShareConfig, summary: &str) -> String {
    let mut body = summary.to_string();
    let page_url = config.page_url.trim();
    if !page_url.is_empty() {
        body.push('\n');
        body.push_str(page_url);
    }
    format!(
        "mailto:?subject={}&body={}",
        encode_component(SHARE_TITLE),
        encode_component(&body)
    )
}

// Percent-encoding for the mailto query: RFC 3986 unreserved characters
// pass through, everything else is escaped byte-wise.
fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
