//! Stored page record.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A mirrored page as persisted by the content store.
///
/// Serialized field names are camelCase; stored files must keep this exact
/// shape. Records are written once and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord {
    /// 12 lowercase hex characters, the record's only external identity
    pub code: String,

    /// URL the client asked to mirror
    pub original_url: String,

    /// URL the stored content was actually rendered from
    pub final_url: String,

    /// Resolved frame URL, only when it differs from the original URL
    pub frame_url: Option<String>,

    /// Rewritten HTML document
    pub content: String,

    /// ISO-8601 creation timestamp
    pub timestamp: String,
}

impl PageRecord {
    /// Build a record stamped with the current time.
    pub fn new(
        code: impl Into<String>,
        original_url: impl Into<String>,
        final_url: impl Into<String>,
        frame_url: Option<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            original_url: original_url.into(),
            final_url: final_url.into(),
            frame_url,
            content: content.into(),
            timestamp: now_iso(),
        }
    }
}

/// Current UTC time as an ISO-8601 string with millisecond precision,
/// e.g. `2026-08-25T09:30:00.123Z`.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
