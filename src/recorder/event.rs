use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use rand::Rng;
use serde::{Serialize, Serializer};

use super::page::PageId;

const SESSION_ID_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
pub const SESSION_ID_LEN: usize = 9;
/// Characters of the token shown in the activity panel.
pub const SESSION_ID_DISPLAY_LEN: usize = 6;

/// One recorded navigation press. Immutable once captured.
///
/// Serializes to the collector body `{ timestamp, page, session_id }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClickEvent {
    #[serde(serialize_with = "serialize_iso_millis")]
    timestamp: DateTime<Utc>,
    page: PageId,
    session_id: String,
}

impl ClickEvent {
    /// Stamps `page` with the current time and a fresh token.
    pub fn capture(page: PageId) -> Self {
        Self::new(Utc::now(), page, generate_session_id())
    }

    pub fn new(timestamp: DateTime<Utc>, page: PageId, session_id: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.trunc_subsecs(3),
            page,
            session_id: session_id.into(),
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn page(&self) -> PageId {
        self.page
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// `abc123...` form used by the panel.
    pub fn short_session_id(&self) -> String {
        let head: String = self
            .session_id
            .chars()
            .take(SESSION_ID_DISPLAY_LEN)
            .collect();
        format!("{head}...")
    }
}

/// Opaque per-click token. Not a security boundary and not unique across
/// a large number of clicks.
pub fn generate_session_id() -> String {
    let mut rng = rand::rng();
    (0..SESSION_ID_LEN)
        .map(|_| {
            let idx = rng.random_range(0..SESSION_ID_CHARSET.len());
            SESSION_ID_CHARSET[idx] as char
        })
        .collect()
}

fn serialize_iso_millis<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
}
