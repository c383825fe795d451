//! Wire types for the local game-state backend, and fetch errors.
//!
//! The backend is lenient about number-vs-string fields (win rates and
//! scores come straight from scraped tables), so those fields accept
//! either and are kept as display strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while fetching a snapshot or the item dataset.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response (connect refused, timeout).
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("unexpected status {status}")]
    Status { status: u16 },

    /// The body was not the expected JSON shape.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl FetchError {
    /// Whether the same request may succeed on a later tick.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Status { status: 429 | 500..=599 })
    }
}

// =============================================================================
// ENDPOINTS
// =============================================================================

/// The three polled backend endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    ChampSelect,
    Augments,
    Build,
}

impl Endpoint {
    pub const ALL: [Endpoint; 3] = [Endpoint::ChampSelect, Endpoint::Augments, Endpoint::Build];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::ChampSelect => "/champ-select",
            Self::Augments => "/augments/current",
            Self::Build => "/champion/build",
        }
    }

    /// Short name used in log fields.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ChampSelect => "pick",
            Self::Augments => "augment",
            Self::Build => "build",
        }
    }
}

// =============================================================================
// CHAMP SELECT
// =============================================================================

/// Game-client window rectangle, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// `GET /champ-select`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChampSelectSnapshot {
    #[serde(default)]
    pub phase: Option<String>,
    #[serde(default)]
    pub team: Vec<TeamMember>,
    #[serde(default)]
    pub bench: Vec<BenchChampion>,
    #[serde(default)]
    pub window_rect: Option<WindowRect>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TeamMember {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_me: bool,
    #[serde(default, deserialize_with = "lenient_string")]
    pub tier: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub score: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub win_rate: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub pick_rate: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BenchChampion {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub tier: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub score: Option<String>,
}

// =============================================================================
// AUGMENTS
// =============================================================================

/// `GET /augments/current`. Extra backend bookkeeping fields are ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AugmentSnapshot {
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub augments: Vec<AugmentEntry>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AugmentEntry {
    #[serde(default)]
    pub name_ko: String,
    #[serde(default)]
    pub name_en: Option<String>,
    /// Tier of this augment for the current champion.
    #[serde(default, deserialize_with = "lenient_string")]
    pub tier_champ: Option<String>,
    /// Tier across all champions.
    #[serde(default, deserialize_with = "lenient_string")]
    pub tier_global: Option<String>,
}

// =============================================================================
// BUILD
// =============================================================================

/// `GET /champion/build`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BuildResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub shop_open: bool,
    #[serde(default)]
    pub data: Option<BuildData>,
}

/// Recommended items for the current champion.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BuildData {
    #[serde(default)]
    pub starting: Vec<BuildItem>,
    #[serde(default)]
    pub core: Vec<BuildItem>,
    #[serde(default)]
    pub item4: Vec<BuildItem>,
    #[serde(default)]
    pub item5: Vec<BuildItem>,
    #[serde(default)]
    pub item6: Vec<BuildItem>,
}

impl BuildData {
    /// True when no section has any item.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.starting.is_empty() && self.core.is_empty() && self.option_rows().iter().all(|row| row.is_empty())
    }

    /// The 4th, 5th and 6th item rows.
    #[must_use]
    pub fn option_rows(&self) -> [&[BuildItem]; 3] {
        [self.item4.as_slice(), self.item5.as_slice(), self.item6.as_slice()]
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BuildItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    /// Win rate in percent, without the `%` sign.
    #[serde(default, deserialize_with = "lenient_string")]
    pub win: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub games: Option<String>,
}

// =============================================================================
// HELPERS
// =============================================================================

/// Accept a string, a number or a bool; map null and `""` to `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
