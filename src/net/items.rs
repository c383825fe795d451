//! Item metadata from the public Data Dragon dataset.
//!
//! Fetched once at startup, independently of the poll loops. A failed fetch
//! leaves the catalog empty, which only suppresses tooltips.

#[cfg(test)]
#[path = "items_test.rs"]
mod items_test;

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use serde::Deserialize;

use super::backend::HttpTimeouts;
use super::types::FetchError;

pub const DDRAGON_CDN: &str = "https://ddragon.leagueoflegends.com/cdn";
pub const DEFAULT_DDRAGON_VERSION: &str = "16.1.1";
pub const DEFAULT_DDRAGON_LOCALE: &str = "ko_KR";

static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("valid regex"));
static MARKUP_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));

#[must_use]
pub fn item_data_url(version: &str, locale: &str) -> String {
    format!("{DDRAGON_CDN}/{version}/data/{locale}/item.json")
}

#[must_use]
pub fn item_icon_url(version: &str, item_id: &str) -> String {
    format!("{DDRAGON_CDN}/{version}/img/item/{item_id}.png")
}

// =============================================================================
// CATALOG
// =============================================================================

/// Display metadata for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemInfo {
    pub name: String,
    pub gold_total: u32,
    /// Plain text; line breaks preserved, markup removed.
    pub description: String,
}

/// Item metadata keyed by item id.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: HashMap<String, Arc<ItemInfo>>,
}

impl ItemCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, info: ItemInfo) {
        self.items.insert(id.into(), Arc::new(info));
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Arc<ItemInfo>> {
        self.items.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Deserialize)]
struct ItemDataset {
    data: HashMap<String, RawItem>,
}

#[derive(Deserialize)]
struct RawItem {
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    gold: RawGold,
}

#[derive(Deserialize, Default)]
struct RawGold {
    #[serde(default)]
    total: u32,
}

// =============================================================================
// FETCH / PARSE
// =============================================================================

/// Download and parse the item dataset.
///
/// # Errors
///
/// Returns a [`FetchError`] if the request fails, the status is not 2xx, or
/// the body is not a Data Dragon item file.
pub async fn fetch_catalog(url: &str, timeouts: HttpTimeouts) -> Result<ItemCatalog, FetchError> {
    let http = reqwest::Client::builder()
        .timeout(timeouts.request)
        .connect_timeout(timeouts.connect)
        .build()
        .map_err(|e| FetchError::HttpClientBuild(e.to_string()))?;

    let response = http.get(url).send().await.map_err(|e| FetchError::Request(e.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status { status: status.as_u16() });
    }
    let text = response.text().await.map_err(|e| FetchError::Request(e.to_string()))?;
    parse_catalog(&text)
}

/// Parse a Data Dragon `item.json` body.
///
/// # Errors
///
/// Returns [`FetchError::Parse`] if the body has no `data` map.
pub fn parse_catalog(text: &str) -> Result<ItemCatalog, FetchError> {
    let dataset: ItemDataset = serde_json::from_str(text).map_err(|e| FetchError::Parse(e.to_string()))?;
    let items = dataset
        .data
        .into_iter()
        .map(|(id, raw)| {
            let info =
                ItemInfo { name: raw.name, gold_total: raw.gold.total, description: clean_description(&raw.description) };
            (id, Arc::new(info))
        })
        .collect();
    Ok(ItemCatalog { items })
}

/// Turn `<br>` variants into newlines and drop every other tag.
#[must_use]
pub fn clean_description(raw: &str) -> String {
    let with_breaks = LINE_BREAK.replace_all(raw, "\n");
    MARKUP_TAG.replace_all(&with_breaks, "").into_owned()
}
