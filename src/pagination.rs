//! Paginated-response envelope shared by every list endpoint.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::{self, DeserializeOwned};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::AdapterError;

/// Wire name of the continuation token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenField {
    #[default]
    NextPageToken,
    /// Only used by the call-history sync endpoint.
    SyncToken,
}

impl TokenField {
    pub const fn wire_name(self) -> &'static str {
        match self {
            TokenField::NextPageToken => "next_page_token",
            TokenField::SyncToken => "sync_token",
        }
    }
}

/// Per-endpoint envelope layout for an item type.
pub trait PageItem {
    /// Name of the array holding the records.
    const RECORDS_FIELD: &'static str = "records";
    /// Token name written when encoding. Decoding accepts both names.
    const TOKEN_FIELD: TokenField = TokenField::NextPageToken;
}

impl PageItem for Value {}

/// One page of records plus its page metadata.
///
/// Fields are private so that `more_records_available` can only be derived
/// from the continuation token.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedResponse<T> {
    records: Vec<T>,
    page_size: Option<u32>,
    total_records: Option<u64>,
    next_page_token: String,
    page_count: Option<u32>,
    page_number: Option<u32>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl<T> PaginatedResponse<T> {
    pub fn new(records: Vec<T>, next_page_token: impl Into<String>) -> Self {
        Self {
            records,
            page_size: None,
            total_records: None,
            next_page_token: next_page_token.into(),
            page_count: None,
            page_number: None,
            from: None,
            to: None,
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn with_total_records(mut self, total_records: u64) -> Self {
        self.total_records = Some(total_records);
        self
    }

    pub fn with_page_number(mut self, page_number: u32, page_count: u32) -> Self {
        self.page_number = Some(page_number);
        self.page_count = Some(page_count);
        self
    }

    pub fn with_date_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn into_records(self) -> Vec<T> {
        self.records
    }

    pub fn page_size(&self) -> Option<u32> {
        self.page_size
    }

    /// Server-declared total, or the number of records on this page when the
    /// server leaves it out.
    pub fn total_records(&self) -> u64 {
        self.total_records.unwrap_or(self.records.len() as u64)
    }

    pub fn next_page_token(&self) -> &str {
        &self.next_page_token
    }

    pub fn more_records_available(&self) -> bool {
        !self.next_page_token.is_empty()
    }

    pub fn page_count(&self) -> Option<u32> {
        self.page_count
    }

    pub fn page_number(&self) -> Option<u32> {
        self.page_number
    }

    /// Start of the report window, for endpoints that return one.
    pub fn from_date(&self) -> Option<NaiveDate> {
        self.from
    }

    pub fn to_date(&self) -> Option<NaiveDate> {
        self.to
    }

    /// Request for the following page, or `None` on the last page.
    pub fn next_request(&self) -> Option<PageRequest> {
        if !self.more_records_available() {
            return None;
        }

        Some(PageRequest {
            page_size: self.page_size,
            next_page_token: Some(self.next_page_token.clone()),
        })
    }
}

impl<T: DeserializeOwned> PaginatedResponse<T> {
    /// Decode a page whose records live under `records_field`.
    pub fn from_json(value: Value, records_field: &str) -> Result<Self, AdapterError> {
        let envelope: RawEnvelope = serde_json::from_value(value)?;
        Self::from_raw(envelope, records_field).map_err(AdapterError::from)
    }

    fn from_raw(envelope: RawEnvelope, records_field: &str) -> Result<Self, serde_json::Error> {
        let RawEnvelope {
            page_size,
            total_records,
            next_page_token,
            sync_token,
            page_count,
            page_number,
            from,
            to,
            mut rest,
        } = envelope;

        // A non-empty token wins regardless of which name carried it
        let next_page_token = match (next_page_token, sync_token) {
            (Some(token), _) if !token.is_empty() => token,
            (_, Some(token)) => token,
            (token, None) => token.unwrap_or_default(),
        };

        let records = match rest.remove(records_field) {
            None | Some(Value::Null) => Vec::new(),
            Some(value) => serde_json::from_value(value)?,
        };

        Ok(Self {
            records,
            page_size,
            total_records,
            next_page_token,
            page_count,
            page_number,
            from,
            to,
        })
    }
}

#[derive(Deserialize)]
struct RawEnvelope {
    #[serde(default)]
    page_size: Option<u32>,
    #[serde(default)]
    total_records: Option<u64>,
    #[serde(default)]
    next_page_token: Option<String>,
    #[serde(default)]
    sync_token: Option<String>,
    #[serde(default)]
    page_count: Option<u32>,
    #[serde(default)]
    page_number: Option<u32>,
    #[serde(default, deserialize_with = "lenient_date")]
    from: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_date")]
    to: Option<NaiveDate>,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

/// Report range bounds are informational, so an unreadable one is dropped
/// instead of failing the page. Datetimes keep their calendar date.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(text)) => text,
        Some(other) => {
            warn!("Ignoring non-string report date {}", other);
            return Ok(None);
        }
    };

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let parsed = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(trimmed).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        });

    if parsed.is_none() {
        warn!("Ignoring unreadable report date {:?}", text);
    }
    Ok(parsed)
}

impl<'de, T> Deserialize<'de> for PaginatedResponse<T>
where
    T: DeserializeOwned + PageItem,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let envelope = RawEnvelope::deserialize(deserializer)?;
        Self::from_raw(envelope, T::RECORDS_FIELD).map_err(de::Error::custom)
    }
}

impl<T> Serialize for PaginatedResponse<T>
where
    T: Serialize + PageItem,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        if let Some(page_size) = self.page_size {
            map.serialize_entry("page_size", &page_size)?;
        }
        if let Some(total_records) = self.total_records {
            map.serialize_entry("total_records", &total_records)?;
        }
        if let Some(page_count) = self.page_count {
            map.serialize_entry("page_count", &page_count)?;
        }
        if let Some(page_number) = self.page_number {
            map.serialize_entry("page_number", &page_number)?;
        }
        if let Some(from) = self.from {
            map.serialize_entry("from", &from)?;
        }
        if let Some(to) = self.to {
            map.serialize_entry("to", &to)?;
        }
        map.serialize_entry(T::TOKEN_FIELD.wire_name(), &self.next_page_token)?;
        map.serialize_entry(T::RECORDS_FIELD, &self.records)?;
        map.end()
    }
}

/// Outbound pagination state for a list request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub page_size: Option<u32>,
    pub next_page_token: Option<String>,
}

impl PageRequest {
    pub fn first(page_size: u32) -> Self {
        Self {
            page_size: Some(page_size),
            next_page_token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.next_page_token = Some(token.into());
        self
    }

    /// Query parameters for the transport. Empty tokens are left out.
    pub fn query_pairs(&self, token_field: TokenField) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page_size) = self.page_size {
            pairs.push(("page_size", page_size.to_string()));
        }
        if let Some(token) = self.next_page_token.as_deref().filter(|token| !token.is_empty()) {
            pairs.push((token_field.wire_name(), token.to_string()));
        }
        pairs
    }

    /// Query parameters using the token name of `T`'s endpoint.
    pub fn query_pairs_for<T: PageItem>(&self) -> Vec<(&'static str, String)> {
        self.query_pairs(T::TOKEN_FIELD)
    }
}
