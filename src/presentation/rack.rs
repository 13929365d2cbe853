use crate::model::responses::{QuotaResponse, RawRackItem};
use crate::model::utils::try_parse_rack_date;
use crate::presentation::user::User;
use chrono::{DateTime, FixedOffset};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Storage quota of the rack
#[derive(Debug, Clone, Copy, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct RackStorage {
    /// Bytes used
    pub used: u64,
    /// Bytes allowed
    pub limit: u64,
}

impl RackStorage {
    /// Percentage of the quota in use, 0 when the limit is unknown
    #[must_use]
    pub fn usage(&self) -> f64 {
        if self.limit == 0 {
            return 0.0;
        }
        self.used as f64 / self.limit as f64 * 100.0
    }
}

impl From<QuotaResponse> for RackStorage {
    fn from(raw: QuotaResponse) -> Self {
        Self {
            used: raw.quota.unwrap_or_default(),
            limit: raw.storage.unwrap_or_default(),
        }
    }
}

/// Stored file of a rack deposit
#[derive(Debug, Clone, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct RackFile {
    /// Absolute download URL
    pub url: String,
    /// MIME type
    pub content_type: Option<String>,
    /// Size in bytes
    pub size: Option<u64>,
    /// Text charset
    pub charset: Option<String>,
}

/// File deposited in someone's rack
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct RackItem {
    /// Deposit id
    pub id: String,
    /// File name
    pub name: Option<String>,
    /// Deposit date
    pub date: Option<DateTime<FixedOffset>>,
    /// Who deposited it
    pub sender: User,
    /// Whose rack it is in
    pub receiver: User,
    /// Stored file
    pub file: RackFile,
}

impl RackItem {
    /// Builds a deposit; file URLs are resolved against `base_url`
    pub fn from_raw(raw: RawRackItem, base_url: &str) -> Self {
        let metadata = raw.metadata.unwrap_or_default();
        let file_id = raw.file.as_deref().unwrap_or("unknown");

        Self {
            id: raw.id,
            name: raw.name,
            date: raw.sent.as_deref().and_then(try_parse_rack_date),
            sender: User::named(raw.from.unwrap_or_default(), raw.from_name),
            receiver: User::named(raw.to.unwrap_or_default(), raw.to_name),
            file: RackFile {
                url: format!("{}/rack/get/{file_id}", base_url.trim_end_matches('/')),
                content_type: metadata.content_type,
                size: metadata.size,
                charset: metadata.charset,
            },
        }
    }
}
