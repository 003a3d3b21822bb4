//! Store records and their display normalization.
//!
//! Normalization is a pure function of the raw fields and the current time
//! of day, so applying it twice gives the same record as applying it once.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use time::{OffsetDateTime, Time};

use crate::config::ImageConfig;

/// A store as listed or shown in detail.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<u32>,
    /// Opening time, `HH:MM`.
    #[serde(default)]
    pub open_time: Option<String>,
    /// Closing time, `HH:MM`.
    #[serde(default)]
    pub close_time: Option<String>,
    /// Raw storage URL from the backend; a display URL after normalization.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub store_like_count: Option<u64>,
    #[serde(default)]
    pub district_category: Option<String>,
    /// Owner summary, sent by the backend as `userOneResponseDto`.
    #[serde(default, rename = "userOneResponseDto", alias = "user")]
    pub user: Option<Value>,
    /// Distance from the consumer, only on the consumer list.
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub is_open: bool,
    #[serde(default)]
    pub like_count: u64,
    /// Backend fields this client does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Store {
    /// Derive display fields from raw fields.
    #[must_use]
    pub fn normalized(mut self, now: Time, images: &ImageConfig) -> Self {
        self.rating = Some(self.rating.unwrap_or(0.0));
        self.review_count = Some(self.review_count.unwrap_or(0));
        self.is_open = is_store_open(self.open_time.as_deref(), self.close_time.as_deref(), now);
        self.image = Some(convert_image_url(self.image.as_deref(), images));
        self.district_category = self.district_category.filter(|d| !d.is_empty());
        self.like_count = self.store_like_count.unwrap_or(0);
        self
    }

    #[must_use]
    pub fn rating(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    #[must_use]
    pub fn review_count(&self) -> u32 {
        self.review_count.unwrap_or(0)
    }
}

/// Whether `now` falls within `[open, close]`, both inclusive.
///
/// Missing or unparsable times mean closed. Hours that wrap past midnight
/// (`close < open`) never count as open.
#[must_use]
pub fn is_store_open(open_time: Option<&str>, close_time: Option<&str>, now: Time) -> bool {
    let (Some(open), Some(close)) = (open_time.and_then(minutes_of_day), close_time.and_then(minutes_of_day)) else {
        return false;
    };
    let current = u32::from(now.hour()) * 60 + u32::from(now.minute());
    current >= open && current <= close
}

fn minutes_of_day(raw: &str) -> Option<u32> {
    let (hour, rest) = raw.trim().split_once(':')?;
    let minute = rest.split(':').next().unwrap_or(rest);
    match (hour.trim().parse::<u32>(), minute.trim().parse::<u32>()) {
        (Ok(h), Ok(m)) => h.checked_mul(60)?.checked_add(m),
        _ => None,
    }
}

/// Rewrite a bucket URL onto the CDN, keeping the object key.
///
/// Empty input yields the placeholder; any other URL is returned as is.
#[must_use]
pub fn convert_image_url(raw: Option<&str>, images: &ImageConfig) -> String {
    let Some(url) = raw.filter(|u| !u.is_empty()) else {
        return images.placeholder.clone();
    };
    if url.contains(&images.bucket_marker) {
        if let Some((_, key)) = url.split_once(".com/") {
            return format!("{}/{key}", images.cdn_base);
        }
    }
    url.to_owned()
}

/// Current wall-clock time of day, local when the offset is known.
#[must_use]
pub fn local_time_of_day() -> Time {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .time()
}

/// Body of a store create/update request.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreInput {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine_category: Option<String>,
}

/// Category filters for store search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(default)]
    pub district_categories: Vec<String>,
    #[serde(default)]
    pub cuisine_categories: Vec<String>,
}
