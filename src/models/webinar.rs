use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::adapters::numeric_or_string;
use crate::pagination::PageItem;

crate::coded_enum! {
    pub enum WebinarType {
        fallback Unknown = 0,
        Webinar = 5,
        RecurringNoFixedTime = 6,
        RecurringFixedTime = 9,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Webinar {
    pub uuid: String,
    #[serde(deserialize_with = "webinar_id", serialize_with = "numeric_or_string::write")]
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_id: Option<String>,
    pub topic: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub webinar_type: Option<WebinarType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agenda: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_url: Option<String>,
}

impl PageItem for Webinar {
    const RECORDS_FIELD: &'static str = "webinars";
}

fn webinar_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    numeric_or_string::read(deserializer, "id")
}
