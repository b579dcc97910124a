use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::adapters::numeric_or_string;
use crate::pagination::PageItem;

crate::coded_enum! {
    /// Meeting type as an integer code.
    pub enum MeetingType {
        fallback Unknown = 0,
        Instant = 1,
        Scheduled = 2,
        RecurringNoFixedTime = 3,
        Personal = 4,
        PersonalAudioConference = 7,
        RecurringFixedTime = 8,
    }
}

crate::wire_enum! {
    pub enum MeetingStatus {
        Waiting => "waiting",
        Started => "started",
        Finished => "finished" | "ended",
    }
}

// Meeting as returned by list endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingSummary {
    pub uuid: String,
    #[serde(deserialize_with = "meeting_id", serialize_with = "numeric_or_string::write")]
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_id: Option<String>,
    pub topic: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub meeting_type: Option<MeetingType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_url: Option<String>,
}

impl PageItem for MeetingSummary {
    const RECORDS_FIELD: &'static str = "meetings";
}

// Full meeting details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    #[serde(flatten)]
    pub summary: MeetingSummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MeetingStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agenda: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_url: Option<String>,
}

fn meeting_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    numeric_or_string::read(deserializer, "id")
}
