use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::adapters::custom_questions::{self, CustomQuestionAnswer};
use crate::pagination::PageItem;

crate::wire_enum! {
    /// Approval state of a meeting or webinar registrant.
    pub enum RegistrantStatus {
        Approved => "approved",
        Pending => "pending",
        Denied => "denied" | "rejected",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registrant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub email: String,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RegistrantStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_url: Option<String>,
    #[serde(
        default,
        with = "custom_questions::registration",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub custom_questions: Vec<CustomQuestionAnswer>,
}

impl PageItem for Registrant {
    const RECORDS_FIELD: &'static str = "registrants";
}
