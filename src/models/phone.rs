use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pagination::{PageItem, TokenField};

crate::wire_enum! {
    pub enum CallDirection {
        Inbound => "inbound",
        Outbound => "outbound",
        Internal => "internal",
    }
}

crate::wire_enum! {
    /// Outcome of a call. Members without a wire value are sent under their
    /// own name.
    pub enum CallResult {
        Connected => "Call connected" | "Call Connected" | "answered",
        Cancelled => "Call Cancel" | "Call Cancelled" | "cancelled",
        NoAnswer => "No Answer" | "no_answer",
        Voicemail,
        Rejected,
        Blocked,
        Busy,
    }
}

crate::coded_enum! {
    /// Live call state reported as an integer code.
    pub enum PhoneCallStatus {
        fallback Unknown = -1,
        Ringing = 1,
        Connected = 2,
        OnHold = 3,
        Transferring = 4,
        Ended = 5,
    }
}

// One hop of the call as reported under "call_path"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallPathSegment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caller_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caller_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callee_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callee_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<CallResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

// One hop of the call as reported under "call_elements". Overlaps heavily
// with CallPathSegment; the vendor documents both and they are kept apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_element_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<CallDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caller_did_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callee_did_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<CallResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub talk_time: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallLog {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_id: Option<String>,
    pub direction: CallDirection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<CallResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PhoneCallStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caller_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callee_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub call_path: Vec<CallPathSegment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub call_elements: Vec<CallElement>,
}

impl PageItem for CallLog {
    const RECORDS_FIELD: &'static str = "call_logs";
}

// Entry of the call-history sync endpoint, which pages with "sync_token"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallHistoryEntry {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_id: Option<String>,
    pub direction: CallDirection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_result: Option<CallResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caller_did_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callee_did_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub call_elements: Vec<CallElement>,
}

impl PageItem for CallHistoryEntry {
    const RECORDS_FIELD: &'static str = "call_logs";
    const TOKEN_FIELD: TokenField = TokenField::SyncToken;
}
