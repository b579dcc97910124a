use serde::{Deserialize, Deserializer, Serialize};

use crate::adapters::custom_questions::{self, CustomQuestionAnswer};
use crate::adapters::numeric_or_string;
use crate::pagination::PageItem;

// Ticket issued for a ticketed event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventTicket {
    #[serde(rename = "ticket_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_type_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "ticket_price",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(
        rename = "ticket_questions",
        default,
        with = "custom_questions::ticket",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub custom_questions: Vec<CustomQuestionAnswer>,
}

impl PageItem for EventTicket {
    const RECORDS_FIELD: &'static str = "tickets";
}

fn ticket_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    numeric_or_string::read_optional(deserializer, "price")
}
