use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

/// Install a test-writer subscriber so adapter warnings show up in test output
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A meeting detail payload with a string-encoded id
pub fn meeting_payload() -> Value {
    json!({
        "uuid": "aDYlohsHRtCd4ii1uC2+hA==",
        "id": "85746065432",
        "host_id": "KDcuGIm1QgePTO8WbOqwIQ",
        "topic": "Quarterly planning",
        "type": 2,
        "status": "waiting",
        "start_time": "2035-03-30T01:00:00Z",
        "duration": 60,
        "timezone": "Pacific/Auckland",
        "created_at": "2035-03-01T22:15:00Z",
        "join_url": "https://example.com/j/85746065432",
        "agenda": "Roadmap review",
        "password": "123456"
    })
}

/// A registrant with registration-shaped custom questions
pub fn registrant_payload() -> Value {
    json!({
        "id": "9tboDiHUQAeOnbmudzWa5g",
        "email": "jill.chill@example.com",
        "first_name": "Jill",
        "last_name": "Chill",
        "status": "approved",
        "create_time": "2035-03-02T09:30:00Z",
        "custom_questions": [
            {"title": "Company", "value": "Initech"},
            {"title": "Role", "value": "Engineer"}
        ]
    })
}

/// An event ticket with a string price and ticket-shaped questions
pub fn ticket_payload() -> Value {
    json!({
        "ticket_id": "tk_01",
        "ticket_type_id": "early_bird",
        "event_id": "evt_42",
        "email": "sam@example.com",
        "first_name": "Sam",
        "price": "49.50",
        "currency": "USD",
        "ticket_questions": [
            {"question": "T-shirt size", "answer": "L"},
            {"question": "Dietary needs"}
        ]
    })
}

/// A page of call logs using the generic token name
pub fn call_log_page(token: &str) -> Value {
    json!({
        "page_size": 30,
        "total_records": 2,
        "next_page_token": token,
        "from": "2035-03-01",
        "to": "2035-03-31",
        "call_logs": [
            {
                "id": "log_1",
                "call_id": "7010000000001",
                "direction": "inbound",
                "result": "Call connected",
                "status": 5,
                "caller_number": "+6495550100",
                "callee_number": "1001",
                "date_time": "2035-03-03T03:00:00Z",
                "duration": 125,
                "call_path": [
                    {"id": "p1", "caller_number": "+6495550100", "callee_number": "1001", "result": "Call Connected"}
                ],
                "call_elements": [
                    {"call_element_id": "e1", "call_id": "7010000000001", "direction": "inbound", "result": "answered", "talk_time": 120}
                ]
            },
            {
                "id": "log_2",
                "direction": "outbound",
                "result": "Voicemail",
                "status": 99
            }
        ]
    })
}

/// A page of the call-history sync endpoint
pub fn call_history_page(sync_token: &str) -> Value {
    json!({
        "page_size": 30,
        "sync_token": sync_token,
        "call_logs": [
            {
                "id": "hist_1",
                "direction": "internal",
                "call_result": "No Answer",
                "start_time": "2035-03-04T10:00:00Z",
                "end_time": "2035-03-04T10:00:30Z",
                "duration": 30
            }
        ]
    })
}

/// A generic page of numbered records
pub fn numbered_page(start: u64, count: u64, token: &str) -> Value {
    let records: Vec<Value> = (start..start + count).map(|n| json!({ "n": n })).collect();
    json!({
        "page_size": count,
        "next_page_token": token,
        "records": records
    })
}
