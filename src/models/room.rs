use serde::{Deserialize, Serialize};

use crate::pagination::PageItem;

crate::wire_enum! {
    pub enum RoomDeviceType {
        RoomsComputer => "Rooms Computer",
        Controller,
        SchedulingDisplay => "Scheduling Display",
        ControlSystem => "Rooms Control System",
    }
}

crate::wire_enum! {
    pub enum DeviceStatus {
        Online => "Online" | "online",
        Offline => "Offline" | "offline",
    }
}

crate::coded_enum! {
    /// Result of the last device self-test.
    pub enum DeviceTestStatus {
        fallback NotAvailable = 0,
        Passed = 1,
        Failed = 2,
        InProgress = 3,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomDevice {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,
    pub device_type: RoomDeviceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_system: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DeviceStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_test_status: Option<DeviceTestStatus>,
}

impl PageItem for RoomDevice {
    const RECORDS_FIELD: &'static str = "devices";
}
