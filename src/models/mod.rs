//! Typed models for the vendor's JSON resources.
//!
//! Models are plain data. Detail types embed their summary type with
//! `#[serde(flatten)]` instead of extending it, and every field the vendor
//! may leave out is an `Option`.

pub mod meeting;
pub mod phone;
pub mod recording;
pub mod registrant;
pub mod room;
pub mod ticket;
pub mod webinar;

pub use meeting::{Meeting, MeetingStatus, MeetingSummary, MeetingType};
pub use phone::{
    CallDirection, CallElement, CallHistoryEntry, CallLog, CallPathSegment, CallResult,
    PhoneCallStatus,
};
pub use recording::{Recording, RecordingFile, RecordingFileType, RecordingStatus, RecordingType};
pub use registrant::{Registrant, RegistrantStatus};
pub use room::{DeviceStatus, DeviceTestStatus, RoomDevice, RoomDeviceType};
pub use ticket::EventTicket;
pub use webinar::{Webinar, WebinarType};
