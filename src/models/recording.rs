use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::adapters::numeric_or_string;
use crate::pagination::PageItem;

crate::wire_enum! {
    /// View layout of a recording file.
    ///
    /// The closed-caption variant is sent with either casing of its suffix.
    pub enum RecordingType {
        SharedScreenWithSpeakerViewCc => "shared_screen_with_speaker_view(CC)" | "shared_screen_with_speaker_view(cc)",
        SharedScreenWithSpeakerView => "shared_screen_with_speaker_view",
        SharedScreenWithGalleryView => "shared_screen_with_gallery_view",
        SpeakerView => "speaker_view",
        GalleryView => "gallery_view",
        SharedScreen => "shared_screen",
        ActiveSpeaker => "active_speaker",
        AudioOnly => "audio_only",
        AudioTranscript => "audio_transcript",
        ChatFile => "chat_file",
        Timeline => "timeline",
        ClosedCaption => "closed_caption",
    }
}

crate::wire_enum! {
    pub enum RecordingFileType {
        Mp4 => "MP4",
        M4a => "M4A",
        Timeline => "TIMELINE",
        Transcript => "TRANSCRIPT",
        Chat => "CHAT",
        ClosedCaption => "CC",
        Csv => "CSV",
        Summary => "SUMMARY",
    }
}

crate::wire_enum! {
    pub enum RecordingStatus {
        Completed => "completed",
        Processing => "processing",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordingFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recording_start: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recording_end: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<RecordingFileType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recording_type: Option<RecordingType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RecordingStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_url: Option<String>,
}

// Cloud recording of one meeting instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    pub uuid: String,
    #[serde(deserialize_with = "recording_meeting_id", serialize_with = "numeric_or_string::write")]
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_id: Option<String>,
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recording_count: Option<u32>,
    #[serde(default)]
    pub recording_files: Vec<RecordingFile>,
}

// The recordings list endpoint keeps the records under "meetings"
impl PageItem for Recording {
    const RECORDS_FIELD: &'static str = "meetings";
}

fn recording_meeting_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    numeric_or_string::read(deserializer, "id")
}
