use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What was captured.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RecordingSource {
    Display,
    Camera,
    Both,
}

impl RecordingSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordingSource::Display => "display",
            RecordingSource::Camera => "camera",
            RecordingSource::Both => "both",
        }
    }

    pub fn all() -> [RecordingSource; 3] {
        [
            RecordingSource::Display,
            RecordingSource::Camera,
            RecordingSource::Both,
        ]
    }
}

/// Metadata of a finished recording held in memory until it is saved.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Recording {
    pub id: Uuid,
    pub title: String,
    pub source: RecordingSource,
    pub mime_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Recording {
    pub fn new(source: RecordingSource, mime_type: Option<String>) -> Self {
        let created_at = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: format!("{} {}", source.as_str(), created_at.format("%Y-%m-%d %H:%M")),
            source,
            mime_type,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_recording_has_unique_id() {
        let a = Recording::new(RecordingSource::Camera, None);
        let b = Recording::new(RecordingSource::Camera, None);
        assert_ne!(a.id, b.id);
        assert!(a.title.starts_with("camera "));
    }

    #[test]
    fn test_source_serializes_snake_case() {
        let json = serde_json::to_string(&RecordingSource::Display).unwrap();
        assert_eq!(json, "\"display\"");
    }
}
