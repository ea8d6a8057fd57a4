//! Settings snapshot for the studio.
//!
//! Every field is optional: a snapshot is assembled from several layers
//! (built-in defaults, values stored in the browser, URL query) with
//! [`Settings::merge`], where a later layer overrides an earlier one field
//! by field.

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct OpencastSettings {
    pub server_url: Option<String>,
    pub login_name: Option<String>,
    pub login_password: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct UploadSettings {
    pub series_id: Option<String>,
    pub workflow_id: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct RecordingSettings {
    pub mime_type: Option<String>,
    /// Bits per second
    pub video_bitrate: Option<u32>,
}

/// Where to send the user once the recording has been uploaded.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ReturnSettings {
    pub target: Option<String>,
    pub label: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub opencast: OpencastSettings,
    pub upload: UploadSettings,
    pub recording: RecordingSettings,
    #[serde(rename = "return")]
    pub return_target: ReturnSettings,
}

fn pick<T>(base: Option<T>, over: Option<T>) -> Option<T> {
    over.or(base)
}

impl Settings {
    /// Overlay `other` on top of `self`. Fields set in `other` win.
    pub fn merge(self, other: Settings) -> Settings {
        Settings {
            opencast: OpencastSettings {
                server_url: pick(self.opencast.server_url, other.opencast.server_url),
                login_name: pick(self.opencast.login_name, other.opencast.login_name),
                login_password: pick(self.opencast.login_password, other.opencast.login_password),
            },
            upload: UploadSettings {
                series_id: pick(self.upload.series_id, other.upload.series_id),
                workflow_id: pick(self.upload.workflow_id, other.upload.workflow_id),
            },
            recording: RecordingSettings {
                mime_type: pick(self.recording.mime_type, other.recording.mime_type),
                video_bitrate: pick(self.recording.video_bitrate, other.recording.video_bitrate),
            },
            return_target: ReturnSettings {
                target: pick(self.return_target.target, other.return_target.target),
                label: pick(self.return_target.label, other.return_target.label),
            },
        }
    }

    /// True when enough is known to upload to an Opencast instance.
    pub fn is_opencast_configured(&self) -> bool {
        let filled = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        filled(&self.opencast.server_url)
            && filled(&self.opencast.login_name)
            && filled(&self.opencast.login_password)
    }

    /// Copy safe to log: the password is masked.
    pub fn redacted(&self) -> Settings {
        let mut copy = self.clone();
        if copy.opencast.login_password.is_some() {
            copy.opencast.login_password = Some("***".to_string());
        }
        copy
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Settings> {
        serde_json::from_str(raw).context("invalid settings JSON")
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string(self).context("failed to serialize settings")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_server(url: &str) -> Settings {
        Settings {
            opencast: OpencastSettings {
                server_url: Some(url.to_string()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_merge_later_layer_wins() {
        let base = with_server("https://a.example");
        let over = with_server("https://b.example");
        let merged = base.merge(over);
        assert_eq!(
            merged.opencast.server_url.as_deref(),
            Some("https://b.example")
        );
    }

    #[test]
    fn test_merge_keeps_unset_fields() {
        let mut base = with_server("https://a.example");
        base.upload.series_id = Some("series-1".to_string());
        let mut over = Settings::default();
        over.recording.video_bitrate = Some(2_000_000);

        let merged = base.merge(over);
        assert_eq!(merged.opencast.server_url.as_deref(), Some("https://a.example"));
        assert_eq!(merged.upload.series_id.as_deref(), Some("series-1"));
        assert_eq!(merged.recording.video_bitrate, Some(2_000_000));
    }

    #[test]
    fn test_is_opencast_configured() {
        let mut s = with_server("https://a.example");
        assert!(!s.is_opencast_configured());
        s.opencast.login_name = Some("admin".to_string());
        s.opencast.login_password = Some("  ".to_string());
        assert!(!s.is_opencast_configured());
        s.opencast.login_password = Some("secret".to_string());
        assert!(s.is_opencast_configured());
    }

    #[test]
    fn test_redacted_masks_password() {
        let mut s = with_server("https://a.example");
        assert_eq!(s.redacted(), s);
        s.opencast.login_password = Some("secret".to_string());
        let redacted = s.redacted();
        assert_eq!(redacted.opencast.login_password.as_deref(), Some("***"));
        assert_eq!(redacted.opencast.server_url, s.opencast.server_url);
    }

    #[test]
    fn test_json_roundtrip_uses_camel_case() {
        let mut s = with_server("https://a.example");
        s.return_target.label = Some("LMS".to_string());
        let json = s.to_json().unwrap();
        assert!(json.contains("\"serverUrl\""));
        assert!(json.contains("\"return\""));
        assert_eq!(Settings::from_json(&json).unwrap(), s);
    }

    #[test]
    fn test_from_json_partial_and_invalid() {
        let s = Settings::from_json(r#"{"upload":{"workflowId":"fast"}}"#).unwrap();
        assert_eq!(s.upload.workflow_id.as_deref(), Some("fast"));
        assert_eq!(s.opencast, OpencastSettings::default());

        assert!(Settings::from_json("not json").is_err());
    }
}
