//! Label lookup. Components treat it as an opaque `key -> text` function.

use leptos::prelude::*;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static EN: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("back-button-label", "Back"),
        ("next-button-label", "Next"),
        ("nav-studio", "Studio"),
        ("nav-settings", "Settings"),
        ("nav-about", "About"),
        ("step-source", "Select source"),
        ("step-record", "Record"),
        ("step-review", "Review"),
        ("step-finish", "Finish"),
        ("source-display", "Display"),
        ("source-camera", "Camera"),
        ("source-both", "Display & camera"),
        ("source-display-hint", "Share a screen, a window or a browser tab."),
        ("source-camera-hint", "Record yourself with the webcam."),
        ("source-both-hint", "Screen and camera side by side."),
        ("source-prompt", "What do you want to record?"),
        ("record-prompt", "Recording"),
        ("record-finish", "Finish recording"),
        ("record-count", "Recordings"),
        ("review-prompt", "Review your recordings"),
        ("review-empty", "Nothing recorded yet."),
        ("review-upload-target", "Upload target"),
        ("review-not-configured", "Opencast is not configured."),
        ("finish-save", "Save recordings"),
        ("finish-upload", "Upload to Opencast"),
        ("finish-saved", "Recordings saved"),
        ("finish-start-over", "Start a new recording"),
        ("finish-return", "Return"),
        ("unknown-step", "This step does not exist."),
        ("warning-insecure-context", "Studio is not served over HTTPS. Capturing will not work."),
        ("warning-no-media-devices", "This browser cannot access cameras or screens."),
        ("warning-opencast-not-configured", "Opencast is not configured. Uploading is disabled."),
        ("settings-title", "Settings"),
        ("settings-server-url", "Opencast server URL"),
        ("settings-login-name", "Username"),
        ("settings-login-password", "Password"),
        ("settings-series-id", "Series ID"),
        ("settings-workflow-id", "Workflow ID"),
        ("settings-mime-type", "Preferred MIME type"),
        ("settings-video-bitrate", "Video bitrate (bit/s)"),
        ("settings-save", "Save"),
        ("settings-saved", "Settings saved"),
        ("settings-back", "Back to studio"),
        ("about-title", "About"),
        (
            "about-text",
            "A web-based recording studio: capture your screen and camera and upload the result to Opencast.",
        ),
        ("about-privacy", "Recordings stay in this browser until you save or upload them."),
    ])
});

#[derive(Clone, Copy)]
pub struct Translations {
    table: &'static Lazy<HashMap<&'static str, &'static str>>,
}

impl Translations {
    pub fn english() -> Self {
        Self { table: &EN }
    }

    /// Unknown keys come back unchanged.
    pub fn t(&self, key: &str) -> String {
        self.table
            .get(key)
            .map(|text| text.to_string())
            .unwrap_or_else(|| key.to_string())
    }
}

impl Default for Translations {
    fn default() -> Self {
        Self::english()
    }
}

pub fn use_translations() -> Translations {
    use_context::<Translations>().unwrap_or_default()
}
