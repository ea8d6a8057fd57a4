//! Settings provider.
//!
//! [`SettingsManager`] merges the settings layers (defaults < saved by the
//! user < URL query) and notifies subscribers with the new snapshot whenever
//! the saved layer changes. Components below the shell only ever see
//! immutable [`Settings`] snapshots.

pub mod query;
pub mod storage;

use contracts::studio::{RecordingSettings, Settings};
use leptos::prelude::*;

pub fn default_settings() -> Settings {
    Settings {
        recording: RecordingSettings {
            mime_type: None,
            video_bitrate: Some(2_500_000),
        },
        ..Default::default()
    }
}

pub struct SettingsManager {
    defaults: Settings,
    saved: Settings,
    from_url: Settings,
    listeners: Vec<Box<dyn Fn(&Settings)>>,
}

impl SettingsManager {
    pub fn new(defaults: Settings, saved: Settings, from_url: Settings) -> Self {
        Self {
            defaults,
            saved,
            from_url,
            listeners: Vec::new(),
        }
    }

    /// Reads the saved layer from localStorage and the URL layer from the current location.
    pub fn load() -> Self {
        Self::new(
            default_settings(),
            storage::load_settings(),
            query::settings_from_location(),
        )
    }

    /// Current merged snapshot.
    pub fn settings(&self) -> Settings {
        self.defaults
            .clone()
            .merge(self.saved.clone())
            .merge(self.from_url.clone())
    }

    /// The layer edited on the settings page.
    pub fn saved(&self) -> &Settings {
        &self.saved
    }

    pub fn subscribe(&mut self, listener: impl Fn(&Settings) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Replace the saved layer and notify subscribers with the new snapshot.
    pub fn update(&mut self, saved: Settings) -> Settings {
        self.saved = saved;
        let snapshot = self.settings();
        for listener in &self.listeners {
            listener(&snapshot);
        }
        snapshot
    }
}

/// Settings context type.
#[derive(Clone, Copy)]
pub struct SettingsContext {
    /// Latest snapshot, updated by the manager subscription
    pub settings: ReadSignal<Settings>,
    manager: StoredValue<SettingsManager, LocalStorage>,
}

impl SettingsContext {
    pub fn new(mut manager: SettingsManager) -> Self {
        let (settings, set_settings) = signal(manager.settings());
        manager.subscribe(move |snapshot| set_settings.set(snapshot.clone()));
        Self {
            settings,
            manager: StoredValue::new_local(manager),
        }
    }

    pub fn saved(&self) -> Settings {
        self.manager.with_value(|manager| manager.saved().clone())
    }

    /// Persist `saved` and publish the new snapshot.
    pub fn save(&self, saved: Settings) -> Result<(), String> {
        storage::save_settings(&saved)?;
        self.manager.update_value(|manager| {
            manager.update(saved);
        });
        Ok(())
    }
}

/// Hook to use the settings context.
pub fn use_settings() -> SettingsContext {
    use_context::<SettingsContext>().expect("SettingsContext not found. Provide it in App.")
}
