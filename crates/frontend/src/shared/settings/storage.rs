use contracts::studio::Settings;
use web_sys::window;

const SETTINGS_STORAGE_KEY: &str = "studio-settings";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Settings the user saved on the settings page. Missing or broken data yields defaults.
pub fn load_settings() -> Settings {
    let raw = get_local_storage().and_then(|storage| storage.get_item(SETTINGS_STORAGE_KEY).ok()?);
    match raw {
        Some(raw) => Settings::from_json(&raw).unwrap_or_else(|e| {
            log::warn!("ignoring stored settings: {:#}", e);
            Settings::default()
        }),
        None => Settings::default(),
    }
}

pub fn save_settings(settings: &Settings) -> Result<(), String> {
    let storage = get_local_storage().ok_or_else(|| "localStorage is not available".to_string())?;
    let json = settings.to_json().map_err(|e| format!("{:#}", e))?;
    storage
        .set_item(SETTINGS_STORAGE_KEY, &json)
        .map_err(|e| format!("failed to write settings: {:?}", e))
}
