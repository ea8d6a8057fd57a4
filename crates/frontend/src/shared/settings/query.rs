//! Settings passed in the URL, e.g. `?opencast[serverUrl]=https://oc.example&upload[seriesId]=abc`.

use contracts::studio::Settings;
use web_sys::window;

pub fn settings_from_query(search: &str) -> Result<Settings, String> {
    let query = search.trim_start_matches('?');
    if query.is_empty() {
        return Ok(Settings::default());
    }
    serde_qs::from_str::<Settings>(query).map_err(|e| format!("invalid settings in URL: {}", e))
}

pub fn settings_from_location() -> Settings {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    settings_from_query(&search).unwrap_or_else(|e| {
        log::warn!("{}", e);
        Settings::default()
    })
}

/// `path` followed by the current query string, if any.
pub fn with_query(path: &str, search: &str) -> String {
    let query = search.trim_start_matches('?');
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_is_default() {
        assert_eq!(settings_from_query("").unwrap(), Settings::default());
        assert_eq!(settings_from_query("?").unwrap(), Settings::default());
    }

    #[test]
    fn test_nested_keys() {
        let s = settings_from_query("?upload[seriesId]=abc&recording[videoBitrate]=1500000").unwrap();
        assert_eq!(s.upload.series_id.as_deref(), Some("abc"));
        assert_eq!(s.recording.video_bitrate, Some(1_500_000));
        assert_eq!(s.opencast.server_url, None);
    }

    #[test]
    fn test_unrelated_keys_are_ignored() {
        let s = settings_from_query("utm_source=mail&upload[workflowId]=fast").unwrap();
        assert_eq!(s.upload.workflow_id.as_deref(), Some("fast"));
    }

    #[test]
    fn test_with_query() {
        assert_eq!(with_query("/", ""), "/");
        assert_eq!(with_query("/", "?a=1"), "/?a=1");
        assert_eq!(with_query("/settings", "a=1&b=2"), "/settings?a=1&b=2");
    }
}
