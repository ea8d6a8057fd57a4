use crate::shared::i18n::use_translations;
use contracts::studio::Settings;
use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};
use wasm_bindgen::JsValue;

/// Facts about the browser that decide whether capturing can work at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrowserEnv {
    pub secure_context: bool,
    pub media_devices: bool,
}

impl BrowserEnv {
    pub fn detect() -> Self {
        let Some(window) = web_sys::window() else {
            return Self {
                secure_context: false,
                media_devices: false,
            };
        };
        let media_devices =
            js_sys::Reflect::has(&window.navigator(), &JsValue::from_str("mediaDevices"))
                .unwrap_or(false);
        Self {
            secure_context: window.is_secure_context(),
            media_devices,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Warning {
    InsecureContext,
    NoMediaDevices,
    OpencastNotConfigured,
}

impl Warning {
    pub fn message_key(&self) -> &'static str {
        match self {
            Warning::InsecureContext => "warning-insecure-context",
            Warning::NoMediaDevices => "warning-no-media-devices",
            Warning::OpencastNotConfigured => "warning-opencast-not-configured",
        }
    }
}

pub fn collect_warnings(settings: &Settings, env: &BrowserEnv) -> Vec<Warning> {
    let mut warnings = Vec::new();
    if !env.secure_context {
        warnings.push(Warning::InsecureContext);
    }
    if !env.media_devices {
        warnings.push(Warning::NoMediaDevices);
    }
    if !settings.is_opencast_configured() {
        warnings.push(Warning::OpencastNotConfigured);
    }
    warnings
}

#[component]
pub fn Warnings(#[prop(into)] settings: Signal<Settings>) -> impl IntoView {
    let i18n = use_translations();
    let env = BrowserEnv::detect();

    view! {
        <div class="warnings">
            {move || {
                settings
                    .with(|s| collect_warnings(s, &env))
                    .into_iter()
                    .map(|warning| view! {
                        <MessageBar intent=MessageBarIntent::Warning>
                            <span class="warnings__text">{i18n.t(warning.message_key())}</span>
                        </MessageBar>
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::studio::OpencastSettings;

    const OK_ENV: BrowserEnv = BrowserEnv {
        secure_context: true,
        media_devices: true,
    };

    fn configured() -> Settings {
        Settings {
            opencast: OpencastSettings {
                server_url: Some("https://oc.example".into()),
                login_name: Some("admin".into()),
                login_password: Some("opencast".into()),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_no_warnings_when_everything_is_fine() {
        assert!(collect_warnings(&configured(), &OK_ENV).is_empty());
    }

    #[test]
    fn test_warning_order() {
        let env = BrowserEnv {
            secure_context: false,
            media_devices: false,
        };
        assert_eq!(
            collect_warnings(&Settings::default(), &env),
            vec![
                Warning::InsecureContext,
                Warning::NoMediaDevices,
                Warning::OpencastNotConfigured
            ]
        );
    }
}
