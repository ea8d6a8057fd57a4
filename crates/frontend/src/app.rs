use crate::layout::Shell;
use crate::routes::routes::AppRoutes;
use crate::shared::i18n::Translations;
use crate::shared::settings::{SettingsContext, SettingsManager};
use leptos::prelude::*;
use leptos_router::components::Router;

/// Path prefix the studio is served under, e.g. `/studio`.
/// Read at build time from `STUDIO_BASE_PATH`; unset or `/` means the site root.
pub fn router_base(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with('/') {
        Some(trimmed.to_string())
    } else {
        Some(format!("/{}", trimmed))
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(Translations::english());

    // Settings snapshot is replaced on every manager notification.
    let settings_ctx = SettingsContext::new(SettingsManager::load());
    provide_context(settings_ctx);
    let settings = settings_ctx.settings;

    Effect::new(move |_| {
        log::debug!("Current settings: {:?}", settings.get().redacted());
    });

    let body = move || {
        view! {
            <Shell settings=settings>
                <AppRoutes settings=settings />
            </Shell>
        }
    };

    match router_base(option_env!("STUDIO_BASE_PATH")) {
        Some(base) => {
            log::info!("router base: {}", base);
            view! { <Router base=base>{body()}</Router> }.into_any()
        }
        None => view! { <Router>{body()}</Router> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_base() {
        assert_eq!(router_base(None), None);
        assert_eq!(router_base(Some("")), None);
        assert_eq!(router_base(Some("/")), None);
        assert_eq!(router_base(Some("/studio/")), Some("/studio".to_string()));
        assert_eq!(router_base(Some("studio")), Some("/studio".to_string()));
    }
}
