use crate::layout::prevent_close::PreventClose;
use crate::pages::about::AboutPage;
use crate::pages::settings::SettingsPage;
use crate::pages::studio::state::StudioStateProvider;
use crate::pages::studio::StudioPage;
use crate::shared::settings::query::with_query;
use contracts::studio::Settings;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

/// Unknown paths go to the studio, keeping the query string.
#[component]
fn RedirectHome() -> impl IntoView {
    let location = use_location();
    let target = with_query("/", &location.search.get_untracked());
    log::info!(
        "unknown route '{}', redirecting to '{}'",
        location.pathname.get_untracked(),
        target
    );

    view! { <Redirect path=target /> }
}

#[component]
pub fn AppRoutes(#[prop(into)] settings: Signal<Settings>) -> impl IntoView {
    // Survives page switches: leaving for the settings page and coming back keeps the step.
    let active_step = RwSignal::new(0usize);
    let update_active_step = Callback::new(move |step: usize| {
        log::debug!("active step: {} -> {}", active_step.get_untracked(), step);
        active_step.set(step);
    });

    view! {
        <StudioStateProvider>
            <PreventClose />
            <Routes fallback=|| view! { <RedirectHome /> }>
                <Route path=path!("/settings") view=SettingsPage />
                <Route path=path!("/about") view=AboutPage />
                <Route
                    path=path!("/")
                    view=move || view! {
                        <StudioPage
                            settings=settings
                            active_step=active_step
                            on_step_change=update_active_step
                        />
                    }
                />
            </Routes>
        </StudioStateProvider>
    }
}
