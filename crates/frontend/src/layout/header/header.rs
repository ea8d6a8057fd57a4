use crate::shared::i18n::use_translations;
use crate::shared::icons::icon;
use crate::shared::settings::query::with_query;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

/// Top bar with the studio brand and navigation.
///
/// Links keep the current query string so settings passed in the URL survive navigation.
#[component]
pub fn StudioHeader() -> impl IntoView {
    let i18n = use_translations();
    let search = use_location().search;
    let href = move |path: &'static str| move || with_query(path, &search.get());

    view! {
        <header data-zone="header" class="header" style="display: flex; align-items: center; justify-content: space-between;">
            <div class="header__content">
                <A href=href("/")>
                    <span class="header__title">"Studio"</span>
                </A>
            </div>
            <nav class="header__actions">
                <A href=href("/")>{icon("record")}<span>{i18n.t("nav-studio")}</span></A>
                <A href=href("/settings")>{icon("settings")}<span>{i18n.t("nav-settings")}</span></A>
                <A href=href("/about")>{icon("info")}<span>{i18n.t("nav-about")}</span></A>
            </nav>
        </header>
    }
}
