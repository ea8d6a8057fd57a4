pub mod header;
pub mod prevent_close;
pub mod warnings;

use contracts::studio::Settings;
use header::StudioHeader;
use leptos::prelude::*;
use warnings::Warnings;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |              StudioHeader                |
/// +------------------------------------------+
/// |  Warnings                                |
/// |  <routed page>                           |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(#[prop(into)] settings: Signal<Settings>, children: Children) -> impl IntoView {
    view! {
        <div class="app-layout" style="display: flex; flex-direction: column; height: 100%;">
            <StudioHeader />
            <main
                class="app-main"
                style="flex: 1; display: flex; flex-direction: column; min-height: 285px;"
            >
                <Warnings settings=settings />
                {children()}
            </main>
        </div>
    }
}
