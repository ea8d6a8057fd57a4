use crate::pages::studio::state::{should_prevent_close, use_studio_state};
use leptos::ev;
use leptos::prelude::*;

/// Asks the browser to confirm before leaving while unsaved recordings exist.
#[component]
pub fn PreventClose() -> impl IntoView {
    let studio = use_studio_state();

    let handle = window_event_listener(ev::beforeunload, move |event| {
        if studio.recordings.with_untracked(|r| should_prevent_close(r)) {
            event.prevent_default();
            event.set_return_value("");
        }
    });

    on_cleanup(move || handle.remove());
}
