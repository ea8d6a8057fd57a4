use contracts::studio::{Recording, RecordingSource};
use leptos::prelude::*;

/// Studio workflow state shared by the studio page and the unload guard.
#[derive(Clone, Copy)]
pub struct StudioState {
    pub source: RwSignal<Option<RecordingSource>>,
    pub recordings: RwSignal<Vec<Recording>>,
}

impl StudioState {
    pub fn new() -> Self {
        Self {
            source: RwSignal::new(None),
            recordings: RwSignal::new(Vec::new()),
        }
    }

    pub fn select_source(&self, source: RecordingSource) {
        log::debug!("source selected: {}", source.as_str());
        self.source.set(Some(source));
    }

    pub fn add_recording(&self, recording: Recording) {
        log::info!("recording finished: {} ({})", recording.title, recording.id);
        self.recordings.update(|list| list.push(recording));
    }

    pub fn reset(&self) {
        self.source.set(None);
        self.recordings.set(Vec::new());
    }
}

impl Default for StudioState {
    fn default() -> Self {
        Self::new()
    }
}

/// Leaving the page would lose these recordings.
pub fn should_prevent_close(recordings: &[Recording]) -> bool {
    !recordings.is_empty()
}

#[component]
pub fn StudioStateProvider(children: Children) -> impl IntoView {
    provide_context(StudioState::new());
    children()
}

/// Hook to use the studio state.
pub fn use_studio_state() -> StudioState {
    use_context::<StudioState>().expect("StudioState not found. Wrap with StudioStateProvider.")
}
