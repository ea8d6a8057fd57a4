//! Студия записи: пошаговый мастер.
//!
//! The active step is owned by the router level and passed in as a signal.
//! The tab strip above the steps only lets the user jump back to a step
//! already passed; moving forward goes through each step's "next" action.

pub mod state;
mod steps;

use crate::shared::components::tabs::{TabDescriptor, TabValue, Tabs};
use crate::shared::i18n::{use_translations, Translations};
use contracts::studio::Settings;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use steps::{FinishStep, RecordingStep, ReviewStep, SourceStep};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    SourceSelection,
    Recording,
    Review,
    Finish,
}

impl Step {
    pub const ALL: [Step; 4] = [
        Step::SourceSelection,
        Step::Recording,
        Step::Review,
        Step::Finish,
    ];

    pub fn index(self) -> usize {
        match self {
            Step::SourceSelection => 0,
            Step::Recording => 1,
            Step::Review => 2,
            Step::Finish => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Step> {
        Self::ALL.get(index).copied()
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Step::SourceSelection => "step-source",
            Step::Recording => "step-record",
            Step::Review => "step-review",
            Step::Finish => "step-finish",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Step::SourceSelection => "desktop",
            Step::Recording => "record",
            Step::Review => "review",
            Step::Finish => "finish",
        }
    }
}

/// Only steps already passed can be reached from the tab strip.
pub fn can_jump(target: usize, current: usize) -> bool {
    target < current
}

/// One descriptor per step, keyed by the step index.
pub fn step_tabs(i18n: &Translations) -> Vec<Option<TabDescriptor>> {
    Step::ALL
        .iter()
        .map(|step| {
            Some(
                TabDescriptor::new(i18n.t(step.label_key()))
                    .value(step.index())
                    .icon(step.icon()),
            )
        })
        .collect()
}

#[component]
pub fn StudioPage(
    #[prop(into)] settings: Signal<Settings>,
    #[prop(into)] active_step: Signal<usize>,
    on_step_change: Callback<usize>,
) -> impl IntoView {
    let i18n = use_translations();
    let tabs = step_tabs(&i18n);
    let selected = Signal::derive(move || TabValue::Index(active_step.get()));

    let on_tab_change = Callback::new(move |(_, value): (MouseEvent, TabValue)| {
        let TabValue::Index(target) = value else {
            return;
        };
        let current = active_step.get_untracked();
        if can_jump(target, current) {
            on_step_change.run(target);
        } else {
            log::debug!("ignored jump from step {} to {}", current, target);
        }
    });

    view! {
        <div class="studio" style="display: flex; flex-direction: column; gap: 12px;">
            <Tabs tabs=tabs value=selected on_change=on_tab_change />
            <div class="studio__body">
                {move || match Step::from_index(active_step.get()) {
                    Some(Step::SourceSelection) => view! {
                        <SourceStep on_step_change=on_step_change />
                    }.into_any(),
                    Some(Step::Recording) => view! {
                        <RecordingStep settings=settings on_step_change=on_step_change />
                    }.into_any(),
                    Some(Step::Review) => view! {
                        <ReviewStep settings=settings on_step_change=on_step_change />
                    }.into_any(),
                    Some(Step::Finish) => view! {
                        <FinishStep settings=settings on_step_change=on_step_change />
                    }.into_any(),
                    None => view! {
                        <div class="studio__placeholder">{i18n.t("unknown-step")}</div>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::components::tabs::resolve_tabs;

    #[test]
    fn test_step_index_roundtrip() {
        for step in Step::ALL {
            assert_eq!(Step::from_index(step.index()), Some(step));
        }
        assert_eq!(Step::from_index(4), None);
    }

    #[test]
    fn test_can_jump_only_backwards() {
        assert!(can_jump(0, 2));
        assert!(can_jump(1, 2));
        assert!(!can_jump(2, 2));
        assert!(!can_jump(3, 2));
    }

    #[test]
    fn test_step_tabs_mark_active_step() {
        let tabs = step_tabs(&Translations::english());
        let resolved = resolve_tabs(&tabs, &TabValue::Index(2));
        let active: Vec<usize> = resolved
            .iter()
            .filter(|t| t.active)
            .map(|t| t.position)
            .collect();
        assert_eq!(active, vec![2]);
        assert_eq!(resolved[0].label, "Select source");
    }

    #[test]
    fn test_out_of_range_step_has_no_active_tab() {
        let tabs = step_tabs(&Translations::english());
        let resolved = resolve_tabs(&tabs, &TabValue::Index(7));
        assert!(resolved.iter().all(|t| !t.active));
    }
}
