use super::state::use_studio_state;
use super::Step;
use crate::shared::components::action_buttons::{ActionButtons, PromptAndProceed, StepAction};
use crate::shared::components::notification::{FadingNotification, NotificationKind};
use crate::shared::components::split_pane::SplitPane;
use crate::shared::components::tabs::{TabDescriptor, TabPanel, TabValue, Tabs};
use crate::shared::components::transition::FadeInLeft;
use crate::shared::components::ui::{Button, ButtonVariant, ShareButton};
use crate::shared::i18n::use_translations;
use crate::shared::icons::icon;
use contracts::studio::{Recording, RecordingSource, Settings};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

pub fn source_label_key(source: RecordingSource) -> &'static str {
    match source {
        RecordingSource::Display => "source-display",
        RecordingSource::Camera => "source-camera",
        RecordingSource::Both => "source-both",
    }
}

fn source_hint_key(source: RecordingSource) -> &'static str {
    match source {
        RecordingSource::Display => "source-display-hint",
        RecordingSource::Camera => "source-camera-hint",
        RecordingSource::Both => "source-both-hint",
    }
}

fn source_icon(source: RecordingSource) -> &'static str {
    match source {
        RecordingSource::Display => "desktop",
        RecordingSource::Camera => "camera",
        RecordingSource::Both => "both",
    }
}

/// Tab value of a source. Source tabs carry no explicit value, so this is
/// their position in [`RecordingSource::all`].
pub fn source_tab_value(source: Option<RecordingSource>) -> TabValue {
    source
        .and_then(|s| RecordingSource::all().iter().position(|candidate| *candidate == s))
        .map(TabValue::Index)
        .unwrap_or_else(|| TabValue::Key(String::new()))
}

pub fn source_from_tab_value(value: &TabValue) -> Option<RecordingSource> {
    match value {
        TabValue::Index(i) => RecordingSource::all().get(*i).copied(),
        TabValue::Key(_) => None,
    }
}

/// "2.5 Mbit/s", "800 kbit/s" or an empty string when unset.
pub fn format_bitrate(bits_per_second: Option<u32>) -> String {
    match bits_per_second {
        None => String::new(),
        Some(bps) if bps >= 1_000_000 => {
            let mbit = f64::from(bps) / 1_000_000.0;
            let text = format!("{:.1}", mbit);
            format!("{} Mbit/s", text.trim_end_matches(".0"))
        }
        Some(bps) => format!("{} kbit/s", bps / 1000),
    }
}

/// Return links are only followed for http(s) or same-origin targets.
/// `//host/path` is protocol-relative and leaves the origin.
pub fn safe_return_target(target: Option<&str>) -> Option<&str> {
    target.map(str::trim).filter(|t| {
        t.starts_with("https://")
            || t.starts_with("http://")
            || (t.starts_with('/') && !t.starts_with("//"))
    })
}

#[component]
pub fn SourceStep(on_step_change: Callback<usize>) -> impl IntoView {
    let i18n = use_translations();
    let studio = use_studio_state();

    let tabs: Vec<Option<TabDescriptor>> = RecordingSource::all()
        .iter()
        .map(|source| {
            Some(TabDescriptor::new(i18n.t(source_label_key(*source))).icon(source_icon(*source)))
        })
        .collect();
    let selected = Signal::derive(move || source_tab_value(studio.source.get()));
    let on_change = Callback::new(move |(_, value): (MouseEvent, TabValue)| {
        if let Some(source) = source_from_tab_value(&value) {
            studio.select_source(source);
        }
    });

    let next = StepAction::new(move |_| on_step_change.run(Step::Recording.index()))
        .disabled(Signal::derive(move || studio.source.get().is_none()));

    view! {
        <div class="studio-step studio-step--source">
            <h2>{i18n.t("source-prompt")}</h2>
            <Tabs tabs=tabs value=selected on_change=on_change />
            {RecordingSource::all()
                .into_iter()
                .enumerate()
                .map(|(position, source)| view! {
                    <TabPanel value=selected index=position>
                        <p class="studio-step__hint">{i18n.t(source_hint_key(source))}</p>
                    </TabPanel>
                })
                .collect_view()}
            <ActionButtons next=next />
        </div>
    }
}

#[component]
pub fn RecordingStep(
    #[prop(into)] settings: Signal<Settings>,
    on_step_change: Callback<usize>,
) -> impl IntoView {
    let i18n = use_translations();
    let studio = use_studio_state();

    let finish = Callback::new(move |_: MouseEvent| {
        let Some(source) = studio.source.get_untracked() else {
            return;
        };
        let mime_type = settings.with_untracked(|s| s.recording.mime_type.clone());
        studio.add_recording(Recording::new(source, mime_type));
        on_step_change.run(Step::Review.index());
    });

    let has_recordings = Signal::derive(move || studio.recordings.with(|r| !r.is_empty()));
    let prev = StepAction::new(move |_| on_step_change.run(Step::SourceSelection.index()));
    let next = StepAction::new(move |_| on_step_change.run(Step::Review.index()))
        .disabled(Signal::derive(move || !has_recordings.get()));

    let source_label = move || {
        studio
            .source
            .get()
            .map(|s| i18n.t(source_label_key(s)))
            .unwrap_or_default()
    };
    let bitrate = move || format_bitrate(settings.with(|s| s.recording.video_bitrate));

    view! {
        <div class="studio-step studio-step--record">
            <h2>{i18n.t("record-prompt")}</h2>
            <p class="studio-step__meta">{source_label} " " {bitrate}</p>
            <FadeInLeft show=has_recordings>
                <div class="studio-step__count">
                    {move || format!("{}: {}", i18n.t("record-count"), studio.recordings.with(Vec::len))}
                </div>
            </FadeInLeft>
            <ActionButtons prev=prev next=next>
                <Button
                    variant=ButtonVariant::Primary
                    disabled=Signal::derive(move || studio.source.get().is_none())
                    on_click=finish
                >
                    {icon("record")}
                    {i18n.t("record-finish")}
                </Button>
            </ActionButtons>
        </div>
    }
}

#[component]
pub fn ReviewStep(
    #[prop(into)] settings: Signal<Settings>,
    on_step_change: Callback<usize>,
) -> impl IntoView {
    let i18n = use_translations();
    let studio = use_studio_state();

    let go_back = Callback::new(move |_: MouseEvent| on_step_change.run(Step::Recording.index()));
    let go_next = Callback::new(move |_: MouseEvent| on_step_change.run(Step::Finish.index()));
    let nothing_recorded = Signal::derive(move || studio.recordings.with(Vec::is_empty));

    let recordings = move || {
        view! {
            <ul class="review__list">
                <For
                    each=move || studio.recordings.get()
                    key=|recording| recording.id
                    children=move |recording: Recording| {
                        let mime = recording.mime_type.clone().unwrap_or_default();
                        view! {
                            <li class="review__item">
                                <span class="review__title">{recording.title}</span>
                                " "
                                <span class="review__time">
                                    {recording.created_at.format("%H:%M:%S").to_string()}
                                </span>
                                " "
                                <span class="review__mime">{mime}</span>
                            </li>
                        }
                    }
                />
            </ul>
            <Show when=move || nothing_recorded.get()>
                <p class="review__empty">{i18n.t("review-empty")}</p>
            </Show>
        }
    };

    let upload_target = move || {
        let s = settings.get();
        let body = if s.is_opencast_configured() {
            let series = s.upload.series_id.clone().unwrap_or_default();
            let workflow = s.upload.workflow_id.clone().unwrap_or_default();
            view! {
                <dl class="review__target">
                    <dt>"URL"</dt><dd>{s.opencast.server_url.clone().unwrap_or_default()}</dd>
                    <dt>"Series"</dt><dd>{series}</dd>
                    <dt>"Workflow"</dt><dd>{workflow}</dd>
                </dl>
            }
            .into_any()
        } else {
            view! { <p>{i18n.t("review-not-configured")}</p> }.into_any()
        };
        view! {
            <h4>{i18n.t("review-upload-target")}</h4>
            {body}
        }
    };

    view! {
        <div class="studio-step studio-step--review">
            <PromptAndProceed
                prev=move || view! {
                    <Button variant=ButtonVariant::Text on_click=go_back>
                        {icon("caret-left")}
                        {i18n.t("back-button-label")}
                    </Button>
                }
                next=move || view! {
                    <Button disabled=Signal::derive(move || nothing_recorded.get()) on_click=go_next>
                        {i18n.t("next-button-label")}
                        {icon("caret-right")}
                    </Button>
                }
            >
                {i18n.t("review-prompt")}
            </PromptAndProceed>
            <SplitPane left=recordings right=upload_target />
        </div>
    }
}

#[component]
pub fn FinishStep(
    #[prop(into)] settings: Signal<Settings>,
    on_step_change: Callback<usize>,
) -> impl IntoView {
    let i18n = use_translations();
    let studio = use_studio_state();
    let saved_count = RwSignal::new(0u32);

    let save = Callback::new(move |_: MouseEvent| {
        let count = studio.recordings.with_untracked(Vec::len);
        log::info!("saving {} recording(s)", count);
        saved_count.update(|n| *n += 1);
    });

    let start_over = Callback::new(move |_: MouseEvent| {
        studio.reset();
        on_step_change.run(Step::SourceSelection.index());
    });

    let prev = StepAction::new(move |_| on_step_change.run(Step::Review.index()));

    let return_link = move || {
        settings.with(|s| {
            safe_return_target(s.return_target.target.as_deref()).map(|target| {
                let label = s
                    .return_target
                    .label
                    .clone()
                    .unwrap_or_else(|| i18n.t("finish-return"));
                view! { <a class="finish__return" href=target.to_string()>{label}</a> }
            })
        })
    };

    view! {
        <div class="studio-step studio-step--finish">
            <h2>{i18n.t("step-finish")}</h2>
            <ShareButton
                icon_name="save"
                disabled=Signal::derive(move || studio.recordings.with(Vec::is_empty))
                on_click=save
            >
                {i18n.t("finish-save")}
            </ShareButton>
            // Every save remounts the notification and restarts its timer.
            {move || {
                (saved_count.get() > 0).then(|| view! {
                    <FadingNotification text=i18n.t("finish-saved") kind=NotificationKind::Success />
                })
            }}
            {return_link}
            <ActionButtons prev=prev>
                <Button variant=ButtonVariant::Secondary on_click=start_over>
                    {i18n.t("finish-start-over")}
                </Button>
            </ActionButtons>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::components::tabs::resolve_tabs;

    #[test]
    fn test_no_source_selects_no_tab() {
        let tabs: Vec<Option<TabDescriptor>> = RecordingSource::all()
            .iter()
            .map(|s| Some(TabDescriptor::new(s.as_str())))
            .collect();
        let resolved = resolve_tabs(&tabs, &source_tab_value(None));
        assert!(resolved.iter().all(|t| !t.active));

        let resolved = resolve_tabs(&tabs, &source_tab_value(Some(RecordingSource::Camera)));
        assert!(resolved[1].active);
        assert_eq!(source_from_tab_value(&resolved[1].value), Some(RecordingSource::Camera));
    }

    #[test]
    fn test_source_from_key_is_none() {
        assert_eq!(source_from_tab_value(&TabValue::Key("1".into())), None);
        assert_eq!(source_from_tab_value(&TabValue::Index(9)), None);
    }

    #[test]
    fn test_format_bitrate() {
        assert_eq!(format_bitrate(None), "");
        assert_eq!(format_bitrate(Some(2_500_000)), "2.5 Mbit/s");
        assert_eq!(format_bitrate(Some(2_000_000)), "2 Mbit/s");
        assert_eq!(format_bitrate(Some(800_000)), "800 kbit/s");
    }

    #[test]
    fn test_safe_return_target() {
        assert_eq!(
            safe_return_target(Some(" https://lms.example/course ")),
            Some("https://lms.example/course")
        );
        assert_eq!(safe_return_target(Some("/home")), Some("/home"));
        assert_eq!(safe_return_target(Some("javascript:alert(1)")), None);
        assert_eq!(safe_return_target(Some("//evil.example")), None);
        assert_eq!(safe_return_target(Some(" //evil.example/path")), None);
        assert_eq!(safe_return_target(None), None);
    }
}
