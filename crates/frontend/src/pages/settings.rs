use crate::shared::components::notification::{FadingNotification, Notification, NotificationKind};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, ButtonVariant};
use crate::shared::i18n::use_translations;
use crate::shared::settings::query::with_query;
use crate::shared::settings::use_settings;
use contracts::studio::Settings;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use thaw::{Card, Flex, FlexGap, Input, InputType, Label};

/// Raw text of the settings form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    pub server_url: String,
    pub login_name: String,
    pub login_password: String,
    pub series_id: String,
    pub workflow_id: String,
    pub mime_type: String,
    pub video_bitrate: String,
}

impl FormValues {
    pub fn from_settings(s: &Settings) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            server_url: text(&s.opencast.server_url),
            login_name: text(&s.opencast.login_name),
            login_password: text(&s.opencast.login_password),
            series_id: text(&s.upload.series_id),
            workflow_id: text(&s.upload.workflow_id),
            mime_type: text(&s.recording.mime_type),
            video_bitrate: s
                .recording
                .video_bitrate
                .map(|b| b.to_string())
                .unwrap_or_default(),
        }
    }

    /// Apply the form on top of `base`. Fields the form does not show
    /// (the return target) are kept from `base`.
    pub fn apply(&self, base: Settings) -> Result<Settings, String> {
        let mut s = base;
        s.opencast.server_url = non_empty(&self.server_url);
        s.opencast.login_name = non_empty(&self.login_name);
        s.opencast.login_password = non_empty(&self.login_password);
        s.upload.series_id = non_empty(&self.series_id);
        s.upload.workflow_id = non_empty(&self.workflow_id);
        s.recording.mime_type = non_empty(&self.mime_type);
        s.recording.video_bitrate = parse_bitrate(&self.video_bitrate)?;
        Ok(s)
    }
}

/// Blank input means "not set".
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub fn parse_bitrate(value: &str) -> Result<Option<u32>, String> {
    match non_empty(value) {
        None => Ok(None),
        Some(raw) => match raw.parse::<u32>() {
            Ok(0) => Err("Video bitrate must be greater than zero".to_string()),
            Ok(bps) => Ok(Some(bps)),
            Err(_) => Err(format!("Invalid video bitrate: {}", raw)),
        },
    }
}

/// Link back to the studio. Settings passed in the URL stay in effect.
pub fn back_href(search: &str) -> String {
    with_query("/", search)
}

#[derive(Clone, Copy)]
struct FormSignals {
    server_url: RwSignal<String>,
    login_name: RwSignal<String>,
    login_password: RwSignal<String>,
    series_id: RwSignal<String>,
    workflow_id: RwSignal<String>,
    mime_type: RwSignal<String>,
    video_bitrate: RwSignal<String>,
}

impl FormSignals {
    fn new(values: FormValues) -> Self {
        Self {
            server_url: RwSignal::new(values.server_url),
            login_name: RwSignal::new(values.login_name),
            login_password: RwSignal::new(values.login_password),
            series_id: RwSignal::new(values.series_id),
            workflow_id: RwSignal::new(values.workflow_id),
            mime_type: RwSignal::new(values.mime_type),
            video_bitrate: RwSignal::new(values.video_bitrate),
        }
    }

    fn values(&self) -> FormValues {
        FormValues {
            server_url: self.server_url.get_untracked(),
            login_name: self.login_name.get_untracked(),
            login_password: self.login_password.get_untracked(),
            series_id: self.series_id.get_untracked(),
            workflow_id: self.workflow_id.get_untracked(),
            mime_type: self.mime_type.get_untracked(),
            video_bitrate: self.video_bitrate.get_untracked(),
        }
    }
}

#[component]
fn Field(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional)] password: bool,
) -> impl IntoView {
    let input_type = if password { InputType::Password } else { InputType::Text };
    view! {
        <Flex vertical=true gap=FlexGap::Small>
            <Label>{label}</Label>
            <Input value=value input_type=input_type />
        </Flex>
    }
}

/// Редактирование сохранённых настроек.
///
/// Only the layer stored in the browser is edited here. Values coming from
/// the URL query still override it in the merged snapshot.
#[component]
pub fn SettingsPage() -> impl IntoView {
    let i18n = use_translations();
    let ctx = use_settings();
    let search = use_location().search;
    let form = FormSignals::new(FormValues::from_settings(&ctx.saved()));

    let (error, set_error) = signal(None::<String>);
    let saved_count = RwSignal::new(0u32);

    let on_save = Callback::new(move |_: MouseEvent| {
        let result = form.values().apply(ctx.saved()).and_then(|s| ctx.save(s));
        match result {
            Ok(()) => {
                log::info!("settings saved");
                set_error.set(None);
                saved_count.update(|n| *n += 1);
            }
            Err(e) => {
                log::error!("failed to save settings: {}", e);
                set_error.set(Some(e));
            }
        }
    });

    view! {
        <div class="settings-page" style="display: flex; flex-direction: column; gap: 12px; max-width: 560px;">
            <PageHeader
                title=i18n.t("settings-title")
                action=move || view! {
                    <A href=move || back_href(&search.get())>{i18n.t("settings-back")}</A>
                }
            />
            <Card>
                <Flex vertical=true gap=FlexGap::Large>
                    <Field label=i18n.t("settings-server-url") value=form.server_url />
                    <Field label=i18n.t("settings-login-name") value=form.login_name />
                    <Field label=i18n.t("settings-login-password") value=form.login_password password=true />
                    <Field label=i18n.t("settings-series-id") value=form.series_id />
                    <Field label=i18n.t("settings-workflow-id") value=form.workflow_id />
                    <Field label=i18n.t("settings-mime-type") value=form.mime_type />
                    <Field label=i18n.t("settings-video-bitrate") value=form.video_bitrate />
                </Flex>
            </Card>
            <div style="display: flex; align-items: center; gap: 12px;">
                <Button variant=ButtonVariant::Primary on_click=on_save>
                    {i18n.t("settings-save")}
                </Button>
                {move || {
                    (saved_count.get() > 0).then(|| view! {
                        <FadingNotification text=i18n.t("settings-saved") kind=NotificationKind::Success />
                    })
                }}
            </div>
            {move || error.get().map(|e| view! {
                <Notification kind=NotificationKind::Error>{e}</Notification>
            })}
        </div>
    }
}
