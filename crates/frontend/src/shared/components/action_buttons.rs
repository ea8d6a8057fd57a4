//! Step navigation strips: "back" / "next" slots around a centred content slot.
//!
//! Both components are stateless: every click goes straight to the
//! caller-supplied callback. Disabled actions are swallowed by [`Button`],
//! the strip itself adds no guard.

use super::ui::button::Button;
use crate::shared::i18n::use_translations;
use crate::shared::icons::icon;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct StepAction {
    pub on_click: Callback<MouseEvent>,
    pub disabled: Signal<bool>,
}

impl StepAction {
    pub fn new(on_click: impl Fn(MouseEvent) + Send + Sync + 'static) -> Self {
        Self {
            on_click: Callback::new(on_click),
            disabled: Signal::stored(false),
        }
    }

    pub fn disabled(mut self, disabled: impl Into<Signal<bool>>) -> Self {
        self.disabled = disabled.into();
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled.get_untracked()
    }
}

const SIDE_SLOT: &str = "flex: 1 1 0;";

#[component]
pub fn ActionButtons(
    #[prop(optional)] prev: Option<StepAction>,
    #[prop(optional)] next: Option<StepAction>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let i18n = use_translations();

    view! {
        <div class="action-buttons" style="display: flex; align-items: center; margin-top: 8px;">
            <div class="action-buttons__prev" style=format!("{SIDE_SLOT} text-align: left;")>
                {prev.map(|action| view! {
                    <Button
                        class="action-buttons__button"
                        disabled=action.disabled
                        on_click=action.on_click
                    >
                        {icon("caret-left")}
                        {i18n.t("back-button-label")}
                    </Button>
                })}
            </div>
            <div class="action-buttons__center">{children.map(|children| children())}</div>
            <div class="action-buttons__next" style=format!("{SIDE_SLOT} text-align: right;")>
                {next.map(|action| view! {
                    <Button
                        class="action-buttons__button"
                        disabled=action.disabled
                        on_click=action.on_click
                    >
                        {i18n.t("next-button-label")}
                        {icon("caret-right")}
                    </Button>
                })}
            </div>
        </div>
    }
}

/// Prompt strip with fixed-width side slots and an `h3` in the middle.
#[component]
pub fn PromptAndProceed(
    #[prop(optional, into)] prev: Option<ViewFn>,
    #[prop(optional, into)] next: Option<ViewFn>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div
            class="prompt-and-proceed"
            style="display: flex; height: 50px; align-items: center; justify-content: space-between;"
        >
            <div style="min-width: 100px;">{prev.map(|prev| prev.run())}</div>
            {match children {
                Some(children) => view! { <h3 class="prompt-and-proceed__title">{children()}</h3> }.into_any(),
                None => view! { <div></div> }.into_any(),
            }}
            <div style="min-width: 100px;">{next.map(|next| next.run())}</div>
        </div>
    }
}
