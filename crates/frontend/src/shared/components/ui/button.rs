use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Text,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button--primary",
            ButtonVariant::Secondary => "button--secondary",
            ButtonVariant::Text => "button--text",
        }
    }
}

/// Run `handler` with `ev` unless the control is disabled. Returns whether it ran.
pub fn dispatch_click<E>(disabled: bool, ev: E, handler: impl FnOnce(E)) -> bool {
    if disabled {
        return false;
    }
    handler(ev);
    true
}

/// Button with variants. A disabled button never calls `on_click`.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let is_disabled = move || disabled.get().unwrap_or(false);
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <button
            type="button"
            class=move || format!("button {} {}", variant.class(), additional_class())
            disabled=is_disabled
            on:click=move |ev| {
                dispatch_click(is_disabled(), ev, |ev| {
                    if let Some(handler) = on_click {
                        handler.run(ev);
                    }
                });
            }
        >
            {children()}
        </button>
    }
}

/// Icon + label button for the save/upload actions.
#[component]
pub fn ShareButton(
    icon_name: &'static str,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    on_click: Callback<leptos::ev::MouseEvent>,
    children: Children,
) -> impl IntoView {
    view! {
        <Button class="share-button" disabled=disabled on_click=on_click>
            {icon(icon_name)}
            {children()}
        </Button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_disabled_click_is_swallowed() {
        let calls = Cell::new(0);
        assert!(!dispatch_click(true, (), |_| calls.set(calls.get() + 1)));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_enabled_click_runs_once() {
        let calls = Cell::new(0);
        assert!(dispatch_click(false, 7, |v| calls.set(calls.get() + v)));
        assert_eq!(calls.get(), 7);
    }
}
