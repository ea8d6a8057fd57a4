//! Value-indexed tab strip.
//!
//! The group owns no state: the selected value lives with the caller and
//! activation is derived from `(tabs, value)` on every render by
//! [`resolve_tabs`].
//!
//! A descriptor without an explicit value is identified by its position
//! among the rendered descriptors. That identity shifts whenever a tab is
//! conditionally added or removed, so any tab set that changes between
//! renders should give every tab an explicit value.

use crate::shared::icons;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// Identity of a tab. `Index(0)` and `Key("0")` are different values.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TabValue {
    Index(usize),
    Key(String),
}

impl From<usize> for TabValue {
    fn from(index: usize) -> Self {
        TabValue::Index(index)
    }
}

impl From<&str> for TabValue {
    fn from(key: &str) -> Self {
        TabValue::Key(key.to_string())
    }
}

impl From<String> for TabValue {
    fn from(key: String) -> Self {
        TabValue::Key(key)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TabDescriptor {
    pub value: Option<TabValue>,
    pub label: String,
    pub icon: Option<&'static str>,
}

impl TabDescriptor {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            value: None,
            label: label.into(),
            icon: None,
        }
    }

    pub fn value(mut self, value: impl Into<TabValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn icon(mut self, name: &'static str) -> Self {
        self.icon = Some(name);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedTab {
    /// Position among rendered descriptors
    pub position: usize,
    pub value: TabValue,
    pub active: bool,
    pub label: String,
    pub icon: Option<&'static str>,
}

impl ResolvedTab {
    pub fn bind<E>(&self, on_change: impl Fn(E, TabValue)) -> impl Fn(E) {
        bind_change(self.value.clone(), on_change)
    }
}

/// Handler that reports `value` to `on_change` on every call.
pub fn bind_change<E>(value: TabValue, on_change: impl Fn(E, TabValue)) -> impl Fn(E) {
    move |ev| on_change(ev, value.clone())
}

/// `None` entries are not renderable: they are skipped and take no position.
///
/// Each tab is compared against `selected` on its own, so duplicate values
/// are all marked active.
pub fn resolve_tabs<'a, I>(tabs: I, selected: &TabValue) -> Vec<ResolvedTab>
where
    I: IntoIterator<Item = &'a Option<TabDescriptor>>,
{
    tabs.into_iter()
        .flatten()
        .enumerate()
        .map(|(position, tab)| {
            let value = tab.value.clone().unwrap_or(TabValue::Index(position));
            ResolvedTab {
                position,
                active: &value == selected,
                value,
                label: tab.label.clone(),
                icon: tab.icon,
            }
        })
        .collect()
}

#[component]
pub fn Tabs(
    #[prop(into)] tabs: Signal<Vec<Option<TabDescriptor>>>,
    /// Currently selected value
    #[prop(into)]
    value: Signal<TabValue>,
    #[prop(optional)] on_change: Option<Callback<(MouseEvent, TabValue)>>,
) -> impl IntoView {
    let resolved = move || value.with(|selected| tabs.with(|tabs| resolve_tabs(tabs, selected)));

    view! {
        <div class="tabs" style="display: flex; align-items: stretch; user-select: none; white-space: nowrap;">
            <ul class="tabs__list" role="tablist">
                {move || {
                    resolved()
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <Tab
                                    active=tab.active
                                    label=tab.label
                                    icon=tab.icon
                                    value=tab.value
                                    on_change=on_change
                                />
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

#[component]
pub fn Tab(
    active: bool,
    #[prop(into)] label: String,
    icon: Option<&'static str>,
    value: TabValue,
    on_change: Option<Callback<(MouseEvent, TabValue)>>,
) -> impl IntoView {
    let handle_change = bind_change(value, move |ev: MouseEvent, value: TabValue| {
        if let Some(on_change) = on_change {
            on_change.run((ev, value));
        }
    });

    view! {
        <li class=if active { "tab tab--active" } else { "tab" } role="presentation">
            <button
                type="button"
                class="tab__button"
                role="tab"
                aria-selected=if active { "true" } else { "false" }
                on:click=handle_change
            >
                {icon.map(icons::icon)}
                <span class="tab__label">{label}</span>
            </button>
        </li>
    }
}

/// Renders `children` only while `value == index`.
#[component]
pub fn TabPanel(
    #[prop(into)] value: Signal<TabValue>,
    #[prop(into)] index: TabValue,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || value.with(|v| *v == index)>
            <div class="tab-panel" role="tabpanel" style="padding: 16px;">
                {children()}
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn abc() -> Vec<Option<TabDescriptor>> {
        vec![
            Some(TabDescriptor::new("A")),
            Some(TabDescriptor::new("B").value("custom")),
            Some(TabDescriptor::new("C")),
        ]
    }

    fn active_labels(tabs: &[ResolvedTab]) -> Vec<&str> {
        tabs.iter()
            .filter(|t| t.active)
            .map(|t| t.label.as_str())
            .collect()
    }

    #[test]
    fn test_explicit_value_example() {
        let resolved = resolve_tabs(&abc(), &"custom".into());
        let values: Vec<TabValue> = resolved.iter().map(|t| t.value.clone()).collect();
        assert_eq!(
            values,
            vec![TabValue::Index(0), TabValue::Key("custom".into()), TabValue::Index(2)]
        );
        assert_eq!(active_labels(&resolved), vec!["B"]);
    }

    #[test]
    fn test_exactly_nth_active() {
        let tabs = abc();
        for n in 0..3 {
            let selected = resolve_tabs(&tabs, &TabValue::Index(99))[n].value.clone();
            let resolved = resolve_tabs(&tabs, &selected);
            for tab in &resolved {
                assert_eq!(tab.active, tab.position == n);
            }
        }
    }

    #[test]
    fn test_no_match_means_no_active() {
        let resolved = resolve_tabs(&abc(), &TabValue::Index(7));
        assert_eq!(resolved.len(), 3);
        assert!(active_labels(&resolved).is_empty());
        let empty: Vec<Option<TabDescriptor>> = Vec::new();
        assert!(resolve_tabs(&empty, &TabValue::Index(0)).is_empty());
    }

    #[test]
    fn test_no_coercion_between_index_and_key() {
        let tabs = vec![Some(TabDescriptor::new("A"))];
        assert!(!resolve_tabs(&tabs, &"0".into())[0].active);
        assert!(resolve_tabs(&tabs, &0usize.into())[0].active);
    }

    #[test]
    fn test_skipped_entries_take_no_position() {
        let tabs = vec![
            Some(TabDescriptor::new("A")),
            None,
            Some(TabDescriptor::new("C")),
        ];
        let resolved = resolve_tabs(&tabs, &TabValue::Index(1));
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[1].label, "C");
        assert_eq!(resolved[1].value, TabValue::Index(1));
        assert_eq!(active_labels(&resolved), vec!["C"]);
    }

    #[test]
    fn test_duplicates_checked_independently() {
        let tabs = vec![
            Some(TabDescriptor::new("A").value("x")),
            Some(TabDescriptor::new("B").value("x")),
        ];
        let resolved = resolve_tabs(&tabs, &"x".into());
        assert_eq!(active_labels(&resolved), vec!["A", "B"]);
    }

    #[test]
    fn test_bound_handler_reports_own_value() {
        let calls = RefCell::new(Vec::new());
        let resolved = resolve_tabs(&abc(), &TabValue::Index(0));
        let handlers: Vec<_> = resolved
            .iter()
            .map(|tab| tab.bind(|ev: u32, value| calls.borrow_mut().push((ev, value))))
            .collect();

        handlers[2](1);
        handlers[1](2);
        handlers[1](3);
        assert_eq!(
            *calls.borrow(),
            vec![
                (1, TabValue::Index(2)),
                (2, TabValue::Key("custom".into())),
                (3, TabValue::Key("custom".into())),
            ]
        );
    }

    #[test]
    fn test_descriptor_builder() {
        let tab = TabDescriptor::new("Camera").value(1usize).icon("camera");
        assert_eq!(tab.value, Some(TabValue::Index(1)));
        assert_eq!(tab.icon, Some("camera"));
    }
}
