use leptos::prelude::*;

/// Page title row with an optional action on the right.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    /// Rendered at the right edge, e.g. a "back to studio" link
    #[prop(optional, into)]
    action: Option<ViewFn>,
) -> impl IntoView {
    view! {
        <header
            class="page-header"
            style="display: flex; align-items: center; justify-content: space-between;"
        >
            <div class="page-header__text">
                <h1 class="page-header__title">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <div class="page-header__subtitle">{s}</div>
                })}
            </div>
            {action.map(|action| view! {
                <div class="page-header__actions">{action.run()}</div>
            })}
        </header>
    }
}
