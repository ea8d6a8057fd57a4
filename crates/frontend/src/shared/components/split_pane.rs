use leptos::prelude::*;

/// Number of grid columns for the panes that are present.
pub fn column_count(left: bool, right: bool) -> usize {
    usize::from(left) + usize::from(right)
}

/// One- or two-column grid. A missing side takes no column.
#[component]
pub fn SplitPane(
    #[prop(optional, into)] left: Option<ViewFn>,
    #[prop(optional, into)] right: Option<ViewFn>,
    #[prop(default = 16)] gap_px: u32,
) -> impl IntoView {
    let columns = column_count(left.is_some(), right.is_some()).max(1);
    let style = format!(
        "display: grid; grid-template-columns: repeat({}, minmax(0, 1fr)); gap: {}px; min-height: 0;",
        columns, gap_px
    );

    view! {
        <div class="split-pane" style=style>
            {left.map(|left| view! { <div style="min-height: 0;">{left.run()}</div> })}
            {right.map(|right| view! { <div style="min-height: 0;">{right.run()}</div> })}
        </div>
    }
}
