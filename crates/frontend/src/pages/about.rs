use crate::shared::components::page_header::PageHeader;
use crate::shared::components::transition::FadeInLeft;
use crate::shared::i18n::use_translations;
use leptos::prelude::*;
use thaw::Card;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[component]
pub fn AboutPage() -> impl IntoView {
    let i18n = use_translations();
    let shown = RwSignal::new(false);
    // Start hidden so the card slides in on first paint.
    Effect::new(move |_| shown.set(true));

    view! {
        <div class="about-page" style="max-width: 560px;">
            <PageHeader title=i18n.t("about-title") subtitle=format!("v{}", VERSION) />
            <FadeInLeft show=shown>
                <Card>
                    <p>{i18n.t("about-text")}</p>
                    <p>{i18n.t("about-privacy")}</p>
                </Card>
            </FadeInLeft>
        </div>
    }
}
