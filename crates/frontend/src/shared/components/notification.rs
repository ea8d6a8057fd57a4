use super::transition::Fade;
use crate::shared::timer::{BrowserScheduler, Scheduler};
use leptos::logging::log;
use leptos::prelude::*;

pub const DEFAULT_DISMISS_MS: u32 = 1000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    fn class(&self) -> &'static str {
        match self {
            NotificationKind::Info => "notification notification--info",
            NotificationKind::Success => "notification notification--success",
            NotificationKind::Error => "notification notification--error",
        }
    }
}

/// One-shot deadline measured from creation.
///
/// `on_expire` runs at most once. Dropping the timer first guarantees it never runs.
pub struct DismissTimer<S: Scheduler> {
    pending: Option<S::Handle>,
}

impl<S: Scheduler> DismissTimer<S> {
    pub fn start(scheduler: &S, duration_ms: u32, on_expire: impl FnOnce() + 'static) -> Self {
        Self {
            pending: Some(scheduler.schedule(duration_ms, Box::new(on_expire))),
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[component]
pub fn Notification(
    #[prop(optional)] kind: NotificationKind,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=kind.class() role="status" style="margin: 8px 0;">
            {children()}
        </div>
    }
}

/// Notification that fades out and unmounts itself `duration_ms` after mount.
#[component]
pub fn FadingNotification(
    #[prop(into)] text: String,
    #[prop(default = DEFAULT_DISMISS_MS)] duration_ms: u32,
    #[prop(optional)] kind: NotificationKind,
) -> impl IntoView {
    let visible = RwSignal::new(true);

    let timer = StoredValue::new_local(Some(DismissTimer::start(
        &BrowserScheduler,
        duration_ms,
        move || visible.set(false),
    )));

    log!("🔔 FadingNotification mounted: '{}'", text);
    let text_for_cleanup = text.clone();
    on_cleanup(move || {
        timer.set_value(None);
        log!("🔕 FadingNotification disposed: '{}'", text_for_cleanup);
    });

    let text = StoredValue::new(text);
    view! {
        <Fade show=visible duration_ms=duration_ms unmount_on_exit=true>
            <Notification kind=kind>{text.get_value()}</Notification>
        </Fade>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::components::transition::{TransitionDriver, TransitionPhase};
    use crate::shared::timer::manual::ManualScheduler;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[test]
    fn test_visible_until_deadline_then_exits() {
        let scheduler = ManualScheduler::new();
        let fade = Rc::new(RefCell::new(TransitionDriver::new(
            scheduler.clone(),
            true,
            1000,
            |_| {},
        )));
        let fade_for_timer = Rc::clone(&fade);
        let _timer = DismissTimer::start(&scheduler, 1000, move || {
            fade_for_timer.borrow_mut().drive(false)
        });

        scheduler.advance_to(500);
        assert_eq!(fade.borrow().phase(), TransitionPhase::Entered);

        scheduler.advance_to(1000);
        assert_eq!(fade.borrow().phase(), TransitionPhase::Exiting);

        scheduler.advance_to(2000);
        assert_eq!(fade.borrow().phase(), TransitionPhase::Exited);
    }

    #[test]
    fn test_unmount_before_deadline_is_silent() {
        let scheduler = ManualScheduler::new();
        let mutated = Rc::new(Cell::new(false));
        let flag = Rc::clone(&mutated);
        let timer = DismissTimer::start(&scheduler, 1000, move || flag.set(true));

        scheduler.advance_to(200);
        drop(timer);
        scheduler.advance_to(1000);
        assert!(!mutated.get());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_cancel_keeps_timer_quiet() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);
        let mut timer = DismissTimer::start(&scheduler, 10, move || counter.set(counter.get() + 1));
        timer.cancel();
        scheduler.advance_to(100);
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_zero_duration_dismisses_next_tick() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fired);
        let _timer = DismissTimer::start(&scheduler, 0, move || flag.set(true));
        assert!(!fired.get());
        scheduler.advance_by(0);
        assert!(fired.get());
    }
}
