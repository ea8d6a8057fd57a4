//! Transition — четыре фазы видимости поверх булевого флага `show`.
//!
//! `Exited --show--> Entering --duration--> Entered --hide--> Exiting --duration--> Exited`
//!
//! `Entered` and `Exited` are rest states. `Entering`/`Exiting` are always
//! left by a scheduled callback after `duration_ms`; flipping `show` again in
//! the meantime replaces that callback, so the last-applied duration wins.
//!
//! # Пример
//! ```rust,ignore
//! <Fade show=visible duration_ms=300 unmount_on_exit=true>
//!     <p>"Контент"</p>
//! </Fade>
//! ```

use crate::shared::timer::{BrowserScheduler, Scheduler};
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

pub const FADE_DURATION_MS: u32 = 300;
pub const FADE_IN_LEFT_DURATION_MS: u32 = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    Entering,
    Entered,
    Exiting,
    Exited,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::Entering => "entering",
            TransitionPhase::Entered => "entered",
            TransitionPhase::Exiting => "exiting",
            TransitionPhase::Exited => "exited",
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, TransitionPhase::Entered | TransitionPhase::Exited)
    }
}

/// Whether the wrapped subtree is part of the render tree in `phase`.
pub fn is_mounted(phase: TransitionPhase, unmount_on_exit: bool) -> bool {
    !(unmount_on_exit && phase == TransitionPhase::Exited)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseMachine {
    phase: TransitionPhase,
}

impl PhaseMachine {
    pub fn new(shown: bool) -> Self {
        let phase = if shown {
            TransitionPhase::Entered
        } else {
            TransitionPhase::Exited
        };
        Self { phase }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// Apply a new `show` input. Returns `true` when a timed transition started.
    pub fn toggle(&mut self, shown: bool) -> bool {
        use TransitionPhase::*;
        let next = match (self.phase, shown) {
            (Exited | Exiting, true) => Entering,
            (Entered | Entering, false) => Exiting,
            _ => return false,
        };
        self.phase = next;
        true
    }

    pub fn settle(&mut self) {
        self.phase = match self.phase {
            TransitionPhase::Entering => TransitionPhase::Entered,
            TransitionPhase::Exiting => TransitionPhase::Exited,
            settled => settled,
        };
    }
}

/// Inline style per phase. Fixed for the lifetime of a component instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseStyles {
    /// CSS property list animated by `transition`
    pub property: &'static str,
    pub entering: &'static str,
    pub entered: &'static str,
    pub exiting: &'static str,
    pub exited: &'static str,
}

impl PhaseStyles {
    pub const FADE: PhaseStyles = PhaseStyles {
        property: "opacity",
        entering: "opacity: 1;",
        entered: "opacity: 1;",
        exiting: "opacity: 0.5;",
        exited: "opacity: 0.5;",
    };

    pub const FADE_IN_LEFT: PhaseStyles = PhaseStyles {
        property: "all",
        entering: "opacity: 1; transform: translate3d(-150%, 0, 0);",
        entered: "opacity: 1; transform: translate3d(0, 0, 0);",
        exiting: "opacity: 0.01; transform: translate3d(-150%, 0, 0);",
        exited: "opacity: 0.01; transform: translate3d(0, 0, 0);",
    };

    pub fn snapshot(&self, phase: TransitionPhase) -> &'static str {
        match phase {
            TransitionPhase::Entering => self.entering,
            TransitionPhase::Entered => self.entered,
            TransitionPhase::Exiting => self.exiting,
            TransitionPhase::Exited => self.exited,
        }
    }

    pub fn style(&self, phase: TransitionPhase, duration_ms: u32) -> String {
        format!(
            "transition: {} {}ms ease-in-out; {}",
            self.property,
            duration_ms,
            self.snapshot(phase)
        )
    }
}

/// Runs a [`PhaseMachine`] against a scheduler.
///
/// `on_phase` is called with every phase the machine enters. At most one
/// settle callback is pending; dropping the driver cancels it.
pub struct TransitionDriver<S: Scheduler> {
    machine: Rc<RefCell<PhaseMachine>>,
    scheduler: S,
    duration_ms: u32,
    on_phase: Rc<dyn Fn(TransitionPhase)>,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> TransitionDriver<S> {
    pub fn new(
        scheduler: S,
        shown: bool,
        duration_ms: u32,
        on_phase: impl Fn(TransitionPhase) + 'static,
    ) -> Self {
        Self {
            machine: Rc::new(RefCell::new(PhaseMachine::new(shown))),
            scheduler,
            duration_ms,
            on_phase: Rc::new(on_phase),
            pending: None,
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.machine.borrow().phase()
    }

    pub fn drive(&mut self, shown: bool) {
        let phase = {
            let mut machine = self.machine.borrow_mut();
            if !machine.toggle(shown) {
                return;
            }
            machine.phase()
        };
        (self.on_phase)(phase);

        let machine = Rc::clone(&self.machine);
        let on_phase = Rc::clone(&self.on_phase);
        let settle = Box::new(move || {
            let settled = {
                let mut machine = machine.borrow_mut();
                machine.settle();
                machine.phase()
            };
            on_phase(settled);
        });
        // Assigning drops the previous handle, cancelling its deadline.
        self.pending = Some(self.scheduler.schedule(self.duration_ms, settle));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// Wraps `children` and exposes the current [`TransitionPhase`] through
/// `data-phase` and the inline style taken from `styles`.
#[component]
pub fn Transition(
    /// Visibility input
    #[prop(into)]
    show: Signal<bool>,
    #[prop(default = FADE_DURATION_MS)]
    duration_ms: u32,
    /// Remove the subtree once `Exited` is reached
    #[prop(optional)]
    unmount_on_exit: bool,
    #[prop(default = PhaseStyles::FADE)]
    styles: PhaseStyles,
    children: ChildrenFn,
) -> impl IntoView {
    let initially_shown = show.get_untracked();
    let phase = RwSignal::new(PhaseMachine::new(initially_shown).phase());

    let driver = StoredValue::new_local(Some(TransitionDriver::new(
        BrowserScheduler,
        initially_shown,
        duration_ms,
        move |next| phase.set(next),
    )));

    Effect::new(move |_| {
        let shown = show.get();
        driver.update_value(|driver| {
            if let Some(driver) = driver.as_mut() {
                driver.drive(shown);
            }
        });
    });

    on_cleanup(move || driver.set_value(None));

    view! {
        <Show when=move || is_mounted(phase.get(), unmount_on_exit)>
            <div
                class="transition"
                data-phase=move || phase.get().as_str()
                style=move || styles.style(phase.get(), duration_ms)
            >
                {children()}
            </div>
        </Show>
    }
}

#[component]
pub fn Fade(
    #[prop(into)] show: Signal<bool>,
    #[prop(default = FADE_DURATION_MS)] duration_ms: u32,
    #[prop(optional)] unmount_on_exit: bool,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Transition
            show=show
            duration_ms=duration_ms
            unmount_on_exit=unmount_on_exit
            styles=PhaseStyles::FADE
        >
            {children()}
        </Transition>
    }
}

#[component]
pub fn FadeInLeft(
    #[prop(into)] show: Signal<bool>,
    #[prop(default = FADE_IN_LEFT_DURATION_MS)] duration_ms: u32,
    #[prop(optional)] unmount_on_exit: bool,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Transition
            show=show
            duration_ms=duration_ms
            unmount_on_exit=unmount_on_exit
            styles=PhaseStyles::FADE_IN_LEFT
        >
            {children()}
        </Transition>
    }
}
