//! One-shot timers with cancel-on-drop handles.
//!
//! Components never call `setTimeout` directly: they ask a [`Scheduler`] for a
//! handle and keep it for as long as the callback may still run. Dropping the
//! handle cancels the pending callback, so a component that clears its handle
//! in `on_cleanup` can never be reached by a late timer.

use gloo_timers::callback::Timeout;

pub trait Scheduler {
    /// Pending callback. Dropping it cancels the callback if it has not fired yet.
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// `setTimeout`-backed scheduler used in the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}

/// Virtual clock for unit tests. Time only moves through `advance_to`/`advance_by`.
#[cfg(test)]
pub(crate) mod manual {
    use super::Scheduler;
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    struct Entry {
        id: u64,
        due: u64,
        callback: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Queue {
        now: u64,
        next_id: u64,
        entries: Vec<Entry>,
    }

    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        queue: Rc<RefCell<Queue>>,
    }

    pub struct ManualHandle {
        id: u64,
        queue: Weak<RefCell<Queue>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            let Some(queue) = self.queue.upgrade() else {
                return;
            };
            // Removed callbacks are dropped outside the borrow: they may own handles too.
            let removed: Vec<Entry> = {
                let mut q = queue.borrow_mut();
                let (gone, keep): (Vec<Entry>, Vec<Entry>) =
                    q.entries.drain(..).partition(|e| e.id == self.id);
                q.entries = keep;
                gone
            };
            drop(removed);
        }
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now(&self) -> u64 {
            self.queue.borrow().now
        }

        pub fn pending(&self) -> usize {
            self.queue.borrow().entries.len()
        }

        pub fn advance_by(&self, ms: u64) {
            let target = self.now() + ms;
            self.advance_to(target);
        }

        /// Fire every callback due at or before `t`, in deadline order.
        pub fn advance_to(&self, t: u64) {
            loop {
                let next = {
                    let mut q = self.queue.borrow_mut();
                    let due = q
                        .entries
                        .iter()
                        .enumerate()
                        .filter(|(_, e)| e.due <= t)
                        .min_by_key(|(_, e)| (e.due, e.id))
                        .map(|(i, _)| i);
                    match due {
                        Some(i) => {
                            let entry = q.entries.remove(i);
                            q.now = q.now.max(entry.due);
                            Some(entry)
                        }
                        None => {
                            q.now = q.now.max(t);
                            None
                        }
                    }
                };
                match next {
                    Some(entry) => (entry.callback)(),
                    None => break,
                }
            }
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
            let mut q = self.queue.borrow_mut();
            let id = q.next_id;
            q.next_id += 1;
            let due = q.now + u64::from(delay_ms);
            q.entries.push(Entry { id, due, callback });
            ManualHandle {
                id,
                queue: Rc::downgrade(&self.queue),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::manual::ManualScheduler;
    use super::Scheduler;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_fires_at_deadline() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&fired);
        let _handle = scheduler.schedule(100, Box::new(move || log.borrow_mut().push("a")));

        scheduler.advance_to(99);
        assert!(fired.borrow().is_empty());
        scheduler.advance_to(100);
        assert_eq!(*fired.borrow(), vec!["a"]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_drop_cancels() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(RefCell::new(false));
        let flag = Rc::clone(&fired);
        let handle = scheduler.schedule(50, Box::new(move || *flag.borrow_mut() = true));

        scheduler.advance_to(20);
        drop(handle);
        scheduler.advance_to(1000);
        assert!(!*fired.borrow());
    }

    #[test]
    fn test_runs_in_deadline_order() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(RefCell::new(Vec::new()));
        let (a, b) = (Rc::clone(&fired), Rc::clone(&fired));
        let _late = scheduler.schedule(30, Box::new(move || a.borrow_mut().push(30)));
        let _early = scheduler.schedule(10, Box::new(move || b.borrow_mut().push(10)));

        scheduler.advance_by(50);
        assert_eq!(*fired.borrow(), vec![10, 30]);
        assert_eq!(scheduler.now(), 50);
    }

    #[test]
    fn test_zero_delay_fires_on_next_tick() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(RefCell::new(false));
        let flag = Rc::clone(&fired);
        let _handle = scheduler.schedule(0, Box::new(move || *flag.borrow_mut() = true));

        assert!(!*fired.borrow());
        scheduler.advance_by(0);
        assert!(*fired.borrow());
    }
}
