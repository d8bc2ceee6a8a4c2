//! Debounce and throttle wrappers.
//!
//! Both wrap a `Fn(&mut Host, A)`; clones of a wrapper share one state, so
//! a wrapper can be captured by several listeners and still rate-limit them
//! together.

use platform::{Host, TimerId};
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

type Wrapped<A> = Box<dyn Fn(&mut Host, A)>;

struct DebounceState<A> {
    func: Wrapped<A>,
    delay: Duration,
    pending: Cell<Option<TimerId>>,
}

/// Runs the wrapped function once calls have stopped for `delay`, with the
/// arguments of the last call.
pub struct Debounced<A> {
    state: Rc<DebounceState<A>>,
}

impl<A> Clone for Debounced<A> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

pub fn debounce<A: 'static>(delay: Duration, func: impl Fn(&mut Host, A) + 'static) -> Debounced<A> {
    Debounced {
        state: Rc::new(DebounceState {
            func: Box::new(func),
            delay,
            pending: Cell::new(None),
        }),
    }
}

impl<A: 'static> Debounced<A> {
    /// Replace any pending call with one for `args`, due after the delay.
    /// Never runs the function synchronously, even with a zero delay.
    pub fn call(&self, host: &mut Host, args: A) {
        if let Some(previous) = self.state.pending.take() {
            host.clear_timeout(previous);
        }
        let state = Rc::clone(&self.state);
        let id = host.set_timeout(self.state.delay, move |host| {
            state.pending.set(None);
            (state.func)(host, args);
        });
        self.state.pending.set(Some(id));
        log::trace!(
            target: "domkit.rate_limit",
            "debounce: call deferred by {:?} as {id:?}",
            self.state.delay
        );
    }

    pub fn is_pending(&self) -> bool {
        self.state.pending.get().is_some()
    }

    pub fn delay(&self) -> Duration {
        self.state.delay
    }
}

struct ThrottleState<A> {
    func: Wrapped<A>,
    interval: Duration,
    last: Cell<Option<Instant>>,
}

/// Runs the wrapped function right away unless it already ran less than
/// `interval` ago; such calls are dropped.
pub struct Throttled<A> {
    state: Rc<ThrottleState<A>>,
}

impl<A> Clone for Throttled<A> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

pub fn throttle<A: 'static>(interval: Duration, func: impl Fn(&mut Host, A) + 'static) -> Throttled<A> {
    Throttled {
        state: Rc::new(ThrottleState {
            func: Box::new(func),
            interval,
            last: Cell::new(None),
        }),
    }
}

impl<A> Throttled<A> {
    /// Returns whether the function ran.
    pub fn call(&self, host: &mut Host, args: A) -> bool {
        let now = host.now();
        if let Some(last) = self.state.last.get() {
            let since = now.saturating_duration_since(last);
            if since < self.state.interval {
                log::trace!(
                    target: "domkit.rate_limit",
                    "throttle: dropped call {since:?} after the last one"
                );
                return false;
            }
        }
        self.state.last.set(Some(now));
        (self.state.func)(host, args);
        true
    }

    pub fn interval(&self) -> Duration {
        self.state.interval
    }
}
