use gloo_timers::callback::Timeout;
use leptos::{create_effect, create_signal, on_cleanup, ReadSignal, Signal, SignalGet, SignalGetUntracked, SignalSet};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Identifies one scheduled emission of a [`Debouncer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Trailing-edge debounce without a clock
///
/// Every [`Debouncer::input`] hands out a new ticket and invalidates the
/// previous ones. Whoever owns the timer calls [`Debouncer::fire`] with the
/// ticket once the quiet period is over; only the latest ticket yields the
/// pending value.
#[derive(Debug)]
pub struct Debouncer<T> {
    generation: u64,
    pending: Option<T>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debouncer<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }

    pub fn input(&mut self, value: T) -> Ticket {
        self.generation += 1;
        self.pending = Some(value);
        Ticket(self.generation)
    }

    /// Take the pending value if `ticket` is still the latest one
    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        if ticket.0 == self.generation {
            self.pending.take()
        } else {
            None
        }
    }

    /// Drop the pending value and invalidate every ticket handed out so far
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Follow `source`, but only once it has stopped changing for `quiet`
///
/// The returned signal starts with the source's current value. Each change
/// of the source cancels the pending timer and schedules a new one.
pub fn use_debounced<T>(source: Signal<T>, quiet: Duration) -> ReadSignal<T>
where
    T: Clone + 'static,
{
    let (debounced, set_debounced) = create_signal(source.get_untracked());
    let debouncer = Rc::new(RefCell::new(Debouncer::<T>::new()));
    let timeout = Rc::new(RefCell::new(None::<Timeout>));
    let millis = u32::try_from(quiet.as_millis()).unwrap_or(u32::MAX);

    create_effect({
        let debouncer = debouncer.clone();
        let timeout = timeout.clone();
        move |prev: Option<()>| {
            let value = source.get();
            // The initial value is already in `debounced`
            if prev.is_none() {
                return;
            }

            let ticket = debouncer.borrow_mut().input(value);
            let debouncer = debouncer.clone();
            let handle = Timeout::new(millis, move || {
                if let Some(value) = debouncer.borrow_mut().fire(ticket) {
                    set_debounced.set(value);
                }
            });

            if let Some(previous) = timeout.borrow_mut().replace(handle) {
                let _ = previous.cancel();
            }
        }
    });

    on_cleanup(move || {
        debouncer.borrow_mut().cancel();
        if let Some(pending) = timeout.borrow_mut().take() {
            let _ = pending.cancel();
        }
    });

    debounced
}
