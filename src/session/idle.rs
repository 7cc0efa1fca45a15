//! Idle-activity watchdog forcing logout after a period of inactivity.
//!
//! Activation registers capture-phase listeners for a fixed set of activity
//! events on the document, so activity anywhere — including inside nested
//! interactive elements — reschedules the deadline. Expiry runs the timeout
//! callback (the owner wires it to logout + redirect + notice). The guard is
//! a scoped resource: `deactivate` removes every listener and cancels the
//! pending deadline, and must run on every exit path of the owning screen.

#[cfg(test)]
#[path = "idle_test.rs"]
mod idle_test;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;

/// Events that count as user activity. Registered at capture phase.
pub const ACTIVITY_EVENTS: [&str; 6] = ["mousedown", "mousemove", "keypress", "scroll", "touchstart", "click"];

/// Default inactivity window.
pub const DEFAULT_TIMEOUT_MINUTES: u32 = 30;

/// Inactivity window in milliseconds.
pub fn timeout_ms(minutes: u32) -> u32 {
    minutes * 60 * 1000
}

/// Deadline bookkeeping: every activity signal bumps the generation, and an
/// expiry callback only fires if its generation is still current. This keeps
/// a stale deadline harmless even if cancellation raced its delivery.
#[derive(Debug, Default)]
pub struct IdleSchedule {
    generation: u64,
}

impl IdleSchedule {
    /// Record an activity signal; returns the new deadline's generation.
    pub fn reset(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Whether a deadline of this generation is still the live one.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}

/// Handle owning the listener set and the pending deadline.
pub struct IdleGuard {
    #[cfg(feature = "hydrate")]
    listener: Closure<dyn FnMut(web_sys::Event)>,
    #[cfg(feature = "hydrate")]
    pending: Rc<RefCell<Option<gloo_timers::callback::Timeout>>>,
}

impl IdleGuard {
    /// Register the activity listeners and schedule the first deadline.
    ///
    /// `on_timeout` runs once when `timeout_minutes` pass without any
    /// qualifying activity.
    pub fn activate(timeout_minutes: u32, on_timeout: impl Fn() + 'static) -> Self {
        #[cfg(feature = "hydrate")]
        {
            let schedule = Rc::new(RefCell::new(IdleSchedule::default()));
            let pending: Rc<RefCell<Option<gloo_timers::callback::Timeout>>> = Rc::default();
            let on_timeout = Rc::new(on_timeout);

            let reset: Rc<dyn Fn()> = {
                let schedule = schedule.clone();
                let pending = pending.clone();
                Rc::new(move || {
                    let generation = schedule.borrow_mut().reset();
                    if let Some(stale) = pending.borrow_mut().take() {
                        stale.cancel();
                    }
                    let expiry = {
                        let schedule = schedule.clone();
                        let on_timeout = on_timeout.clone();
                        move || {
                            if schedule.borrow().is_current(generation) {
                                on_timeout();
                            }
                        }
                    };
                    *pending.borrow_mut() =
                        Some(gloo_timers::callback::Timeout::new(timeout_ms(timeout_minutes), expiry));
                })
            };

            let listener = Closure::<dyn FnMut(web_sys::Event)>::new({
                let reset = reset.clone();
                move |_event: web_sys::Event| reset()
            });

            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                for event in ACTIVITY_EVENTS {
                    let _ = document.add_event_listener_with_callback_and_bool(
                        event,
                        listener.as_ref().unchecked_ref(),
                        true,
                    );
                }
            }

            // Arm the first deadline immediately.
            reset();

            Self { listener, pending }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (timeout_minutes, &on_timeout);
            Self {}
        }
    }

    /// Remove every listener and cancel the pending deadline.
    pub fn deactivate(self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                for event in ACTIVITY_EVENTS {
                    let _ = document.remove_event_listener_with_callback_and_bool(
                        event,
                        self.listener.as_ref().unchecked_ref(),
                        true,
                    );
                }
            }
            if let Some(pending) = self.pending.borrow_mut().take() {
                pending.cancel();
            }
        }
    }
}
