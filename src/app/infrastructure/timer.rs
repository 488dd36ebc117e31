//! Repeating timers with scoped cancellation.
//!
//! A [`Ticker`] starts a repeating timer and hands back a [`TimerGuard`].
//! Dropping the guard cancels the timer, so a timer can never outlive the
//! state that owns it.

use std::time::Duration;

use fltk::app::{self, Sender};

use crate::app::domain::Message;

pub trait Ticker {
    /// Fire every `interval` until the returned guard is dropped.
    fn start(&mut self, interval: Duration) -> TimerGuard;
}

/// Cancels its timer when dropped.
pub struct TimerGuard {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerGuard {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Cancel now. Equivalent to dropping the guard.
    pub fn cancel(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

impl std::fmt::Debug for TimerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerGuard")
            .field("armed", &self.cancel.is_some())
            .finish()
    }
}

/// FLTK event-loop timer that posts `Message::PhaseTick` on every fire.
pub struct FltkTicker {
    sender: Sender<Message>,
}

impl FltkTicker {
    pub fn new(sender: Sender<Message>) -> Self {
        Self { sender }
    }
}

impl Ticker for FltkTicker {
    fn start(&mut self, interval: Duration) -> TimerGuard {
        let secs = interval.as_secs_f64();
        let s = self.sender;
        let handle = app::add_timeout3(secs, move |h| {
            s.send(Message::PhaseTick);
            app::repeat_timeout3(secs, h);
        });
        TimerGuard::new(move || {
            if app::has_timeout3(handle) {
                app::remove_timeout3(handle);
            }
        })
    }
}

/// Send `message` once the current event and redraw cycle has finished.
///
/// Used for work that needs final widget geometry, such as sizing the editor
/// or scrolling the preview to its last line.
pub fn post_after_layout(sender: Sender<Message>, message: Message) {
    app::add_timeout3(0.0, move |_| sender.send(message));
}
