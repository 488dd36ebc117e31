//! Live-mode coordination.
//!
//! Owns the phase simulator and the timer that drives it. The timer runs only
//! while live mode is on and the document has text; whenever either stops
//! being true the guard is dropped and the label cleared.

use std::time::Duration;

use tracing::{debug, info};

use crate::app::infrastructure::timer::{Ticker, TimerGuard};
use crate::app::services::phases::PhaseSimulator;

pub struct LiveController<T: Ticker> {
    ticker: T,
    interval: Duration,
    simulator: PhaseSimulator,
    timer: Option<TimerGuard>,
    is_live: bool,
}

impl<T: Ticker> LiveController<T> {
    pub fn new(ticker: T, interval: Duration, labels: Vec<String>) -> Self {
        Self {
            ticker,
            interval,
            simulator: PhaseSimulator::new(labels),
            timer: None,
            is_live: false,
        }
    }

    pub fn is_live(&self) -> bool {
        self.is_live
    }

    /// True while the phase timer is running.
    pub fn is_generating(&self) -> bool {
        self.timer.is_some()
    }

    /// Current phase label; `None` while idle.
    pub fn label(&self) -> Option<&str> {
        self.simulator.current_label()
    }

    pub fn set_live(&mut self, live: bool, has_content: bool) {
        if self.is_live != live {
            info!(live, "Live mode changed");
        }
        self.is_live = live;
        self.sync(has_content);
    }

    /// Flip live mode. Returns the new value.
    pub fn toggle(&mut self, has_content: bool) -> bool {
        self.set_live(!self.is_live, has_content);
        self.is_live
    }

    /// Start or stop cycling as the document gains or loses text.
    pub fn on_content_changed(&mut self, has_content: bool) {
        self.sync(has_content);
    }

    /// Advance one phase. Ticks arriving after cancellation are ignored.
    pub fn on_tick(&mut self) -> Option<&str> {
        if self.timer.is_none() {
            return None;
        }
        let label = self.simulator.tick();
        debug!(label, "Phase tick");
        Some(label)
    }

    /// Stop everything; used when the authoring view closes.
    pub fn shutdown(&mut self) {
        self.is_live = false;
        self.sync(false);
    }

    fn sync(&mut self, has_content: bool) {
        if self.is_live && has_content {
            if self.timer.is_none() {
                self.timer = Some(self.ticker.start(self.interval));
                debug!(interval_ms = self.interval.as_millis() as u64, "Phase timer started");
            }
        } else {
            if let Some(timer) = self.timer.take() {
                timer.cancel();
                debug!("Phase timer cancelled");
            }
            self.simulator.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Ticker whose timers never fire on their own; counts running timers.
    #[derive(Clone, Default)]
    struct ManualTicker {
        active: Rc<Cell<usize>>,
        started: Rc<Cell<usize>>,
    }

    impl Ticker for ManualTicker {
        fn start(&mut self, _interval: Duration) -> TimerGuard {
            self.active.set(self.active.get() + 1);
            self.started.set(self.started.get() + 1);
            let active = self.active.clone();
            TimerGuard::new(move || active.set(active.get() - 1))
        }
    }

    fn controller() -> (LiveController<ManualTicker>, ManualTicker) {
        let ticker = ManualTicker::default();
        let labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let live = LiveController::new(ticker.clone(), Duration::from_secs(3), labels);
        (live, ticker)
    }

    #[test]
    fn test_starts_idle() {
        let (live, ticker) = controller();
        assert!(!live.is_live());
        assert!(!live.is_generating());
        assert_eq!(live.label(), None);
        assert_eq!(ticker.active.get(), 0);
    }

    #[test]
    fn test_live_with_content_cycles_labels() {
        let (mut live, ticker) = controller();
        live.set_live(true, true);
        assert_eq!(ticker.active.get(), 1);
        assert_eq!(live.label(), None);

        let seen: Vec<String> = (0..5).map(|_| live.on_tick().unwrap().to_string()).collect();
        assert_eq!(seen, ["a", "b", "c", "a", "b"]);
        assert_eq!(live.label(), Some("b"));
    }

    #[test]
    fn test_live_without_content_does_not_start_timer() {
        let (mut live, ticker) = controller();
        live.set_live(true, false);
        assert!(live.is_live());
        assert!(!live.is_generating());
        assert_eq!(ticker.active.get(), 0);
        assert_eq!(live.on_tick(), None);

        live.on_content_changed(true);
        assert_eq!(ticker.active.get(), 1);
    }

    #[test]
    fn test_turning_live_off_cancels_timer_and_clears_label() {
        let (mut live, ticker) = controller();
        live.set_live(true, true);
        live.on_tick();
        assert!(live.label().is_some());

        live.set_live(false, true);
        assert_eq!(ticker.active.get(), 0);
        assert_eq!(live.label(), None);
        // A tick already queued before cancellation must not revive the label
        assert_eq!(live.on_tick(), None);
        assert_eq!(live.label(), None);
    }

    #[test]
    fn test_clearing_content_stops_cycle() {
        let (mut live, ticker) = controller();
        live.set_live(true, true);
        live.on_tick();
        live.on_content_changed(false);
        assert!(live.is_live());
        assert_eq!(ticker.active.get(), 0);
        assert_eq!(live.label(), None);
    }

    #[test]
    fn test_typing_does_not_restart_timer() {
        let (mut live, ticker) = controller();
        live.set_live(true, true);
        for _ in 0..10 {
            live.on_content_changed(true);
        }
        assert_eq!(ticker.started.get(), 1);
        assert_eq!(ticker.active.get(), 1);
    }

    #[test]
    fn test_toggle_and_shutdown() {
        let (mut live, ticker) = controller();
        assert!(live.toggle(true));
        assert!(!live.toggle(true));
        assert!(live.toggle(true));
        assert_eq!(ticker.active.get(), 1);

        live.shutdown();
        assert!(!live.is_live());
        assert_eq!(ticker.active.get(), 0);
    }

    #[test]
    fn test_drop_cancels_timer() {
        let (mut live, ticker) = controller();
        live.set_live(true, true);
        drop(live);
        assert_eq!(ticker.active.get(), 0);
    }
}
