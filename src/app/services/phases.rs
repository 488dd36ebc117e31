/// Status labels shown while the co-author is "working".
pub const DEFAULT_PHASE_LABELS: &[&str] = &[
    "Analyzing intent...",
    "Building structure...",
    "Generating content...",
    "Reviewing style...",
    "Inserting references...",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseState {
    Idle,
    Phase(usize),
}

/// Free-running cycle over a fixed list of phase labels.
///
/// The simulator never reaches a terminal state: each tick advances to the
/// next label and wraps around. It knows nothing about timers; the owner
/// decides when to tick and when to reset.
#[derive(Debug, Clone)]
pub struct PhaseSimulator {
    labels: Vec<String>,
    state: PhaseState,
}

impl PhaseSimulator {
    /// Build a simulator over `labels`, falling back to the defaults when empty.
    pub fn new(labels: Vec<String>) -> Self {
        let labels = if labels.is_empty() {
            default_labels()
        } else {
            labels
        };
        Self {
            labels,
            state: PhaseState::Idle,
        }
    }

    pub fn state(&self) -> PhaseState {
        self.state
    }

    /// Current label, or `None` while idle.
    pub fn current_label(&self) -> Option<&str> {
        match self.state {
            PhaseState::Idle => None,
            PhaseState::Phase(i) => self.labels.get(i).map(String::as_str),
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Advance one step. From idle the first label is entered.
    pub fn tick(&mut self) -> &str {
        let next = match self.state {
            PhaseState::Idle => 0,
            PhaseState::Phase(i) => (i + 1) % self.labels.len(),
        };
        self.state = PhaseState::Phase(next);
        &self.labels[next]
    }

    pub fn reset(&mut self) {
        self.state = PhaseState::Idle;
    }
}

impl Default for PhaseSimulator {
    fn default() -> Self {
        Self::new(default_labels())
    }
}

pub fn default_labels() -> Vec<String> {
    DEFAULT_PHASE_LABELS.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let sim = PhaseSimulator::default();
        assert_eq!(sim.state(), PhaseState::Idle);
        assert_eq!(sim.current_label(), None);
    }

    #[test]
    fn test_tick_cycles_and_wraps() {
        let mut sim = PhaseSimulator::new(vec!["a".into(), "b".into(), "c".into()]);
        let seen: Vec<String> = (0..7).map(|_| sim.tick().to_string()).collect();
        assert_eq!(seen, vec!["a", "b", "c", "a", "b", "c", "a"]);
        assert_eq!(sim.state(), PhaseState::Phase(0));
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut sim = PhaseSimulator::default();
        sim.tick();
        sim.tick();
        sim.reset();
        assert_eq!(sim.current_label(), None);
        // Restart begins at the first label again
        assert_eq!(sim.tick(), DEFAULT_PHASE_LABELS[0]);
    }

    #[test]
    fn test_empty_labels_fall_back_to_defaults() {
        let sim = PhaseSimulator::new(Vec::new());
        assert_eq!(sim.labels().len(), DEFAULT_PHASE_LABELS.len());
    }
}
