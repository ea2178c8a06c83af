//! Demo walkthrough sequencer: a fixed five-step script advanced by timer
//! ticks, with play/pause/reset control.
//!
//! The async driver (spawning, sleeping, cancellation) lives in
//! `components::demo_player`; this module is the pure transition logic.

/// One entry of the scripted walkthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoStep {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub duration_ms: u32,
    pub color: &'static str,
}

pub const DEMO_STEPS: [DemoStep; 5] = [
    DemoStep {
        id: 1,
        title: "Profile Creation",
        description: "Enter your details and academic background",
        duration_ms: 2000,
        color: "linear-gradient(135deg, #3b82f6, #06b6d4)",
    },
    DemoStep {
        id: 2,
        title: "Interest Assessment",
        description: "Complete our smart questionnaire",
        duration_ms: 2500,
        color: "linear-gradient(135deg, #22c55e, #10b981)",
    },
    DemoStep {
        id: 3,
        title: "AI Analysis",
        description: "Our AI analyzes your profile and preferences",
        duration_ms: 1500,
        color: "linear-gradient(135deg, #a855f7, #8b5cf6)",
    },
    DemoStep {
        id: 4,
        title: "Career Recommendations",
        description: "Get personalized career paths and college suggestions",
        duration_ms: 3000,
        color: "linear-gradient(135deg, #f97316, #ef4444)",
    },
    DemoStep {
        id: 5,
        title: "Success Dashboard",
        description: "Track your progress and achievements",
        duration_ms: 2000,
        color: "linear-gradient(135deg, #14b8a6, #3b82f6)",
    },
];

/// Timer slice used by the driver loop.
pub const TICK_MS: u32 = 50;
/// Hold at 100% before moving on to the next step.
pub const STEP_HOLD_MS: u32 = 500;

/// Outcome of applying one timer slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Not playing; nothing changed.
    Idle,
    /// Progress advanced within the current step.
    Running,
    /// Current step reached 100%; hold, then `advance`.
    StepDone,
    /// Final step reached 100%; the run is over.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoState {
    pub current_step: usize,
    pub progress: f64,
    pub playing: bool,
}

impl Default for DemoState {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoState {
    pub fn new() -> Self {
        Self {
            current_step: 0,
            progress: 0.0,
            playing: false,
        }
    }

    /// Always re-enters from the top of the script.
    pub fn start(&mut self) {
        self.current_step = 0;
        self.progress = 0.0;
        self.playing = true;
    }

    /// Freezes position and progress where they are.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn step(&self) -> &'static DemoStep {
        &DEMO_STEPS[self.current_step]
    }

    pub fn finished(&self) -> bool {
        !self.playing && self.current_step == DEMO_STEPS.len() - 1 && self.progress >= 100.0
    }

    /// Advance progress by one timer slice, scaled so a step's wall-clock
    /// time matches its nominal duration.
    pub fn tick(&mut self, elapsed_ms: u32) -> Tick {
        if !self.playing {
            return Tick::Idle;
        }
        let duration = self.step().duration_ms as f64;
        self.progress = (self.progress + 100.0 * elapsed_ms as f64 / duration).min(100.0);
        if self.progress < 100.0 {
            return Tick::Running;
        }
        if self.current_step + 1 == DEMO_STEPS.len() {
            self.playing = false;
            Tick::Finished
        } else {
            Tick::StepDone
        }
    }

    /// Move to the next step after the hold. Progress resets to 0 here and
    /// nowhere else.
    pub fn advance(&mut self) {
        debug_assert!(self.current_step + 1 < DEMO_STEPS.len());
        self.current_step += 1;
        self.progress = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Drive a full run the way the player loop does, without the sleeps.
    fn run_to_completion(state: &mut DemoState) -> Vec<(usize, f64)> {
        let mut trace = Vec::new();
        loop {
            match state.tick(TICK_MS) {
                Tick::Idle => panic!("run stalled while playing"),
                Tick::Running => trace.push((state.current_step, state.progress)),
                Tick::StepDone => {
                    trace.push((state.current_step, state.progress));
                    state.advance();
                    trace.push((state.current_step, state.progress));
                }
                Tick::Finished => {
                    trace.push((state.current_step, state.progress));
                    return trace;
                }
            }
        }
    }

    #[test]
    fn new_state_is_idle_at_zero() {
        let state = DemoState::new();
        assert_eq!(state.current_step, 0);
        assert_eq!(state.progress, 0.0);
        assert!(!state.playing);
        assert!(!state.finished());
    }

    #[test]
    fn tick_while_paused_changes_nothing() {
        let mut state = DemoState::new();
        state.start();
        state.tick(TICK_MS);
        state.tick(TICK_MS);
        state.pause();

        let frozen = state;
        assert_eq!(state.tick(TICK_MS), Tick::Idle);
        assert_eq!(state, frozen);
    }

    #[test]
    fn start_always_reenters_from_step_zero() {
        let mut state = DemoState::new();
        state.start();
        while state.tick(TICK_MS) == Tick::Running {}
        state.advance();
        assert_eq!(state.current_step, 1);

        state.start();
        assert_eq!(state.current_step, 0);
        assert_eq!(state.progress, 0.0);
        assert!(state.playing);
    }

    #[test]
    fn reset_is_unconditional() {
        let mut state = DemoState::new();
        state.start();
        state.tick(TICK_MS);
        state.reset();
        assert_eq!(state, DemoState::new());

        state.reset();
        assert_eq!(state, DemoState::new());
    }

    #[test]
    fn progress_scales_with_step_duration() {
        let mut state = DemoState::new();
        state.start();
        assert_eq!(state.tick(TICK_MS), Tick::Running);
        // Step 0 runs 2000ms, so one 50ms slice is 2.5%.
        assert_eq!(state.progress, 2.5);
    }

    #[test]
    fn full_run_is_monotonic_and_resets_progress_on_advance() {
        let mut state = DemoState::new();
        state.start();
        let trace = run_to_completion(&mut state);

        let mut last_step = 0;
        for window in trace.windows(2) {
            let (step_a, progress_a) = window[0];
            let (step_b, progress_b) = window[1];
            assert!(step_b >= step_a, "step index went backwards");
            if step_b > step_a {
                assert_eq!(step_b, step_a + 1);
                assert_eq!(progress_a, 100.0);
                assert_eq!(progress_b, 0.0);
            } else {
                assert!(progress_b >= progress_a, "progress went backwards");
            }
            last_step = step_b;
        }
        assert_eq!(last_step, DEMO_STEPS.len() - 1);
    }

    #[test]
    fn completing_the_last_step_ends_the_run() {
        let mut state = DemoState::new();
        state.start();
        run_to_completion(&mut state);

        assert!(!state.playing);
        assert_eq!(state.progress, 100.0);
        assert_eq!(state.current_step, DEMO_STEPS.len() - 1);
        assert!(state.finished());

        // Terminal: further ticks are ignored.
        assert_eq!(state.tick(TICK_MS), Tick::Idle);
        assert!(state.finished());
    }

    #[test]
    fn script_is_five_steps_with_positive_durations() {
        assert_eq!(DEMO_STEPS.len(), 5);
        for step in &DEMO_STEPS {
            assert!(step.duration_ms > 0);
            assert!(!step.title.is_empty());
        }
    }
}
