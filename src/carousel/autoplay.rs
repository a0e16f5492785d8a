use log::debug;

/// Lifecycle of a carousel's autoplay schedule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CarouselPhase {
    #[default]
    Idle,
    Autoplaying,
    Paused,
    /// Terminal. No tick is reported after this.
    Unmounted,
}

/// Autoplay schedule in elapsed milliseconds.
///
/// `use_carousel` keeps one per carousel and feeds it from a `gloo_timers`
/// interval; every tick it reports is dispatched to the carousel reducer.
#[derive(Clone, Debug)]
pub struct Autoplay {
    interval_ms: u32,
    elapsed_ms: u32,
    phase: CarouselPhase,
}

impl Autoplay {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
            phase: CarouselPhase::Idle,
        }
    }

    pub fn phase(&self) -> CarouselPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == CarouselPhase::Autoplaying
    }

    /// Starts (or restarts) the schedule. Any partially elapsed interval is
    /// dropped, as a cleared-and-recreated timer would. An interval of 0
    /// leaves the schedule paused.
    pub fn arm(&mut self, interval_ms: u32, paused: bool) {
        if self.phase == CarouselPhase::Unmounted {
            return;
        }
        self.elapsed_ms = 0;
        self.interval_ms = interval_ms.max(1);
        self.phase = if paused || interval_ms == 0 {
            CarouselPhase::Paused
        } else {
            CarouselPhase::Autoplaying
        };
        debug!("autoplay armed: {:?} every {}ms", self.phase, self.interval_ms);
    }

    /// Lets `delta_ms` pass and returns how many ticks fell due.
    pub fn advance(&mut self, delta_ms: u32) -> usize {
        if self.phase != CarouselPhase::Autoplaying {
            return 0;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);
        let due = self.elapsed_ms / self.interval_ms;
        self.elapsed_ms %= self.interval_ms;
        due as usize
    }

    pub fn unmount(&mut self) {
        if self.phase != CarouselPhase::Unmounted {
            debug!("autoplay unmounted");
        }
        self.phase = CarouselPhase::Unmounted;
        self.elapsed_ms = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::state::CarouselState;
    use crate::carousel::window::render_window;

    fn run(autoplay: &mut Autoplay, state: &mut CarouselState, delta_ms: u32) -> usize {
        (0..autoplay.advance(delta_ms)).filter(|_| state.tick()).count()
    }

    #[test]
    fn starts_idle_and_arms_into_autoplay() {
        let mut autoplay = Autoplay::new(3500);
        assert_eq!(autoplay.phase(), CarouselPhase::Idle);
        autoplay.arm(3500, false);
        assert_eq!(autoplay.phase(), CarouselPhase::Autoplaying);
        assert!(autoplay.is_running());
    }

    #[test]
    fn idle_does_not_advance() {
        let mut autoplay = Autoplay::new(3500);
        assert_eq!(autoplay.advance(10_000), 0);
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let items = ["A", "B", "C"];
        let mut state = CarouselState::new(items.len());
        let mut autoplay = Autoplay::new(3500);
        autoplay.arm(3500, state.is_paused());

        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(*render_window(&items, state.current_index(), 1)[0]);
            assert_eq!(run(&mut autoplay, &mut state, 3500), 1);
        }
        assert_eq!(seen, ["A", "B", "C"]);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn partial_interval_does_not_fire() {
        let mut autoplay = Autoplay::new(3500);
        autoplay.arm(3500, false);
        assert_eq!(autoplay.advance(3499), 0);
        assert_eq!(autoplay.advance(1), 1);
    }

    #[test]
    fn long_gap_reports_every_missed_tick() {
        let mut autoplay = Autoplay::new(1000);
        autoplay.arm(1000, false);
        assert_eq!(autoplay.advance(3500), 3);
        assert_eq!(autoplay.advance(500), 1);
    }

    #[test]
    fn pause_stops_ticks_and_resume_restarts_the_interval() {
        let mut state = CarouselState::new(5);
        let mut autoplay = Autoplay::new(3500);
        autoplay.arm(3500, false);
        assert_eq!(run(&mut autoplay, &mut state, 3000), 0);

        state.pause();
        autoplay.arm(3500, state.is_paused());
        assert_eq!(autoplay.phase(), CarouselPhase::Paused);
        assert_eq!(run(&mut autoplay, &mut state, 35_000), 0);

        state.resume();
        autoplay.arm(3500, state.is_paused());
        assert_eq!(run(&mut autoplay, &mut state, 600), 0);
        assert_eq!(run(&mut autoplay, &mut state, 2900), 1);
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn zero_interval_never_runs() {
        let mut autoplay = Autoplay::new(0);
        autoplay.arm(0, false);
        assert_eq!(autoplay.phase(), CarouselPhase::Paused);
        assert_eq!(autoplay.advance(u32::MAX), 0);
    }

    #[test]
    fn filter_change_rearms_against_new_length() {
        let mut state = CarouselState::new(10);
        let mut autoplay = Autoplay::new(3500);
        autoplay.arm(3500, false);
        state.go_to(7);
        autoplay.advance(2000);

        state.reset(3);
        autoplay.arm(3500, state.is_paused());
        assert_eq!(state.current_index(), 0);
        run(&mut autoplay, &mut state, 3500 * 4);
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn unmounted_is_terminal() {
        let mut autoplay = Autoplay::new(3500);
        autoplay.arm(3500, false);
        autoplay.unmount();
        autoplay.arm(3500, false);
        assert_eq!(autoplay.phase(), CarouselPhase::Unmounted);
        assert_eq!(autoplay.advance(10_000), 0);
    }

    #[test]
    fn idle_can_unmount_directly() {
        let mut autoplay = Autoplay::new(6000);
        autoplay.unmount();
        assert_eq!(autoplay.phase(), CarouselPhase::Unmounted);
    }
}
