/// Sense of the most recent index change. Only picks transition parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Neutral,
    Forward,
    Backward,
}

impl Direction {
    /// Horizontal offset (px) a card enters from.
    pub fn enter_offset(self) -> i32 {
        match self {
            Direction::Backward => -300,
            _ => 300,
        }
    }

    /// Horizontal offset (px) a card leaves towards.
    pub fn exit_offset(self) -> i32 {
        -self.enter_offset()
    }

    pub fn as_class(self) -> &'static str {
        match self {
            Direction::Neutral => "dir-neutral",
            Direction::Forward => "dir-forward",
            Direction::Backward => "dir-backward",
        }
    }
}

/// Index, direction and pause flag of one carousel instance.
///
/// `current_index` is always `< item_count`, or 0 for an empty list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CarouselState {
    current_index: usize,
    direction: Direction,
    paused: bool,
    item_count: usize,
}

impl CarouselState {
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            ..Self::default()
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    pub fn next(&mut self) {
        if self.is_empty() {
            return;
        }
        self.direction = Direction::Forward;
        self.current_index = (self.current_index + 1) % self.item_count;
    }

    pub fn previous(&mut self) {
        if self.is_empty() {
            return;
        }
        self.direction = Direction::Backward;
        self.current_index = (self.current_index + self.item_count - 1) % self.item_count;
    }

    /// Jumps to `index`, clamped into range.
    pub fn go_to(&mut self, index: usize) {
        if self.is_empty() {
            return;
        }
        let target = index.min(self.item_count - 1);
        if target > self.current_index {
            self.direction = Direction::Forward;
        } else if target < self.current_index {
            self.direction = Direction::Backward;
        }
        self.current_index = target;
    }

    /// The item list changed identity. Position is not preserved: "closest
    /// item" has no meaning after a filter swap.
    pub fn reset(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.current_index = 0;
        self.direction = Direction::Neutral;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// One autoplay tick. Returns whether the index moved.
    pub fn tick(&mut self) -> bool {
        if self.paused || self.is_empty() {
            return false;
        }
        self.next();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn next_wraps_to_zero() {
        let mut state = CarouselState::new(3);
        state.next();
        state.next();
        state.next();
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.direction(), Direction::Forward);
    }

    #[test]
    fn previous_from_zero_wraps_to_last() {
        let mut state = CarouselState::new(4);
        state.previous();
        assert_eq!(state.current_index(), 3);
        assert_eq!(state.direction(), Direction::Backward);
    }

    #[test]
    fn go_to_sets_direction_from_position() {
        let mut state = CarouselState::new(6);
        state.go_to(4);
        assert_eq!(state.current_index(), 4);
        assert_eq!(state.direction(), Direction::Forward);
        state.go_to(1);
        assert_eq!(state.current_index(), 1);
        assert_eq!(state.direction(), Direction::Backward);
    }

    #[test]
    fn go_to_clamps_out_of_range() {
        let mut state = CarouselState::new(5);
        state.go_to(42);
        assert_eq!(state.current_index(), 4);
    }

    #[test]
    fn empty_list_stays_at_zero() {
        let mut state = CarouselState::new(0);
        state.next();
        state.previous();
        state.go_to(3);
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.direction(), Direction::Neutral);
        assert!(!state.tick());
    }

    #[test]
    fn filter_change_resets_to_front() {
        let mut state = CarouselState::new(10);
        state.go_to(7);
        state.reset(3);
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.item_count(), 3);
        assert_eq!(state.direction(), Direction::Neutral);
    }

    #[test]
    fn paused_ticks_do_not_move() {
        let mut state = CarouselState::new(5);
        state.go_to(2);
        state.pause();
        for _ in 0..10 {
            assert!(!state.tick());
        }
        assert_eq!(state.current_index(), 2);
        state.resume();
        assert!(state.tick());
        assert_eq!(state.current_index(), 3);
    }

    #[test]
    fn direction_offsets_mirror() {
        assert_eq!(Direction::Forward.enter_offset(), 300);
        assert_eq!(Direction::Forward.exit_offset(), -300);
        assert_eq!(Direction::Backward.enter_offset(), -300);
        assert_eq!(Direction::Backward.exit_offset(), 300);
    }

    proptest! {
        #[test]
        fn index_stays_in_range(n in 1usize..50, moves in proptest::collection::vec(any::<bool>(), 0..200)) {
            let mut state = CarouselState::new(n);
            for forward in moves {
                if forward { state.next() } else { state.previous() }
                prop_assert!(state.current_index() < n);
            }
        }

        #[test]
        fn next_then_previous_is_identity(n in 2usize..50, start in 0usize..50) {
            let mut state = CarouselState::new(n);
            state.go_to(start);
            let before = state.current_index();
            state.next();
            state.previous();
            prop_assert_eq!(state.current_index(), before);
        }
    }
}
