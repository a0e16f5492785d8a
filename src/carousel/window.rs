/// Indices of the items visible in a window of `window_size` slots starting
/// at `current_index`, wrapping around the end of a list of `len` items.
///
/// The window is clamped to `len` so the same item never shows up twice.
pub fn window_indices(len: usize, current_index: usize, window_size: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    let start = current_index % len;
    (0..window_size.min(len))
        .map(|offset| (start + offset) % len)
        .collect()
}

/// The ordered sub-list of `items` rendered by a carousel showing
/// `window_size` cards at a time.
pub fn render_window<T>(items: &[T], current_index: usize, window_size: usize) -> Vec<&T> {
    window_indices(items.len(), current_index, window_size)
        .into_iter()
        .map(|index| &items[index])
        .collect()
}

/// Position of a slot relative to the centre of the window.
///
/// Used by the gallery to pick scale, opacity and stacking for each card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotEmphasis {
    Center,
    Near,
    Far,
}

impl SlotEmphasis {
    pub fn for_slot(slot: usize, window_len: usize) -> Self {
        let center = window_len / 2;
        match slot.abs_diff(center) {
            0 => SlotEmphasis::Center,
            1 => SlotEmphasis::Near,
            _ => SlotEmphasis::Far,
        }
    }

    pub fn scale(self) -> f64 {
        match self {
            SlotEmphasis::Center => 1.0,
            SlotEmphasis::Near => 0.85,
            SlotEmphasis::Far => 0.7,
        }
    }

    pub fn opacity(self) -> f64 {
        match self {
            SlotEmphasis::Center => 1.0,
            SlotEmphasis::Near => 0.7,
            SlotEmphasis::Far => 0.4,
        }
    }

    pub fn z_index(self) -> u32 {
        match self {
            SlotEmphasis::Center => 30,
            SlotEmphasis::Near => 20,
            SlotEmphasis::Far => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn wraps_to_the_front() {
        let items = ["A", "B", "C", "D", "E"];
        let window: Vec<&str> = render_window(&items, 4, 3).into_iter().copied().collect();
        assert_eq!(window, vec!["E", "A", "B"]);
    }

    #[test]
    fn empty_list_gives_empty_window() {
        let items: [&str; 0] = [];
        assert!(render_window(&items, 0, 5).is_empty());
        assert!(window_indices(0, 3, 5).is_empty());
    }

    #[test]
    fn short_list_never_repeats_items() {
        let items = ["A", "B", "C"];
        let window: Vec<&str> = render_window(&items, 1, 5).into_iter().copied().collect();
        assert_eq!(window, vec!["B", "C", "A"]);
    }

    #[test]
    fn center_slot_of_five_is_emphasized() {
        assert_eq!(SlotEmphasis::for_slot(2, 5), SlotEmphasis::Center);
        assert_eq!(SlotEmphasis::for_slot(1, 5), SlotEmphasis::Near);
        assert_eq!(SlotEmphasis::for_slot(3, 5), SlotEmphasis::Near);
        assert_eq!(SlotEmphasis::for_slot(0, 5), SlotEmphasis::Far);
        assert_eq!(SlotEmphasis::for_slot(4, 5), SlotEmphasis::Far);
    }

    proptest! {
        #[test]
        fn window_length_is_min_of_size_and_len(
            len in 0usize..40,
            current in 0usize..80,
            size in 1usize..10,
        ) {
            let items: Vec<usize> = (0..len).collect();
            prop_assert_eq!(render_window(&items, current, size).len(), size.min(len));
        }

        #[test]
        fn window_preserves_order_from_current(
            len in 1usize..40,
            current in 0usize..40,
            size in 1usize..10,
        ) {
            let items: Vec<usize> = (0..len).collect();
            let window = render_window(&items, current, size);
            for (offset, item) in window.iter().enumerate() {
                prop_assert_eq!(**item, (current + offset) % len);
            }
        }
    }
}
