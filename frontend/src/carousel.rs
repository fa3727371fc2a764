//! Rotation state for the testimonial carousel.
//!
//! The carousel walks a fixed cyclic list. A recurring timer sends
//! [`CarouselAction::Tick`]; hovering the region pauses it; the arrow buttons
//! and dots move the index directly.

use std::rc::Rc;

use log::debug;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
    paused: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselAction {
    Tick,
    Next,
    Prev,
    Select(usize),
    Pause,
    Resume,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len, paused: false }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Applies one action and returns the resulting state.
    pub fn apply(self, action: CarouselAction) -> Self {
        if self.len == 0 {
            return self;
        }
        match action {
            CarouselAction::Tick if self.paused => self,
            CarouselAction::Tick | CarouselAction::Next => Self {
                index: (self.index + 1) % self.len,
                ..self
            },
            CarouselAction::Prev => Self {
                index: (self.index + self.len - 1) % self.len,
                ..self
            },
            CarouselAction::Select(i) if i < self.len => Self { index: i, ..self },
            CarouselAction::Select(i) => {
                debug!("ignoring carousel selection {} (len {})", i, self.len);
                self
            }
            CarouselAction::Pause => Self { paused: true, ..self },
            CarouselAction::Resume => Self { paused: false, ..self },
        }
    }

    /// Positions of the `window` items shown from the current index, wrapping
    /// around the end of the list.
    pub fn visible(&self, window: usize) -> Vec<usize> {
        if self.len == 0 {
            return Vec::new();
        }
        (0..window).map(|i| (self.index + i) % self.len).collect()
    }

    /// The `window` items of `items` currently on screen.
    pub fn window<'a, T>(&self, items: &'a [T], window: usize) -> Vec<&'a T> {
        self.visible(window)
            .into_iter()
            .filter_map(|i| items.get(i))
            .collect()
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LEN: usize = 6;

    fn at(index: usize) -> CarouselState {
        CarouselState::new(LEN).apply(CarouselAction::Select(index))
    }

    #[test]
    fn selecting_a_dot_makes_it_primary() {
        for i in 0..LEN {
            let state = CarouselState::new(LEN).apply(CarouselAction::Select(i));
            assert_eq!(state.index(), i);
            assert_eq!(state.visible(1), vec![i]);
        }
    }

    #[test]
    fn full_cycle_of_ticks_returns_to_start() {
        for start in 0..LEN {
            let mut state = at(start);
            for _ in 0..LEN {
                state = state.apply(CarouselAction::Tick);
            }
            assert_eq!(state.index(), start);
        }
    }

    #[test]
    fn next_then_prev_is_identity() {
        for start in 0..LEN {
            let state = at(start)
                .apply(CarouselAction::Next)
                .apply(CarouselAction::Prev);
            assert_eq!(state.index(), start);
        }
    }

    #[test]
    fn prev_wraps_from_first_to_last() {
        let state = CarouselState::new(LEN).apply(CarouselAction::Prev);
        assert_eq!(state.index(), LEN - 1);
    }

    #[test]
    fn paused_carousel_ignores_ticks_until_resumed() {
        let mut state = at(2).apply(CarouselAction::Pause);
        for _ in 0..10 {
            state = state.apply(CarouselAction::Tick);
        }
        assert_eq!(state.index(), 2);

        let state = state
            .apply(CarouselAction::Resume)
            .apply(CarouselAction::Tick);
        assert_eq!(state.index(), 3);
        assert!(!state.is_paused());
    }

    #[test]
    fn manual_navigation_still_works_while_paused() {
        let state = at(0)
            .apply(CarouselAction::Pause)
            .apply(CarouselAction::Next)
            .apply(CarouselAction::Next);
        assert_eq!(state.index(), 2);
        assert!(state.is_paused());
    }

    #[test]
    fn wide_window_starts_at_current_index() {
        let state = CarouselState::new(LEN);
        assert_eq!(state.visible(3), vec![0, 1, 2]);

        let state = state.apply(CarouselAction::Tick);
        assert_eq!(state.visible(3), vec![1, 2, 3]);

        let state = at(5);
        assert_eq!(state.visible(3), vec![5, 0, 1]);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let state = at(4).apply(CarouselAction::Select(LEN));
        assert_eq!(state.index(), 4);
    }

    #[test]
    fn window_maps_positions_to_items() {
        let items = ["a", "b", "c", "d"];
        let state = CarouselState::new(items.len()).apply(CarouselAction::Select(3));
        assert_eq!(state.window(&items, 3), vec![&"d", &"a", &"b"]);
    }

    #[test]
    fn reducer_keeps_allocation_when_nothing_changes() {
        let state = Rc::new(CarouselState::new(LEN).apply(CarouselAction::Pause));
        let after = state.clone().reduce(CarouselAction::Tick);
        assert!(Rc::ptr_eq(&state, &after));
    }
}
