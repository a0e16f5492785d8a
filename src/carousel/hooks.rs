use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use super::autoplay::Autoplay;
use super::scroll::{ScrollAnimation, ScrollMetrics};
use super::state::{CarouselState, Direction};

pub enum CarouselAction {
    Next,
    Previous,
    GoTo(usize),
    Pause,
    Resume,
    Reset(usize),
    Tick,
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CarouselAction::Next => next.next(),
            CarouselAction::Previous => next.previous(),
            CarouselAction::GoTo(index) => next.go_to(index),
            CarouselAction::Pause => next.pause(),
            CarouselAction::Resume => next.resume(),
            CarouselAction::Reset(count) => next.reset(count),
            CarouselAction::Tick => {
                next.tick();
            }
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Handle returned by [`use_carousel`]. Clicks and autoplay ticks all go
/// through the same reducer.
#[derive(Clone)]
pub struct CarouselHandle {
    state: UseReducerHandle<CarouselState>,
}

impl CarouselHandle {
    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn direction(&self) -> Direction {
        self.state.direction()
    }

    pub fn is_paused(&self) -> bool {
        self.state.is_paused()
    }

    pub fn next(&self) {
        self.state.dispatch(CarouselAction::Next);
    }

    pub fn previous(&self) {
        self.state.dispatch(CarouselAction::Previous);
    }

    pub fn go_to(&self, index: usize) {
        self.state.dispatch(CarouselAction::GoTo(index));
    }

    pub fn pause(&self) {
        self.state.dispatch(CarouselAction::Pause);
    }

    pub fn resume(&self) {
        self.state.dispatch(CarouselAction::Resume);
    }

    pub fn on_next<E: 'static>(&self) -> Callback<E> {
        let handle = self.clone();
        Callback::from(move |_: E| handle.next())
    }

    pub fn on_previous<E: 'static>(&self) -> Callback<E> {
        let handle = self.clone();
        Callback::from(move |_: E| handle.previous())
    }

    pub fn on_go_to<E: 'static>(&self, index: usize) -> Callback<E> {
        let handle = self.clone();
        Callback::from(move |_: E| handle.go_to(index))
    }

    pub fn on_pause<E: 'static>(&self) -> Callback<E> {
        let handle = self.clone();
        Callback::from(move |_: E| handle.pause())
    }

    pub fn on_resume<E: 'static>(&self) -> Callback<E> {
        let handle = self.clone();
        Callback::from(move |_: E| handle.resume())
    }
}

/// Carousel state with autoplay.
///
/// `list_key` identifies the item list (e.g. the active filter). Whenever it
/// or `item_count` changes the index goes back to 0 and the [`Autoplay`]
/// schedule is re-armed, so no tick ever runs against a stale length. The
/// interval is dropped while paused and the schedule is unmounted with the
/// component. `interval_ms == 0` disables autoplay.
#[hook]
pub fn use_carousel<K>(list_key: K, item_count: usize, interval_ms: u32) -> CarouselHandle
where
    K: PartialEq + Clone + 'static,
{
    let state = use_reducer(|| CarouselState::new(item_count));
    let autoplay = use_mut_ref(|| Autoplay::new(interval_ms));

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |(_, count)| {
                dispatcher.dispatch(CarouselAction::Reset(*count));
                || ()
            },
            (list_key.clone(), item_count),
        );
    }

    {
        let dispatcher = state.dispatcher();
        let autoplay = autoplay.clone();
        let paused = state.is_paused();
        use_effect_with_deps(
            move |(_, paused, count, interval_ms)| {
                let interval_ms = *interval_ms;
                autoplay.borrow_mut().arm(interval_ms, *paused || *count == 0);
                let interval = autoplay.borrow().is_running().then(|| {
                    debug!("carousel autoplay started: {} items every {}ms", count, interval_ms);
                    let autoplay = autoplay.clone();
                    Interval::new(interval_ms, move || {
                        let due = autoplay.borrow_mut().advance(interval_ms);
                        for _ in 0..due {
                            dispatcher.dispatch(CarouselAction::Tick);
                        }
                    })
                });
                if interval.is_none() {
                    debug!("carousel autoplay {:?}", autoplay.borrow().phase());
                }
                move || {
                    if let Some(interval) = interval {
                        debug!("carousel autoplay cancelled");
                        drop(interval);
                    }
                }
            },
            (list_key, paused, item_count, interval_ms),
        );
    }

    {
        let autoplay = autoplay.clone();
        use_effect_with_deps(move |_| move || autoplay.borrow_mut().unmount(), ());
    }

    CarouselHandle { state }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollButtons {
    pub can_scroll_left: bool,
    pub can_scroll_right: bool,
}

impl Default for ScrollButtons {
    fn default() -> Self {
        Self {
            can_scroll_left: false,
            can_scroll_right: true,
        }
    }
}

impl ScrollButtons {
    /// Button state of a track whose position follows a carousel index:
    /// "previous" needs an earlier card, "next" needs a later card that the
    /// track can still scroll towards.
    pub fn for_index(index: usize, item_count: usize, metrics: ScrollMetrics) -> Self {
        Self {
            can_scroll_left: index > 0,
            can_scroll_right: index + 1 < item_count && metrics.can_scroll_right(),
        }
    }
}

#[derive(Default)]
struct FrameLoop {
    id: Option<i32>,
    tick: Option<Closure<dyn FnMut(f64)>>,
    animation: Option<ScrollAnimation>,
}

impl FrameLoop {
    fn in_flight(&self) -> bool {
        self.id.is_some() && self.animation.is_some()
    }

    fn cancel(&mut self) {
        if let Some(id) = self.id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        self.tick = None;
        self.animation = None;
    }
}

fn request_frame(tick: &Closure<dyn FnMut(f64)>) -> Option<i32> {
    web_sys::window()?
        .request_animation_frame(tick.as_ref().unchecked_ref())
        .ok()
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or(0.0)
}

fn read_metrics(element: &Element) -> ScrollMetrics {
    ScrollMetrics {
        scroll_left: f64::from(element.scroll_left()),
        scroll_width: f64::from(element.scroll_width()),
        client_width: f64::from(element.client_width()),
    }
}

/// Handle returned by [`use_eased_scroll`].
#[derive(Clone)]
pub struct EasedScrollHandle {
    track: NodeRef,
    duration_ms: f64,
    frames: Rc<RefCell<FrameLoop>>,
}

impl EasedScrollHandle {
    /// Eases the track to `target`, starting from its live scroll position.
    /// An animation already in flight is retargeted from where it is.
    pub fn scroll_to(&self, target: f64) {
        let Some(element) = self.track.cast::<Element>() else {
            return;
        };
        let live = read_metrics(&element);
        let target = target.clamp(0.0, live.max_scroll_left());

        {
            let mut frames = self.frames.borrow_mut();
            if frames.in_flight() {
                if let Some(animation) = frames.animation.as_mut() {
                    animation.retarget(now_ms(), target);
                }
                return;
            }
            frames.cancel();
            frames.animation = Some(ScrollAnimation::start(live.scroll_left, target, now_ms(), self.duration_ms));
        }

        let frames = self.frames.clone();
        let tick = Closure::wrap(Box::new(move |timestamp: f64| {
            let Some(animation) = frames.borrow().animation else {
                return;
            };
            element.set_scroll_left(animation.sample(timestamp).round() as i32);
            if animation.is_done(timestamp) {
                let mut frames = frames.borrow_mut();
                frames.id = None;
                frames.animation = None;
                return;
            }
            let next = frames.borrow().tick.as_ref().and_then(request_frame);
            frames.borrow_mut().id = next;
        }) as Box<dyn FnMut(f64)>);

        let first = request_frame(&tick);
        let mut frames = self.frames.borrow_mut();
        frames.tick = Some(tick);
        frames.id = first;
    }

    /// Live metrics of the track, if it is mounted.
    pub fn metrics(&self) -> Option<ScrollMetrics> {
        self.track.cast::<Element>().map(|element| read_metrics(&element))
    }
}

/// Eased horizontal scrolling of the element behind `track`, driven by
/// `requestAnimationFrame`. Pending frames are cancelled on unmount.
#[hook]
pub fn use_eased_scroll(track: NodeRef, duration_ms: f64) -> EasedScrollHandle {
    let frames = use_mut_ref(FrameLoop::default);

    {
        let frames = frames.clone();
        use_effect_with_deps(
            move |_| {
                move || frames.borrow_mut().cancel()
            },
            (),
        );
    }

    EasedScrollHandle {
        track,
        duration_ms,
        frames,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch(state: Rc<CarouselState>, actions: Vec<CarouselAction>) -> Rc<CarouselState> {
        actions.into_iter().fold(state, |state, action| state.reduce(action))
    }

    #[test]
    fn reset_after_navigation_returns_to_front() {
        let state = Rc::new(CarouselState::new(8));
        let moved = dispatch(state, (0..7).map(|_| CarouselAction::Next).collect());
        assert_eq!(moved.current_index(), 7);

        let reset = moved.reduce(CarouselAction::Reset(8));
        assert_eq!(reset.current_index(), 0);
        assert_eq!(reset.direction(), Direction::Neutral);
    }

    #[test]
    fn tick_while_paused_keeps_the_same_state() {
        let paused = Rc::new(CarouselState::new(5)).reduce(CarouselAction::Pause);
        let after = paused.clone().reduce(CarouselAction::Tick);
        assert!(Rc::ptr_eq(&paused, &after));
        assert_eq!(after.current_index(), 0);
    }

    #[test]
    fn tick_after_resume_advances() {
        let state = dispatch(
            Rc::new(CarouselState::new(5)),
            vec![CarouselAction::Pause, CarouselAction::Tick, CarouselAction::Resume, CarouselAction::Tick],
        );
        assert_eq!(state.current_index(), 1);
        assert_eq!(state.direction(), Direction::Forward);
    }

    #[test]
    fn go_to_clamps_through_the_reducer() {
        let state = Rc::new(CarouselState::new(4)).reduce(CarouselAction::GoTo(9));
        assert_eq!(state.current_index(), 3);
        let back = state.reduce(CarouselAction::Previous);
        assert_eq!(back.current_index(), 2);
        assert_eq!(back.direction(), Direction::Backward);
    }

    #[test]
    fn buttons_follow_the_card_index() {
        let metrics = ScrollMetrics { scroll_left: 0.0, scroll_width: 3000.0, client_width: 800.0 };
        assert_eq!(
            ScrollButtons::for_index(0, 8, metrics),
            ScrollButtons { can_scroll_left: false, can_scroll_right: true }
        );
        assert_eq!(
            ScrollButtons::for_index(7, 8, metrics),
            ScrollButtons { can_scroll_left: true, can_scroll_right: false }
        );

        let at_end = ScrollMetrics { scroll_left: 2200.0, ..metrics };
        assert!(!ScrollButtons::for_index(4, 8, at_end).can_scroll_right);
    }
}
