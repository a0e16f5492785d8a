use std::rc::Rc;

use log::debug;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::i18n::Language;

/// Site-wide overlays. At most one is open at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modal {
    Wallet,
    Buy,
    /// The whitepaper reader, in a language picked independently of the
    /// site language.
    Whitepaper(Language),
}

pub enum ModalAction {
    Open(Modal),
    Close,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    open: Option<Modal>,
}

impl ModalState {
    pub fn is_open(&self, modal: Modal) -> bool {
        self.open == Some(modal)
    }

    pub fn whitepaper_language(&self) -> Option<Language> {
        match self.open {
            Some(Modal::Whitepaper(language)) => Some(language),
            _ => None,
        }
    }
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let open = match action {
            ModalAction::Open(modal) => Some(modal),
            ModalAction::Close => None,
        };
        if open == self.open {
            return self;
        }
        debug!("modal {:?} -> {:?}", self.open, open);
        Rc::new(ModalState { open })
    }
}

/// Shared handle on the open overlay, provided once by the app shell.
#[derive(Clone, PartialEq)]
pub struct ModalContext {
    state: UseReducerHandle<ModalState>,
}

impl ModalContext {
    pub fn new(state: UseReducerHandle<ModalState>) -> Self {
        Self { state }
    }

    pub fn state(&self) -> ModalState {
        *self.state
    }

    pub fn open(&self, modal: Modal) {
        self.state.dispatch(ModalAction::Open(modal));
    }

    pub fn close(&self) {
        self.state.dispatch(ModalAction::Close);
    }

    pub fn on_open<E: 'static>(&self, modal: Modal) -> Callback<E> {
        let context = self.clone();
        Callback::from(move |_: E| context.open(modal))
    }

    pub fn on_close(&self) -> Callback<()> {
        let context = self.clone();
        Callback::from(move |_: ()| context.close())
    }
}

/// Callback opening `modal`, or a no-op outside a [`ModalContext`].
#[hook]
pub fn use_open_modal<E: 'static>(modal: Modal) -> Callback<E> {
    match use_context::<ModalContext>() {
        Some(context) => context.on_open(modal),
        None => Callback::noop(),
    }
}

/// Closes an open dialog on a click outside `dialog` or on Escape.
#[hook]
pub fn use_dismiss(dialog: NodeRef, open: bool, on_close: Callback<()>) {
    {
        let on_close = on_close.clone();
        use_click_away(dialog, move |_: Event| {
            if open {
                on_close.emit(());
            }
        });
    }
    use_event_with_window("keydown", move |e: KeyboardEvent| {
        if open && e.key() == "Escape" {
            on_close.emit(());
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(state: Rc<ModalState>, modal: Modal) -> Rc<ModalState> {
        state.reduce(ModalAction::Open(modal))
    }

    #[test]
    fn opening_one_modal_replaces_another() {
        let state = open(Rc::new(ModalState::default()), Modal::Wallet);
        assert!(state.is_open(Modal::Wallet));

        let state = open(state, Modal::Buy);
        assert!(state.is_open(Modal::Buy));
        assert!(!state.is_open(Modal::Wallet));
    }

    #[test]
    fn whitepaper_keeps_its_own_language() {
        let state = open(Rc::new(ModalState::default()), Modal::Whitepaper(Language::Ar));
        assert_eq!(state.whitepaper_language(), Some(Language::Ar));
        assert!(!state.is_open(Modal::Whitepaper(Language::En)));

        let state = open(state, Modal::Whitepaper(Language::Fr));
        assert_eq!(state.whitepaper_language(), Some(Language::Fr));
    }

    #[test]
    fn close_clears_and_repeats_are_no_ops() {
        let state = open(Rc::new(ModalState::default()), Modal::Buy);
        let again = state.clone().reduce(ModalAction::Open(Modal::Buy));
        assert!(Rc::ptr_eq(&state, &again));

        let closed = again.reduce(ModalAction::Close);
        assert_eq!(*closed, ModalState::default());
        assert_eq!(closed.whitepaper_language(), None);
        let still = closed.clone().reduce(ModalAction::Close);
        assert!(Rc::ptr_eq(&closed, &still));
    }
}
