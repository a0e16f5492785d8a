use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::carousel::hooks::{use_carousel, use_eased_scroll, ScrollButtons};
use crate::carousel::scroll::card_offset;
use crate::config::SiteConfig;
use crate::data::gallery::Destination;

#[derive(Properties, PartialEq)]
pub struct CardsCarouselProps {
    pub cards: Rc<Vec<Destination>>,
}

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(1024.0)
}

/// Horizontally scrolling card track. The focused card is the shared
/// carousel index; every index change eases the track to that card.
#[function_component(CardsCarousel)]
pub fn cards_carousel(props: &CardsCarouselProps) -> Html {
    let site = SiteConfig::default();
    let track = use_node_ref();
    let scroller = use_eased_scroll(track.clone(), site.scroll_duration_ms);
    let carousel = use_carousel(props.cards.clone(), props.cards.len(), 0);
    let buttons = use_state_eq(ScrollButtons::default);

    let index = carousel.current_index();
    let count = props.cards.len();

    let refresh = {
        let scroller = scroller.clone();
        let buttons = buttons.clone();
        move |index: usize| {
            if let Some(metrics) = scroller.metrics() {
                buttons.set(ScrollButtons::for_index(index, count, metrics));
            }
        }
    };

    {
        let scroller = scroller.clone();
        let refresh = refresh.clone();
        use_effect_with_deps(
            move |index| {
                scroller.scroll_to(card_offset(*index, viewport_width()));
                refresh(*index);
                || ()
            },
            index,
        );
    }

    let on_scroll = {
        let refresh = refresh.clone();
        Callback::from(move |_: Event| refresh(index))
    };
    let on_card_close = {
        let carousel = carousel.clone();
        Callback::from(move |closed: usize| carousel.go_to(closed + 1))
    };

    html! {
        <div class="cards-carousel">
            <div class="cards-track" ref={track} onscroll={on_scroll}>
                <div class="cards-row">
                    { for props.cards.iter().enumerate().map(|(slot, card)| html! {
                        <div
                            key={card.id.clone()}
                            class={classes!("cards-slot", (slot == index).then(|| "focused"))}
                            style={format!("animation-delay: {:.1}s;", 0.1 * slot as f64)}
                        >
                            <Card
                                card={card.clone()}
                                index={slot}
                                on_close={on_card_close.clone()}
                            />
                        </div>
                    }) }
                </div>
            </div>
            <div class="cards-controls">
                <button
                    class="cards-arrow"
                    aria-label="Previous card"
                    onclick={carousel.on_previous()}
                    disabled={!buttons.can_scroll_left}
                >
                    {"‹"}
                </button>
                <button
                    class="cards-arrow"
                    aria-label="Next card"
                    onclick={carousel.on_next()}
                    disabled={!buttons.can_scroll_right}
                >
                    {"›"}
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CardProps {
    card: Destination,
    index: usize,
    on_close: Callback<usize>,
}

fn set_body_overflow(value: &str) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let _ = body.style().set_property("overflow", value);
    }
}

#[function_component(Card)]
fn card(props: &CardProps) -> Html {
    let open = use_bool_toggle(false);
    let container = use_node_ref();
    let loading = use_state(|| true);

    let close = {
        let open = open.clone();
        let on_close = props.on_close.clone();
        let index = props.index;
        Callback::from(move |_: ()| {
            if *open {
                open.set(false);
                set_body_overflow("auto");
                on_close.emit(index);
            }
        })
    };

    {
        let close = close.clone();
        use_click_away(container.clone(), move |_: Event| close.emit(()));
    }
    {
        let close = close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                close.emit(());
            }
        });
    }

    let on_open = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| {
            open.set(true);
            set_body_overflow("hidden");
        })
    };
    let on_close_click = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };
    let on_load = {
        let loading = loading.clone();
        Callback::from(move |_: Event| loading.set(false))
    };

    let card = &props.card;

    html! {
        <>
            if *open {
                <div class="card-modal">
                    <div class="card-modal-backdrop"></div>
                    <div class="card-modal-body" ref={container}>
                        <button class="card-modal-close" onclick={on_close_click}>{"✕"}</button>
                        <p class="card-modal-category">{card.category.label()}</p>
                        <p class="card-modal-title">{card.name}</p>
                        <div class="card-modal-content">
                            <img src={card.src.clone()} alt={card.name} />
                            <p>{format!("{} · {} · {}", card.region.label(), card.status.label(), card.launch_date)}</p>
                        </div>
                    </div>
                </div>
            }
            <button class="card-face" onclick={on_open}>
                <div class="card-face-shade"></div>
                <img
                    class={classes!("card-face-image", if *loading { "blur" } else { "sharp" })}
                    src={card.src.clone()}
                    alt={card.name}
                    onload={on_load}
                />
            </button>
        </>
    }
}
