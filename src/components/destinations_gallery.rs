use yew::prelude::*;
use yew_router::prelude::*;
use log::debug;

use crate::carousel::hooks::use_carousel;
use crate::carousel::window::{render_window, SlotEmphasis};
use crate::config::{self, SiteConfig};
use crate::data::gallery::{destination_catalog, gallery_destinations, CategoryFilter};
use crate::i18n::{t, Key};
use crate::preferences::PreferencesContext;
use crate::Route;

/// Why the gallery is holding still. Pointer and keyboard focus are tracked
/// apart so leaving with the mouse does not resume while a card still has
/// focus, and the other way round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PauseReasons {
    pub hovered: bool,
    pub focused: bool,
}

impl PauseReasons {
    pub fn is_paused(self) -> bool {
        self.hovered || self.focused
    }
}

#[function_component(DestinationsGallery)]
pub fn destinations_gallery() -> Html {
    let site = SiteConfig::default();
    let language = use_context::<PreferencesContext>()
        .map(|prefs| prefs.get().language)
        .unwrap_or_default();
    let active_filter = use_state(CategoryFilter::default);
    let catalog = use_memo(|_| destination_catalog(), ());
    let filtered = {
        let catalog = catalog.clone();
        use_memo(
            move |filter| gallery_destinations(&catalog, *filter),
            *active_filter,
        )
    };

    let carousel = use_carousel(
        (*active_filter, language),
        filtered.len(),
        site.gallery_interval_ms,
    );
    let current = carousel.current_index();
    let direction = carousel.direction();
    let reasons = use_state_eq(PauseReasons::default);

    {
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |paused| {
                if *paused {
                    carousel.pause();
                } else {
                    carousel.resume();
                }
                || ()
            },
            reasons.is_paused(),
        );
    }

    let set_reason = |edit: fn(&mut PauseReasons)| {
        let reasons = reasons.clone();
        move || {
            let mut next = *reasons;
            edit(&mut next);
            reasons.set(next);
        }
    };
    let on_enter = {
        let update = set_reason(|r| r.hovered = true);
        Callback::from(move |_: MouseEvent| update())
    };
    let on_leave = {
        let update = set_reason(|r| r.hovered = false);
        Callback::from(move |_: MouseEvent| update())
    };
    let on_focus_in = {
        let update = set_reason(|r| r.focused = true);
        Callback::from(move |_: FocusEvent| update())
    };
    let on_focus_out = {
        let update = set_reason(|r| r.focused = false);
        Callback::from(move |_: FocusEvent| update())
    };

    let visible = render_window(filtered.as_slice(), current, site.gallery_window_size);
    let window_len = visible.len();

    html! {
        <section class="destinations-gallery">
            <div class="gallery-header">
                <h2>{t(language, Key::GalleryTitle)}</h2>
                <p>{t(language, Key::GallerySubtitle)}</p>
            </div>

            <div class="gallery-filters">
                { for CategoryFilter::options().into_iter().map(|filter| {
                    let onclick = {
                        let active_filter = active_filter.clone();
                        Callback::from(move |_: MouseEvent| {
                            debug!("gallery filter -> {}", filter.label());
                            active_filter.set(filter);
                        })
                    };
                    html! {
                        <button
                            class={classes!("filter-chip", (*active_filter == filter).then(|| "active"))}
                            {onclick}
                        >
                            {filter.label()}
                        </button>
                    }
                }) }
            </div>

            <div
                class={classes!("gallery-stage", carousel.is_paused().then(|| "paused"))}
                aria-live={if carousel.is_paused() { "polite" } else { "off" }}
                onmouseenter={on_enter}
                onmouseleave={on_leave}
                onfocusin={on_focus_in}
                onfocusout={on_focus_out}
            >
                <button class="gallery-nav prev" aria-label="Previous" onclick={carousel.on_previous::<MouseEvent>()}>
                    {"‹"}
                </button>
                <button class="gallery-nav next" aria-label="Next" onclick={carousel.on_next::<MouseEvent>()}>
                    {"›"}
                </button>

                <div class={classes!("gallery-track", direction.as_class())}>
                    { for visible.iter().enumerate().map(|(slot, destination)| {
                        let emphasis = SlotEmphasis::for_slot(slot, window_len);
                        let is_center = emphasis == SlotEmphasis::Center;
                        let style = format!(
                            "--enter-x: {}px; --exit-x: {}px; transform: scale({}); opacity: {}; z-index: {};",
                            direction.enter_offset(),
                            direction.exit_offset(),
                            emphasis.scale(),
                            emphasis.opacity(),
                            emphasis.z_index(),
                        );
                        html! {
                            <div
                                key={format!("{}-{}-{}", destination.id, current, slot)}
                                class={classes!("gallery-card", is_center.then(|| "center"))}
                                {style}
                            >
                                <img src={destination.src.clone()} alt={destination.name} />
                                <div class="gallery-card-overlay"></div>
                                <img class="gallery-card-logo" src={config::asset_url("logo.jpeg")} alt="HTTCoin" />
                                <div class="gallery-card-info">
                                    <h3>{destination.name}</h3>
                                    <p>{format!("{} · {}", destination.category.label(), destination.region.label())}</p>
                                    <p class="launch-date">{destination.launch_date}</p>
                                </div>
                            </div>
                        }
                    }) }
                </div>

                <div class="gallery-dots">
                    { for (0..filtered.len()).map(|index| html! {
                        <button
                            class={classes!("gallery-dot", (index == current).then(|| "active"))}
                            aria-label={format!("Go to slide {}", index + 1)}
                            onclick={carousel.on_go_to::<MouseEvent>(index)}
                        />
                    }) }
                </div>
            </div>

            <div class="gallery-footer">
                <Link<Route> to={Route::Destinations} classes="cta-button">
                    {t(language, Key::ViewAllDestinations)}{" →"}
                </Link<Route>>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_leave_keeps_pause_while_focused() {
        let mut reasons = PauseReasons::default();
        assert!(!reasons.is_paused());

        reasons.focused = true;
        reasons.hovered = true;
        reasons.hovered = false;
        assert!(reasons.is_paused());

        reasons.focused = false;
        assert!(!reasons.is_paused());
    }

    #[test]
    fn blur_keeps_pause_while_hovered() {
        let reasons = PauseReasons { hovered: true, focused: false };
        assert!(reasons.is_paused());
        assert!(PauseReasons { hovered: false, focused: true }.is_paused());
    }
}
