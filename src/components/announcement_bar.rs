use yew::prelude::*;
use yew_router::prelude::*;

use crate::carousel::hooks::use_carousel;
use crate::config::SiteConfig;
use crate::data::content::ANNOUNCEMENTS;
use crate::Route;

#[function_component(AnnouncementBar)]
pub fn announcement_bar() -> Html {
    let visible = use_state(|| true);
    let interval_ms = if *visible { SiteConfig::default().rotator_interval_ms } else { 0 };
    let rotator = use_carousel((), ANNOUNCEMENTS.len(), interval_ms);

    if !*visible {
        return html! {};
    }

    let dismiss = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| visible.set(false))
    };

    let Some(current) = ANNOUNCEMENTS.get(rotator.current_index()) else {
        return html! {};
    };

    html! {
        <div class="announcement-bar" key={current.id}>
            <div class="announcement-content">
                <span class="announcement-icon">{"📣"}</span>
                <p class="announcement-text">{current.text}</p>
                <Link<Route> to={current.route.clone()} classes="announcement-cta">
                    {current.cta}
                </Link<Route>>
                <button class="announcement-dismiss" aria-label="Dismiss announcement bar" onclick={dismiss}>
                    {"✕"}
                </button>
            </div>
        </div>
    }
}
