use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::SiteConfig;
use crate::preferences::{CookieChoice, CookieConsent, PreferencesContext};

#[derive(Properties, PartialEq)]
struct ToggleRowProps {
    title: &'static str,
    description: &'static str,
    checked: bool,
    on_toggle: Callback<()>,
}

#[function_component(ToggleRow)]
fn toggle_row(props: &ToggleRowProps) -> Html {
    let onchange = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: Event| on_toggle.emit(()))
    };
    html! {
        <div class="cookie-toggle-row">
            <div>
                <p class="cookie-toggle-title">{props.title}</p>
                <p class="cookie-toggle-description">{props.description}</p>
            </div>
            <label class="switch">
                <input type="checkbox" checked={props.checked} {onchange} />
                <span class="slider round"></span>
            </label>
        </div>
    }
}

#[function_component(CookieBanner)]
pub fn cookie_banner() -> Html {
    let prefs = use_context::<PreferencesContext>();
    let visible = use_state(|| false);
    let advanced = use_bool_toggle(false);
    let analytics = use_bool_toggle(true);
    let marketing = use_bool_toggle(true);

    let already_chosen = prefs
        .as_ref()
        .map(|p| p.get().cookie_consent.is_some())
        .unwrap_or(false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |chosen| {
                let timer = (!*chosen).then(|| {
                    Timeout::new(SiteConfig::default().cookie_banner_delay_ms, move || {
                        visible.set(true);
                    })
                });
                move || drop(timer)
            },
            already_chosen,
        );
    }

    if !*visible || already_chosen {
        return html! {};
    }

    let persist = {
        let prefs = prefs.clone();
        let visible = visible.clone();
        let analytics = analytics.clone();
        let marketing = marketing.clone();
        move |choice: CookieChoice| {
            let accepted = choice == CookieChoice::Accepted;
            let consent = CookieConsent {
                choice,
                analytics: accepted && *analytics,
                marketing: accepted && *marketing,
            };
            if let Some(prefs) = prefs.as_ref() {
                prefs.set_cookie_consent(consent);
            }
            visible.set(false);
        }
    };
    let accept = {
        let persist = persist.clone();
        Callback::from(move |_: MouseEvent| persist(CookieChoice::Accepted))
    };
    let decline = Callback::from(move |_: MouseEvent| persist(CookieChoice::Declined));
    let toggle_advanced = {
        let advanced = advanced.clone();
        Callback::from(move |_: MouseEvent| advanced.toggle())
    };
    let toggle_analytics = {
        let analytics = analytics.clone();
        Callback::from(move |_: ()| analytics.toggle())
    };
    let toggle_marketing = {
        let marketing = marketing.clone();
        Callback::from(move |_: ()| marketing.toggle())
    };

    html! {
        <div class="cookie-banner" aria-live="polite">
            <div class="cookie-banner-card">
                <div>
                    <p class="cookie-banner-title">{"We use cookies to enhance your journey"}</p>
                    <p class="cookie-banner-text">
                        {"Cookies personalize content, remember your preferences, and keep HTTCoin secure. Manage your choices below."}
                    </p>
                </div>

                if *advanced {
                    <div class="cookie-advanced">
                        <ToggleRow
                            title="Analytics"
                            description="Help us improve performance and UX"
                            checked={*analytics}
                            on_toggle={toggle_analytics}
                        />
                        <ToggleRow
                            title="Marketing"
                            description="Deliver relevant campaigns and perks"
                            checked={*marketing}
                            on_toggle={toggle_marketing}
                        />
                    </div>
                }

                <div class="cookie-actions">
                    <button class="button-primary small" onclick={accept}>{"Accept"}</button>
                    <button class="button-outline small" onclick={decline}>{"Decline"}</button>
                    <button class="button-ghost small" onclick={toggle_advanced}>
                        { if *advanced { "Hide preferences" } else { "Customize" } }
                    </button>
                    <p class="cookie-footnote">
                        {"Your choice is saved on this device."}
                    </p>
                </div>
            </div>
        </div>
    }
}
