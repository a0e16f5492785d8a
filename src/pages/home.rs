use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::community::Community;
use crate::components::countdown::Countdown;
use crate::components::destinations_gallery::DestinationsGallery;
use crate::components::roadmap::Roadmap;
use crate::components::tokenomics_chart::TokenomicsChart;
use crate::data::content::UPCOMING_PARTNERS;
use crate::i18n::{t, Key};
use crate::modals::{use_open_modal, Modal};
use crate::preferences::PreferencesContext;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    let language = use_context::<PreferencesContext>()
        .map(|prefs| prefs.get().language)
        .unwrap_or_default();

    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let connect = use_open_modal::<MouseEvent>(Modal::Wallet);
    let buy = use_open_modal::<MouseEvent>(Modal::Buy);

    html! {
        <div class="home-page">
            <section class="hero">
                <div class="hero-content">
                    <h1 class="hero-title">{t(language, Key::HeroTitle)}</h1>
                    <p class="hero-subtitle">{t(language, Key::HeroSubtitle)}</p>
                    <p class="hero-countdown-label">{t(language, Key::LaunchCountdown)}</p>
                    <Countdown />
                    <div class="hero-actions">
                        <Link<Route> to={Route::HowToBuy} classes="button-primary">
                            {t(language, Key::NavHowToBuy)}
                        </Link<Route>>
                        <button class="button-primary" onclick={buy}>
                            {t(language, Key::BuyHttc)}
                        </button>
                        <button class="button-outline" onclick={connect}>
                            {t(language, Key::ConnectWallet)}
                        </button>
                        <Link<Route> to={Route::Whitepaper} classes="button-outline">
                            {t(language, Key::ReadWhitepaper)}
                        </Link<Route>>
                    </div>
                </div>
            </section>

            <DestinationsGallery />

            <section id="tokenomics" class="home-tokenomics">
                <h2 class="section-title">{t(language, Key::NavTokenomics)}</h2>
                <TokenomicsChart />
                <Link<Route> to={Route::Tokenomics} classes="section-link">{"Full tokenomics"}</Link<Route>>
            </section>

            <Roadmap />

            <section id="partners" class="partners-section">
                <h2 class="section-title">{t(language, Key::NavPartnerships)}</h2>
                <div class="partner-spotlight">
                    <h3>{"Qatar Airways"}</h3>
                    <p>{"Our flagship airline partner. HTTC holders unlock premium perks on selected routes."}</p>
                </div>
                <div class="partner-grid">
                    { for UPCOMING_PARTNERS.iter().map(|(name, description)| html! {
                        <div class="partner-card" key={*name}>
                            <span class="partner-soon">{"Coming soon"}</span>
                            <h4>{*name}</h4>
                            <p>{*description}</p>
                        </div>
                    }) }
                </div>
                <Link<Route> to={Route::Partnerships} classes="section-link">{"Become a partner"}</Link<Route>>
            </section>

            <Community />

            <style>
                {r#"
                    .home-page {
                        display: flex;
                        flex-direction: column;
                        gap: 6rem;
                        padding-bottom: 4rem;
                    }
                    .hero {
                        min-height: 90vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 8rem 1.5rem 2rem;
                    }
                    .hero-title {
                        font-size: clamp(2.5rem, 6vw, 4.5rem);
                        margin-bottom: 1rem;
                    }
                    .hero-subtitle {
                        color: var(--muted);
                        font-size: 1.2rem;
                        margin-bottom: 2.5rem;
                    }
                    .hero-actions {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        margin-top: 2.5rem;
                        flex-wrap: wrap;
                    }
                    .partner-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                        gap: 1rem;
                    }
                    @media (max-width: 768px) {
                        .hero {
                            padding-top: 6rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
