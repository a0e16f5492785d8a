use std::rc::Rc;

use log::{info, Level};
use web_sys::{window, HtmlSelectElement, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

mod config;
mod email;
mod i18n;
mod modals;
mod preferences;
mod carousel {
    pub mod window;
    pub mod state;
    pub mod autoplay;
    pub mod scroll;
    pub mod hooks;
}
mod data {
    pub mod gallery;
    pub mod content;
    pub mod whitepaper;
    pub mod blog;
}
mod components {
    pub mod announcement_bar;
    pub mod buy_modal;
    pub mod cards_carousel;
    pub mod community;
    pub mod cookie_banner;
    pub mod countdown;
    pub mod destinations_gallery;
    pub mod roadmap;
    pub mod tokenomics_chart;
    pub mod wallet_modal;
    pub mod whitepaper_modal;
}
mod pages {
    pub mod home;
    pub mod destinations;
    pub mod tokenomics;
    pub mod partnerships;
    pub mod how_to_buy;
    pub mod staking;
    pub mod about;
    pub mod debit_card;
    pub mod whitepaper;
    pub mod blog;
    pub mod not_found;
}

use components::{
    announcement_bar::AnnouncementBar,
    buy_modal::BuyModal,
    cookie_banner::CookieBanner,
    wallet_modal::WalletModal,
    whitepaper_modal::WhitepaperModal,
};
use data::content::SOCIALS;
use i18n::{t, Key, Language};
use modals::{Modal, ModalContext, ModalState};
use pages::{
    about::About,
    blog::Blog,
    debit_card::DebitCard,
    destinations::Destinations,
    home::Home,
    how_to_buy::HowToBuy,
    not_found::NotFound,
    partnerships::Partnerships,
    staking::Staking,
    tokenomics::Tokenomics,
    whitepaper::Whitepaper,
};
use preferences::{apply_to_document, open_preference_store, PreferenceStore, Preferences, PreferencesContext};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/destinations")]
    Destinations,
    #[at("/tokenomics")]
    Tokenomics,
    #[at("/partnerships")]
    Partnerships,
    #[at("/how-to-buy")]
    HowToBuy,
    #[at("/about")]
    About,
    #[at("/staking")]
    Staking,
    #[at("/whitepaper")]
    Whitepaper,
    #[at("/debit-card")]
    DebitCard,
    #[at("/blog")]
    Blog,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Destinations => {
            info!("Rendering Destinations page");
            html! { <Destinations /> }
        },
        Route::Tokenomics => {
            info!("Rendering Tokenomics page");
            html! { <Tokenomics /> }
        },
        Route::Partnerships => {
            info!("Rendering Partnerships page");
            html! { <Partnerships /> }
        },
        Route::HowToBuy => {
            info!("Rendering HowToBuy page");
            html! { <HowToBuy /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Staking => {
            info!("Rendering Staking page");
            html! { <Staking /> }
        },
        Route::Whitepaper => {
            info!("Rendering Whitepaper page");
            html! { <Whitepaper /> }
        },
        Route::DebitCard => {
            info!("Rendering DebitCard page");
            html! { <DebitCard /> }
        },
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

const NAV_LINKS: &[(Route, Key)] = &[
    (Route::Home, Key::NavHome),
    (Route::Destinations, Key::NavDestinations),
    (Route::Tokenomics, Key::NavTokenomics),
    (Route::Partnerships, Key::NavPartnerships),
    (Route::HowToBuy, Key::NavHowToBuy),
    (Route::Staking, Key::NavStaking),
    (Route::DebitCard, Key::NavDebitCard),
    (Route::Whitepaper, Key::NavWhitepaper),
    (Route::Blog, Key::NavBlog),
    (Route::About, Key::NavAbout),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let modals = use_context::<ModalContext>();
    let prefs = use_context::<PreferencesContext>();
    let current = prefs.as_ref().map(|p| p.get()).unwrap_or_default();
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > 40.0;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let toggle_theme = {
        let prefs = prefs.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(prefs) = prefs.as_ref() {
                prefs.set_theme(prefs.get().theme.toggled());
            }
        })
    };

    let change_language = {
        let prefs = prefs.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let (Some(prefs), Some(language)) = (prefs.as_ref(), Language::from_code(&select.value())) {
                info!("Switching language to {}", language.code());
                prefs.set_language(language);
            }
        })
    };

    let open_modal = |modal: Modal| {
        let modals = modals.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            if let Some(modals) = modals.as_ref() {
                modals.open(modal);
            }
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img src={config::asset_url("logo.jpeg")} alt="HTTCoin" />
                    {"HTTCoin"}
                </Link<Route>>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_LINKS.iter().map(|(route, key)| html! {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={route.clone()} classes="nav-link">
                                {t(current.language, *key)}
                            </Link<Route>>
                        </div>
                    }) }
                    <select class="nav-language" aria-label="Language" onchange={change_language}>
                        { for Language::ALL.into_iter().map(|language| html! {
                            <option value={language.code()} selected={language == current.language}>
                                {language.code().to_uppercase()}
                            </option>
                        }) }
                    </select>
                    <button class="nav-theme-toggle" aria-label="Toggle theme" onclick={toggle_theme}>
                        { if current.theme == preferences::Theme::Dark { "☀" } else { "☾" } }
                    </button>
                    <button class="nav-buy-button" onclick={open_modal(Modal::Buy)}>
                        {t(current.language, Key::BuyHttc)}
                    </button>
                    <button class="nav-connect-button" onclick={open_modal(Modal::Wallet)}>
                        {t(current.language, Key::ConnectWallet)}
                    </button>
                </div>
            </div>
        </nav>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let contact = email::contact_email_link("HTTCoin inquiry", "");
    html! {
        <footer class="site-footer">
            <div class="footer-socials">
                { for SOCIALS.iter().map(|(name, _, url)| html! {
                    <a href={*url} target="_blank" rel="noopener noreferrer">{*name}</a>
                }) }
            </div>
            <a class="footer-contact" href={contact}>{"Contact us"}</a>
            <p class="footer-legal">{"© 2025 HTTCoin. Crypto assets are volatile; do your own research."}</p>
        </footer>
    }
}

fn browser_language() -> Language {
    window()
        .and_then(|w| w.navigator().language())
        .and_then(|code| Language::from_code(&code))
        .unwrap_or_default()
}

#[function_component]
fn App() -> Html {
    let store: Rc<dyn PreferenceStore> = (*use_memo(|_| open_preference_store(), ())).clone();
    let current = {
        let store = store.clone();
        use_state(move || Preferences::load(store.as_ref(), browser_language()))
    };
    let context = PreferencesContext::new(current.clone(), store);
    let modals = ModalContext::new(use_reducer(ModalState::default));
    let open = modals.state();

    use_effect_with_deps(
        move |preferences| {
            apply_to_document(preferences);
            || ()
        },
        *current,
    );

    let on_close = modals.on_close();

    html! {
        <ContextProvider<PreferencesContext> {context}>
            <ContextProvider<ModalContext> context={modals}>
                <BrowserRouter>
                    <AnnouncementBar />
                    <Nav />
                    <main>
                        <Switch<Route> render={switch} />
                    </main>
                    <Footer />
                    <WalletModal open={open.is_open(Modal::Wallet)} on_close={on_close.clone()} />
                    <BuyModal open={open.is_open(Modal::Buy)} on_close={on_close.clone()} />
                    <WhitepaperModal language={open.whitepaper_language()} {on_close} />
                    <CookieBanner />
                </BrowserRouter>
            </ContextProvider<ModalContext>>
        </ContextProvider<PreferencesContext>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
