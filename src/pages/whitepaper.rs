use yew::prelude::*;

use crate::data::whitepaper::{QUICK_SUMMARY, WHITEPAPER_EDITIONS, WHITEPAPER_TOC, WHITEPAPER_VERSION};
use crate::i18n::{t, Key};
use crate::modals::{Modal, ModalContext};
use crate::preferences::PreferencesContext;

const SHARE_TEXT: &str = "Read the HTTCoin whitepaper";
const FALLBACK_URL: &str = "https://httcoin.com/whitepaper";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SharePlatform {
    Twitter,
    LinkedIn,
    Telegram,
}

impl SharePlatform {
    pub const ALL: [SharePlatform; 3] = [SharePlatform::Twitter, SharePlatform::LinkedIn, SharePlatform::Telegram];

    pub fn label(self) -> &'static str {
        match self {
            SharePlatform::Twitter => "Twitter",
            SharePlatform::LinkedIn => "LinkedIn",
            SharePlatform::Telegram => "Telegram",
        }
    }

    /// Share-intent URL for `page_url`.
    pub fn share_url(self, page_url: &str, text: &str) -> String {
        let url = urlencoding::encode(page_url);
        let text = urlencoding::encode(text);
        match self {
            SharePlatform::Twitter => format!("https://twitter.com/intent/tweet?url={}&text={}", url, text),
            SharePlatform::LinkedIn => format!("https://www.linkedin.com/sharing/share-offsite/?url={}", url),
            SharePlatform::Telegram => format!("https://t.me/share/url?url={}&text={}", url, text),
        }
    }
}

fn current_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_else(|| FALLBACK_URL.to_string())
}

#[function_component(Whitepaper)]
pub fn whitepaper() -> Html {
    let language = use_context::<PreferencesContext>()
        .map(|prefs| prefs.get().language)
        .unwrap_or_default();
    let modals = use_context::<ModalContext>();
    let page_url = use_memo(|_| current_url(), ());

    let open_edition = |edition| match modals.as_ref() {
        Some(modals) => modals.on_open::<MouseEvent>(Modal::Whitepaper(edition)),
        None => Callback::noop(),
    };

    html! {
        <div class="whitepaper-page">
            <section class="whitepaper-hero">
                <p class="eyebrow">{WHITEPAPER_VERSION}</p>
                <h1>{t(language, Key::WhitepaperTitle)}</h1>
                <p>
                    {"Explore the technical documentation, token economics, and long-term vision driving HTTCoin's travel-focused ecosystem."}
                </p>
                <div class="whitepaper-editions">
                    <button class="button-primary" onclick={open_edition(language)}>
                        {t(language, Key::ReadWhitepaper)}
                    </button>
                    { for WHITEPAPER_EDITIONS.iter().map(|(label, edition)| html! {
                        <button key={*label} class="button-outline" onclick={open_edition(*edition)}>
                            {"⬇ "}{*label}
                        </button>
                    }) }
                </div>
            </section>

            <section class="whitepaper-layout">
                <div class="whitepaper-viewer">
                    <div class="whitepaper-viewer-header">
                        <h2>{"Embedded PDF Viewer"}</h2>
                    </div>
                    <div class="whitepaper-viewer-body">{"PDF viewer coming soon"}</div>
                </div>
                <aside class="whitepaper-toc">
                    <h3>{"Table of Contents"}</h3>
                    <ol>
                        { for WHITEPAPER_TOC.iter().map(|item| html! { <li>{*item}</li> }) }
                    </ol>
                </aside>
            </section>

            <section class="whitepaper-summary">
                { for QUICK_SUMMARY.iter().map(|(title, value)| html! {
                    <div class="summary-tile" key={*title}>
                        <p class="summary-title">{*title}</p>
                        <p class="summary-value">{*value}</p>
                    </div>
                }) }
            </section>

            <section class="whitepaper-share">
                <h3>{"Share"}</h3>
                <div class="share-links">
                    { for SharePlatform::ALL.into_iter().map(|platform| html! {
                        <a
                            class="button-outline"
                            href={platform.share_url(&page_url, SHARE_TEXT)}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {platform.label()}
                        </a>
                    }) }
                </div>
                <h3>{"Related documents"}</h3>
                <ul>
                    <li>{"• Tokenomics spreadsheet"}</li>
                    <li>{"• Audit report (coming soon)"}</li>
                    <li>{"• Legal opinion"}</li>
                    <li>{"• Partnership agreements (public versions)"}</li>
                </ul>
            </section>

            <style>
                {r#"
                    .whitepaper-page {
                        padding: 8rem 1.5rem 4rem;
                        max-width: 1100px;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        gap: 4rem;
                    }
                    .whitepaper-layout {
                        display: grid;
                        grid-template-columns: 2fr 1fr;
                        gap: 2.5rem;
                    }
                    .whitepaper-viewer-body {
                        height: 600px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .whitepaper-summary {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1rem;
                    }
                    @media (max-width: 768px) {
                        .whitepaper-layout,
                        .whitepaper-summary {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_urls_encode_the_page() {
        let page = "https://httcoin.com/whitepaper?lang=ar";
        assert_eq!(
            SharePlatform::LinkedIn.share_url(page, SHARE_TEXT),
            "https://www.linkedin.com/sharing/share-offsite/?url=https%3A%2F%2Fhttcoin.com%2Fwhitepaper%3Flang%3Dar"
        );
        let tweet = SharePlatform::Twitter.share_url(page, SHARE_TEXT);
        assert!(tweet.starts_with("https://twitter.com/intent/tweet?url=https%3A%2F%2F"));
        assert!(tweet.ends_with("&text=Read%20the%20HTTCoin%20whitepaper"));
        assert!(SharePlatform::Telegram.share_url(page, "hi").starts_with("https://t.me/share/url?url="));
    }

    #[test]
    fn editions_cover_four_languages() {
        let languages: Vec<_> = WHITEPAPER_EDITIONS.iter().map(|(_, language)| *language).collect();
        assert_eq!(languages.len(), 4);
        assert!(!languages.contains(&crate::i18n::Language::Ar));
    }
}
