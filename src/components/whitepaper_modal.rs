use yew::prelude::*;

use crate::data::whitepaper::{generated_points, WHITEPAPER_SECTIONS, WHITEPAPER_VERSION};
use crate::i18n::{t, Key, Language};
use crate::modals::use_dismiss;

#[derive(Properties, PartialEq)]
pub struct WhitepaperModalProps {
    /// `None` keeps the reader closed.
    pub language: Option<Language>,
    pub on_close: Callback<()>,
}

/// In-page whitepaper reader. Its language and text direction come from the
/// edition that opened it, not from the site language.
#[function_component(WhitepaperModal)]
pub fn whitepaper_modal(props: &WhitepaperModalProps) -> Html {
    let dialog = use_node_ref();
    use_dismiss(dialog.clone(), props.language.is_some(), props.on_close.clone());

    let Some(language) = props.language else {
        return html! {};
    };
    let dir = language.dir();
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-overlay" role="dialog" aria-modal="true" aria-labelledby="whitepaper-modal-title">
            <div class="modal-content whitepaper-modal" ref={dialog} {dir} lang={language.code()}>
                <div class="modal-header">
                    <h3 id="whitepaper-modal-title">{t(language, Key::WhitepaperTitle)}</h3>
                    <button class="modal-close" aria-label="Close" onclick={close}>{"✕"}</button>
                </div>
                <p class="whitepaper-version">{WHITEPAPER_VERSION}</p>
                <div class="whitepaper-body">
                    { for WHITEPAPER_SECTIONS.iter().map(|section| {
                        let generated = generated_points(section.title);
                        html! {
                            <section class="whitepaper-section" key={section.title}>
                                <h2>{section.title}</h2>
                                { for section.paragraphs.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                                if !section.points.is_empty() || !generated.is_empty() {
                                    <dl class="whitepaper-points">
                                        { for section.points.iter().map(|(term, detail)| html! {
                                            <><dt>{*term}</dt><dd>{*detail}</dd></>
                                        }) }
                                        { for generated.into_iter().map(|(term, detail)| html! {
                                            <><dt>{term}</dt><dd>{detail}</dd></>
                                        }) }
                                    </dl>
                                }
                            </section>
                        }
                    }) }
                </div>
            </div>
        </div>
    }
}
