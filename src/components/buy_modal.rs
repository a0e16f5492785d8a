use yew::prelude::*;

use crate::config;
use crate::data::content::BUY_PLATFORMS;
use crate::modals::use_dismiss;

#[derive(Properties, PartialEq)]
pub struct BuyModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

/// Links out to the exchanges listing HTTC.
#[function_component(BuyModal)]
pub fn buy_modal(props: &BuyModalProps) -> Html {
    let dialog = use_node_ref();
    use_dismiss(dialog.clone(), props.open, props.on_close.clone());

    if !props.open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-overlay" role="dialog" aria-modal="true" aria-labelledby="buy-modal-title">
            <div class="modal-content buy-modal" ref={dialog}>
                <div class="modal-header">
                    <h3 id="buy-modal-title">{"Buy HTTCoin"}</h3>
                    <button class="modal-close" aria-label="Close" onclick={close.clone()}>{"✕"}</button>
                </div>
                <p class="modal-description">
                    {"Choose a platform to proceed. You'll be redirected to the selected site."}
                </p>
                <div class="buy-platforms">
                    { for BUY_PLATFORMS.iter().map(|venue| html! {
                        <a
                            key={venue.name}
                            class="buy-platform"
                            href={venue.url}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            <img src={config::asset_url(venue.logo)} alt={venue.name} />
                            <span>{venue.name}</span>
                        </a>
                    }) }
                </div>
                <button class="button-outline" onclick={close}>{"Close"}</button>
            </div>
        </div>
    }
}
