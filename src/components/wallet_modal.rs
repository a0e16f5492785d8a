use yew::prelude::*;

use crate::data::content::WALLETS;
use crate::modals::use_dismiss;

#[derive(Properties, PartialEq)]
pub struct WalletModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(WalletModal)]
pub fn wallet_modal(props: &WalletModalProps) -> Html {
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
        <div class="modal-overlay" role="dialog" aria-modal="true" aria-labelledby="wallet-modal-title">
            <div class="modal-content wallet-modal" ref={dialog}>
                <div class="modal-header">
                    <h3 id="wallet-modal-title">{"Connect a Solana wallet"}</h3>
                    <button class="modal-close" aria-label="Close" onclick={close}>{"✕"}</button>
                </div>
                <p class="modal-description">
                    {"HTTCoin launches on Solana. Pick a wallet to get ready for December 1, 2025."}
                </p>
                <ul class="wallet-list">
                    { for WALLETS.iter().map(|wallet| html! {
                        <li key={wallet.name}>
                            <a class="wallet-option" href={wallet.url} target="_blank" rel="noopener noreferrer">
                                <div>
                                    <span class="wallet-name">{wallet.name}</span>
                                    if let Some(badge) = wallet.badge {
                                        <span class="wallet-badge">{badge}</span>
                                    }
                                </div>
                                <p class="wallet-description">{wallet.description}</p>
                            </a>
                        </li>
                    }) }
                </ul>
            </div>
        </div>
    }
}
