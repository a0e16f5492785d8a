use yew::prelude::*;

use crate::data::content::{BUY_STEPS, WALLETS};
use crate::modals::{use_open_modal, Modal};

#[function_component(HowToBuy)]
pub fn how_to_buy() -> Html {
    let connect = use_open_modal::<MouseEvent>(Modal::Wallet);
    let buy = use_open_modal::<MouseEvent>(Modal::Buy);

    html! {
        <div class="how-to-buy-page">
            <h1>{"How to buy HTTC"}</h1>
            <ol class="buy-steps">
                { for BUY_STEPS.iter().enumerate().map(|(index, (title, detail))| html! {
                    <li class="buy-step" key={index}>
                        <span class="buy-step-number">{index + 1}</span>
                        <div>
                            <h3>{*title}</h3>
                            <p>{*detail}</p>
                        </div>
                    </li>
                }) }
            </ol>
            <p class="buy-wallets">
                {format!("Supported wallets: {}", WALLETS.iter().map(|w| w.name).collect::<Vec<_>>().join(", "))}
            </p>
            <div class="buy-actions">
                <button class="button-primary" onclick={connect}>{"Choose a wallet"}</button>
                <button class="button-outline" onclick={buy}>{"Where to trade"}</button>
            </div>

            <style>
                {r#"
                    .how-to-buy-page {
                        padding: 8rem 1.5rem 4rem;
                        max-width: 760px;
                        margin: 0 auto;
                    }
                    .buy-step {
                        display: flex;
                        gap: 1.25rem;
                        margin-bottom: 2rem;
                    }
                    .buy-step-number {
                        flex: 0 0 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #00f0ff;
                        color: #000;
                        font-weight: 700;
                    }
                "#}
            </style>
        </div>
    }
}
