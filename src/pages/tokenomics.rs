use yew::prelude::*;

use crate::components::tokenomics_chart::TokenomicsChart;
use crate::data::content::DISTRIBUTION;

#[function_component(Tokenomics)]
pub fn tokenomics() -> Html {
    html! {
        <div class="tokenomics-page">
            <section class="tokenomics-intro">
                <h1>{"Tokenomics"}</h1>
                <p>
                    {"A fixed supply of one billion HTTC on Solana. 10% of supply is burned before launch, \
                      and travel rewards are paid from a dedicated pool."}
                </p>
            </section>

            <TokenomicsChart />

            <section class="tokenomics-breakdown">
                { for DISTRIBUTION.iter().map(|allocation| html! {
                    <div class="allocation-row" key={allocation.name}>
                        <span class="allocation-name">{allocation.name}</span>
                        <div class="allocation-bar">
                            <div class="allocation-fill" style={format!("width: {}%;", allocation.percent)}></div>
                        </div>
                        <span class="allocation-percent">{format!("{}%", allocation.percent)}</span>
                    </div>
                }) }
            </section>

            <style>
                {r#"
                    .tokenomics-page {
                        padding: 8rem 1.5rem 4rem;
                        max-width: 960px;
                        margin: 0 auto;
                    }
                    .allocation-row {
                        display: grid;
                        grid-template-columns: 160px 1fr 60px;
                        gap: 1rem;
                        align-items: center;
                        margin-bottom: 0.75rem;
                    }
                    .allocation-bar {
                        height: 8px;
                        border-radius: 4px;
                        background: rgba(255, 255, 255, 0.1);
                    }
                    .allocation-fill {
                        height: 100%;
                        border-radius: 4px;
                        background: linear-gradient(90deg, #00f0ff, #9d6bff);
                    }
                "#}
            </style>
        </div>
    }
}
