use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::email::{contact_email_link, create_form_email_body, open_email_link};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StakingPool {
    pub label: &'static str,
    pub days: u32,
    pub apy: f64,
}

pub const POOLS: [StakingPool; 4] = [
    StakingPool { label: "30 days", days: 30, apy: 12.0 },
    StakingPool { label: "90 days", days: 90, apy: 16.0 },
    StakingPool { label: "180 days", days: 180, apy: 20.0 },
    StakingPool { label: "365 days", days: 365, apy: 25.0 },
];

const DEFAULT_POOL: usize = 2;
pub const MIN_STAKE: f64 = 1_000.0;
pub const MAX_STAKE: f64 = 200_000.0;
const STAKE_STEP: f64 = 1_000.0;
const DEFAULT_STAKE: f64 = 10_000.0;

const BENEFITS: &[&str] = &[
    "Earn additional HTT rewards",
    "Support network security",
    "Unlock exclusive debit card tiers",
    "Early access to new features",
    "Voting rights in governance",
];

const FAQ: &[(&str, &str)] = &[
    ("When will staking launch?", "Q3 2026 with phased regional availability."),
    ("Is there a minimum stake?", "Yes, 1,000 HTT to participate in any pool."),
    ("Can I unstake early?", "Early exits incur a penalty and forfeit rewards."),
    ("How are rewards calculated?", "Rewards accrue daily and can be compounded."),
];

/// Yearly reward for staking `amount` HTT in `pool`: `amount * apy / 100`.
pub fn estimated_rewards(amount: f64, pool: &StakingPool) -> f64 {
    amount * pool.apy / 100.0
}

/// Two decimals with thousands separators, e.g. `2,000.00`.
pub fn format_htt(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::new();
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, cents)
}

/// Parses the amount field; empty or invalid input counts as 0. The slider
/// range does not bound typed values.
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim()
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount >= 0.0)
        .unwrap_or(0.0)
}

pub fn notify_link(email: &str) -> String {
    let body = create_form_email_body(&[
        ("Email", email),
        ("Request", "Staking launch notification"),
        ("Page", "Staking"),
    ]);
    contact_email_link("HTTCoin Staking Waitlist", &body)
}

#[function_component(Staking)]
pub fn staking() -> Html {
    let amount = use_state(|| DEFAULT_STAKE);
    let pool_index = use_state(|| DEFAULT_POOL);
    let open_faq = use_state(|| None::<usize>);
    let email = use_state(String::new);
    let notified = use_state(|| false);

    let pool = POOLS[(*pool_index).min(POOLS.len() - 1)];
    let rewards = estimated_rewards(*amount, &pool);

    let on_amount = {
        let amount = amount.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(parse_amount(&input.value()));
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_notify = {
        let email = email.clone();
        let notified = notified.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let address = email.trim();
            if address.is_empty() {
                return;
            }
            open_email_link(&notify_link(address));
            email.set(String::new());
            notified.set(true);
        })
    };

    html! {
        <div class="staking-page">
            <section class="staking-hero">
                <p class="eyebrow">{"Coming Q3 2026"}</p>
                <h1>{"Stake HTTCoin, earn while you travel"}</h1>
                <p>{"Lock HTT in flexible pools to earn rewards, support the network and unlock premium travel perks."}</p>
            </section>

            <section class="staking-calculator">
                <h2>{"Rewards calculator"}</h2>
                <label for="stake-amount">{"Amount (HTT)"}</label>
                <input
                    id="stake-amount"
                    type="number"
                    min={MIN_STAKE.to_string()}
                    value={amount.to_string()}
                    oninput={on_amount.clone()}
                />
                <input
                    type="range"
                    aria-label="Amount slider"
                    min={MIN_STAKE.to_string()}
                    max={MAX_STAKE.to_string()}
                    step={STAKE_STEP.to_string()}
                    value={amount.to_string()}
                    oninput={on_amount}
                />
                <div class="staking-pools">
                    { for POOLS.iter().enumerate().map(|(index, candidate)| {
                        let onclick = {
                            let pool_index = pool_index.clone();
                            Callback::from(move |_: MouseEvent| pool_index.set(index))
                        };
                        html! {
                            <button
                                key={candidate.days}
                                class={classes!("staking-pool", (index == *pool_index).then(|| "active"))}
                                {onclick}
                            >
                                <span class="pool-label">{candidate.label}</span>
                                <span class="pool-apy">{format!("{}% APY", candidate.apy)}</span>
                            </button>
                        }
                    }) }
                </div>
                <p class="staking-estimate">
                    {"Estimated yearly rewards: "}
                    <strong>{format!("{} HTT", format_htt(rewards))}</strong>
                </p>
                if *amount < MIN_STAKE {
                    <p class="staking-warning">{"The minimum stake is 1,000 HTT."}</p>
                }
            </section>

            <section class="staking-benefits">
                <h2>{"Why stake"}</h2>
                <ul>
                    { for BENEFITS.iter().map(|benefit| html! { <li>{"✓ "}{*benefit}</li> }) }
                </ul>
            </section>

            <section class="staking-faq">
                <h2>{"Staking FAQ"}</h2>
                { for FAQ.iter().enumerate().map(|(index, (question, answer))| {
                    let expanded = *open_faq == Some(index);
                    let onclick = {
                        let open_faq = open_faq.clone();
                        Callback::from(move |_: MouseEvent| {
                            open_faq.set(if expanded { None } else { Some(index) })
                        })
                    };
                    html! {
                        <div class="faq-item" key={index}>
                            <button class="faq-question" aria-expanded={expanded.to_string()} {onclick}>
                                {*question}
                            </button>
                            if expanded {
                                <p class="faq-answer">{*answer}</p>
                            }
                        </div>
                    }
                }) }
            </section>

            <section class="staking-notify">
                <h2>{"Notify me at launch"}</h2>
                <p>{"Leave your email to join the early staking beta."}</p>
                <form onsubmit={on_notify}>
                    <input
                        type="email"
                        required=true
                        placeholder="you@example.com"
                        value={(*email).clone()}
                        oninput={on_email}
                    />
                    <button type="submit" class="button-primary">{"Notify me"}</button>
                </form>
                if *notified {
                    <p class="form-confirmation">{"Thanks! We'll email you when staking opens."}</p>
                }
            </section>

            <style>
                {r#"
                    .staking-page {
                        padding: 8rem 1.5rem 4rem;
                        max-width: 960px;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        gap: 4rem;
                    }
                    .staking-pools {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 0.75rem;
                        margin: 1.5rem 0;
                    }
                    .staking-pool.active {
                        border-color: #00f0ff;
                    }
                    @media (max-width: 768px) {
                        .staking-pools {
                            grid-template-columns: repeat(2, 1fr);
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
    fn rewards_are_amount_times_apy() {
        assert_eq!(estimated_rewards(10_000.0, &POOLS[0]), 1_200.0);
        assert_eq!(estimated_rewards(10_000.0, &POOLS[1]), 1_600.0);
        assert_eq!(estimated_rewards(10_000.0, &POOLS[2]), 2_000.0);
        assert_eq!(estimated_rewards(10_000.0, &POOLS[3]), 2_500.0);
        assert_eq!(estimated_rewards(0.0, &POOLS[3]), 0.0);
    }

    #[test]
    fn default_selection_is_the_180_day_pool() {
        assert_eq!(POOLS[DEFAULT_POOL].days, 180);
        assert_eq!(
            format_htt(estimated_rewards(DEFAULT_STAKE, &POOLS[DEFAULT_POOL])),
            "2,000.00"
        );
    }

    #[test]
    fn formats_two_decimals_with_grouping() {
        assert_eq!(format_htt(0.0), "0.00");
        assert_eq!(format_htt(123.456), "123.46");
        assert_eq!(format_htt(50_000.0), "50,000.00");
        assert_eq!(format_htt(1_234_567.891), "1,234,567.89");
    }

    #[test]
    fn amount_parsing_tolerates_junk() {
        assert_eq!(parse_amount("15000"), 15_000.0);
        assert_eq!(parse_amount(" 25,000 "), 25_000.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("-5"), 0.0);
    }

    #[test]
    fn notify_link_names_the_page() {
        let link = notify_link("a@b.co");
        assert!(link.contains("subject=HTTCoin%20Staking%20Waitlist"));
        assert!(link.contains("Page%3A%20Staking"));
    }
}
