use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;
use crate::email::{contact_email_link, create_form_email_body, open_email_link};

const FEATURES: &[(&str, &str)] = &[
    ("Global Acceptance", "Spend anywhere VISA is accepted across 200+ countries."),
    ("Instant Conversion", "HTT auto-converts to local currency when you tap to pay."),
    ("4% Cashback", "Earn HTT rewards instantly on every purchase worldwide."),
    ("Zero FX Fees", "Travel freely with no surprise international transaction fees."),
    ("Contactless Ready", "Works with Apple Pay, Google Pay, and wearable devices."),
    ("Security First", "Freeze cards instantly, biometric protection, 24/7 fraud monitoring."),
    ("Crypto + Fiat Balances", "Hold HTT, SOL, and major fiat currencies in one dashboard."),
    ("Exclusive Perks", "Airport lounge access, travel insurance, and hotel upgrades."),
];

const STEPS: &[(&str, &str)] = &[
    ("Load HTT", "Top up directly from your wallet or DEX."),
    ("Spend Anywhere", "Tap, swipe, or use mobile wallets globally."),
    ("Earn Rewards", "Cashback in HTT lands instantly in your account."),
];

struct Tier {
    name: &'static str,
    requirement: &'static str,
    perks: &'static [&'static str],
}

const TIERS: &[Tier] = &[
    Tier {
        name: "Standard",
        requirement: "Free",
        perks: &["4% cashback", "Zero FX fees", "Mobile app access", "Virtual & physical card"],
    },
    Tier {
        name: "Gold",
        requirement: "Stake 100K HTT",
        perks: &["6% cashback on travel", "Priority boarding perks", "Lounge access 4x/year", "Dedicated concierge"],
    },
    Tier {
        name: "Platinum",
        requirement: "Stake 500K HTT",
        perks: &["8% cashback", "Unlimited lounge access", "Travel insurance included", "VIP partner upgrades"],
    },
];

/// Feature, HTTCoin card, traditional credit, other crypto cards.
const COMPARISON: &[[&str; 4]] = &[
    ["Rewards", "4-8% in HTT", "1-3% points", "Up to 2%"],
    ["FX Fees", "0%", "2-4%", "Varies"],
    ["Settlement", "Instant", "2-3 days", "Instant"],
    ["Perks", "Travel-focused", "Generic", "Limited"],
    ["Security", "Biometric + freeze", "Card network", "Wallet only"],
];

const FAQ: &[(&str, &str)] = &[
    ("When will the card launch?", "Q2 2026 with phased regional expansion."),
    ("Is it a debit or credit card?", "It is a debit card powered by your HTT balance."),
    ("Which countries are supported?", "Initial launch in EU, GCC, and North America."),
    ("How do rewards work?", "Cashback is distributed instantly in HTT to your wallet."),
    ("What are the fees?", "No annual fee for Standard. Premium tiers require staking."),
];

#[derive(Clone, Default, PartialEq)]
pub struct WaitlistEntry {
    pub name: String,
    pub email: String,
    pub country: String,
}

impl WaitlistEntry {
    pub fn mailto_link(&self) -> String {
        let body = create_form_email_body(&[
            ("Name", self.name.as_str()),
            ("Email", self.email.as_str()),
            ("Country", self.country.as_str()),
            ("Page", "Debit Card Waitlist"),
        ]);
        contact_email_link("HTTCoin Debit Card Waitlist", &body)
    }
}

#[function_component(DebitCard)]
pub fn debit_card() -> Html {
    let entry = use_state(WaitlistEntry::default);
    let joined = use_state(|| false);
    let open_faq = use_state(|| None::<usize>);

    let field = |edit: fn(&mut WaitlistEntry, String)| {
        let entry = entry.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*entry).clone();
            edit(&mut next, input.value());
            entry.set(next);
        })
    };
    let on_name = field(|entry, value| entry.name = value);
    let on_email = field(|entry, value| entry.email = value);
    let on_country = field(|entry, value| entry.country = value);

    let onsubmit = {
        let entry = entry.clone();
        let joined = joined.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if entry.email.trim().is_empty() {
                return;
            }
            open_email_link(&entry.mailto_link());
            entry.set(WaitlistEntry::default());
            joined.set(true);
        })
    };

    html! {
        <div class="debit-card-page">
            <section class="debit-hero">
                <div>
                    <p class="eyebrow">{"Coming Q2 2026"}</p>
                    <h1>{"The HTTCoin Debit Card"}</h1>
                    <p>
                        {"Spend your crypto anywhere, earn instant HTT rewards, and unlock premium travel perks with zero conversion fees."}
                    </p>
                    <a class="button-primary" href="#waitlist">{"Join Waitlist"}</a>
                </div>
                <div class="debit-card-visual">
                    <img class="card-back" src={config::asset_url("card2.png")} alt="HTTCoin Card Back" />
                    <img class="card-front" src={config::asset_url("card.png")} alt="HTTCoin Card Front" />
                </div>
            </section>

            <section class="debit-features">
                <h2>{"Features built for travelers"}</h2>
                <div class="debit-grid">
                    { for FEATURES.iter().map(|(title, description)| html! {
                        <div class="debit-tile" key={*title}>
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="debit-steps">
                <h2>{"How it works"}</h2>
                <div class="debit-grid">
                    { for STEPS.iter().enumerate().map(|(index, (title, description))| html! {
                        <div class="debit-tile" key={*title}>
                            <p class="step-number">{format!("Step {}", index + 1)}</p>
                            <h3>{format!("{}. {}", index + 1, title)}</h3>
                            <p>{*description}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="debit-tiers">
                <h2>{"Tiered experiences"}</h2>
                <div class="debit-grid">
                    { for TIERS.iter().map(|tier| html! {
                        <div class="debit-tile" key={tier.name}>
                            <p class="tier-name">{tier.name}</p>
                            <h3>{tier.requirement}</h3>
                            <ul>
                                { for tier.perks.iter().map(|perk| html! { <li>{"• "}{*perk}</li> }) }
                            </ul>
                        </div>
                    }) }
                </div>
            </section>

            <section class="debit-comparison">
                <h2>{"Comparison"}</h2>
                <table>
                    <thead>
                        <tr>
                            <th>{"Feature"}</th>
                            <th>{"HTTCoin Card"}</th>
                            <th>{"Traditional Credit"}</th>
                            <th>{"Other Crypto Cards"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for COMPARISON.iter().map(|row| html! {
                            <tr key={row[0]}>
                                { for row.iter().map(|cell| html! { <td>{*cell}</td> }) }
                            </tr>
                        }) }
                    </tbody>
                </table>
            </section>

            <section class="debit-waitlist" id="waitlist">
                <h2>{"Join the waitlist"}</h2>
                <p>{"Secure early access, exclusive perks, and beta testing invitations for the HTTCoin debit card."}</p>
                <form class="waitlist-form" {onsubmit}>
                    <input placeholder="Name" value={entry.name.clone()} oninput={on_name} />
                    <input type="email" required=true placeholder="Email" value={entry.email.clone()} oninput={on_email} />
                    <input placeholder="Country" value={entry.country.clone()} oninput={on_country} />
                    <button type="submit" class="button-primary">{"Join Waitlist"}</button>
                </form>
                if *joined {
                    <p class="form-confirmation">{"You're on the list. We'll be in touch before launch."}</p>
                }
                <p class="waitlist-count">{"Current waitlist: 12,734 members"}</p>
            </section>

            <section class="debit-faq">
                <h2>{"Debit card FAQ"}</h2>
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

            <style>
                {r#"
                    .debit-card-page {
                        padding: 8rem 1.5rem 4rem;
                        max-width: 1100px;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        gap: 4rem;
                    }
                    .debit-hero {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .debit-card-visual {
                        position: relative;
                    }
                    .debit-card-visual .card-front {
                        position: absolute;
                        width: 16rem;
                        bottom: -2.5rem;
                        left: -2.5rem;
                        transform: rotate(6deg);
                    }
                    .debit-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 1.5rem;
                    }
                    .waitlist-form {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1rem;
                    }
                    .waitlist-form button {
                        grid-column: 1 / -1;
                    }
                    @media (max-width: 768px) {
                        .debit-hero,
                        .waitlist-form {
                            grid-template-columns: 1fr;
                        }
                        .debit-card-visual .card-front {
                            display: none;
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
    fn waitlist_body_lists_fields_then_page() {
        let entry = WaitlistEntry {
            name: "Noor".to_string(),
            email: "noor@example.com".to_string(),
            country: "Qatar".to_string(),
        };
        let link = entry.mailto_link();
        assert!(link.contains("subject=HTTCoin%20Debit%20Card%20Waitlist"));
        assert!(link.ends_with(
            "Name%3A%20Noor%0A%0AEmail%3A%20noor%40example.com%0A%0ACountry%3A%20Qatar%0A%0APage%3A%20Debit%20Card%20Waitlist"
        ));
    }

    #[test]
    fn comparison_rows_are_complete() {
        assert!(COMPARISON.iter().all(|row| row.iter().all(|cell| !cell.is_empty())));
        assert_eq!(TIERS.len(), 3);
    }
}
