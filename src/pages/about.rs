use yew::prelude::*;

use crate::email::contact_email_link;

struct TeamMember {
    name: &'static str,
    role: &'static str,
    bio: &'static str,
}

const TEAM: &[TeamMember] = &[
    TeamMember { name: "Ava Leclerc", role: "Founder & CEO", bio: "Travel tech veteran with 12 years in loyalty programs." },
    TeamMember { name: "Rohan Patel", role: "Co-Founder & CTO", bio: "Built large-scale Solana apps and DeFi infrastructure." },
    TeamMember { name: "Lina Duarte", role: "Head of Partnerships", bio: "Former airline alliance lead overseeing strategic deals." },
    TeamMember { name: "Marcus Liu", role: "Lead Blockchain Engineer", bio: "Smart contract auditor and security researcher." },
    TeamMember { name: "Nadia Amiri", role: "Marketing Director", bio: "Scaled communities to 100K+ members across regions." },
    TeamMember { name: "Kojo Mensah", role: "Community Manager", bio: "Hosts weekly AMAs and orchestrates global meetups." },
];

const VALUES: &[(&str, &str, &str)] = &[
    ("🌍", "Global", "Accessible from any country and currency."),
    ("🔒", "Secure", "Security-first development and audits."),
    ("💎", "Transparent", "Open communication and on-chain data."),
    ("🤝", "Community", "Holders shape the roadmap through governance."),
    ("🚀", "Innovative", "Pushing Web3 payments into mainstream travel."),
    ("🌱", "Sustainable", "Low-energy Solana footprint and eco partnerships."),
];

const MILESTONES: &[&str] = &[
    "Concept formed · Q1 2024",
    "Core team assembled · Q2 2024",
    "Whitepaper published · Q3 2024",
    "Smart contract finalized · Q4 2024",
    "Hotel and Airways partnership announced · Q2 2025",
    "Website relaunch + community 10K · Q3 2025",
    "Token launch · Dec 1, 2025",
];

#[function_component(About)]
pub fn about() -> Html {
    let contact = contact_email_link("HTTCoin inquiry", "");
    let press = contact_email_link("HTTCoin press kit request", "");
    let support = contact_email_link("HTTCoin support", "");

    html! {
        <div class="about-page">
            <section class="about-hero">
                <p class="eyebrow">{"About HTTCoin"}</p>
                <h1>{"Revolutionizing travel payments"}</h1>
                <p>
                    {"HTTCoin connects real-world travel experiences with blockchain rewards. We believe every journey should earn you more freedom and value."}
                </p>
            </section>

            <section class="about-story" id="story">
                <div>
                    <h2>{"Our Story"}</h2>
                    <p>
                        {"HTTCoin was born from the frustration of travelers paying high fees without meaningful rewards. Our founders spent years in airline loyalty, payment processing, and Web3 infrastructure before merging their expertise into a single mission: reward every journey."}
                    </p>
                    <p>
                        {"We're building a global network of hotels, airlines, and travel partners that accept HTTC for instant, low-fee payments, while funding staking pools, debit card perks, and long-term deflationary tokenomics."}
                    </p>
                </div>
                <div class="about-cards">
                    <div class="about-card">
                        <h3>{"Mission"}</h3>
                        <p>{"Make travel more rewarding and accessible through blockchain-powered payments."}</p>
                    </div>
                    <div class="about-card">
                        <h3>{"Vision"}</h3>
                        <p>{"A world where every traveler earns rewards instantly and pays without borders."}</p>
                    </div>
                </div>
            </section>

            <section class="about-values" id="values">
                { for VALUES.iter().map(|(icon, title, description)| html! {
                    <div class="about-card" key={*title}>
                        <div class="about-icon">{*icon}</div>
                        <h3>{*title}</h3>
                        <p>{*description}</p>
                    </div>
                }) }
            </section>

            <section class="about-team" id="team">
                <h2>{"Meet the team"}</h2>
                <div class="about-grid">
                    { for TEAM.iter().map(|member| html! {
                        <div class="about-card" key={member.name}>
                            <h3>{member.name}</h3>
                            <p class="about-role">{member.role}</p>
                            <p>{member.bio}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="about-mascot">
                <h2>{"Meet HTTC Owl"}</h2>
                <p>
                    {"HTTC Owl is the curious, globe-trotting mascot guiding every traveler through the HTTCoin ecosystem. Wise, adventurous, and always ready to recommend the next destination, HTTC Owl represents transparency and travel expertise."}
                </p>
            </section>

            <section class="about-milestones">
                <h2>{"Milestones"}</h2>
                <ol>
                    { for MILESTONES.iter().map(|milestone| html! { <li>{*milestone}</li> }) }
                </ol>
            </section>

            <section class="about-contact">
                <h2>{"Contact us"}</h2>
                <p>{"Partnerships, press, and support inquiries can reach us anytime. Our team responds within 24 hours."}</p>
                <div class="about-actions">
                    <a class="button-outline" href={contact}>{"✉ Email us"}</a>
                    <a class="button-outline" href={press}>{"Press kit"}</a>
                    <a class="button-outline" href={support}>{"Support portal"}</a>
                </div>
            </section>

            <style>
                {r#"
                    .about-page {
                        padding: 8rem 1.5rem 4rem;
                        max-width: 1100px;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        gap: 4rem;
                    }
                    .about-story,
                    .about-values,
                    .about-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 1.5rem;
                    }
                    .about-milestones ol {
                        border-left: 2px solid var(--border);
                        padding-left: 1.5rem;
                    }
                "#}
            </style>
        </div>
    }
}
