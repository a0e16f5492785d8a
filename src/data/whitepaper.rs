use super::content::{DISTRIBUTION, ROADMAP};
use crate::i18n::Language;

pub struct WhitepaperSection {
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
    pub points: &'static [(&'static str, &'static str)],
}

pub const WHITEPAPER_VERSION: &str = "Whitepaper v1.0 · Last updated Nov 2025";

pub const WHITEPAPER_SECTIONS: &[WhitepaperSection] = &[
    WhitepaperSection {
        title: "Introduction",
        paragraphs: &[
            "HTTCoin (HTTC) is a Solana token built for travel. It lets travelers pay hotels, airlines and travel partners directly and earn rewards on every booking.",
        ],
        points: &[],
    },
    WhitepaperSection {
        title: "Vision & Mission",
        paragraphs: &[
            "Vision: a world where every traveler earns rewards instantly and pays without borders.",
            "Mission: make travel more rewarding and accessible through blockchain-powered payments.",
        ],
        points: &[],
    },
    WhitepaperSection {
        title: "The Problem",
        paragraphs: &[
            "Travelers lose money to currency conversion, card fees and loyalty programs whose points expire or cannot leave a single brand.",
        ],
        points: &[
            ("High fees", "International card payments add 2-4% in FX and processing costs."),
            ("Fragmented loyalty", "Points are locked to one airline or hotel group."),
            ("Slow settlement", "Merchants wait days for card payments to clear."),
        ],
    },
    WhitepaperSection {
        title: "The HTTCoin Solution",
        paragraphs: &[],
        points: &[
            ("Payments", "Instant, low-fee HTTC payments settled on Solana."),
            ("Rewards", "Cashback in HTTC on bookings with partner merchants."),
            ("Debit card", "Spend HTTC anywhere VISA is accepted with zero FX fees."),
            ("Marketplace", "Book partner hotels, flights and experiences in HTTC."),
        ],
    },
    WhitepaperSection {
        title: "Token Overview",
        paragraphs: &[
            "Symbol HTTC, total supply 1,000,000,000, 9 decimals, issued on Solana.",
        ],
        points: &[],
    },
    WhitepaperSection {
        title: "Token Distribution",
        paragraphs: &[],
        points: &[],
    },
    WhitepaperSection {
        title: "Burn Mechanism",
        paragraphs: &[
            "10% of the supply is burned before launch. A share of partner transaction fees is burned every quarter, reducing supply as usage grows.",
        ],
        points: &[],
    },
    WhitepaperSection {
        title: "Roadmap",
        paragraphs: &[],
        points: &[],
    },
    WhitepaperSection {
        title: "Utilities",
        paragraphs: &[],
        points: &[
            ("Pay", "Hotels, flights and tours from partner merchants."),
            ("Stake", "Lock HTTC in staking pools for additional rewards."),
            ("Govern", "Vote on partner onboarding and reward rates."),
            ("Unlock", "Higher debit card tiers and travel perks."),
        ],
    },
    WhitepaperSection {
        title: "Why HTTCoin",
        paragraphs: &[
            "A travel-first token with real partners, a deflationary supply and rewards that follow the traveler rather than the brand.",
        ],
        points: &[],
    },
    WhitepaperSection {
        title: "Conclusion",
        paragraphs: &[
            "HTTCoin connects real-world travel with on-chain rewards. Every journey should earn you more freedom and value.",
        ],
        points: &[],
    },
];

/// Table of contents of the full document.
pub const WHITEPAPER_TOC: &[&str] = &[
    "Executive Summary",
    "Problem Statement",
    "HTTCoin Solution",
    "Market Analysis",
    "Tokenomics",
    "Technology Stack",
    "Roadmap",
    "Team & Advisors",
    "Partnerships",
    "Security & Audits",
    "Legal & Compliance",
    "Conclusion",
    "References",
];

pub const QUICK_SUMMARY: &[(&str, &str)] = &[
    ("Vision", "Making travel payments seamless"),
    ("Mission", "Reward every journey"),
    ("Market", "$1.4T travel industry"),
    ("Unique Value", "4% cashback + burn mechanism"),
];

/// Downloadable editions, one per translated PDF.
pub const WHITEPAPER_EDITIONS: &[(&str, Language)] = &[
    ("PDF (English)", Language::En),
    ("PDF (Spanish)", Language::Es),
    ("PDF (Chinese)", Language::Zh),
    ("PDF (French)", Language::Fr),
];

/// Generated rows for the sections that mirror other site data, so the
/// document cannot drift from the tokenomics chart or the roadmap.
pub fn generated_points(title: &str) -> Vec<(String, String)> {
    match title {
        "Token Distribution" => DISTRIBUTION
            .iter()
            .map(|allocation| (format!("{}%", allocation.percent), allocation.name.to_string()))
            .collect(),
        "Roadmap" => ROADMAP
            .iter()
            .map(|phase| {
                (
                    format!("Phase {}: {}", phase.number, phase.title),
                    format!("{} · {}", phase.target, phase.milestones.join(", ")),
                )
            })
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distribution_rows_match_the_chart() {
        let rows = generated_points("Token Distribution");
        assert_eq!(rows.len(), DISTRIBUTION.len());
        assert_eq!(rows[0], ("40%".to_string(), "Public Sale".to_string()));
        let total: u32 = rows
            .iter()
            .filter_map(|(percent, _)| percent.trim_end_matches('%').parse::<u32>().ok())
            .sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn roadmap_rows_follow_phases() {
        let rows = generated_points("Roadmap");
        assert_eq!(rows.len(), ROADMAP.len());
        assert_eq!(rows[0].0, "Phase 1: Foundation");
        assert!(rows[0].1.starts_with("Q3 2024 · Token development"));
    }

    #[test]
    fn every_section_has_content() {
        for section in WHITEPAPER_SECTIONS {
            let generated = generated_points(section.title);
            assert!(
                !section.paragraphs.is_empty() || !section.points.is_empty() || !generated.is_empty(),
                "{} is empty",
                section.title
            );
        }
    }
}
