use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseStatus {
    Completed,
    InProgress,
    Upcoming,
}

/// How a roadmap phase with a given status is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusDescriptor {
    pub label: &'static str,
    pub badge_class: &'static str,
    pub milestone_class: &'static str,
    pub show_progress: bool,
}

pub fn status_descriptor(status: PhaseStatus) -> StatusDescriptor {
    match status {
        PhaseStatus::Completed => StatusDescriptor {
            label: "Completed",
            badge_class: "status-badge completed",
            milestone_class: "milestone-accent",
            show_progress: false,
        },
        PhaseStatus::InProgress => StatusDescriptor {
            label: "In Progress",
            badge_class: "status-badge in-progress",
            milestone_class: "milestone-primary",
            show_progress: true,
        },
        PhaseStatus::Upcoming => StatusDescriptor {
            label: "Upcoming",
            badge_class: "status-badge upcoming",
            milestone_class: "milestone-primary",
            show_progress: false,
        },
    }
}

pub struct Phase {
    pub number: u8,
    pub title: &'static str,
    pub status: PhaseStatus,
    pub progress: u8,
    pub milestones: &'static [&'static str],
    pub target: &'static str,
}

pub const ROADMAP: &[Phase] = &[
    Phase {
        number: 1,
        title: "Foundation",
        status: PhaseStatus::Completed,
        progress: 100,
        milestones: &[
            "Token development",
            "Website + branding",
            "White Paper creation",
            "Smart contract testing",
            "Travel reward model development",
        ],
        target: "Q3 2024",
    },
    Phase {
        number: 2,
        title: "Pre-Launch",
        status: PhaseStatus::InProgress,
        progress: 60,
        milestones: &[
            "Contract deployment",
            "10% token burn",
            "Liquidity preparation",
            "Marketing launch",
            "Influencer partnerships",
            "Community building",
        ],
        target: "Now - Nov 2025",
    },
    Phase {
        number: 3,
        title: "Launch",
        status: PhaseStatus::Upcoming,
        progress: 0,
        milestones: &[
            "HTTCoin public sale",
            "DEX listing (Raydium)",
            "Liquidity locked",
            "Travel rewards pool activated",
            "Press releases + global marketing",
            "Exchange listings",
        ],
        target: "Dec 1, 2025",
    },
    Phase {
        number: 4,
        title: "Expansion",
        status: PhaseStatus::Upcoming,
        progress: 0,
        milestones: &[
            "CEX listings",
            "HTTCoin debit card launch",
            "Travel marketplace beta",
            "Hotel & airline integrations",
            "Merchant API",
            "Mobile app release",
        ],
        target: "Q1-Q2 2026",
    },
    Phase {
        number: 5,
        title: "Global Adoption",
        status: PhaseStatus::Upcoming,
        progress: 0,
        milestones: &[
            "1,000+ hotel partners",
            "HTTCoin loyalty program",
            "International travel network",
            "Major partnerships",
            "Global marketing events",
            "Staking platform launch",
        ],
        target: "2026-2027",
    },
];

pub struct Allocation {
    pub name: &'static str,
    pub percent: u32,
    pub color: (u8, u8, u8),
}

pub const DISTRIBUTION: &[Allocation] = &[
    Allocation { name: "Public Sale", percent: 40, color: (0x00, 0xf0, 0xff) },
    Allocation { name: "Travel Rewards", percent: 20, color: (0xff, 0x9d, 0x00) },
    Allocation { name: "Team", percent: 15, color: (0x9d, 0x6b, 0xff) },
    Allocation { name: "Marketing", percent: 10, color: (0x00, 0xff, 0xa3) },
    Allocation { name: "Liquidity", percent: 10, color: (0xff, 0x4f, 0x81) },
    Allocation { name: "Partnerships", percent: 5, color: (0xff, 0xc8, 0x57) },
];

pub const TOKEN_FACTS: &[(&str, &str)] = &[
    ("Token Symbol", "HTTC"),
    ("Total Supply", "1,000,000,000"),
    ("Network", "Solana"),
    ("Decimals", "9"),
];

pub struct WalletLink {
    pub name: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub badge: Option<&'static str>,
}

pub const WALLETS: &[WalletLink] = &[
    WalletLink {
        name: "Phantom",
        description: "Recommended Solana wallet with mobile + browser support",
        url: "https://phantom.app/",
        badge: Some("Recommended"),
    },
    WalletLink {
        name: "Solflare",
        description: "Hardware wallet compatible with Ledger",
        url: "https://solflare.com/",
        badge: None,
    },
    WalletLink {
        name: "Trust Wallet",
        description: "Multi-chain mobile wallet with Solana support",
        url: "https://trustwallet.com/",
        badge: None,
    },
    WalletLink {
        name: "WalletConnect",
        description: "Use any WalletConnect-compatible Solana wallet",
        url: "https://walletconnect.com/",
        badge: None,
    },
];

pub struct TradingVenue {
    pub name: &'static str,
    pub url: &'static str,
    pub logo: &'static str,
}

pub const BUY_PLATFORMS: &[TradingVenue] = &[
    TradingVenue {
        name: "Raydium",
        url: "https://raydium.io/liquidity-pools/?token=JAiHV54DDrRLKXHx5QeDzyo1nTffUB3GD8WYuuS13vaV",
        logo: "raydium.png",
    },
    TradingVenue {
        name: "Dexscreener",
        url: "https://dexscreener.com/solana/7pjy2ax1szqt472rxekg7zypanc5ptd3tm1bfcu9ztll",
        logo: "dexscreener.jpg",
    },
];

pub struct Announcement {
    pub id: u32,
    pub text: &'static str,
    pub cta: &'static str,
    pub route: Route,
}

pub const ANNOUNCEMENTS: &[Announcement] = &[
    Announcement {
        id: 1,
        text: "🎉 Launching December 1, 2025! Secure your spot early.",
        cta: "How to Buy HTT",
        route: Route::HowToBuy,
    },
    Announcement {
        id: 2,
        text: "📰 Qatar Airways partnership announced! Exclusive perks coming.",
        cta: "See Partnerships",
        route: Route::Partnerships,
    },
    Announcement {
        id: 3,
        text: "🔥 100M HTT pre-launch burn completed. Supply is deflationary.",
        cta: "Explore Tokenomics",
        route: Route::Tokenomics,
    },
];

pub struct Testimonial {
    pub name: &'static str,
    pub title: &'static str,
    pub quote: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Aria M.",
        title: "Early Supporter",
        quote: "HTTCoin finally gives travelers a reason to use crypto. The cashback is unmatched.",
    },
    Testimonial {
        name: "Leo Park",
        title: "Luxury Hotelier",
        quote: "Integrating HTTC will let us settle payments instantly without FX headaches.",
    },
    Testimonial {
        name: "Naledi K.",
        title: "Community Lead",
        quote: "Our Telegram has exploded with globetrotters sharing real-time travel hacks.",
    },
    Testimonial {
        name: "Marco A.",
        title: "Crypto Analyst",
        quote: "Deflationary mechanics plus real utility is exactly what travel tokens need.",
    },
    Testimonial {
        name: "Sara Q.",
        title: "Airline Executive",
        quote: "The flagship travel partnership unlocks premium perks for HTTC debit cardholders.",
    },
];

pub const SOCIALS: &[(&str, &str, &str)] = &[
    ("Telegram", "50,000+", "https://t.me/httcoin1"),
    ("Twitter/X", "25,000+", "https://twitter.com/httcoin1"),
    ("Instagram", "15,000+", "https://instagram.com/httcoin1"),
    ("Facebook", "10,000+", "https://www.facebook.com/profile.php?id=61583661604184&sk=about"),
];

pub const UPCOMING_PARTNERS: &[(&str, &str)] = &[
    ("Hotel Chains", "Global hospitality networks"),
    ("Travel Platforms", "Booking & discovery"),
    ("Cruise Lines", "Ocean experiences"),
    ("Tour Operators", "Guided adventures"),
    ("Business Travel", "Corporate solutions"),
];

pub const BUY_STEPS: &[(&str, &str)] = &[
    ("Get a Solana wallet", "Install Phantom or Solflare and write down your recovery phrase."),
    ("Fund it with SOL", "Buy SOL on an exchange and send it to your wallet address."),
    ("Connect on launch day", "On December 1, 2025 connect your wallet and swap SOL for HTTC."),
    ("Hold and travel", "Use HTTC for bookings and collect travel rewards."),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distribution_sums_to_hundred() {
        let total: u32 = DISTRIBUTION.iter().map(|allocation| allocation.percent).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn only_in_progress_shows_progress() {
        assert!(status_descriptor(PhaseStatus::InProgress).show_progress);
        assert!(!status_descriptor(PhaseStatus::Completed).show_progress);
        assert!(!status_descriptor(PhaseStatus::Upcoming).show_progress);
        assert_eq!(status_descriptor(PhaseStatus::Completed).label, "Completed");
        assert_eq!(status_descriptor(PhaseStatus::Upcoming).badge_class, "status-badge upcoming");
    }

    #[test]
    fn roadmap_phases_are_numbered_in_order() {
        for (index, phase) in ROADMAP.iter().enumerate() {
            assert_eq!(usize::from(phase.number), index + 1);
            assert!(phase.progress <= 100);
        }
    }
}
