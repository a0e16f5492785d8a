#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlogCategory {
    Announcements,
    TravelGuides,
    CryptoEducation,
    PartnershipNews,
    CommunitySpotlights,
    TechnicalUpdates,
}

impl BlogCategory {
    pub const ALL: [BlogCategory; 6] = [
        BlogCategory::Announcements,
        BlogCategory::TravelGuides,
        BlogCategory::CryptoEducation,
        BlogCategory::PartnershipNews,
        BlogCategory::CommunitySpotlights,
        BlogCategory::TechnicalUpdates,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BlogCategory::Announcements => "Announcements",
            BlogCategory::TravelGuides => "Travel Guides",
            BlogCategory::CryptoEducation => "Crypto Education",
            BlogCategory::PartnershipNews => "Partnership News",
            BlogCategory::CommunitySpotlights => "Community Spotlights",
            BlogCategory::TechnicalUpdates => "Technical Updates",
        }
    }
}

/// `None` is "All Posts".
pub type CategorySelection = Option<BlogCategory>;

pub fn selection_label(selection: CategorySelection) -> &'static str {
    selection.map(BlogCategory::label).unwrap_or("All Posts")
}

#[derive(Debug, PartialEq)]
pub struct Article {
    pub id: u32,
    pub title: &'static str,
    pub category: BlogCategory,
    pub excerpt: &'static str,
    pub author: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub image: &'static str,
    pub content: &'static str,
}

impl Article {
    pub fn byline(&self) -> String {
        format!("{} · {} · {}", self.author, self.date, self.read_time)
    }
}

pub const ARTICLES: &[Article] = &[
    Article {
        id: 1,
        title: "Qatar Airways + HTTCoin: What travelers can expect",
        category: BlogCategory::Announcements,
        excerpt: "A deep dive into the flagship airline partnership launching in Q2 2026.",
        author: "HTTCoin Team",
        date: "Nov 12, 2025",
        read_time: "6 min",
        image: "https://images.unsplash.com/photo-1526778548025-fa2f459cd5c1?auto=format&fit=crop&w=900&q=60",
        content: "HTTCoin is teaming up with Qatar Airways to unlock perks for debit card holders, including lounge access, priority boarding, and HTT cashback on flights...",
    },
    Article {
        id: 2,
        title: "Beginner’s guide: Swapping SOL to HTT on Raydium",
        category: BlogCategory::CryptoEducation,
        excerpt: "Step-by-step walkthrough covering fees, slippage, and wallet safety.",
        author: "Amelia Cruise",
        date: "Nov 10, 2025",
        read_time: "8 min",
        image: "https://images.unsplash.com/photo-1518548419970-58e3b4079ab2?auto=format&fit=crop&w=900&q=60",
        content: "Buying HTTCoin takes less than 5 minutes when you follow these wallet tips and transaction optimizations...",
    },
    Article {
        id: 3,
        title: "Top 10 beach destinations that will accept HTT",
        category: BlogCategory::TravelGuides,
        excerpt: "From Maldives to Ibiza, discover sandy escapes ready for HTTCoin.",
        author: "Nathan Explorer",
        date: "Nov 8, 2025",
        read_time: "5 min",
        image: "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?auto=format&fit=crop&w=900&q=60",
        content: "We curated the most requested resort locations for HTT acceptance, aligned with our partner rollout roadmap...",
    },
    Article {
        id: 4,
        title: "Why Solana powers the HTTCoin ecosystem",
        category: BlogCategory::TechnicalUpdates,
        excerpt: "Speed, energy efficiency, and low fees make Solana ideal for travel payments.",
        author: "Dev Rel",
        date: "Nov 5, 2025",
        read_time: "7 min",
        image: "https://images.unsplash.com/photo-1518770660439-4636190af475?auto=format&fit=crop&w=900&q=60",
        content: "HTTCoin leverages Solana's throughput to ensure instant settlement, low transaction fees, and eco-friendly operations...",
    },
];

/// Articles in `selection` whose title contains `search`, case-insensitively.
/// The first match is the featured article.
pub fn filter_articles<'a>(
    articles: &'a [Article],
    selection: CategorySelection,
    search: &str,
) -> Vec<&'a Article> {
    let needle = search.to_lowercase();
    articles
        .iter()
        .filter(|article| selection.map_or(true, |category| article.category == category))
        .filter(|article| article.title.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_posts_with_empty_search_keeps_everything() {
        assert_eq!(filter_articles(ARTICLES, None, "").len(), ARTICLES.len());
        assert_eq!(selection_label(None), "All Posts");
    }

    #[test]
    fn category_and_search_combine() {
        let found = filter_articles(ARTICLES, Some(BlogCategory::TechnicalUpdates), "SOLANA");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 4);

        assert!(filter_articles(ARTICLES, Some(BlogCategory::Announcements), "solana").is_empty());
    }

    #[test]
    fn empty_category_gives_nothing() {
        assert!(filter_articles(ARTICLES, Some(BlogCategory::CommunitySpotlights), "").is_empty());
    }

    #[test]
    fn byline_joins_author_date_and_read_time() {
        assert_eq!(ARTICLES[0].byline(), "HTTCoin Team · Nov 12, 2025 · 6 min");
    }
}
