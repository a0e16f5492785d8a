use std::cmp::Ordering;
use std::fmt;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Beaches,
    HistoricSites,
    Cities,
    Adventures,
    Resorts,
    Mountains,
    Cultural,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Beaches,
        Category::HistoricSites,
        Category::Cities,
        Category::Adventures,
        Category::Resorts,
        Category::Mountains,
        Category::Cultural,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Beaches => "Beaches",
            Category::HistoricSites => "Historic Sites",
            Category::Cities => "Cities",
            Category::Adventures => "Adventures",
            Category::Resorts => "Resorts",
            Category::Mountains => "Mountains",
            Category::Cultural => "Cultural",
        }
    }
}

/// Category selector with an "All" option, as shown in the filter rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    Asia,
    Europe,
    Americas,
    Africa,
    MiddleEast,
    Oceania,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Asia,
        Region::Europe,
        Region::Americas,
        Region::Africa,
        Region::MiddleEast,
        Region::Oceania,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Region::Asia => "Asia",
            Region::Europe => "Europe",
            Region::Americas => "Americas",
            Region::Africa => "Africa",
            Region::MiddleEast => "Middle East",
            Region::Oceania => "Oceania",
        }
    }
}

/// Region selector; `Global` keeps every region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RegionFilter {
    #[default]
    Global,
    Only(Region),
}

impl RegionFilter {
    pub fn options() -> Vec<RegionFilter> {
        std::iter::once(RegionFilter::Global)
            .chain(Region::ALL.into_iter().map(RegionFilter::Only))
            .collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            RegionFilter::Global => "Global",
            RegionFilter::Only(region) => region.label(),
        }
    }

    pub fn matches(self, region: Region) -> bool {
        match self {
            RegionFilter::Global => true,
            RegionFilter::Only(wanted) => wanted == region,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Accepted,
    ComingSoon,
    InNegotiation,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Accepted, Status::ComingSoon, Status::InNegotiation];

    pub fn label(self) -> &'static str {
        match self {
            Status::Accepted => "HTTCoin Accepted",
            Status::ComingSoon => "Coming Soon",
            Status::InNegotiation => "In Negotiation",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Badge {
    Accepted,
    ComingSoon,
}

impl Badge {
    pub fn label(self) -> &'static str {
        match self {
            Badge::Accepted => "HTT Accepted",
            Badge::ComingSoon => "Coming Soon",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    Travel,
    Partner,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Travel => write!(f, "travel"),
            AssetKind::Partner => write!(f, "partner"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Destination {
    pub id: String,
    pub src: String,
    pub filename: String,
    pub name: &'static str,
    pub category: Category,
    pub region: Region,
    pub status: Status,
    pub launch_date: &'static str,
    pub badge: Badge,
    pub kind: AssetKind,
}

const LAUNCH_WINDOWS: &[&str] = &[
    "Now Live", "Q4 2025", "Dec 1, 2025", "Q1 2026", "Q2 2026", "Q3 2026", "Q4 2026", "2027",
];

const CITY_POOL: &[&str] = &[
    "Paris, France",
    "Rome, Italy",
    "Dubai, UAE",
    "Doha, Qatar",
    "New York, USA",
    "Tokyo, Japan",
    "Seoul, South Korea",
    "Bali, Indonesia",
    "Santorini, Greece",
    "Barcelona, Spain",
    "Marrakesh, Morocco",
    "Cape Town, South Africa",
    "Reykjavik, Iceland",
    "Sydney, Australia",
    "Queenstown, New Zealand",
    "Maldives",
    "Phuket, Thailand",
    "Bora Bora, French Polynesia",
    "Rio de Janeiro, Brazil",
    "Vancouver, Canada",
    "Chicago, USA",
    "San Francisco, USA",
    "Los Angeles, USA",
    "Lisbon, Portugal",
    "London, United Kingdom",
    "Edinburgh, Scotland",
    "Copenhagen, Denmark",
    "Stockholm, Sweden",
    "Helsinki, Finland",
    "Vienna, Austria",
    "Prague, Czech Republic",
    "Budapest, Hungary",
    "Warsaw, Poland",
    "Zurich, Switzerland",
    "Munich, Germany",
    "Frankfurt, Germany",
    "Milan, Italy",
    "Florence, Italy",
    "Istanbul, Türkiye",
    "Amman, Jordan",
    "Cairo, Egypt",
    "Nairobi, Kenya",
    "Arusha, Tanzania",
    "Victoria Falls, Zimbabwe",
    "Lima, Peru",
    "Santiago, Chile",
    "Buenos Aires, Argentina",
    "Cusco, Peru",
    "Mexico City, Mexico",
    "Cancun, Mexico",
    "Panama City, Panama",
    "Bogotá, Colombia",
    "Medellín, Colombia",
    "La Paz, Bolivia",
    "Anchorage, Alaska",
    "Honolulu, Hawaii",
    "Palawan, Philippines",
    "Siem Reap, Cambodia",
    "Kathmandu, Nepal",
    "Lucerne, Switzerland",
    "Monaco",
    "Doha Desert, Qatar",
    "Nice, France",
    "Ibiza, Spain",
];

/// Image files shipped under `assets/gallery/all`.
pub const TRAVEL_FILES: &[&str] = &[
    "beach-sunset.jpg",
    "old-town.jpg",
    "skyline-night.jpg",
    "canyon-trail.jpg",
    "overwater-villa.jpg",
    "alpine-lake.jpg",
    "lantern-festival.jpg",
    "lagoon.jpg",
    "colosseum.jpg",
    "harbour-bridge.jpg",
    "glacier-hike.jpg",
    "infinity-pool.jpg",
    "httcoin-logo.png",
    "snow-peaks.jpg",
    "spice-market.jpg",
    "reef-dive.jpg",
    "temple-steps.jpg",
    "rooftop-view.jpg",
    "desert-dunes.jpg",
    "cliff-resort.jpg",
    "volcano-ridge.jpg",
    "tea-house.jpg",
];

/// Partner imagery under `assets/gallery/qatar`.
pub const PARTNER_FILES: &[&str] = &[
    "qatar-lounge.jpg",
    "qatar-cabin.jpg",
    "doha-corniche.jpg",
    "qatar-logo.png",
    "museum-islamic-art.jpg",
];

/// Builds catalog entries for `files`, assigning display metadata
/// round-robin from the fixed pools in file-name order.
pub fn build_catalog(files: &[&str], kind: AssetKind) -> Vec<Destination> {
    let mut sorted: Vec<&str> = files.to_vec();
    sorted.sort_unstable();

    let folder = match kind {
        AssetKind::Travel => "gallery/all",
        AssetKind::Partner => "gallery/qatar",
    };

    sorted
        .into_iter()
        .enumerate()
        .map(|(index, filename)| {
            let status_index = index % Status::ALL.len();
            Destination {
                id: format!("{}-{}-{}", kind, filename, index),
                src: config::asset_url(&format!("{}/{}", folder, filename)),
                filename: filename.to_string(),
                name: CITY_POOL[index % CITY_POOL.len()],
                category: Category::ALL[index % Category::ALL.len()],
                region: Region::ALL[index % Region::ALL.len()],
                status: Status::ALL[status_index],
                launch_date: LAUNCH_WINDOWS[index % LAUNCH_WINDOWS.len()],
                badge: if status_index == 0 {
                    Badge::Accepted
                } else {
                    Badge::ComingSoon
                },
                kind,
            }
        })
        .collect()
}

/// Travel assets followed by partner assets.
pub fn destination_catalog() -> Vec<Destination> {
    let mut catalog = build_catalog(TRAVEL_FILES, AssetKind::Travel);
    catalog.extend(build_catalog(PARTNER_FILES, AssetKind::Partner));
    catalog
}

fn is_logo(destination: &Destination) -> bool {
    destination.filename.to_lowercase().contains("logo")
}

/// Entries shown by the home page gallery for the selected filter.
pub fn gallery_destinations(catalog: &[Destination], filter: CategoryFilter) -> Vec<Destination> {
    catalog
        .iter()
        .filter(|destination| !is_logo(destination))
        .filter(|destination| filter.matches(destination.category))
        .cloned()
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    #[default]
    Popular,
    Alphabetical,
    ComingSoon,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [SortOrder::Popular, SortOrder::Alphabetical, SortOrder::ComingSoon];

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Popular => "Popular",
            SortOrder::Alphabetical => "Alphabetical",
            SortOrder::ComingSoon => "Coming Soon",
        }
    }
}

/// Filters of the destinations page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DestinationQuery {
    pub category: CategoryFilter,
    pub region: RegionFilter,
    pub search: String,
    pub sort: SortOrder,
}

impl DestinationQuery {
    pub fn apply(&self, catalog: &[Destination]) -> Vec<Destination> {
        let needle = self.search.trim().to_lowercase();
        let mut items: Vec<Destination> = catalog
            .iter()
            .filter(|destination| self.category.matches(destination.category))
            .filter(|destination| self.region.matches(destination.region))
            .filter(|destination| needle.is_empty() || destination.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        match self.sort {
            SortOrder::Popular => {}
            SortOrder::Alphabetical => items.sort_by(|a, b| compare_labels(a.name, b.name)),
            SortOrder::ComingSoon => {
                items.sort_by(|a, b| compare_labels(a.status.label(), b.status.label()))
            }
        }
        items
    }
}

fn compare_labels(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_sorted_by_filename_with_round_robin_metadata() {
        let catalog = build_catalog(&["c.jpg", "a.jpg", "b.jpg", "d.jpg"], AssetKind::Travel);
        let names: Vec<&str> = catalog.iter().map(|d| d.filename.as_str()).collect();
        assert_eq!(names, vec!["a.jpg", "b.jpg", "c.jpg", "d.jpg"]);

        assert_eq!(catalog[0].id, "travel-a.jpg-0");
        assert_eq!(catalog[0].category, Category::Beaches);
        assert_eq!(catalog[1].region, Region::Europe);
        assert_eq!(catalog[3].status, Status::Accepted);
        assert_eq!(catalog[3].badge, Badge::Accepted);
        assert_eq!(catalog[1].badge, Badge::ComingSoon);
        assert_eq!(catalog[2].launch_date, "Dec 1, 2025");
    }

    #[test]
    fn names_follow_the_city_pool_in_order() {
        let files: Vec<String> = (0..66).map(|i| format!("{:03}.jpg", i)).collect();
        let files: Vec<&str> = files.iter().map(String::as_str).collect();
        let catalog = build_catalog(&files, AssetKind::Travel);

        assert_eq!(CITY_POOL.len(), 64);
        assert_eq!(catalog[0].name, "Paris, France");
        assert_eq!(catalog[20].name, "Chicago, USA");
        assert_eq!(catalog[21].name, "San Francisco, USA");
        assert_eq!(catalog[22].name, "Los Angeles, USA");
        assert_eq!(catalog[63].name, "Ibiza, Spain");
        assert_eq!(catalog[64].name, "Paris, France");
    }

    #[test]
    fn gallery_excludes_logos() {
        let catalog = destination_catalog();
        let shown = gallery_destinations(&catalog, CategoryFilter::All);
        assert_eq!(shown.len(), catalog.len() - 2);
        assert!(shown.iter().all(|d| !d.filename.contains("logo")));
    }

    #[test]
    fn category_filter_keeps_only_that_category() {
        let catalog = destination_catalog();
        let beaches = gallery_destinations(&catalog, CategoryFilter::Only(Category::Beaches));
        assert!(!beaches.is_empty());
        assert!(beaches.iter().all(|d| d.category == Category::Beaches));
    }

    #[test]
    fn filter_options_start_with_all() {
        let options = CategoryFilter::options();
        assert_eq!(options.len(), 8);
        assert_eq!(options[0].label(), "All");
        assert_eq!(RegionFilter::options()[0].label(), "Global");
    }

    #[test]
    fn query_searches_case_insensitively() {
        let catalog = destination_catalog();
        let query = DestinationQuery {
            search: "  pARis ".to_string(),
            ..DestinationQuery::default()
        };
        let found = query.apply(&catalog);
        assert!(!found.is_empty());
        assert!(found.iter().all(|d| d.name.contains("Paris")));
    }

    #[test]
    fn query_sorts_alphabetically() {
        let catalog = destination_catalog();
        let query = DestinationQuery {
            sort: SortOrder::Alphabetical,
            ..DestinationQuery::default()
        };
        let sorted = query.apply(&catalog);
        assert!(sorted
            .windows(2)
            .all(|pair| compare_labels(pair[0].name, pair[1].name) != Ordering::Greater));
    }

    #[test]
    fn query_combines_region_and_category() {
        let catalog = destination_catalog();
        let query = DestinationQuery {
            category: CategoryFilter::Only(Category::Cities),
            region: RegionFilter::Only(Region::Americas),
            ..DestinationQuery::default()
        };
        for destination in query.apply(&catalog) {
            assert_eq!(destination.category, Category::Cities);
            assert_eq!(destination.region, Region::Americas);
        }
    }
}
