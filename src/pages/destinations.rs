use std::rc::Rc;

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::cards_carousel::CardsCarousel;
use crate::config::SiteConfig;
use crate::data::gallery::{
    destination_catalog, CategoryFilter, Destination, DestinationQuery, Region, RegionFilter, SortOrder,
};
use crate::i18n::{t, Key};
use crate::modals::use_dismiss;
use crate::preferences::PreferencesContext;
use crate::Route;

const FEATURED_COUNT: usize = 8;

/// Visible count after one more "load more" press.
pub fn load_more(shown: usize, step: usize, total: usize) -> usize {
    shown.saturating_add(step).min(total)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
    Map,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Grid, ViewMode::List, ViewMode::Map];

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Grid => "Grid",
            ViewMode::List => "List",
            ViewMode::Map => "Map",
        }
    }

    fn class(self) -> &'static str {
        match self {
            ViewMode::Grid => "destinations-grid",
            ViewMode::List => "destinations-list",
            ViewMode::Map => "destinations-map",
        }
    }
}

/// Adds `id` to the favourites, or removes it if already there. Order of
/// the remaining entries is kept.
pub fn toggle_favorite(favorites: &[String], id: &str) -> Vec<String> {
    if favorites.iter().any(|favorite| favorite == id) {
        favorites.iter().filter(|favorite| *favorite != id).cloned().collect()
    } else {
        let mut next = favorites.to_vec();
        next.push(id.to_string());
        next
    }
}

/// Destinations grouped by region for the map view, in `Region::ALL` order.
/// Regions without a destination are left out.
pub fn group_by_region<'a>(items: impl IntoIterator<Item = &'a Destination>) -> Vec<(Region, Vec<&'a Destination>)> {
    let items: Vec<&Destination> = items.into_iter().collect();
    Region::ALL
        .into_iter()
        .map(|region| {
            let members: Vec<&Destination> = items.iter().copied().filter(|d| d.region == region).collect();
            (region, members)
        })
        .filter(|(_, members)| !members.is_empty())
        .collect()
}

#[derive(Properties, PartialEq)]
struct TileProps {
    destination: Destination,
    favorite: bool,
    on_select: Callback<Destination>,
    on_favorite: Callback<String>,
}

#[function_component(DestinationTile)]
fn destination_tile(props: &TileProps) -> Html {
    let destination = &props.destination;
    let select = {
        let on_select = props.on_select.clone();
        let destination = destination.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(destination.clone()))
    };
    let favorite = {
        let on_favorite = props.on_favorite.clone();
        let id = destination.id.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_favorite.emit(id.clone());
        })
    };

    html! {
        <article class="destination-tile" onclick={select}>
            <img src={destination.src.clone()} alt={destination.name} loading="lazy" />
            <span class="destination-badge">{destination.badge.label()}</span>
            <button
                class={classes!("destination-favorite", props.favorite.then(|| "active"))}
                aria-label="Favorite destination"
                aria-pressed={props.favorite.to_string()}
                onclick={favorite}
            >
                { if props.favorite { "♥" } else { "♡" } }
            </button>
            <div class="destination-tile-info">
                <h3>{destination.name}</h3>
                <p>{format!("{} · {}", destination.category.label(), destination.region.label())}</p>
                <p class="launch-date">{destination.launch_date}</p>
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
struct DetailProps {
    destination: Option<Destination>,
    favorite: bool,
    on_favorite: Callback<String>,
    on_close: Callback<()>,
}

#[function_component(DestinationDetail)]
fn destination_detail(props: &DetailProps) -> Html {
    let dialog = use_node_ref();
    use_dismiss(dialog.clone(), props.destination.is_some(), props.on_close.clone());

    let Some(destination) = props.destination.as_ref() else {
        return html! {};
    };
    let favorite = {
        let on_favorite = props.on_favorite.clone();
        let id = destination.id.clone();
        Callback::from(move |_: MouseEvent| on_favorite.emit(id.clone()))
    };
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-overlay" role="dialog" aria-modal="true" aria-labelledby="destination-title">
            <div class="modal-content destination-detail" ref={dialog}>
                <div class="modal-header">
                    <h3 id="destination-title">{destination.name}</h3>
                </div>
                <p class="modal-description">{format!("{} · {}", destination.region.label(), destination.status.label())}</p>
                <img src={destination.src.clone()} alt={destination.name} />
                <p>{format!("Launch target: {}", destination.launch_date)}</p>
                <p>{format!("Category: {}", destination.category.label())}</p>
                <p>{format!("Status: {}", destination.status.label())}</p>
                <p>{"Nearby hotels & attractions will support HTTCoin once this destination is marked as \u{201c}Accepted\u{201d}."}</p>
                <div class="destination-detail-actions">
                    <button class="button-outline" onclick={favorite}>
                        { if props.favorite { "Remove favorite" } else { "Save to favorites" } }
                    </button>
                    <button class="button-primary" onclick={close}>{"Close"}</button>
                </div>
            </div>
        </div>
    }
}

#[function_component(Destinations)]
pub fn destinations() -> Html {
    let site = SiteConfig::default();
    let language = use_context::<PreferencesContext>()
        .map(|prefs| prefs.get().language)
        .unwrap_or_default();
    let catalog = use_memo(|_| destination_catalog(), ());
    let query = use_state(DestinationQuery::default);
    let shown = use_state(|| site.destinations_page_size);
    let view = use_state(ViewMode::default);
    let favorites = use_state(Vec::<String>::new);
    let selected = use_state(|| None::<Destination>);

    let results = {
        let catalog = catalog.clone();
        use_memo(move |query| query.apply(&catalog), (*query).clone())
    };
    let featured = {
        let catalog = catalog.clone();
        use_memo(
            move |_| Rc::new(catalog.iter().take(FEATURED_COUNT).cloned().collect::<Vec<_>>()),
            (),
        )
    };

    {
        let shown = shown.clone();
        let page_size = site.destinations_page_size;
        use_effect_with_deps(
            move |_| {
                shown.set(page_size);
                || ()
            },
            (*query).clone(),
        );
    }

    let update = {
        let query = query.clone();
        move |edit: Box<dyn Fn(&mut DestinationQuery)>| {
            let mut next = (*query).clone();
            edit(&mut next);
            query.set(next);
        }
    };

    let on_search = {
        let update = update.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            update(Box::new(move |q: &mut DestinationQuery| q.search = value.clone()));
        })
    };
    let on_region = {
        let update = update.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let options = RegionFilter::options();
            if let Some(region) = usize::try_from(select.selected_index()).ok().and_then(|i| options.get(i).copied()) {
                update(Box::new(move |q: &mut DestinationQuery| q.region = region));
            }
        })
    };
    let on_sort = {
        let update = update.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(sort) = usize::try_from(select.selected_index()).ok().and_then(|i| SortOrder::ALL.get(i).copied()) {
                update(Box::new(move |q: &mut DestinationQuery| q.sort = sort));
            }
        })
    };
    let on_load_more = {
        let shown = shown.clone();
        let total = results.len();
        let step = site.destinations_page_step;
        Callback::from(move |_: MouseEvent| shown.set(load_more(*shown, step, total)))
    };

    let on_favorite = {
        let favorites = favorites.clone();
        Callback::from(move |id: String| favorites.set(toggle_favorite(&favorites, &id)))
    };
    let on_select = {
        let selected = selected.clone();
        Callback::from(move |destination: Destination| selected.set(Some(destination)))
    };
    let close_detail = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };
    let is_favorite = |destination: &Destination| favorites.iter().any(|id| *id == destination.id);
    let tile = |destination: &Destination| html! {
        <DestinationTile
            key={destination.id.clone()}
            destination={destination.clone()}
            favorite={is_favorite(destination)}
            on_select={on_select.clone()}
            on_favorite={on_favorite.clone()}
        />
    };

    let visible = results.iter().take(*shown);
    let listing = match *view {
        ViewMode::Grid | ViewMode::List => html! {
            <section class={view.class()}>
                { for visible.map(|destination| tile(destination)) }
            </section>
        },
        ViewMode::Map => html! {
            <section class={view.class()}>
                { for group_by_region(visible).into_iter().map(|(region, members)| html! {
                    <div class="map-region" key={region.label()}>
                        <h3>{format!("{} · {}", region.label(), members.len())}</h3>
                        <div class="destinations-list">
                            { for members.into_iter().map(|destination| tile(destination)) }
                        </div>
                    </div>
                }) }
            </section>
        },
    };
    let detail_favorite = selected.as_ref().map(|d| is_favorite(d)).unwrap_or(false);

    html! {
        <div class="destinations-page">
            <section class="destinations-hero">
                <h1>{t(language, Key::GalleryTitle)}</h1>
                <p>{t(language, Key::GallerySubtitle)}</p>
            </section>

            <section class="destinations-featured">
                <h2>{"Featured"}</h2>
                <CardsCarousel cards={(*featured).clone()} />
            </section>

            <section class="destinations-filters">
                <input
                    class="destinations-search"
                    type="search"
                    placeholder="Search destinations"
                    value={query.search.clone()}
                    oninput={on_search}
                />
                <div class="filter-row">
                    { for CategoryFilter::options().into_iter().map(|filter| {
                        let onclick = {
                            let update = update.clone();
                            Callback::from(move |_: MouseEvent| update(Box::new(move |q: &mut DestinationQuery| q.category = filter)))
                        };
                        html! {
                            <button
                                class={classes!("filter-chip", (query.category == filter).then(|| "active"))}
                                {onclick}
                            >
                                {filter.label()}
                            </button>
                        }
                    }) }
                </div>
                <select class="destinations-select" onchange={on_region}>
                    { for RegionFilter::options().into_iter().map(|region| html! {
                        <option selected={query.region == region}>{region.label()}</option>
                    }) }
                </select>
                <select class="destinations-select" onchange={on_sort}>
                    { for SortOrder::ALL.into_iter().map(|sort| html! {
                        <option selected={query.sort == sort}>{sort.label()}</option>
                    }) }
                </select>
                <div class="view-switch" role="group" aria-label="View">
                    { for ViewMode::ALL.into_iter().map(|mode| {
                        let onclick = {
                            let view = view.clone();
                            Callback::from(move |_: MouseEvent| view.set(mode))
                        };
                        html! {
                            <button
                                class={classes!("filter-chip", (*view == mode).then(|| "active"))}
                                aria-pressed={(*view == mode).to_string()}
                                {onclick}
                            >
                                {mode.label()}
                            </button>
                        }
                    }) }
                </div>
                <p class="destinations-count">
                    {format!("{} destinations · {} favorites", results.len(), favorites.len())}
                </p>
            </section>

            if results.is_empty() {
                <p class="destinations-empty">{"No destinations match these filters."}</p>
            } else {
                {listing}
            }

            if *shown < results.len() {
                <div class="destinations-more">
                    <button class="button-outline" onclick={on_load_more}>{"Load more"}</button>
                </div>
            }

            <section class="destinations-partner-cta">
                <h2>{"Want to see HTTCoin at your destination?"}</h2>
                <p>{"Submit a partnership inquiry and our integrations team will reach out with onboarding details."}</p>
                <Link<Route> to={Route::Partnerships} classes="button-primary">{"Submit Inquiry"}</Link<Route>>
            </section>

            <DestinationDetail
                destination={(*selected).clone()}
                favorite={detail_favorite}
                on_favorite={on_favorite.clone()}
                on_close={close_detail}
            />

            <style>
                {r#"
                    .destinations-page {
                        padding: 8rem 1.5rem 4rem;
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .destinations-filters {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        align-items: center;
                        margin: 3rem 0 2rem;
                    }
                    .destinations-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
                        gap: 1.5rem;
                    }
                    .destination-tile {
                        position: relative;
                        border-radius: 16px;
                        overflow: hidden;
                    }
                    .destinations-list {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .destinations-list .destination-tile {
                        display: grid;
                        grid-template-columns: 160px 1fr;
                        align-items: center;
                    }
                    .map-region {
                        margin-bottom: 2rem;
                    }
                    .destination-favorite {
                        position: absolute;
                        top: 0.75rem;
                        right: 0.75rem;
                    }
                    .destination-favorite.active {
                        color: #ec4899;
                    }
                    .destination-tile img {
                        width: 100%;
                        aspect-ratio: 4 / 5;
                        object-fit: cover;
                    }
                    .destinations-more {
                        display: flex;
                        justify-content: center;
                        margin-top: 2rem;
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
    fn favorites_toggle_on_and_off() {
        let favorites = toggle_favorite(&[], "travel-a.jpg-0");
        assert_eq!(favorites, vec!["travel-a.jpg-0".to_string()]);

        let favorites = toggle_favorite(&favorites, "travel-b.jpg-1");
        let favorites = toggle_favorite(&favorites, "travel-a.jpg-0");
        assert_eq!(favorites, vec!["travel-b.jpg-1".to_string()]);
    }

    #[test]
    fn map_view_groups_in_region_order() {
        let catalog = destination_catalog();
        let groups = group_by_region(catalog.iter());
        let regions: Vec<Region> = groups.iter().map(|(region, _)| *region).collect();
        let expected: Vec<Region> = Region::ALL
            .into_iter()
            .filter(|region| catalog.iter().any(|d| d.region == *region))
            .collect();
        assert_eq!(regions, expected);
        let grouped: usize = groups.iter().map(|(_, members)| members.len()).sum();
        assert_eq!(grouped, catalog.len());
        assert!(groups.iter().all(|(region, members)| members.iter().all(|d| d.region == *region)));
    }

    #[test]
    fn map_view_of_nothing_is_empty() {
        assert!(group_by_region(std::iter::empty()).is_empty());
    }

    #[test]
    fn view_modes_default_to_grid() {
        assert_eq!(ViewMode::default(), ViewMode::Grid);
        assert_eq!(ViewMode::ALL.map(ViewMode::label), ["Grid", "List", "Map"]);
    }

    #[test]
    fn load_more_steps_until_total() {
        assert_eq!(load_more(18, 12, 100), 30);
        assert_eq!(load_more(18, 12, 25), 25);
        assert_eq!(load_more(25, 12, 25), 25);
    }
}
