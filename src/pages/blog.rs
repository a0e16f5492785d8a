use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::community::newsletter_link;
use crate::data::blog::{filter_articles, selection_label, Article, BlogCategory, CategorySelection, ARTICLES};
use crate::email::open_email_link;
use crate::modals::use_dismiss;

#[derive(Properties, PartialEq)]
struct ArticleDialogProps {
    article: Option<&'static Article>,
    on_close: Callback<()>,
}

#[function_component(ArticleDialog)]
fn article_dialog(props: &ArticleDialogProps) -> Html {
    let dialog = use_node_ref();
    use_dismiss(dialog.clone(), props.article.is_some(), props.on_close.clone());

    let Some(article) = props.article else {
        return html! {};
    };
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-overlay" role="dialog" aria-modal="true" aria-labelledby="article-title">
            <div class="modal-content article-dialog" ref={dialog}>
                <div class="modal-header">
                    <h3 id="article-title">{article.title}</h3>
                    <button class="modal-close" aria-label="Close" onclick={close}>{"✕"}</button>
                </div>
                <img src={article.image} alt={article.title} />
                <p class="article-byline">{article.byline()}</p>
                <p>{article.content}</p>
            </div>
        </div>
    }
}

#[function_component(Blog)]
pub fn blog() -> Html {
    let search = use_state(String::new);
    let selection = use_state(|| None::<BlogCategory>);
    let selected = use_state(|| None::<&'static Article>);
    let email = use_state(String::new);

    let articles = filter_articles(ARTICLES, *selection, &search);
    let (featured, rest) = match articles.split_first() {
        Some((first, rest)) => (Some(*first), rest.to_vec()),
        None => (None, Vec::new()),
    };

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };
    let read = |article: &'static Article| {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(Some(article)))
    };
    let close_article = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_subscribe = {
        let email = email.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let address = email.trim();
            if !address.is_empty() {
                open_email_link(&newsletter_link(address, "Blog"));
                email.set(String::new());
            }
        })
    };

    let choices: Vec<CategorySelection> = std::iter::once(None)
        .chain(BlogCategory::ALL.into_iter().map(Some))
        .collect();

    html! {
        <div class="blog-page">
            <section class="blog-hero">
                <p class="eyebrow">{"HTTCoin Newsroom"}</p>
                <h1>{"Latest from HTTCoin"}</h1>
                <p>{"Updates, travel inspiration, and crypto education for explorers building the future of borderless travel."}</p>
                <input
                    class="blog-search"
                    type="search"
                    placeholder="Search articles..."
                    value={(*search).clone()}
                    oninput={on_search}
                />
            </section>

            <section class="blog-layout">
                <div class="blog-articles">
                    if let Some(article) = featured {
                        <article class="blog-featured">
                            <img src={article.image} alt={article.title} />
                            <p class="blog-category">{article.category.label()}</p>
                            <h2>{article.title}</h2>
                            <p>{article.excerpt}</p>
                            <p class="article-byline">{article.byline()}</p>
                            <button class="button-primary" onclick={read(article)}>{"Read More"}</button>
                        </article>
                    } else {
                        <p class="blog-empty">{"No articles match your search."}</p>
                    }
                    <div class="blog-grid">
                        { for rest.into_iter().map(|article| html! {
                            <article class="blog-card" key={article.id}>
                                <img src={article.image} alt={article.title} loading="lazy" />
                                <p class="blog-category">{article.category.label()}</p>
                                <h3>{article.title}</h3>
                                <p>{article.excerpt}</p>
                                <button class="button-ghost small" onclick={read(article)}>{"Read More"}</button>
                            </article>
                        }) }
                    </div>
                </div>

                <aside class="blog-sidebar">
                    <div class="blog-panel">
                        <h3>{"Categories"}</h3>
                        <div class="filter-row">
                            { for choices.into_iter().map(|choice| {
                                let onclick = {
                                    let selection = selection.clone();
                                    Callback::from(move |_: MouseEvent| selection.set(choice))
                                };
                                html! {
                                    <button
                                        class={classes!("filter-chip", (*selection == choice).then(|| "active"))}
                                        {onclick}
                                    >
                                        {selection_label(choice)}
                                    </button>
                                }
                            }) }
                        </div>
                    </div>
                    <form class="blog-panel" onsubmit={on_subscribe}>
                        <h3>{"Newsletter"}</h3>
                        <p>{"Get launch announcements and travel inspiration straight to your inbox."}</p>
                        <input type="email" required=true placeholder="Email address" value={(*email).clone()} oninput={on_email} />
                        <button type="submit" class="button-primary">{"Subscribe"}</button>
                    </form>
                </aside>
            </section>

            <ArticleDialog article={*selected} on_close={close_article} />

            <style>
                {r#"
                    .blog-page {
                        padding: 8rem 1.5rem 4rem;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .blog-layout {
                        display: grid;
                        grid-template-columns: 2fr 1fr;
                        gap: 2.5rem;
                        margin-top: 3rem;
                    }
                    .blog-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1.5rem;
                        margin-top: 2rem;
                    }
                    @media (max-width: 768px) {
                        .blog-layout,
                        .blog-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
