use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::carousel::hooks::use_carousel;
use crate::config::SiteConfig;
use crate::data::content::{SOCIALS, TESTIMONIALS};
use crate::email::{contact_email_link, create_form_email_body, open_email_link};
use crate::i18n::{t, Key};
use crate::preferences::PreferencesContext;

#[function_component(TestimonialRotator)]
fn testimonial_rotator() -> Html {
    let rotator = use_carousel((), TESTIMONIALS.len(), SiteConfig::default().rotator_interval_ms);
    let Some(testimonial) = TESTIMONIALS.get(rotator.current_index()) else {
        return html! {};
    };

    html! {
        <div
            class="testimonial-rotator"
            onmouseenter={rotator.on_pause::<MouseEvent>()}
            onmouseleave={rotator.on_resume::<MouseEvent>()}
        >
            <blockquote
                class={classes!("testimonial", rotator.direction().as_class())}
                key={testimonial.name}
            >
                <p class="testimonial-quote">{format!("“{}”", testimonial.quote)}</p>
                <footer>
                    <span class="testimonial-name">{testimonial.name}</span>
                    <span class="testimonial-title">{testimonial.title}</span>
                </footer>
            </blockquote>
            <div class="testimonial-controls">
                <button aria-label="Previous testimonial" onclick={rotator.on_previous::<MouseEvent>()}>{"‹"}</button>
                { for (0..TESTIMONIALS.len()).map(|index| html! {
                    <button
                        class={classes!("carousel-dot", (index == rotator.current_index()).then(|| "active"))}
                        aria-label={format!("Show testimonial {}", index + 1)}
                        onclick={rotator.on_go_to::<MouseEvent>(index)}
                    />
                }) }
                <button aria-label="Next testimonial" onclick={rotator.on_next::<MouseEvent>()}>{"›"}</button>
            </div>
        </div>
    }
}

const COMMUNITY_PAGE: &str = "Community Section";

/// Newsletter sign-up mail for a form placed on `page`.
pub fn newsletter_link(email: &str, page: &str) -> String {
    let body = create_form_email_body(&[
        ("Email", email),
        ("Subscription", "Newsletter"),
        ("Page", page),
    ]);
    contact_email_link("HTTCoin Newsletter Subscription", &body)
}

#[function_component(NewsletterForm)]
fn newsletter_form() -> Html {
    let language = use_context::<PreferencesContext>()
        .map(|prefs| prefs.get().language)
        .unwrap_or_default();
    let email = use_state(String::new);
    let sent = use_state(|| false);

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let onsubmit = {
        let email = email.clone();
        let sent = sent.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let address = email.trim();
            if address.is_empty() {
                return;
            }
            open_email_link(&newsletter_link(address, COMMUNITY_PAGE));
            email.set(String::new());
            sent.set(true);
        })
    };

    html! {
        <form class="newsletter-form" {onsubmit}>
            <input
                type="email"
                required=true
                placeholder="you@example.com"
                value={(*email).clone()}
                {oninput}
            />
            <button type="submit" class="button-primary">{t(language, Key::Subscribe)}</button>
            if *sent {
                <p class="newsletter-confirmation">{"Your mail client should open with the request ready to send."}</p>
            }
        </form>
    }
}

#[function_component(Community)]
pub fn community() -> Html {
    let language = use_context::<PreferencesContext>()
        .map(|prefs| prefs.get().language)
        .unwrap_or_default();

    html! {
        <section id="community" class="community-section">
            <h2 class="section-title">{t(language, Key::CommunityJoin)}</h2>
            <div class="social-grid">
                { for SOCIALS.iter().map(|(name, followers, url)| html! {
                    <a class="social-card" href={*url} target="_blank" rel="noopener noreferrer">
                        <span class="social-name">{*name}</span>
                        <span class="social-followers">{*followers}</span>
                    </a>
                }) }
            </div>
            <TestimonialRotator />
            <NewsletterForm />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newsletter_link_carries_address() {
        let link = newsletter_link("a@b.co", COMMUNITY_PAGE);
        assert!(link.starts_with("mailto:support@httcoin.com,Hotelcoinglobal@gmail.com?"));
        assert!(link.contains("subject=HTTCoin%20Newsletter%20Subscription"));
        assert!(link.contains("Email%3A%20a%40b.co"));
    }

    #[test]
    fn newsletter_body_names_subscription_and_page() {
        let link = newsletter_link("a@b.co", COMMUNITY_PAGE);
        let body = link.split("&body=").nth(1).unwrap_or_default();
        assert_eq!(
            body,
            "Email%3A%20a%40b.co%0A%0ASubscription%3A%20Newsletter%0A%0APage%3A%20Community%20Section"
        );
    }
}
