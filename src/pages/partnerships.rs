use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::email::{contact_email_link, create_form_email_body, open_email_link};

struct PartnerStatus {
    label: &'static str,
    status: &'static str,
    date: &'static str,
}

struct PartnerCategory {
    name: &'static str,
    partners: &'static [PartnerStatus],
}

const CATEGORIES: &[PartnerCategory] = &[
    PartnerCategory {
        name: "Airlines",
        partners: &[
            PartnerStatus { label: "Hotel and Airways", status: "Official Partner", date: "Q3 2026" },
            PartnerStatus { label: "Etihad Airways", status: "In Negotiation", date: "Q3 2026" },
            PartnerStatus { label: "Turkish Airlines", status: "Coming Soon", date: "Q4 2026" },
            PartnerStatus { label: "Virgin Atlantic", status: "Coming Soon", date: "Q1 2027" },
        ],
    },
    PartnerCategory {
        name: "Hotels & Resorts",
        partners: &[
            PartnerStatus { label: "Accor Group", status: "In Negotiation", date: "Q3 2026" },
            PartnerStatus { label: "Marriott Bonvoy", status: "Coming Soon", date: "Q3 2026" },
            PartnerStatus { label: "Hyatt", status: "Coming Soon", date: "Q4 2026" },
            PartnerStatus { label: "Boutique Partners", status: "Open Enrollment", date: "Rolling" },
        ],
    },
    PartnerCategory {
        name: "Travel Agencies",
        partners: &[
            PartnerStatus { label: "Expedia Collective", status: "Coming Soon", date: "Q1 2027" },
            PartnerStatus { label: "LastMinute.com", status: "In Discussion", date: "Q4 2026" },
        ],
    },
    PartnerCategory {
        name: "Payment Processors",
        partners: &[
            PartnerStatus { label: "Solana Pay", status: "Integrated", date: "Live" },
            PartnerStatus { label: "Stripe Crypto", status: "Evaluating", date: "2026" },
        ],
    },
];

const BENEFITS: &[&str] = &[
    "Access to crypto-native travelers",
    "Instant settlements via Solana",
    "Co-marketing opportunities",
    "Lower transaction fees than cards",
    "Loyalty rewards integration",
    "Dedicated partner success team",
];

const TIMELINE: &[(&str, &str)] = &[
    ("Application Review", "1 week"),
    ("Technical Integration", "2-4 weeks"),
    ("Testing & QA", "1 week"),
    ("Launch & Marketing", "Ongoing"),
];

#[derive(Clone, Copy, PartialEq)]
enum Field {
    CompanyName,
    Industry,
    ContactName,
    Email,
    Phone,
    Address,
    Country,
    Website,
    Message,
}

impl Field {
    const ALL: [Field; 9] = [
        Field::CompanyName,
        Field::Industry,
        Field::ContactName,
        Field::Email,
        Field::Phone,
        Field::Address,
        Field::Country,
        Field::Website,
        Field::Message,
    ];

    fn label(self) -> &'static str {
        match self {
            Field::CompanyName => "Company Name",
            Field::Industry => "Industry",
            Field::ContactName => "Contact Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Address => "Address",
            Field::Country => "Country",
            Field::Website => "Website",
            Field::Message => "Message",
        }
    }

    fn input_type(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Phone => "tel",
            Field::Website => "url",
            _ => "text",
        }
    }

    fn required(self) -> bool {
        matches!(self, Field::CompanyName | Field::ContactName | Field::Email)
    }
}

/// Values of the partnership application form, in field order.
#[derive(Clone, Default, PartialEq)]
pub struct PartnerApplication {
    values: [String; 9],
}

impl PartnerApplication {
    fn get(&self, field: Field) -> &str {
        &self.values[field as usize]
    }

    fn with(&self, field: Field, value: String) -> Self {
        let mut next = self.clone();
        next.values[field as usize] = value;
        next
    }

    pub fn email_body(&self) -> String {
        let mut fields: Vec<(&str, &str)> = Field::ALL
            .iter()
            .map(|field| (field.label(), self.get(*field)))
            .collect();
        fields.push(("Page", "Partnerships Application"));
        create_form_email_body(&fields)
    }

    pub fn mailto_link(&self) -> String {
        contact_email_link("HTTCoin Partnership Application", &self.email_body())
    }
}

#[function_component(Partnerships)]
pub fn partnerships() -> Html {
    let application = use_state(PartnerApplication::default);
    let active_category = use_state(|| 0usize);
    let submitted = use_state(|| false);

    let onsubmit = {
        let application = application.clone();
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            open_email_link(&application.mailto_link());
            application.set(PartnerApplication::default());
            submitted.set(true);
        })
    };

    let category = CATEGORIES.get(*active_category);

    html! {
        <div class="partnerships-page">
            <section class="partnerships-hero">
                <h1>{"Partner with HTTCoin"}</h1>
                <p>{"Bring crypto-native travelers to your business with instant Solana settlements."}</p>
            </section>

            <section class="partnerships-status">
                <div class="tabs">
                    { for CATEGORIES.iter().enumerate().map(|(index, category)| {
                        let onclick = {
                            let active_category = active_category.clone();
                            Callback::from(move |_: MouseEvent| active_category.set(index))
                        };
                        html! {
                            <button class={classes!("tab", (index == *active_category).then(|| "active"))} {onclick}>
                                {category.name}
                            </button>
                        }
                    }) }
                </div>
                if let Some(category) = category {
                    <ul class="partner-status-list">
                        { for category.partners.iter().map(|partner| html! {
                            <li key={partner.label}>
                                <span class="partner-label">{partner.label}</span>
                                <span class="partner-status">{partner.status}</span>
                                <span class="partner-date">{partner.date}</span>
                            </li>
                        }) }
                    </ul>
                }
            </section>

            <section class="partnerships-benefits">
                <h2>{"Why partner with us"}</h2>
                <ul>
                    { for BENEFITS.iter().map(|benefit| html! { <li>{"✓ "}{*benefit}</li> }) }
                </ul>
                <ol class="partnerships-timeline">
                    { for TIMELINE.iter().map(|(step, duration)| html! {
                        <li><strong>{*step}</strong>{" · "}{*duration}</li>
                    }) }
                </ol>
            </section>

            <section class="partnerships-apply">
                <h2>{"Apply now"}</h2>
                <form class="partner-form" {onsubmit}>
                    { for Field::ALL.into_iter().map(|field| {
                        let oninput = {
                            let application = application.clone();
                            Callback::from(move |e: InputEvent| {
                                let value = match e.target_dyn_into::<HtmlTextAreaElement>() {
                                    Some(area) => area.value(),
                                    None => e.target_unchecked_into::<HtmlInputElement>().value(),
                                };
                                application.set(application.with(field, value));
                            })
                        };
                        let value = application.get(field).to_string();
                        if field == Field::Message {
                            html! {
                                <textarea placeholder={field.label()} {value} {oninput} rows="5" />
                            }
                        } else {
                            html! {
                                <input
                                    type={field.input_type()}
                                    placeholder={field.label()}
                                    required={field.required()}
                                    {value}
                                    {oninput}
                                />
                            }
                        }
                    }) }
                    <button type="submit" class="button-primary">{"Submit application"}</button>
                    if *submitted {
                        <p class="form-confirmation">
                            {"Application prepared. We'll review it and contact you soon."}
                        </p>
                    }
                </form>
            </section>

            <style>
                {r#"
                    .partnerships-page {
                        padding: 8rem 1.5rem 4rem;
                        max-width: 1100px;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        gap: 4rem;
                    }
                    .partner-form {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1rem;
                    }
                    .partner-form textarea,
                    .partner-form button {
                        grid-column: 1 / -1;
                    }
                    @media (max-width: 768px) {
                        .partner-form {
                            grid-template-columns: 1fr;
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
    fn application_body_lists_fields_in_order() {
        let application = PartnerApplication::default()
            .with(Field::CompanyName, "Acme Stays".to_string())
            .with(Field::Email, "ops@acme.test".to_string());
        let body = application.email_body();
        assert!(body.starts_with("Company Name: Acme Stays\n\nIndustry: \n\n"));
        assert!(body.contains("Email: ops@acme.test"));
        assert!(body.ends_with("Page: Partnerships Application"));
    }

    #[test]
    fn mailto_uses_application_subject() {
        let link = PartnerApplication::default().mailto_link();
        assert!(link.contains("subject=HTTCoin%20Partnership%20Application"));
    }
}
