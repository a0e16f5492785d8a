use crate::config::CONTACT_RECIPIENTS;

/// `mailto:` link with every recipient and a pre-filled subject and body.
pub fn create_email_link(subject: &str, body: &str, recipients: &[&str]) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        recipients.join(","),
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

pub fn contact_email_link(subject: &str, body: &str) -> String {
    create_email_link(subject, body, CONTACT_RECIPIENTS)
}

/// One `key: value` line per field, separated by blank lines, in field order.
pub fn create_form_email_body(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(key, value)| format!("{}: {}", key, value))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Sends the browser to a `mailto:` link. There is no submission backend.
pub fn open_email_link(link: &str) {
    if let Some(window) = web_sys::window() {
        if window.location().set_href(link).is_err() {
            log::warn!("could not open mail client");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_joins_recipients_and_encodes() {
        let link = create_email_link("Hi there", "a&b\nc", &["x@y.com", "z@w.com"]);
        assert_eq!(link, "mailto:x@y.com,z@w.com?subject=Hi%20there&body=a%26b%0Ac");
    }

    #[test]
    fn default_recipients_come_from_config() {
        let link = contact_email_link("s", "b");
        assert!(link.starts_with("mailto:support@httcoin.com,Hotelcoinglobal@gmail.com?"));
    }

    #[test]
    fn body_keeps_field_order() {
        let body = create_form_email_body(&[
            ("Email", "me@example.com"),
            ("Subscription", "Newsletter"),
            ("Page", "Community Section"),
        ]);
        assert_eq!(
            body,
            "Email: me@example.com\n\nSubscription: Newsletter\n\nPage: Community Section"
        );
    }

    #[test]
    fn empty_form_gives_empty_body() {
        assert_eq!(create_form_email_body(&[]), "");
    }
}
