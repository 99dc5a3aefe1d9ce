//! # Contact Command
//!
//! Builds the "Fale conosco" messaging deep link:
//! `https://wa.me/{phone}?text={percent-encoded message}`.

use tracing::debug;

use crate::state::ConfigState;

const MESSAGING_BASE_URL: &str = "https://wa.me/";

/// Deep link for the configured recipient and message.
pub fn contact_link(config: &ConfigState) -> String {
    let link = format!(
        "{}{}?text={}",
        MESSAGING_BASE_URL,
        config.contact_phone,
        urlencoding::encode(&config.contact_message)
    );
    debug!(phone = %config.contact_phone, "Contact link built");
    link
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_link() {
        let link = contact_link(&ConfigState::default());
        assert_eq!(
            link,
            "https://wa.me/5547999767627?text=Gostaria%20de%20mais%20informa%C3%A7%C3%B5es%20sobre%20os%20produtos..."
        );
    }

    #[test]
    fn test_message_is_percent_encoded() {
        let config = ConfigState {
            contact_message: "Pão & café?".to_string(),
            ..ConfigState::default()
        };
        let link = contact_link(&config);

        assert!(link.ends_with("?text=P%C3%A3o%20%26%20caf%C3%A9%3F"));
        assert!(!link.contains(' '));
    }
}
