//! `contactForm` key.
//!
//! # Example
//!
//! ```json
//! "contactForm": {
//!   "enabled": true,
//!   "title": "Get in touch",
//!   "handler": "api",
//!   "apiUrl": "https://example.com/contact"
//! }
//! ```

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactFormConfig {
    #[serde(deserialize_with = "super::null_as_default")]
    pub enabled: bool,
    pub title: Option<String>,
    pub handler: Option<FormHandler>,
    pub email: Option<String>,
    pub api_url: Option<String>,
}

/// Where a submitted message goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormHandler {
    /// Compose a `mailto:` link.
    Email,
    /// POST the fields as JSON to `apiUrl`.
    Api,
    /// Unrecognized handler name; behaves like no handler.
    #[serde(other)]
    Unknown,
}

impl FormHandler {
    /// Name as written in the JSON; `None` for unrecognized handlers.
    pub const fn name(self) -> Option<&'static str> {
        match self {
            Self::Email => Some("email"),
            Self::Api => Some("api"),
            Self::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_parsing() {
        let form: ContactFormConfig =
            serde_json::from_str(r#"{"enabled": true, "handler": "email", "email": "a@b.c"}"#)
                .unwrap();
        assert!(form.enabled);
        assert_eq!(form.handler, Some(FormHandler::Email));

        let form: ContactFormConfig = serde_json::from_str(r#"{"handler": "fax"}"#).unwrap();
        assert_eq!(form.handler, Some(FormHandler::Unknown));
        assert!(!form.enabled);
    }
}
