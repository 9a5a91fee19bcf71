//! List item shapes shared by the list-valued keys.
//!
//! Every field is optional in the JSON; the renderer applies per-item
//! defaults (icon, label, url `#`) where a field is absent.

use serde::Deserialize;

/// `navigation[]`, `footer.links[]`, `footer.legal[]`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinkItem {
    #[serde(deserialize_with = "super::null_as_default")]
    pub label: String,
    pub url: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub external: bool,
}

/// `features[]`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Feature {
    #[serde(deserialize_with = "super::null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub description: String,
    pub icon: Option<String>,
}

/// `screenshots[]`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Screenshot {
    #[serde(deserialize_with = "super::null_as_default")]
    pub url: String,
    pub alt: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub lightbox: bool,
}

/// `downloads[]`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Download {
    pub url: Option<String>,
    pub label: Option<String>,
    pub platform: Option<String>,
    pub icon: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub external: bool,
}

/// `support[]`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SupportCard {
    #[serde(deserialize_with = "super::null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub description: String,
    pub icon: Option<String>,
    pub url: Option<String>,
    pub link_text: Option<String>,
}

/// `faq[]`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FaqItem {
    #[serde(deserialize_with = "super::null_as_default")]
    pub question: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub answer: String,
}

/// `social[]`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialLink {
    pub name: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub external: bool,
}
