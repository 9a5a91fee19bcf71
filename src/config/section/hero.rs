//! `hero` key.

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroConfig {
    pub buttons: Option<Vec<HeroButton>>,
    pub image: Option<String>,
}

/// Call-to-action button; `style` is the extra CSS class (default `btn-primary`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroButton {
    #[serde(deserialize_with = "super::null_as_default")]
    pub label: String,
    pub url: Option<String>,
    pub style: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub external: bool,
}
