//! `footer` key.

use super::LinkItem;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterConfig {
    pub links: Option<Vec<LinkItem>>,
    pub legal: Option<Vec<LinkItem>>,
}
