//! SiteConfig section definitions.
//!
//! | Module    | JSON keys                                   |
//! |-----------|---------------------------------------------|
//! | `app`     | `app`, `theme`, `mode`                      |
//! | `hero`    | `hero`                                      |
//! | `items`   | list items (navigation, features, ...)      |
//! | `contact` | `contactForm`                               |
//! | `footer`  | `footer`                                    |

mod app;
mod contact;
mod footer;
mod hero;
mod items;

pub use app::{AppInfo, Mode, ThemeConfig};
pub use contact::{ContactFormConfig, FormHandler};
pub use footer::FooterConfig;
pub use hero::{HeroButton, HeroConfig};
pub use items::{Download, FaqItem, Feature, LinkItem, Screenshot, SocialLink, SupportCard};

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` like an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value: Option<T> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
