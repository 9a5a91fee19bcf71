//! Listener kinds a rendered page carries.
//!
//! Listeners are plain data attached to nodes. The page host interprets
//! them when it dispatches an event; serialization writes them out as
//! `data-on` tokens for the embedded page runtime.
//!
//! | Listener           | Token                | Extra attribute     |
//! |--------------------|----------------------|---------------------|
//! | `ToggleActive`     | `toggle-active`      |                     |
//! | `OpenLightbox`     | `open-lightbox`      | `data-lightbox-src` |
//! | `CloseLightbox`    | `close-lightbox`     |                     |
//! | `ToggleMenu`       | `toggle-menu`        | `data-menu`         |
//! | `CloseMenuOutside` | `close-menu-outside` | `data-menu` (on the toggle) |
//! | `SmoothScroll`     | `smooth-scroll`      |                     |
//! | `SubmitContact`    | `submit-contact`     |                     |

use super::NodeId;

/// Event type a listener reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Click,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listener {
    /// Flip the `active` class on the node the listener is attached to.
    ToggleActive,
    /// Open a full-screen overlay showing `url`.
    OpenLightbox { url: String },
    /// Remove the node the listener is attached to.
    CloseLightbox,
    /// Flip the `active` class on the navigation panel.
    ToggleMenu { menu: NodeId },
    /// Close the menu when a click lands outside both `menu` and `toggle`.
    CloseMenuOutside { menu: NodeId, toggle: NodeId },
    /// Smooth-scroll to the same-page anchor named by `href`.
    SmoothScroll,
    /// Contact form submission.
    SubmitContact,
}

impl Listener {
    /// Name written into the `data-on` attribute.
    pub const fn token(&self) -> &'static str {
        match self {
            Self::ToggleActive => "toggle-active",
            Self::OpenLightbox { .. } => "open-lightbox",
            Self::CloseLightbox => "close-lightbox",
            Self::ToggleMenu { .. } => "toggle-menu",
            Self::CloseMenuOutside { .. } => "close-menu-outside",
            Self::SmoothScroll => "smooth-scroll",
            Self::SubmitContact => "submit-contact",
        }
    }

    pub const fn kind(&self) -> EventKind {
        match self {
            Self::SubmitContact => EventKind::Submit,
            _ => EventKind::Click,
        }
    }
}
