//! Page host: runs the listeners a render attached.
//!
//! A [`Page`] owns the rendered document and plays the part of the
//! browser: it dispatches clicks along the ancestor path, records alerts
//! and navigation in a [`Window`], and submits the contact form.
//!
//! # Click dispatch
//!
//! ```text
//! target ─► parent ─► ... ─► <html> ─► document root
//!   │                                       │
//!   └─ listeners run in path order ─────────┴─ CloseMenuOutside runs last
//! ```
//!
//! The path is fixed before any listener runs, so a listener that detaches
//! its own node (closing a lightbox) does not cut the dispatch short.

pub mod form;

pub use form::{ContactMessage, FormError, FormTransport, HttpTransport};

use crate::{
    config::{FormHandler, SiteConfig},
    dom::{Document, EventKind, Listener, NodeId, el},
    log,
    render::support::{FORM_FIELDS, FORM_ID},
};

pub const ALERT_SENT: &str = "Thank you! Your message has been sent.";
pub const ALERT_FAILED: &str = "Sorry, there was an error. Please try again later.";
pub const ALERT_ACKNOWLEDGED: &str = "Thank you for your message! We will get back to you soon.";

pub const LIGHTBOX_STYLE: &str = "position: fixed; top: 0; left: 0; width: 100%; height: 100%; \
    background: rgba(0, 0, 0, 0.9); display: flex; align-items: center; \
    justify-content: center; z-index: 10000; cursor: pointer;";
pub const LIGHTBOX_IMG_STYLE: &str = "max-width: 90%; max-height: 90%; object-fit: contain;";

/// Side effects a page produced outside its document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Window {
    /// Alert messages, oldest first.
    pub alerts: Vec<String>,
    /// Last navigation target (`location.href = ...`).
    pub location: Option<String>,
    /// Element the page last scrolled to.
    pub scrolled_to: Option<NodeId>,
}

/// How a contact form submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Navigated to a `mailto:` link.
    Mailto(String),
    /// Delivered to the API endpoint.
    Sent,
    /// The API endpoint failed.
    Failed,
    /// No handler; acknowledged locally.
    Acknowledged,
}

/// A rendered document plus the window it lives in.
#[derive(Debug, Clone)]
pub struct Page {
    doc: Document,
    config: SiteConfig,
    window: Window,
}

impl Page {
    /// Wrap a document already rendered from `config`.
    pub fn new(doc: Document, config: SiteConfig) -> Self {
        Self {
            doc,
            config,
            window: Window::default(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Element with the given id, if attached.
    pub fn element(&self, id: &str) -> Option<NodeId> {
        self.doc.get_element_by_id(id)
    }

    // ========================================================================
    // click dispatch
    // ========================================================================

    /// Dispatch a click on `target`. Returns whether the default action was
    /// prevented.
    pub fn click(&mut self, target: NodeId) -> bool {
        let path: Vec<NodeId> = self.doc.ancestors(target).collect();
        let mut prevented = false;

        for current in path {
            let listeners: Vec<Listener> = self
                .doc
                .listeners(current)
                .iter()
                .filter(|l| l.kind() == EventKind::Click)
                .cloned()
                .collect();
            for listener in listeners {
                prevented |= self.run_click(&listener, current, target);
            }
        }
        prevented
    }

    fn run_click(&mut self, listener: &Listener, current: NodeId, target: NodeId) -> bool {
        match listener {
            Listener::ToggleActive => {
                self.doc.toggle_class(current, "active");
            }
            Listener::OpenLightbox { url } => self.open_lightbox(url),
            Listener::CloseLightbox => self.doc.detach(current),
            Listener::ToggleMenu { menu } => {
                self.doc.toggle_class(*menu, "active");
            }
            Listener::CloseMenuOutside { menu, toggle } => {
                if !self.doc.contains(*menu, target) && !self.doc.contains(*toggle, target) {
                    self.doc.remove_class(*menu, "active");
                }
            }
            Listener::SmoothScroll => return self.smooth_scroll(current),
            Listener::SubmitContact => {}
        }
        false
    }

    /// Append a fresh full-screen overlay showing `url` to `<body>`.
    fn open_lightbox(&mut self, url: &str) {
        let Some(body) = self.doc.body() else {
            return;
        };
        let overlay = el("div")
            .attr("style", LIGHTBOX_STYLE)
            .child(el("img").attr("src", url).attr("style", LIGHTBOX_IMG_STYLE))
            .append_to(&mut self.doc, body);
        self.doc.add_listener(overlay, Listener::CloseLightbox);
    }

    /// `#` keeps the default action; `#id` scrolls when the target exists.
    fn smooth_scroll(&mut self, anchor: NodeId) -> bool {
        let Some(fragment) = self.doc.attr(anchor, "href").and_then(|h| h.strip_prefix('#')) else {
            return false;
        };
        if fragment.is_empty() {
            return false;
        }
        if let Some(section) = self.doc.get_element_by_id(fragment) {
            self.window.scrolled_to = Some(section);
        }
        true
    }

    // ========================================================================
    // form fields
    // ========================================================================

    /// Set the value of the form control with id `id`. Returns `false` when
    /// no such element exists.
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> bool {
        match self.doc.get_element_by_id(id) {
            Some(node) => {
                self.doc.set_value(node, value);
                true
            }
            None => false,
        }
    }

    pub fn value(&self, id: &str) -> Option<&str> {
        self.doc.get_element_by_id(id).map(|node| self.doc.value(node))
    }

    fn collect_message(&self) -> ContactMessage {
        let field = |id: &str| self.value(id).unwrap_or_default().to_string();
        ContactMessage {
            name: field("name"),
            email: field("email"),
            subject: field("subject"),
            message: field("message"),
        }
    }

    fn reset_form(&mut self) {
        for (id, _, _) in FORM_FIELDS {
            self.set_value(id, "");
        }
    }

    fn alert(&mut self, message: &str) {
        self.window.alerts.push(message.to_string());
    }

    // ========================================================================
    // submission
    // ========================================================================

    /// Submit the contact form.
    ///
    /// Returns `None` when the page has no enabled contact form.
    pub async fn submit(&mut self, transport: &dyn FormTransport) -> Option<Submission> {
        let form = self.doc.get_element_by_id(FORM_ID)?;
        if !self.doc.listeners(form).contains(&Listener::SubmitContact) {
            return None;
        }

        let message = self.collect_message();
        let contact = self.config.contact_form.clone().unwrap_or_default();

        let outcome = match contact.handler {
            Some(FormHandler::Email) => {
                let link = message.mailto(contact.email.as_deref().unwrap_or_default());
                self.window.location = Some(link.clone());
                Submission::Mailto(link)
            }
            Some(FormHandler::Api) => {
                let result = match contact.api_url.as_deref() {
                    Some(url) if !url.is_empty() => transport.post(url, &message).await,
                    _ => Err(FormError::MissingEndpoint),
                };
                match result {
                    Ok(()) => {
                        self.alert(ALERT_SENT);
                        self.reset_form();
                        Submission::Sent
                    }
                    Err(err) => {
                        log!("form"; "submission failed: {}", err);
                        self.alert(ALERT_FAILED);
                        Submission::Failed
                    }
                }
            }
            Some(FormHandler::Unknown) | None => {
                self.alert(ALERT_ACKNOWLEDGED);
                self.reset_form();
                Submission::Acknowledged
            }
        };
        Some(outcome)
    }
}
