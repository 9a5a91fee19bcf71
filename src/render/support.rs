//! Support cards and the contact form.
//!
//! The contact form has two states:
//!
//! ```text
//! contactForm.enabled == false ──► #contact-form hidden
//! contactForm.enabled == true  ──► #contact-form replaced by
//!                                   h3 + form#support-form (SubmitContact)
//! ```
//!
//! The form posts to [`FORM_ACTION`] so `showcase serve` can deliver it
//! without the page runtime; the runtime reads the handler from the
//! `data-handler`, `data-email` and `data-api-url` attributes.

use super::list::{SUPPORT, icon, render_list};
use crate::{
    config::{ContactFormConfig, FormHandler, Mode, SiteConfig, SupportCard},
    dom::{Document, El, Listener, el},
};

const DEFAULT_SUPPORT_ICON: &str = "fas fa-envelope";
const DEFAULT_LINK_TEXT: &str = "Learn More";
const DEFAULT_FORM_TITLE: &str = "Contact Us";

/// Id of the injected `<form>`.
pub const FORM_ID: &str = "support-form";

/// Path the form posts to when the page runtime does not intercept it.
pub const FORM_ACTION: &str = "/contact";

/// `(id, label, input type)`; `None` renders a `<textarea>`.
pub const FORM_FIELDS: [(&str, &str, Option<&str>); 4] = [
    ("name", "Name", Some("text")),
    ("email", "Email", Some("email")),
    ("subject", "Subject", Some("text")),
    ("message", "Message", None),
];

pub fn populate_support(doc: &mut Document, config: &SiteConfig) {
    if config.mode() == Mode::Support
        && let Some(section) = doc.get_element_by_id("support-section")
    {
        doc.set_style(section, "padding-top", "4rem");
    }

    render_list(
        doc,
        &SUPPORT,
        config.support_title.as_deref(),
        config.support.as_deref(),
        support_card,
        |_, _, _| {},
    );

    populate_contact_form(doc, config.contact_form.as_ref());
}

fn support_card(card: &SupportCard) -> El {
    let link = card.url.as_deref().filter(|url| !url.is_empty()).map(|url| {
        el("a")
            .attr("href", url)
            .text(card.link_text.as_deref().unwrap_or(DEFAULT_LINK_TEXT))
    });
    el("div")
        .class("support-card")
        .child(
            el("div")
                .class("support-card-icon")
                .child(icon(card.icon.as_deref().unwrap_or(DEFAULT_SUPPORT_ICON))),
        )
        .child(el("h3").text(&card.title))
        .child(el("p").text(&card.description))
        .maybe_child(link)
}

fn populate_contact_form(doc: &mut Document, form: Option<&ContactFormConfig>) {
    let Some(container) = doc.get_element_by_id("contact-form") else {
        return;
    };
    let Some(form) = form.filter(|form| form.enabled) else {
        doc.hide(container);
        return;
    };

    doc.clear_children(container);
    el("h3")
        .attr("style", "margin-bottom: 1.5rem; font-size: 1.5rem;")
        .text(form.title.as_deref().unwrap_or(DEFAULT_FORM_TITLE))
        .append_to(doc, container);

    let mut form_el = el("form")
        .id(FORM_ID)
        .attr("action", FORM_ACTION)
        .attr("method", "post");
    if let Some(handler) = form.handler.and_then(FormHandler::name) {
        form_el = form_el.attr("data-handler", handler);
    }
    if let Some(email) = &form.email {
        form_el = form_el.attr("data-email", email);
    }
    if let Some(api_url) = &form.api_url {
        form_el = form_el.attr("data-api-url", api_url);
    }
    for (id, label, input_type) in FORM_FIELDS {
        let input = match input_type {
            Some(kind) => el("input").attr("type", kind),
            None => el("textarea"),
        };
        form_el = form_el.child(
            el("div")
                .class("form-group")
                .child(el("label").attr("for", id).text(label))
                .child(input.id(id).attr("name", id).attr("required", "")),
        );
    }
    form_el = form_el.child(
        el("button")
            .attr("type", "submit")
            .class("btn-submit")
            .text("Send Message"),
    );

    let form_id = form_el.append_to(doc, container);
    doc.add_listener(form_id, Listener::SubmitContact);
}
