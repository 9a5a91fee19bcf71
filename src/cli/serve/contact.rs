//! Contact form posts (`POST /contact`).
//!
//! Browsers without the page runtime post the form here. The server
//! renders the page, fills the form from the url-encoded body and submits
//! it through the same [`Page`] host the runtime mirrors:
//!
//! | Outcome        | Response                          |
//! |----------------|-----------------------------------|
//! | `Mailto`       | 303 to the `mailto:` link         |
//! | `Sent`         | 200 result page                   |
//! | `Acknowledged` | 200 result page                   |
//! | `Failed`       | 502 result page                   |
//! | no form        | 404                               |

use super::response;
use crate::{
    cli::common::render_document,
    config::ProjectConfig,
    page::{FormTransport, HttpTransport, Page, Submission},
    render::support::FORM_FIELDS,
};
use anyhow::{Context, Result};
use std::io::Read;
use tiny_http::Request;
use tokio::runtime::Runtime;
use url::form_urlencoded;

/// Deliver a posted contact form and answer with its outcome.
pub fn handle_contact(
    mut request: Request,
    project: &ProjectConfig,
    runtime: &Runtime,
) -> Result<()> {
    let mut body = Vec::new();
    request
        .as_reader()
        .read_to_end(&mut body)
        .context("Failed to read form body")?;

    let (doc, config) = match render_document(project, runtime) {
        Ok(rendered) => rendered,
        Err(e) => return response::respond_render_error(request, &e),
    };
    let mut page = Page::new(doc, config);
    let transport = HttpTransport::new()?;

    match runtime.block_on(deliver(&mut page, &body, &transport)) {
        None => response::respond_not_found(request),
        Some(Submission::Mailto(link)) => response::respond_redirect(request, &link),
        Some(outcome) => {
            let status = if outcome == Submission::Failed { 502 } else { 200 };
            let message = page.window().alerts.last().cloned().unwrap_or_default();
            response::respond_submitted(request, status, &message)
        }
    }
}

/// Fill the form from a url-encoded body and submit it.
pub async fn deliver(
    page: &mut Page,
    body: &[u8],
    transport: &dyn FormTransport,
) -> Option<Submission> {
    fill_form(page, body);
    page.submit(transport).await
}

/// Copy known form fields into the page's form controls.
fn fill_form(page: &mut Page, body: &[u8]) {
    for (name, value) in form_urlencoded::parse(body) {
        if FORM_FIELDS.iter().any(|(id, _, _)| *id == name) {
            page.set_value(&name, value);
        }
    }
}
