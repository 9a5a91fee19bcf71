//! HTTP response handlers.

use crate::{
    embed::serve::{NOT_FOUND_HTML, NotFoundVars, SUBMITTED_HTML, SubmittedVars},
    utils::{
        html::escape,
        mime::{
            self,
            types::{HTML, PLAIN},
        },
    },
};
use anyhow::{Context, Result, anyhow};
use std::{fs, path::Path};
use tiny_http::{Header, Method, Request, Response, StatusCode};

/// Respond with the freshly rendered page. Never cached.
pub fn respond_page(request: Request, html: String) -> Result<()> {
    if is_head_request(&request) {
        return send_head(request, 200, HTML);
    }
    let response = Response::from_string(html)
        .with_header(header("Content-Type", HTML)?)
        .with_header(header("Cache-Control", "no-store")?);
    request.respond(response)?;
    Ok(())
}

/// Respond with a static file.
pub fn respond_file(request: Request, path: &Path) -> Result<()> {
    let content_type = mime::from_path(path);

    if is_head_request(&request) {
        return send_head(request, 200, content_type);
    }

    let body = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    send_body(request, 200, content_type, body)
}

/// Respond with the embedded 404 page.
pub fn respond_not_found(request: Request) -> Result<()> {
    if is_head_request(&request) {
        return send_head(request, 404, HTML);
    }
    let body = NOT_FOUND_HTML.render(&NotFoundVars {
        path: request.url().to_string(),
    });
    send_body(request, 404, HTML, body.into_bytes())
}

/// Respond with a render failure (500).
pub fn respond_render_error(request: Request, error: &anyhow::Error) -> Result<()> {
    let error_str = format!("{error:#}");
    let body = format!(
        "<html><body><h1>Render Error</h1><pre>{}</pre></body></html>",
        escape(&error_str)
    );
    send_body(request, 500, HTML, body.into_bytes())
}

/// Respond with the outcome of a contact form post.
pub fn respond_submitted(request: Request, status: u16, message: &str) -> Result<()> {
    let body = SUBMITTED_HTML.render(&SubmittedVars {
        message: message.to_string(),
    });
    send_body(request, status, HTML, body.into_bytes())
}

/// Redirect with 303 See Other (used for `mailto:` links).
pub fn respond_redirect(request: Request, location: &str) -> Result<()> {
    let response = Response::empty(StatusCode(303)).with_header(header("Location", location)?);
    request.respond(response)?;
    Ok(())
}

/// Respond with 405 for anything but GET/HEAD.
pub fn respond_method_not_allowed(request: Request) -> Result<()> {
    send_body(request, 405, PLAIN, b"405 Method Not Allowed".to_vec())
}

pub fn is_read_request(request: &Request) -> bool {
    matches!(request.method(), Method::Get | Method::Head)
}

fn is_head_request(request: &Request) -> bool {
    request.method() == &Method::Head
}

fn send_head(request: Request, status: u16, content_type: &'static str) -> Result<()> {
    let response =
        Response::empty(StatusCode(status)).with_header(header("Content-Type", content_type)?);
    request.respond(response)?;
    Ok(())
}

fn send_body(
    request: Request,
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
) -> Result<()> {
    let response = Response::from_data(body)
        .with_status_code(StatusCode(status))
        .with_header(header("Content-Type", content_type)?);
    request.respond(response)?;
    Ok(())
}

fn header(key: &str, value: &str) -> Result<Header> {
    Header::from_bytes(key.as_bytes(), value.as_bytes())
        .map_err(|()| anyhow!("invalid header {key}: {value}"))
}
