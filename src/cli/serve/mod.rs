//! Preview server.
//!
//! | Request                 | Response                                   |
//! |-------------------------|--------------------------------------------|
//! | `/`, `/index.html`      | page rendered afresh (config reloaded)     |
//! | `POST /contact`         | contact form delivered (see [`contact`])   |
//! | other path              | file from output dir, then project root    |
//! | anything else           | 404 page                                   |
//!
//! Requests are handled one at a time on the calling thread.

mod contact;
mod lifecycle;
mod path;
mod response;

use super::common::{render_page, runtime};
use crate::{config::ProjectConfig, debug, log};
use anyhow::Result;
use std::sync::Arc;
use tiny_http::{Method, Request};
use tokio::runtime::Runtime;

/// Serve until Ctrl+C.
pub fn serve_page(project: &ProjectConfig) -> Result<()> {
    let (server, addr) = lifecycle::bind_with_retry(project.serve.interface, project.serve.port)?;
    let server = Arc::new(server);
    lifecycle::register_shutdown(Arc::clone(&server))?;

    let runtime = runtime()?;
    log!("serve"; "http://{}", addr);
    log!("serve"; "config: {}", project.config_source());

    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, project, &runtime) {
            log!("serve"; "request error: {e}");
        }
    }
    log!("serve"; "stopped");
    Ok(())
}

/// Handle a single HTTP request
fn handle_request(request: Request, project: &ProjectConfig, runtime: &Runtime) -> Result<()> {
    debug!("serve"; "{} {}", request.method(), request.url());

    if request.method() == &Method::Post && path::is_contact_request(request.url()) {
        return contact::handle_contact(request, project, runtime);
    }

    if !response::is_read_request(&request) {
        return response::respond_method_not_allowed(request);
    }

    if path::is_page_request(request.url()) {
        return match render_page(project, runtime) {
            Ok(html) => response::respond_page(request, html),
            Err(e) => {
                log!("error"; "render failed: {e:#}");
                response::respond_render_error(request, &e)
            }
        };
    }

    let found = [project.output_dir(), project.root.clone()]
        .iter()
        .find_map(|root| path::resolve_path(request.url(), root));
    match found {
        Some(file) => response::respond_file(request, &file),
        None => response::respond_not_found(request),
    }
}
