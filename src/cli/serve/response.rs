//! HTTP response handlers.

use crate::config::SiteConfig;
use crate::utils::mime;
use anyhow::{Context, Result};
use std::{fs, path::Path};
use tiny_http::{Header, Request, Response, StatusCode};

/// Respond with a raw markdown document from the content tree.
///
/// The permissive cross-origin header lets external tools ingest
/// documentation straight from a local dev server.
pub fn respond_markdown(request: Request, path: &Path) -> Result<()> {
    let body = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let response = Response::from_data(body)
        .with_header(make_header("Content-Type", mime::types::MARKDOWN))
        .with_header(make_header("Access-Control-Allow-Origin", "*"));
    request.respond(response)?;
    Ok(())
}

/// Respond with a static file from the publish tree.
pub fn respond_file(request: Request, path: &Path) -> Result<()> {
    let content_type = mime::from_path(path);
    let body = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    send_body(request, 200, content_type, body)
}

/// Respond with 404 page (custom or default).
pub fn respond_not_found(request: Request, config: &SiteConfig) -> Result<()> {
    use crate::utils::mime::types::{HTML, PLAIN};

    let custom_404 = config.build.output.join("404.html");
    if custom_404.is_file()
        && let Ok(body) = fs::read(&custom_404)
    {
        return send_body(request, 404, HTML, body);
    }

    send_body(request, 404, PLAIN, b"404 Not Found".to_vec())
}

/// Respond with 503 Service Unavailable (server shutting down).
pub fn respond_unavailable(request: Request) -> Result<()> {
    send_body(
        request,
        503,
        mime::types::PLAIN,
        b"503 Service Unavailable".to_vec(),
    )
}

fn send_body(
    request: Request,
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
) -> Result<()> {
    let response = Response::from_data(body)
        .with_status_code(StatusCode(status))
        .with_header(make_header("Content-Type", content_type));
    request.respond(response)?;
    Ok(())
}

fn make_header(key: &'static str, value: &'static str) -> Header {
    Header::from_bytes(key, value).unwrap()
}
