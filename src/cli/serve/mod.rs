//! Development server with raw markdown endpoints.
//!
//! Serves the publish tree like any static file server, with one addition:
//! requests for `*.md` paths are intercepted and answered straight from the
//! content tree (see `markdown`), so raw sources are fetchable before a
//! production build has mirrored them.

mod lifecycle;
mod markdown;
mod path;
mod response;

use crate::{
    config::{SiteConfig, cfg},
    debug, log,
};
use anyhow::Result;
use std::sync::Arc;
use tiny_http::{Request, Server};

/// Start the development server (blocking until Ctrl+C).
pub fn serve_site(config: &SiteConfig) -> Result<()> {
    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);
    crate::core::register_server(Arc::clone(&server));

    log!("serve"; "http://{}", addr);
    debug!("serve"; "content: {}", config.build.content.display());
    debug!("serve"; "output: {}", config.build.output.display());

    run_request_loop(&server);
    Ok(())
}

fn run_request_loop(server: &Server) {
    // Use thread pool to handle requests concurrently
    // This prevents one slow disk read from blocking other requests
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(4)
        .build()
        .expect("failed to create thread pool");

    for request in server.incoming_requests() {
        pool.spawn(move || {
            let config = cfg();
            if let Err(e) = handle_request(request, &config) {
                log!("serve"; "request error: {e}");
            }
        });
    }
}

/// Handle a single HTTP request
fn handle_request(request: Request, config: &SiteConfig) -> Result<()> {
    // Early exit if shutdown requested
    if crate::core::is_shutdown() {
        return response::respond_unavailable(request);
    }

    // Raw markdown endpoint: answer from the content tree, bypassing the
    // rendered site
    if let Some(hit) = markdown::resolve_markdown(request.url(), &config.build.content) {
        return response::respond_markdown(request, &hit);
    }

    // Static publish tree (already-built site)
    if let Some(path) = path::resolve_path(request.url(), &config.build.output) {
        return response::respond_file(request, &path);
    }

    response::respond_not_found(request, config)
}
