use anyhow::{Context, Result};
use axum::{
    Router,
    extract::{Path as UrlPath, State},
    handler::Handler,
    http::{HeaderMap, StatusCode, header},
    response::{
        Html, IntoResponse, Redirect, Response,
        sse::{Event, KeepAlive, Sse},
    },
    routing::get,
};
use notify::{Event as NotifyEvent, EventKind, RecursiveMode, Watcher};
use recipe_viewer_core::{IdentityProvider, RouteTable, SessionCookie, SiteConfig};
use recipe_viewer_generator::html::html_escape;
use recipe_viewer_generator::style::STYLESHEET;
use recipe_viewer_generator::{AuthOverlay, RenderContext, render_index, render_not_found, render_recipe};
use std::{net::SocketAddr, path::PathBuf};
use tokio::sync::broadcast;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::site::load_site;

#[derive(Clone)]
struct AppState {
    site_path: PathBuf,
    reload_tx: broadcast::Sender<()>,
}

/// Start preview server with hot reload for local development.
///
/// The site is re-read on every request, so edits to site.toml or the
/// recipe data show up on the next reload without restarting.
pub async fn run(path: PathBuf, port: u16) -> Result<()> {
    println!("🍳 Starting preview server...");
    println!("   Site: {}", path.display());

    let site = load_site(&path)?;

    println!("   ✓ Loaded: {}", site.config.title);
    println!("   ✓ Recipes: {}", site.recipes.len());
    if site.config.auth.is_some() {
        println!("   ✓ Auth: enabled");
    }

    // Create broadcast channel for reload events
    let (reload_tx, _) = broadcast::channel::<()>(100);

    let state = AppState {
        site_path: path.clone(),
        reload_tx: reload_tx.clone(),
    };

    let app = router(state, site.public_dir());

    // Start file watcher
    let watcher_path = path.clone();
    tokio::spawn(async move {
        if let Err(e) = watch_files(watcher_path, reload_tx).await {
            tracing::error!(error = %e, "file watcher stopped");
        }
    });

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("\n🚀 Preview ready at: http://localhost:{}", port);
    println!("   Press Ctrl+C to stop\n");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to port")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn router(state: AppState, public_dir: PathBuf) -> Router {
    let not_found = not_found_handler.with_state(state.clone());

    Router::new()
        .route("/", get(index_handler))
        .route("/recipes/{slug}", get(recipe_handler))
        .route("/sign-in", get(sign_in_handler))
        .route("/style.css", get(stylesheet_handler))
        .route("/_reload", get(sse_handler))
        .fallback_service(ServeDir::new(public_dir).not_found_service(not_found))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Watch for file changes and trigger reload
async fn watch_files(path: PathBuf, reload_tx: broadcast::Sender<()>) -> Result<()> {
    let (tx, mut rx) = tokio::sync::mpsc::channel(100);

    let mut watcher =
        notify::recommended_watcher(move |res: Result<NotifyEvent, notify::Error>| {
            if let Ok(event) = res {
                let _ = tx.blocking_send(event);
            }
        })?;

    watcher.watch(&path, RecursiveMode::Recursive)?;

    while let Some(event) = rx.recv().await {
        match event.kind {
            EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_) => {
                // Ignore editor temp files and hidden files
                if event.paths.iter().any(|p| is_watched_file(p)) {
                    tracing::info!(paths = ?event.paths, "site changed, reloading");
                    let _ = reload_tx.send(());
                }
            }
            _ => {}
        }
    }

    Ok(())
}

fn is_watched_file(path: &std::path::Path) -> bool {
    let filename = path.file_name().unwrap_or_default().to_string_lossy();
    !filename.starts_with('.') && !filename.ends_with('~')
}

/// SSE endpoint for hot reload
async fn sse_handler(
    State(state): State<AppState>,
) -> Sse<impl futures::Stream<Item = Result<Event, std::convert::Infallible>>> {
    let mut rx = state.reload_tx.subscribe();

    let stream = async_stream::stream! {
        loop {
            match rx.recv().await {
                Ok(()) => yield Ok(Event::default().data("reload")),
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Identity of the requesting visitor, when the site has auth enabled
fn request_identity(site: &SiteConfig, headers: &HeaderMap) -> Option<SessionCookie> {
    let auth = site.auth.as_ref()?;
    let cookie = headers.get(header::COOKIE).and_then(|v| v.to_str().ok());
    Some(SessionCookie::from_header(
        cookie,
        &auth.session_cookie,
        &auth.sign_in_url,
    ))
}

fn overlay(identity: Option<&SessionCookie>) -> AuthOverlay<'_> {
    match identity {
        Some(identity) => AuthOverlay::Resolved(identity),
        None => AuthOverlay::Open,
    }
}

fn error_page(err: &anyhow::Error) -> Response {
    let message = format!("{:#}", err);
    tracing::warn!(error = %message, "failed to load site");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(format!(
            r#"<!DOCTYPE html>
<html><head><title>Error</title></head><body>
<h1>Site Error</h1>
<pre>{}</pre>
</body></html>"#,
            html_escape(&message)
        )),
    )
        .into_response()
}

/// Main index page handler
async fn index_handler(State(state): State<AppState>) -> Response {
    let site = match load_site(&state.site_path) {
        Ok(site) => site,
        Err(e) => return error_page(&e),
    };

    let ctx = RenderContext {
        site: &site.config,
        overlay: AuthOverlay::Open,
        is_preview: true,
    };
    Html(render_index(&ctx, &site.recipes)).into_response()
}

/// Detail page handler; unknown slugs get the not-found page with a 404
async fn recipe_handler(
    State(state): State<AppState>,
    UrlPath(slug): UrlPath<String>,
    headers: HeaderMap,
) -> Response {
    let site = match load_site(&state.site_path) {
        Ok(site) => site,
        Err(e) => return error_page(&e),
    };

    let identity = request_identity(&site.config, &headers);
    let ctx = RenderContext {
        site: &site.config,
        overlay: overlay(identity.as_ref()),
        is_preview: true,
    };

    let table = RouteTable::new(site.recipes);
    let resolution = table.resolve(&slug);
    let status = if resolution.is_found() {
        StatusCode::OK
    } else {
        tracing::debug!(%slug, "no recipe for slug");
        StatusCode::NOT_FOUND
    };

    (status, Html(render_recipe(&ctx, resolution))).into_response()
}

/// Hand the visitor to the identity provider's sign-in flow
async fn sign_in_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let site = match load_site(&state.site_path) {
        Ok(site) => site,
        Err(e) => return error_page(&e),
    };

    match request_identity(&site.config, &headers) {
        Some(identity) => Redirect::temporary(&identity.sign_in().url).into_response(),
        None => Redirect::temporary("/").into_response(),
    }
}

async fn stylesheet_handler() -> Response {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET).into_response()
}

async fn not_found_handler(State(state): State<AppState>) -> Response {
    let site = match load_site(&state.site_path) {
        Ok(site) => site,
        Err(e) => return error_page(&e),
    };

    let ctx = RenderContext {
        site: &site.config,
        overlay: AuthOverlay::Open,
        is_preview: true,
    };
    (StatusCode::NOT_FOUND, Html(render_not_found(&ctx))).into_response()
}
