//! HTTP server rendering pages on request

use anyhow::Result;
use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router, ServiceExt,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;
use tower_http::trace::TraceLayer;

use crate::views::Views;
use crate::Blog;

/// Shared handler state
type SharedViews = Arc<Views>;

/// Build the routing table, mounted under the configured `root`
pub fn router(views: Views) -> Router {
    let pages: Router<SharedViews> = Router::new()
        .route("/", get(home_handler))
        .route("/about", get(about_handler))
        .route("/posts", get(posts_handler))
        .route("/posts/:slug", get(post_handler))
        .fallback(fallback_handler);

    let root = views.blog().config.root.trim_matches('/').to_string();
    let app = if root.is_empty() {
        pages
    } else {
        Router::new()
            .nest(&format!("/{}", root), pages)
            .fallback(fallback_handler)
    };

    app.layer(TraceLayer::new_for_http())
        .with_state(Arc::new(views))
}

/// Start the server
pub async fn start(blog: &Blog, ip: &str, port: u16) -> Result<()> {
    blog.warn_catalog_issues();

    let views = Views::new(blog)?;
    let app = NormalizePathLayer::trim_trailing_slash().layer(router(views));

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");
    tracing::info!("Serving {} posts", blog.catalog.len());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}

/// Wraps render failures as a 500 response
struct ServerError(anyhow::Error);

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::error!("Render failed: {:#}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
    }
}

impl<E> From<E> for ServerError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

type HandlerResult = std::result::Result<Response, ServerError>;

async fn home_handler(State(views): State<SharedViews>) -> HandlerResult {
    Ok(Html(views.home()?).into_response())
}

async fn about_handler(State(views): State<SharedViews>) -> HandlerResult {
    Ok(Html(views.about()?).into_response())
}

async fn posts_handler(State(views): State<SharedViews>) -> HandlerResult {
    Ok(Html(views.posts()?).into_response())
}

async fn post_handler(
    State(views): State<SharedViews>,
    Path(slug): Path<String>,
) -> HandlerResult {
    let page = views.lookup(&slug);
    let html = Html(views.post(&page)?);

    if page.is_found() {
        Ok(html.into_response())
    } else {
        tracing::debug!("No post for slug {:?}", slug);
        Ok((StatusCode::NOT_FOUND, html).into_response())
    }
}

async fn fallback_handler(State(views): State<SharedViews>) -> HandlerResult {
    Ok((StatusCode::NOT_FOUND, Html(views.not_found()?)).into_response())
}
