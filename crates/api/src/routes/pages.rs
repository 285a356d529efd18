//! Front-end shell and static asset routes.
//!
//! Every page path serves the same shell file; the browser app renders the
//! page itself and pulls its data from `/api`.

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::config::ServerConfig;
use crate::state::AppState;

/// Paths that render the single-page shell.
pub const PAGE_PATHS: [&str; 5] = ["/", "/about", "/projects", "/contact", "/blog"];

/// Mount the page routes and `/static`.
pub fn router(config: &ServerConfig) -> Router<AppState> {
    let shell = ServeFile::new(&config.index_file);

    PAGE_PATHS
        .into_iter()
        .fold(Router::new(), |router, path| {
            router.route_service(path, shell.clone())
        })
        .nest_service("/static", ServeDir::new(&config.static_dir))
}
