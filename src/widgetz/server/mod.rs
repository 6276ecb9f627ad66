//! # HTTP Layer
//!
//! The only part of widgetz that knows about HTTP. Handlers extract path ids,
//! JSON bodies and the `If-Match` header, call the [`WidgetzApi`] facade, and
//! turn the returned `CmdResult` (or error) into a response.
//!
//! ## Routes
//!
//! ```text
//! GET    {base}/widgets              list
//! POST   {base}/widget               create
//! GET    {base}/widget/{id}          read
//! PUT    {base}/widget/{id}          update (strict If-Match)
//! DELETE {base}/widget/{id}          delete
//! PUT    {base}/compat/widget/{id}   update (loose If-Match), only with compat routes on
//! ```

use crate::api::WidgetzApi;
use crate::error::{Result, WidgetzError};
use crate::store::DataStore;
use axum::routing::{get, post, put};
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod response;

pub fn router<S: DataStore + 'static>(api: Arc<WidgetzApi<S>>, compat_routes: bool) -> Router {
    let base = api.paths().base().to_string();

    let mut routes = Router::new()
        .route("/widgets", get(handlers::list_widgets::<S>))
        .route("/widget", post(handlers::create_widget::<S>))
        .route(
            "/widget/:id",
            get(handlers::get_widget::<S>)
                .put(handlers::update_widget::<S>)
                .delete(handlers::delete_widget::<S>),
        );
    if compat_routes {
        routes = routes.route(
            "/compat/widget/:id",
            put(handlers::update_widget_compat::<S>),
        );
    }
    let routes = routes.with_state(api);

    let app = if base.is_empty() {
        routes
    } else {
        Router::new().nest(&base, routes)
    };
    app.layer(TraceLayer::new_for_http())
}

/// Serves until `shutdown` resolves, letting in-flight requests finish.
pub async fn serve<S, F>(
    api: WidgetzApi<S>,
    listener: TcpListener,
    compat_routes: bool,
    shutdown: F,
) -> Result<()>
where
    S: DataStore + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr().map_err(WidgetzError::Io)?;
    let base = api.paths().base().to_string();
    let app = router(Arc::new(api), compat_routes);

    tracing::info!(%addr, base = %base, compat_routes, "widgetz listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(WidgetzError::Io)?;
    tracing::info!("widgetz stopped");
    Ok(())
}
