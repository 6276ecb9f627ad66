use crate::api::{CmdResult, WidgetzApi};
use crate::error::WidgetzError;
use crate::model::{WidgetDraft, WidgetId};
use crate::store::DataStore;
use axum::extract::{Json, Path, State};
use axum::http::{header, HeaderMap};
use std::sync::Arc;

type ApiState<S> = State<Arc<WidgetzApi<S>>>;
type Reply = Result<CmdResult, WidgetzError>;

pub async fn get_widget<S: DataStore>(State(api): ApiState<S>, Path(id): Path<WidgetId>) -> Reply {
    tracing::debug!(id, "get widget");
    api.get_widget(id)
}

pub async fn list_widgets<S: DataStore>(State(api): ApiState<S>) -> Reply {
    tracing::debug!("list widgets");
    api.list_widgets()
}

pub async fn create_widget<S: DataStore>(
    State(api): ApiState<S>,
    Json(draft): Json<WidgetDraft>,
) -> Reply {
    api.create_widget(draft)
}

pub async fn update_widget<S: DataStore>(
    State(api): ApiState<S>,
    Path(id): Path<WidgetId>,
    headers: HeaderMap,
    Json(draft): Json<WidgetDraft>,
) -> Reply {
    let token = if_match(&headers);
    tracing::debug!(id, if_match = ?token, "update widget");
    api.update_widget(id, draft, token.as_deref())
}

pub async fn update_widget_compat<S: DataStore>(
    State(api): ApiState<S>,
    Path(id): Path<WidgetId>,
    headers: HeaderMap,
    Json(draft): Json<WidgetDraft>,
) -> Reply {
    let token = if_match(&headers);
    tracing::debug!(id, if_match = ?token, "compat update widget");
    api.update_widget_compat(id, draft, token.as_deref())
}

pub async fn delete_widget<S: DataStore>(State(api): ApiState<S>, Path(id): Path<WidgetId>) -> Reply {
    api.delete_widget(id)
}

/// Raw `If-Match` value. Non-UTF-8 bytes are replaced rather than rejected so
/// the lookup still runs first and decides between 404 and a token error.
fn if_match(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::IF_MATCH)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
}
