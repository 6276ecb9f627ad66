use crate::api::{Body, CmdMessage, CmdResult, MessageLevel, Outcome};
use crate::error::WidgetzError;
use crate::versioning::format_token;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

pub fn status_for(error: &WidgetzError) -> StatusCode {
    match error {
        WidgetzError::NotFound(_) => StatusCode::NOT_FOUND,
        WidgetzError::Conflict { .. } => StatusCode::CONFLICT,
        WidgetzError::MissingPrecondition | WidgetzError::InvalidToken(_) => {
            StatusCode::BAD_REQUEST
        }
        WidgetzError::InvalidLocation(_)
        | WidgetzError::Io(_)
        | WidgetzError::Serialization(_)
        | WidgetzError::Store(_)
        | WidgetzError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for WidgetzError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::info!(status = status.as_u16(), error = %self, "request rejected");
        }
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for CmdResult {
    fn into_response(self) -> Response {
        log_messages(&self.messages);

        let status = match self.outcome {
            Outcome::Ok => StatusCode::OK,
            Outcome::Created => StatusCode::CREATED,
        };

        let mut headers = HeaderMap::new();
        if let Some(location) = self.location {
            match HeaderValue::from_str(&location) {
                Ok(value) => {
                    headers.insert(header::LOCATION, value);
                }
                Err(_) => return WidgetzError::InvalidLocation(location).into_response(),
            }
        }
        if let Some(version) = self.version {
            if let Ok(value) = HeaderValue::from_str(&format_token(version)) {
                headers.insert(header::ETAG, value);
            }
        }

        match self.body {
            Body::Empty => (status, headers).into_response(),
            Body::One(widget) => (status, headers, Json(widget)).into_response(),
            Body::Many(widgets) => (status, headers, Json(widgets)).into_response(),
        }
    }
}

fn log_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info | MessageLevel::Success => tracing::info!("{}", message.content),
            MessageLevel::Warning => tracing::warn!("{}", message.content),
            MessageLevel::Error => tracing::error!("{}", message.content),
        }
    }
}
