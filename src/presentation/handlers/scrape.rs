use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::Value;

use crate::application::ports::{DocumentRenderer, PageFetcher, TextExtractor};
use crate::application::services::ScrapeError;
use crate::domain::ScrapeRequest;
use crate::infrastructure::observability::{TARGET_URL_FIELD, sanitize_url};
use crate::presentation::state::AppState;

pub const USAGE_MESSAGE: &str = "This HTTP triggered function executed successfully. Pass a URL in the query string or request body.";

/// Inputs accepted from the query string or a JSON body.
#[derive(Debug, Default, Deserialize)]
pub struct ScrapeParams {
    pub url: Option<String>,
    pub filename: Option<String>,
    pub containername: Option<String>,
}

impl ScrapeParams {
    /// Falls back to the JSON body when the query carries no url. Keys are
    /// read one by one and non-string values are skipped. An unreadable body is treated as if none was sent.
    fn with_body_fallback(self, body: &[u8]) -> Self {
        if non_empty(&self.url).is_some() {
            return self;
        }

        let json = match serde_json::from_slice::<Value>(body) {
            Ok(json) => json,
            Err(e) => {
                if !body.is_empty() {
                    tracing::debug!(error = %e, "Ignoring malformed request body");
                }
                return self;
            }
        };

        let field = |key: &str| json.get(key).and_then(Value::as_str).map(str::to_string);

        Self {
            url: field("url"),
            filename: self.filename.or_else(|| field("filename")),
            containername: self.containername.or_else(|| field("containername")),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

pub struct PipelineFailure(ScrapeError);

impl IntoResponse for PipelineFailure {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "Scrape pipeline failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

pub async fn scrape_handler<F, X, R>(
    State(state): State<AppState<F, X, R>>,
    query: Result<Query<ScrapeParams>, QueryRejection>,
    body: Bytes,
) -> Result<(StatusCode, String), PipelineFailure>
where
    F: PageFetcher + 'static,
    X: TextExtractor + 'static,
    R: DocumentRenderer + 'static,
{
    let params = match query {
        Ok(Query(params)) => params,
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring unparseable query string");
            ScrapeParams::default()
        }
    }
    .with_body_fallback(&body);

    let Some(url) = non_empty(&params.url).map(str::to_string) else {
        tracing::info!("Scrape request without url, returning usage");
        return Ok((StatusCode::OK, USAGE_MESSAGE.to_string()));
    };

    let redacted = sanitize_url(&url);
    tracing::Span::current().record(TARGET_URL_FIELD, redacted.as_str());
    tracing::info!(
        url = %redacted,
        filename = ?params.filename,
        container = ?params.containername,
        "Scrape requested"
    );

    let request = ScrapeRequest::new(url)
        .with_file_name(params.filename)
        .with_container_name(params.containername);

    let message = state
        .scrape_service
        .scrape_page(request)
        .await
        .map_err(PipelineFailure)?;

    Ok((StatusCode::OK, message))
}
