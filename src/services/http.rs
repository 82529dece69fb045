use crate::models::error::AppError;
use serde::de::DeserializeOwned;

/// Issues a GET request and decodes the JSON body.
pub(crate) async fn get_json<T: DeserializeOwned>(
    http: &reqwest::Client,
    url: &str,
) -> Result<T, AppError> {
    let response = http.get(url).send().await.map_err(classify_error)?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(error_for_status(status, &body));
    }

    response
        .json()
        .await
        .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))
}

/// Converts a reqwest error into an appropriate `AppError`.
fn classify_error(error: reqwest::Error) -> AppError {
    if error.is_timeout() {
        AppError::ApiError(format!("Request timeout: {error}"))
    } else if error.is_request() {
        AppError::ApiError(format!("Request error: {error}"))
    } else {
        AppError::ApiError(format!("Network error: {error}"))
    }
}

/// Creates an error based on HTTP status code.
fn error_for_status(status: reqwest::StatusCode, body: &str) -> AppError {
    let message = extract_detail(body).unwrap_or_else(|| body.to_string());
    match status.as_u16() {
        429 => AppError::RateLimited,
        404 => AppError::NotFound(message),
        400..=499 => AppError::ApiError(format!("Client error {status}: {message}")),
        500..=599 => AppError::ApiError(format!("Server error {status}: {message}")),
        _ => AppError::ApiError(format!("Unexpected status {status}: {message}")),
    }
}

/// Best-effort extraction of the `detail` message from a JSON error body.
pub fn extract_detail(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("detail")?
        .as_str()
        .map(String::from)
}
