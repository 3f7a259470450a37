//! Shared response helpers for sheet API calls.
//!
//! Centralizes status checks (429 rate limiting with `Retry-After` parsing,
//! non-success → [`SheetsError::Api`]) so the endpoint code stays focused on
//! request construction and response mapping.

use qrs_transport::{HttpClient, HttpResponse};
use serde::Deserialize;

use crate::error::SheetsError;

/// Error payload returned by the API (`{"errorCode": .., "message": ..}`).
#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Check a response for error conditions.
///
/// On failure the exchange is drained (for the error message) or closed, so
/// no response is left open.
pub async fn check_status<H: HttpClient>(
    http: &mut H,
    response: HttpResponse,
) -> Result<HttpResponse, SheetsError> {
    if response.status == 429 {
        http.finish_exchange();
        return Err(SheetsError::RateLimited {
            retry_after_secs: parse_retry_after(&response),
        });
    }
    if !response.is_success() {
        let body = match http.read_body().await {
            Ok(body) => body,
            Err(error) => {
                tracing::debug!(status = response.status, %error, "could not read error body");
                Vec::new()
            }
        };
        return Err(SheetsError::Api {
            status: response.status,
            message: error_message(&body),
        });
    }
    Ok(response)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(response: &HttpResponse) -> u64 {
    response
        .header("Retry-After")
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(60)
}

/// Prefer the API's `message` field; fall back to the raw body text.
fn error_message(body: &[u8]) -> String {
    serde_json::from_slice::<ApiErrorBody>(body).map_or_else(
        |_| String::from_utf8_lossy(body).trim().to_string(),
        |parsed| parsed.message,
    )
}
