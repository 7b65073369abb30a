//! Classification of raw HTTP responses into typed results.
//!
//! Only 2xx bodies are materialised. Other statuses map onto the
//! corresponding [`OsrmError`] variant; 4xx bodies are probed for the OSRM
//! `code` and `message` so callers can see why a request was rejected.

use serde_json::Value;

use crate::error::OsrmError;
use crate::model::ServiceResponse;
use crate::transport::RawResponse;

/// Turn a raw response into the typed response `R` or an [`OsrmError`].
///
/// # Errors
/// Returns the [`OsrmError`] variant matching the status class, or
/// [`OsrmError::MalformedResponse`] when a 2xx body does not fit `R`.
///
/// # Examples
/// ```
/// use osrm_core::{NearestResponse, OsrmError, RawResponse, interpret};
///
/// let raw = RawResponse::new(404, br#"{"code":"InvalidQuery","message":"bad coord"}"#.to_vec());
/// let err = interpret::<NearestResponse>(raw).unwrap_err();
/// assert!(matches!(err, OsrmError::BadRequest { status: 404, .. }));
/// ```
pub fn interpret<R: ServiceResponse>(response: RawResponse) -> Result<R, OsrmError> {
    let RawResponse { status, body } = response;
    match status {
        200..=299 => Ok(R::from_body(&body)?),
        300..=399 => Err(OsrmError::UnexpectedRedirect { status }),
        400..=499 => {
            let error_body: Option<Value> = serde_json::from_slice(&body).ok();
            Err(OsrmError::BadRequest {
                status,
                code: text_field(error_body.as_ref(), "code"),
                message: text_field(error_body.as_ref(), "message"),
            })
        }
        500..=599 => Err(OsrmError::ServerError {
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
        }),
        _ => Err(OsrmError::UnknownStatus { status }),
    }
}

/// Read `key` from a JSON object body when it holds a string.
fn text_field(body: Option<&Value>, key: &str) -> Option<String> {
    body?.get(key)?.as_str().map(str::to_owned)
}
