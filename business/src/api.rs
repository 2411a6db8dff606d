//! Record deletion API client.
//!
//! Performs network IO against the `/delete_visitor` and `/delete_resident`
//! endpoints. Callers map the result into table updates and notifications.

use log::info;
use thiserror::Error;

use crate::BusinessConfig;
use crate::http::{Client, HttpError};
use crate::record::{DeleteRequest, DeleteResponse, RecordKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] HttpError),

    #[error("Failed to serialize request: {0}")]
    Serialize(String),

    #[error("Failed to parse response (status {status}): {message}")]
    Parse { status: u16, message: String },
}

/// A typed API result.
pub type ApiResult<T> = Result<T, ApiError>;

/// POST `/delete_visitor` or `/delete_resident`, depending on `kind`.
/// Body: `{ "license_plate": <string|null>, "phone_number": <string|null> }`
///
/// The status code is not inspected: any JSON body is returned for the caller
/// to judge, anything else is a [`ApiError::Parse`].
pub async fn delete_record(
    config: &BusinessConfig,
    kind: RecordKind,
    request: &DeleteRequest,
) -> ApiResult<DeleteResponse> {
    let url = config.endpoint_url(kind.delete_path());
    info!("Deleting {kind} record via {url}: {request:?}");

    let response = Client::post(&url)
        .json(request)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await?;

    response.json().map_err(|e| ApiError::Parse {
        status: response.status,
        message: e.to_string(),
    })
}
