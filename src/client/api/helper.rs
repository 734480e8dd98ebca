use crate::{client::model::error::ApiError, model::api::ErrorDto};
use reqwasm::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Parse a JSON success body, or the `ErrorDto` of a failed response
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !is_success(&response) {
        return Err(error_from_response(response).await);
    }

    response.json::<T>().await.map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to parse response: {}", e),
    })
}

/// Like `parse_response`, mapping 404 to `Ok(None)`
pub async fn parse_optional_response<T: DeserializeOwned>(
    response: Response,
) -> Result<Option<T>, ApiError> {
    if response.status() == 404 {
        return Ok(None);
    }

    parse_response(response).await.map(Some)
}

fn is_success(response: &Response) -> bool {
    (200..300).contains(&response.status())
}

async fn error_from_response(response: Response) -> ApiError {
    let status = response.status() as u64;

    let message = match response.json::<ErrorDto>().await {
        Ok(error_dto) => error_dto.error,
        Err(_) => "Unknown error".to_string(),
    };

    ApiError { status, message }
}

/// Create a GET request with credentials
pub fn get(url: &str) -> Request {
    Request::get(url).credentials(reqwasm::http::RequestCredentials::Include)
}

/// Create a POST request with credentials and JSON content type
pub fn post(url: &str) -> Request {
    Request::post(url)
        .credentials(reqwasm::http::RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

/// Create a PUT request with credentials and JSON content type
pub fn put(url: &str) -> Request {
    Request::put(url)
        .credentials(reqwasm::http::RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

/// Send a request and handle common errors
pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request.send().await.map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to send request: {}", e),
    })
}

/// Serialize a payload to JSON string
pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to serialize request: {}", e),
    })
}
