use crate::{
    client::{
        api::helper::{get, parse_optional_response, send_request},
        model::error::ApiError,
    },
    model::user::UserDto,
};

/// Fetch the logged in user, `None` when logged out
pub async fn get_user() -> Result<Option<UserDto>, ApiError> {
    let response = send_request(get("/api/auth/user")).await?;
    parse_optional_response(response).await
}
