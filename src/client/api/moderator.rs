use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::order::AdminOrderDto,
};

pub async fn get_orders() -> Result<Vec<AdminOrderDto>, ApiError> {
    let response = send_request(get("/api/moderator/orders")).await?;
    parse_response(response).await
}
