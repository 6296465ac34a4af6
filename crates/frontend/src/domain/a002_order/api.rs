use crate::shared::api_utils::get_json;
use contracts::domain::a002_order::{Order, OrderId, OrderLine};
use contracts::shared::api_error::ApiError;

pub async fn fetch_orders() -> Result<Vec<Order>, ApiError> {
    get_json("/api/orders").await
}

/// Строки заказа; заголовок заказа берётся из списка `/api/orders`.
pub async fn fetch_order_lines(id: OrderId) -> Result<Vec<OrderLine>, ApiError> {
    get_json(&format!("/api/orders/{}", id)).await
}
