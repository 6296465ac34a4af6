use crate::domain::a001_product::ProductId;
use crate::domain::a003_customer::CustomerId;
use crate::domain::a004_salesperson::SalespersonId;
use crate::domain::common::date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Тело запроса POST /api/orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub customer_id: CustomerId,
    pub salesperson_id: SalespersonId,
    #[serde(with = "date")]
    pub order_date: NaiveDate,
    /// Строки заказа в порядке добавления
    pub products: Vec<OrderItemRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemRequest {
    pub product_id: ProductId,
    pub quantity: i64,
}
