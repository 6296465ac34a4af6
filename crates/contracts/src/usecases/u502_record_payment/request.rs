use crate::domain::a002_order::OrderId;
use crate::domain::common::date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Тело запроса POST /api/payments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordPaymentRequest {
    pub order_id: OrderId,
    #[serde(with = "date")]
    pub payment_date: NaiveDate,
    pub amount: f64,
    pub payment_method: String,
}
