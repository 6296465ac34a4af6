use crate::domain::a002_order::OrderId;
use crate::domain::common::date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Тело запроса POST /api/shipments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateShipmentRequest {
    pub order_id: OrderId,
    #[serde(with = "date")]
    pub shipped_date: NaiveDate,
    pub carrier: String,
    pub tracking_number: String,
}
