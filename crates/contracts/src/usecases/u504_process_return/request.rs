use crate::domain::a002_order::OrderId;
use crate::domain::common::date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Тело запроса POST /api/returns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessReturnRequest {
    pub order_id: OrderId,
    #[serde(with = "date")]
    pub return_date: NaiveDate,
    pub reason: String,
}
