use super::request::CreateShipmentRequest;
use crate::domain::a002_order::OrderId;
use crate::domain::common::date::{parse_wire_date, WIRE_DATE_FORMAT};
use crate::usecases::common::{required, FormError};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateShipmentForm {
    pub shipped_date: String,
    pub carrier: String,
    pub tracking_number: String,
}

impl CreateShipmentForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            shipped_date: today.format(WIRE_DATE_FORMAT).to_string(),
            carrier: String::new(),
            tracking_number: String::new(),
        }
    }

    pub fn validate(&self, order_id: OrderId) -> Result<CreateShipmentRequest, FormError> {
        let shipped_date = parse_wire_date(&self.shipped_date)
            .ok_or_else(|| FormError::InvalidDate(self.shipped_date.clone()))?;

        Ok(CreateShipmentRequest {
            order_id,
            shipped_date,
            carrier: required(&self.carrier, "Carrier")?,
            tracking_number: required(&self.tracking_number, "Tracking number")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form(carrier: &str, tracking: &str) -> CreateShipmentForm {
        let mut f = CreateShipmentForm::new(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        f.carrier = carrier.into();
        f.tracking_number = tracking.into();
        f
    }

    #[test]
    fn builds_wire_request() {
        let request = form("UPS", "1Z999").validate(OrderId(3)).unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "order_id": 3,
                "shipped_date": "2024-03-15",
                "carrier": "UPS",
                "tracking_number": "1Z999"
            })
        );
    }

    #[test]
    fn carrier_and_tracking_are_required() {
        assert_eq!(
            form("", "1Z").validate(OrderId(3)),
            Err(FormError::Required { field: "Carrier" })
        );
        assert_eq!(
            form("FedEx", " ").validate(OrderId(3)),
            Err(FormError::Required { field: "Tracking number" })
        );
    }
}
