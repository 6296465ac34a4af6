use super::request::ProcessReturnRequest;
use crate::domain::a002_order::OrderId;
use crate::domain::common::date::{parse_wire_date, WIRE_DATE_FORMAT};
use crate::usecases::common::{required, FormError};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessReturnForm {
    pub return_date: String,
    pub reason: String,
}

impl ProcessReturnForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            return_date: today.format(WIRE_DATE_FORMAT).to_string(),
            reason: String::new(),
        }
    }

    pub fn validate(&self, order_id: OrderId) -> Result<ProcessReturnRequest, FormError> {
        let return_date = parse_wire_date(&self.return_date)
            .ok_or_else(|| FormError::InvalidDate(self.return_date.clone()))?;

        Ok(ProcessReturnRequest {
            order_id,
            return_date,
            reason: required(&self.reason, "Reason")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builds_wire_request() {
        let mut form = ProcessReturnForm::new(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        form.reason = "Damaged in transit\n".into();
        let request = form.validate(OrderId(9)).unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "order_id": 9,
                "return_date": "2024-03-15",
                "reason": "Damaged in transit"
            })
        );
    }

    #[test]
    fn reason_is_required() {
        let form = ProcessReturnForm::new(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(
            form.validate(OrderId(9)),
            Err(FormError::Required { field: "Reason" })
        );
    }
}
