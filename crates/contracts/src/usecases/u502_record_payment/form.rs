use super::request::RecordPaymentRequest;
use crate::domain::a002_order::OrderId;
use crate::domain::common::date::{parse_wire_date, WIRE_DATE_FORMAT};
use crate::usecases::common::{required, FormError};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordPaymentForm {
    pub payment_date: String,
    pub amount: String,
    pub payment_method: String,
}

impl RecordPaymentForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            payment_date: today.format(WIRE_DATE_FORMAT).to_string(),
            amount: String::new(),
            payment_method: String::new(),
        }
    }

    pub fn validate(&self, order_id: OrderId) -> Result<RecordPaymentRequest, FormError> {
        let payment_date = parse_wire_date(&self.payment_date)
            .ok_or_else(|| FormError::InvalidDate(self.payment_date.clone()))?;
        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite())
            .ok_or(FormError::InvalidAmount)?;
        if amount < 0.0 {
            return Err(FormError::NegativeAmount);
        }
        let payment_method = required(&self.payment_method, "Payment method")?;

        Ok(RecordPaymentRequest {
            order_id,
            payment_date,
            amount,
            payment_method,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form(amount: &str, method: &str) -> RecordPaymentForm {
        let mut f = RecordPaymentForm::new(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        f.amount = amount.into();
        f.payment_method = method.into();
        f
    }

    #[test]
    fn builds_wire_request() {
        let request = form("120.50", "Credit Card").validate(OrderId(7)).unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "order_id": 7,
                "payment_date": "2024-03-15",
                "amount": 120.5,
                "payment_method": "Credit Card"
            })
        );
    }

    #[test]
    fn fresh_form_is_dated_today_and_blank() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let f = RecordPaymentForm::new(today);
        assert_eq!(f.payment_date, "2024-06-01");
        assert!(f.amount.is_empty());
        assert!(f.payment_method.is_empty());
    }

    #[test]
    fn zero_amount_is_allowed() {
        assert!(form("0", "Cash").validate(OrderId(1)).is_ok());
    }

    #[test]
    fn rejects_bad_amounts_and_blank_method() {
        assert_eq!(form("", "Cash").validate(OrderId(1)), Err(FormError::InvalidAmount));
        assert_eq!(form("abc", "Cash").validate(OrderId(1)), Err(FormError::InvalidAmount));
        assert_eq!(form("NaN", "Cash").validate(OrderId(1)), Err(FormError::InvalidAmount));
        assert_eq!(form("-5", "Cash").validate(OrderId(1)), Err(FormError::NegativeAmount));
        assert_eq!(
            form("5", "  ").validate(OrderId(1)),
            Err(FormError::Required { field: "Payment method" })
        );
    }
}
