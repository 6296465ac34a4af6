pub mod form;
pub mod request;

pub use form::RecordPaymentForm;
pub use request::RecordPaymentRequest;

use crate::shared::invalidation::ResourceKey;
use crate::usecases::common::{MutationUseCase, UseCaseMetadata};

pub struct RecordPayment;

impl UseCaseMetadata for RecordPayment {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "record_payment"
    }

    fn display_name() -> &'static str {
        "Record Payment"
    }

    fn description() -> &'static str {
        "Enter payment details for the order"
    }
}

impl MutationUseCase for RecordPayment {
    type Request = RecordPaymentRequest;

    const ENDPOINT: &'static str = "/api/payments";

    fn success_title() -> &'static str {
        "Payment recorded"
    }

    fn success_description() -> &'static str {
        "The payment has been recorded successfully."
    }

    fn fallback_error() -> &'static str {
        "Failed to record payment"
    }

    fn invalidates(request: &RecordPaymentRequest) -> Vec<ResourceKey> {
        vec![
            ResourceKey::Orders,
            ResourceKey::OrderLines(request.order_id.value()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_order::OrderId;
    use crate::shared::api_error::ApiError;
    use chrono::NaiveDate;

    #[test]
    fn invalidates_orders_and_lines_of_that_order() {
        let request = RecordPaymentRequest {
            order_id: OrderId(42),
            payment_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            amount: 10.0,
            payment_method: "Cash".into(),
        };
        assert_eq!(
            RecordPayment::invalidates(&request),
            vec![ResourceKey::Orders, ResourceKey::OrderLines(42)]
        );
    }

    #[test]
    fn notifications() {
        assert_eq!(RecordPayment::success_notification().title, "Payment recorded");
        assert_eq!(
            RecordPayment::failure_notification(&ApiError::Decode("eof".into())).description,
            "Failed to record payment"
        );
    }
}
