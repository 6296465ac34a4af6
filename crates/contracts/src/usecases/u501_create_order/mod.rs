pub mod form;
pub mod request;

pub use form::{CreateOrderForm, DraftLine};
pub use request::{CreateOrderRequest, OrderItemRequest};

use crate::shared::invalidation::ResourceKey;
use crate::usecases::common::{MutationUseCase, UseCaseMetadata};

pub struct CreateOrder;

impl UseCaseMetadata for CreateOrder {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "create_order"
    }

    fn display_name() -> &'static str {
        "Create Order"
    }

    fn description() -> &'static str {
        "Fill in the details to create a new customer order."
    }
}

impl MutationUseCase for CreateOrder {
    type Request = CreateOrderRequest;

    const ENDPOINT: &'static str = "/api/orders";

    fn success_title() -> &'static str {
        "Order created"
    }

    fn success_description() -> &'static str {
        "The order has been created successfully."
    }

    fn fallback_error() -> &'static str {
        "Failed to create order"
    }

    fn invalidates(_request: &CreateOrderRequest) -> Vec<ResourceKey> {
        vec![ResourceKey::Orders]
    }

    fn pending_label() -> &'static str {
        "Creating..."
    }
}
