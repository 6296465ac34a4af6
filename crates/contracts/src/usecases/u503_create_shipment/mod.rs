pub mod form;
pub mod request;

pub use form::CreateShipmentForm;
pub use request::CreateShipmentRequest;

use crate::shared::invalidation::ResourceKey;
use crate::usecases::common::{MutationUseCase, UseCaseMetadata};

pub struct CreateShipment;

impl UseCaseMetadata for CreateShipment {
    fn usecase_index() -> &'static str {
        "u503"
    }

    fn usecase_name() -> &'static str {
        "create_shipment"
    }

    fn display_name() -> &'static str {
        "Create Shipment"
    }

    fn description() -> &'static str {
        "Enter shipment details for the order"
    }
}

impl MutationUseCase for CreateShipment {
    type Request = CreateShipmentRequest;

    const ENDPOINT: &'static str = "/api/shipments";

    fn success_title() -> &'static str {
        "Shipment created"
    }

    fn success_description() -> &'static str {
        "The shipment has been created successfully."
    }

    fn fallback_error() -> &'static str {
        "Failed to create shipment"
    }

    fn invalidates(request: &CreateShipmentRequest) -> Vec<ResourceKey> {
        vec![
            ResourceKey::Orders,
            ResourceKey::OrderLines(request.order_id.value()),
        ]
    }
}
