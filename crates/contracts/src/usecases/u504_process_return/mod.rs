pub mod form;
pub mod request;

pub use form::ProcessReturnForm;
pub use request::ProcessReturnRequest;

use crate::shared::invalidation::ResourceKey;
use crate::usecases::common::{MutationUseCase, UseCaseMetadata};

pub struct ProcessReturn;

impl UseCaseMetadata for ProcessReturn {
    fn usecase_index() -> &'static str {
        "u504"
    }

    fn usecase_name() -> &'static str {
        "process_return"
    }

    fn display_name() -> &'static str {
        "Process Return"
    }

    fn description() -> &'static str {
        "Enter return details for the order"
    }
}

impl MutationUseCase for ProcessReturn {
    type Request = ProcessReturnRequest;

    const ENDPOINT: &'static str = "/api/returns";

    fn success_title() -> &'static str {
        "Return processed"
    }

    fn success_description() -> &'static str {
        "The return has been processed successfully."
    }

    fn fallback_error() -> &'static str {
        "Failed to process return"
    }

    fn invalidates(request: &ProcessReturnRequest) -> Vec<ResourceKey> {
        vec![
            ResourceKey::Orders,
            ResourceKey::OrderLines(request.order_id.value()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u503_create_shipment::CreateShipment;

    #[test]
    fn endpoints_and_names() {
        assert_eq!(ProcessReturn::ENDPOINT, "/api/returns");
        assert_eq!(ProcessReturn::full_name(), "u504_process_return");
        assert_eq!(CreateShipment::ENDPOINT, "/api/shipments");
        assert_eq!(CreateShipment::success_title(), "Shipment created");
        assert_eq!(ProcessReturn::fallback_error(), "Failed to process return");
    }
}
