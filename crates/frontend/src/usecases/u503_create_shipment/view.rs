use crate::shared::date_utils::today;
use crate::usecases::common::MutationSubmitter;
use contracts::domain::a002_order::OrderId;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u503_create_shipment::{CreateShipment, CreateShipmentForm};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CreateShipmentDialog(order_id: OrderId, open: RwSignal<bool>) -> impl IntoView {
    let submitter = MutationSubmitter::new();
    let saving = submitter.submitting();
    let submit_label = submitter.button_label::<CreateShipment>("Create Shipment");

    let initial = CreateShipmentForm::new(today());
    let shipped_date = RwSignal::new(initial.shipped_date);
    let carrier = RwSignal::new(initial.carrier);
    let tracking_number = RwSignal::new(initial.tracking_number);

    let reset = move || {
        let form = CreateShipmentForm::new(today());
        shipped_date.set(form.shipped_date);
        carrier.set(form.carrier);
        tracking_number.set(form.tracking_number);
    };

    let on_submit = move |_| {
        let form = CreateShipmentForm {
            shipped_date: shipped_date.get_untracked(),
            carrier: carrier.get_untracked(),
            tracking_number: tracking_number.get_untracked(),
        };
        submitter.submit::<CreateShipment>(form.validate(order_id), move || {
            open.set(false);
            reset();
        });
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{CreateShipment::display_name()}</DialogTitle>
                    <DialogContent>
                        <p class="dialog__description">{CreateShipment::description()}</p>
                        <Flex vertical=true gap=FlexGap::Medium>
                            <div class="form__group">
                                <Label>"Shipped Date"</Label>
                                <Input value=shipped_date input_type=InputType::Date disabled=saving />
                            </div>
                            <div class="form__group">
                                <Label>"Carrier"</Label>
                                <Input value=carrier placeholder="FedEx, UPS, etc." disabled=saving />
                            </div>
                            <div class="form__group">
                                <Label>"Tracking Number"</Label>
                                <Input value=tracking_number disabled=saving />
                            </div>
                        </Flex>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| open.set(false)
                            disabled=saving
                        >
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=on_submit
                            disabled=saving
                        >
                            {move || submit_label.get()}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
