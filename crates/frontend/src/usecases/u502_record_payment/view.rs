use crate::shared::date_utils::today;
use crate::usecases::common::MutationSubmitter;
use contracts::domain::a002_order::OrderId;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u502_record_payment::{RecordPayment, RecordPaymentForm};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn RecordPaymentDialog(order_id: OrderId, open: RwSignal<bool>) -> impl IntoView {
    let submitter = MutationSubmitter::new();
    let saving = submitter.submitting();
    let submit_label = submitter.button_label::<RecordPayment>("Record Payment");

    let initial = RecordPaymentForm::new(today());
    let payment_date = RwSignal::new(initial.payment_date);
    let amount = RwSignal::new(initial.amount);
    let payment_method = RwSignal::new(initial.payment_method);

    let reset = move || {
        let form = RecordPaymentForm::new(today());
        payment_date.set(form.payment_date);
        amount.set(form.amount);
        payment_method.set(form.payment_method);
    };

    let on_submit = move |_| {
        let form = RecordPaymentForm {
            payment_date: payment_date.get_untracked(),
            amount: amount.get_untracked(),
            payment_method: payment_method.get_untracked(),
        };
        submitter.submit::<RecordPayment>(form.validate(order_id), move || {
            open.set(false);
            reset();
        });
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{RecordPayment::display_name()}</DialogTitle>
                    <DialogContent>
                        <p class="dialog__description">{RecordPayment::description()}</p>
                        <Flex vertical=true gap=FlexGap::Medium>
                            <div class="form__group">
                                <Label>"Payment Date"</Label>
                                <Input value=payment_date input_type=InputType::Date disabled=saving />
                            </div>
                            <div class="form__group">
                                <Label>"Amount"</Label>
                                <Input value=amount input_type=InputType::Number placeholder="0.00" disabled=saving />
                            </div>
                            <div class="form__group">
                                <Label>"Payment Method"</Label>
                                <Input value=payment_method placeholder="Credit Card, Cash, etc." disabled=saving />
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
