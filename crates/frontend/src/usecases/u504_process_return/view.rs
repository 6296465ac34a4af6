use crate::shared::date_utils::today;
use crate::usecases::common::MutationSubmitter;
use contracts::domain::a002_order::OrderId;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u504_process_return::{ProcessReturn, ProcessReturnForm};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ProcessReturnDialog(order_id: OrderId, open: RwSignal<bool>) -> impl IntoView {
    let submitter = MutationSubmitter::new();
    let saving = submitter.submitting();
    let submit_label = submitter.button_label::<ProcessReturn>("Process Return");

    let initial = ProcessReturnForm::new(today());
    let return_date = RwSignal::new(initial.return_date);
    let reason = RwSignal::new(initial.reason);

    let on_submit = move |_| {
        let form = ProcessReturnForm {
            return_date: return_date.get_untracked(),
            reason: reason.get_untracked(),
        };
        submitter.submit::<ProcessReturn>(form.validate(order_id), move || {
            open.set(false);
            let defaults = ProcessReturnForm::new(today());
            return_date.set(defaults.return_date);
            reason.set(defaults.reason);
        });
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{ProcessReturn::display_name()}</DialogTitle>
                    <DialogContent>
                        <p class="dialog__description">{ProcessReturn::description()}</p>
                        <Flex vertical=true gap=FlexGap::Medium>
                            <div class="form__group">
                                <Label>"Return Date"</Label>
                                <Input value=return_date input_type=InputType::Date disabled=saving />
                            </div>
                            <div class="form__group">
                                <Label>"Reason"</Label>
                                <Textarea value=reason placeholder="Reason for return" attr:rows=3 disabled=saving />
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
