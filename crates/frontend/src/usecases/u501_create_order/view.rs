//! Диалог "Create Order"
//!
//! Customers and salespeople come from the configured party directory and are
//! loaded each time the dialog opens; products come from `/api/products`.

use crate::domain::a001_product::api::fetch_products;
use crate::shared::date_utils::today;
use crate::shared::directory::use_directory;
use crate::shared::icons::icon;
use crate::shared::resource::use_remote;
use crate::usecases::common::MutationSubmitter;
use contracts::domain::a001_product::Product;
use contracts::domain::a002_order::format_money;
use contracts::domain::common::{load_party_lists, PartyLists};
use contracts::shared::invalidation::ResourceKey;
use contracts::shared::resource::ResourceSnapshot;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_create_order::{CreateOrder, CreateOrderForm, DraftLine};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn CreateOrderDialog(open: RwSignal<bool>) -> impl IntoView {
    let submitter = MutationSubmitter::new();
    let saving = submitter.submitting();
    let submit_label = submitter.button_label::<CreateOrder>("Create Order");
    let directory = use_directory();

    let products = use_remote(ResourceKey::Products, fetch_products);
    let product_list =
        Memo::new(move |_| products.with(|s| s.shown().cloned().unwrap_or_default()));

    let parties = RwSignal::new(ResourceSnapshot::<PartyLists>::new());
    let party_lists = Memo::new(move |_| {
        parties.with(|s| s.shown().cloned().unwrap_or_default())
    });

    let form = RwSignal::new(CreateOrderForm::new(today()));
    let customer_id = RwSignal::new(String::new());
    let salesperson_id = RwSignal::new(String::new());
    let order_date = RwSignal::new(form.with_untracked(|f| f.order_date.clone()));

    // Reloaded on every open; a response from an earlier open is dropped.
    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        let source = directory.directory();
        let Some(ticket) = parties.try_update(|s| s.begin()) else {
            return;
        };
        spawn_local(async move {
            let result = load_party_lists(source.as_ref()).await;
            if let Err(e) = &result {
                log::error!("Error loading customers and salespeople: {}", e);
            }
            let result =
                result.map_err(|e| e.user_message("Failed to load customers and salespeople"));
            let _ = parties.try_update(|s| s.resolve(ticket, result));
        });
    });

    let estimate = Memo::new(move |_| {
        let products = product_list.get();
        form.with(|f| f.estimate(&products))
    });

    let on_submit = move |_| {
        form.update(|f| {
            f.customer_id = customer_id.get_untracked();
            f.salesperson_id = salesperson_id.get_untracked();
            f.order_date = order_date.get_untracked();
        });
        let validated = form.with_untracked(|f| f.validate());
        submitter.submit::<CreateOrder>(validated, move || {
            open.set(false);
            form.update(|f| f.reset(today()));
            customer_id.set(String::new());
            salesperson_id.set(String::new());
            order_date.set(form.with_untracked(|f| f.order_date.clone()));
        });
    };

    let line_row = move |index: usize, line: DraftLine| {
        let can_remove = form.with(|f| f.can_remove_lines());
        view! {
            <div class="order-line">
                <select
                    class="form__select order-line__product"
                    prop:value=line.product_id.clone()
                    disabled=move || saving.get()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.set_product(index, value));
                    }
                >
                    <option value="">"Select product"</option>
                    {product_list.get().into_iter().map(|p: Product| {
                        let selected = p.id.to_string() == line.product_id;
                        view! {
                            <option value=p.id.to_string() selected=selected>
                                {format!("{} ({})", p.name, format_money(p.price))}
                            </option>
                        }
                    }).collect_view()}
                </select>
                <input
                    class="form__input order-line__quantity"
                    type="number"
                    min="1"
                    prop:value=line.quantity.clone()
                    disabled=move || saving.get()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.set_quantity(index, value));
                    }
                />
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| {
                        form.update(|f| {
                            f.remove_line(index);
                        });
                    }
                    disabled=Signal::derive(move || !can_remove || saving.get())
                >
                    {icon("trash")}
                </Button>
            </div>
        }
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{CreateOrder::display_name()}</DialogTitle>
                    <DialogContent>
                        <p class="dialog__description">{CreateOrder::description()}</p>
                        {move || parties.with(|s| s.error().map(str::to_string)).map(|e| view! { <div class="alert alert--error">{e}</div> })}
                        <Flex vertical=true gap=FlexGap::Medium>
                            <div class="form__group">
                                <Label>"Customer"</Label>
                                <Select value=customer_id disabled=saving>
                                    <option value="">"Select customer"</option>
                                    {move || party_lists.get().customers.into_iter().map(|c| view! {
                                        <option value=c.id.value().to_string()>{c.name}</option>
                                    }).collect_view()}
                                </Select>
                            </div>
                            <div class="form__group">
                                <Label>"Salesperson"</Label>
                                <Select value=salesperson_id disabled=saving>
                                    <option value="">"Select salesperson"</option>
                                    {move || party_lists.get().salespeople.into_iter().map(|s| view! {
                                        <option value=s.id.value().to_string()>{s.name}</option>
                                    }).collect_view()}
                                </Select>
                            </div>
                            <div class="form__group">
                                <Label>"Order Date"</Label>
                                <Input value=order_date input_type=InputType::Date disabled=saving />
                            </div>

                            <div class="form__group">
                                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                                    <Label>"Products"</Label>
                                    <Button
                                        appearance=ButtonAppearance::Secondary
                                        on_click=move |_| form.update(|f| f.add_line())
                                        disabled=saving
                                    >
                                        {icon("plus")}
                                        " Add Product"
                                    </Button>
                                </Flex>
                                {move || {
                                    product_list.track();
                                    form.with(|f| f.lines().to_vec())
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, line)| line_row(index, line))
                                        .collect_view()
                                }}
                            </div>

                            <div class="order-totals">
                                <div class="order-totals__row">
                                    <span>"Subtotal"</span>
                                    <span>{move || format_money(estimate.get().subtotal)}</span>
                                </div>
                                <div class="order-totals__row">
                                    <span>"Tax (10%)"</span>
                                    <span>{move || format_money(estimate.get().tax)}</span>
                                </div>
                                <div class="order-totals__row order-totals__row--total">
                                    <span>"Total"</span>
                                    <span>{move || format_money(estimate.get().total)}</span>
                                </div>
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
