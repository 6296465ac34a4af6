//! Карточка заказа: заголовок, строки с итогами и действия по заказу.

use crate::domain::a002_order::api::{fetch_order_lines, fetch_orders};
use crate::shared::components::{order_status_variant, Badge};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::resource::use_remote;
use crate::usecases::u502_record_payment::RecordPaymentDialog;
use crate::usecases::u503_create_shipment::CreateShipmentDialog;
use crate::usecases::u504_process_return::ProcessReturnDialog;
use contracts::domain::a002_order::{find_order, format_money, OrderId, OrderLine, OrderTotals};
use contracts::shared::invalidation::ResourceKey;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn OrderDetail(id: OrderId, on_close: Callback<()>) -> impl IntoView {
    let orders = use_remote(ResourceKey::Orders, fetch_orders);
    let lines = use_remote(ResourceKey::OrderLines(id.value()), move || fetch_order_lines(id));

    let order = Memo::new(move |_| {
        orders.with(|s| s.shown().and_then(|list| find_order(list, id)).cloned())
    });
    let line_items = Memo::new(move |_| lines.with(|s| s.shown().cloned().unwrap_or_default()));
    let totals = Memo::new(move |_| line_items.with(|items| OrderTotals::from_lines(items)));

    let payment_open = RwSignal::new(false);
    let shipment_open = RwSignal::new(false);
    let return_open = RwSignal::new(false);

    let page_id = format!("a002_order_detail_{}--detail", id);

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_DETAIL>
            <PageHeader title=format!("Order #{}", id)>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                    {icon("x")}
                    " Close"
                </Button>
            </PageHeader>

            <div class="page__content">
                {move || orders.with(|s| s.error().map(|err| view! {
                    <div class="alert alert--error">{format!("Failed to load order: {}", err)}</div>
                }))}

                <Card>
                    {move || {
                        if orders.with(|s| s.is_first_load()) {
                            return view! { <div class="page__loading">"Loading order..."</div> }.into_any();
                        }
                        match order.get() {
                            Some(o) => { let status_label = o.status_label(); view! {
                                <div class="order-header">
                                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                                        <h2 class="order-header__title">{format!("Order #{}", o.order_id)}</h2>
                                        <Badge variant=order_status_variant(o.status)>{status_label}</Badge>
                                    </Flex>
                                    <div class="order-header__meta">
                                        <div><span class="order-header__label">"Date: "</span>{format_date(o.order_date)}</div>
                                        <div><span class="order-header__label">"Customer: "</span>{o.customer_name.clone()}</div>
                                        <div><span class="order-header__label">"Salesperson: "</span>{o.salesperson_name.clone()}</div>
                                    </div>
                                </div>
                            }
                            .into_any() }
                            None => view! { <div class="page__empty">"Order not found"</div> }.into_any(),
                        }
                    }}
                </Card>

                <Card>
                    <h3 class="card__title">"Line items"</h3>
                    {move || lines.with(|s| s.error().map(|err| view! {
                        <div class="alert alert--error">{format!("Failed to load order lines: {}", err)}</div>
                    }))}
                    <Show when=move || lines.with(|s| s.is_first_load())>
                        <div class="page__loading">"Loading lines..."</div>
                    </Show>
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=220.0>"Product"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Price"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=80.0>"Quantity"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"Total"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || line_items.get().into_iter().map(|line: OrderLine| {
                                let line_total = line.line_total();
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout truncate=true>{line.product}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{format_money(line.price)}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{line.quantity}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{format_money(line_total)}</TableCellLayout></TableCell>
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>

                    <div class="order-totals">
                        <div class="order-totals__row">
                            <span>"Subtotal"</span>
                            <span>{move || format_money(totals.get().subtotal)}</span>
                        </div>
                        <div class="order-totals__row">
                            <span>"Tax (10%)"</span>
                            <span>{move || format_money(totals.get().tax)}</span>
                        </div>
                        <div class="order-totals__row order-totals__row--total">
                            <span>"Total"</span>
                            <span>{move || format_money(totals.get().total)}</span>
                        </div>
                    </div>
                </Card>

                <Card>
                    <h3 class="card__title">"Actions"</h3>
                    <Flex gap=FlexGap::Small>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| payment_open.set(true)>
                            {icon("credit-card")}
                            " Record Payment"
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| shipment_open.set(true)>
                            {icon("truck")}
                            " Create Shipment"
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| return_open.set(true)>
                            {icon("rotate-ccw")}
                            " Process Return"
                        </Button>
                    </Flex>
                </Card>
            </div>

            <RecordPaymentDialog order_id=id open=payment_open />
            <CreateShipmentDialog order_id=id open=shipment_open />
            <ProcessReturnDialog order_id=id open=return_open />
        </PageFrame>
    }
}
