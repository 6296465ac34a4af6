use crate::domain::a002_order::api::fetch_orders;
use crate::layout::global_context::use_app_context;
use crate::layout::tabs::{order_detail_key, tab_title_for_key};
use crate::shared::components::{order_status_variant, Badge};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource::use_remote;
use crate::usecases::u501_create_order::CreateOrderDialog;
use contracts::domain::a002_order::{Order, OrderId};
use contracts::shared::invalidation::ResourceKey;
use contracts::shared::search::filter_list;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn OrderList() -> impl IntoView {
    let tabs_store = use_app_context();
    let orders = use_remote(ResourceKey::Orders, fetch_orders);
    let search_query = RwSignal::new(String::new());
    let create_open = RwSignal::new(false);

    let filtered = Memo::new(move |_| {
        let query = search_query.get();
        orders.with(|s| {
            s.shown()
                .map(|items| filter_list(items, &query))
                .unwrap_or_default()
        })
    });

    let open_detail = move |id: OrderId| {
        let key = order_detail_key(id);
        tabs_store.open_tab(&key, &tab_title_for_key(&key));
    };

    view! {
        <PageFrame page_id="a002_order--list".to_string() category=PAGE_CAT_LIST>
            <PageHeader title="Orders".to_string()>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| create_open.set(true)
                >
                    {icon("plus")}
                    " Create Order"
                </Button>
            </PageHeader>

            <div class="page__content">
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <Input value=search_query placeholder="Search orders..." attr:style="width: 320px;" />
                    <Badge variant="primary">{move || filtered.with(Vec::len).to_string()}</Badge>
                </Flex>

                {move || orders.with(|s| s.error().map(|err| view! {
                    <div class="alert alert--error">{format!("Failed to load orders: {}", err)}</div>
                }))}

                <Show when=move || orders.with(|s| s.is_first_load())>
                    <div class="page__loading">"Loading orders..."</div>
                </Show>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 720px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=80.0>"Order"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=180.0>"Customer"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=180.0>"Salesperson"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Date"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"Status"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || filtered.get()
                                key=|o| o.order_id
                                children=move |o: Order| {
                                    let id = o.order_id;
                                    let status_label = o.status_label();
                                    view! {
                                        <TableRow
                                            on:click=move |_| open_detail(id)
                                            attr:style="cursor: pointer;"
                                        >
                                            <TableCell><TableCellLayout>{format!("#{}", id)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{o.customer_name.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{o.salesperson_name.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{format_date(o.order_date)}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge variant=order_status_variant(o.status)>{status_label}</Badge>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                <Show when=move || orders.with(|s| s.shown().is_some()) && filtered.with(Vec::is_empty)>
                    <div class="page__empty">"No orders found"</div>
                </Show>
            </div>

            <CreateOrderDialog open=create_open />
        </PageFrame>
    }
}
