use super::chart::SalesChart;
use crate::domain::a001_product::api::fetch_products;
use crate::domain::a002_order::api::fetch_orders;
use crate::layout::global_context::use_app_context;
use crate::layout::tabs::{order_detail_key, tab_title_for_key};
use crate::shared::components::{order_status_variant, Badge, StatCard};
use crate::shared::date_utils::format_date;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::resource::use_remote;
use contracts::dashboards::d400_sales_overview::{ChartKind, SalesOverview, SeriesOrder};
use contracts::domain::a002_order::{format_money, Order};
use contracts::shared::invalidation::ResourceKey;
use leptos::prelude::*;
use thaw::*;

/// Sales overview: metric cards, monthly chart, category split, latest orders.
#[component]
pub fn SalesOverviewDashboard() -> impl IntoView {
    let tabs_store = use_app_context();
    let orders = use_remote(ResourceKey::Orders, fetch_orders);
    let products = use_remote(ResourceKey::Products, fetch_products);

    let chart_kind = RwSignal::new(ChartKind::default());
    let series_order = RwSignal::new(SeriesOrder::default());

    let overview = Memo::new(move |_| {
        let ordering = series_order.get();
        orders.with(|o| {
            products.with(|p| {
                SalesOverview::build(
                    o.shown().map(Vec::as_slice).unwrap_or_default(),
                    p.shown().map(Vec::as_slice).unwrap_or_default(),
                    ordering,
                )
            })
        })
    });

    let loaded = move || orders.with(|s| s.shown().is_some()) && products.with(|s| s.shown().is_some());
    let metric = move |f: fn(&SalesOverview) -> String| {
        Signal::derive(move || loaded().then(|| overview.with(f)))
    };

    let errors = move || {
        [
            orders.with(|s| s.error().map(|e| format!("Failed to load orders: {}", e))),
            products.with(|s| s.error().map(|e| format!("Failed to load products: {}", e))),
        ]
        .into_iter()
        .flatten()
        .map(|msg| view! { <div class="alert alert--error">{msg}</div> })
        .collect_view()
    };

    let open_order = move |order: &Order| {
        let key = order_detail_key(order.order_id);
        tabs_store.open_tab(&key, &tab_title_for_key(&key));
    };

    view! {
        <PageFrame page_id="d400_sales_overview--dashboard".to_string() category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Dashboard".to_string() />

            <div class="page__content">
                {errors}

                <div class="stat-cards">
                    <StatCard
                        label="Total Revenue"
                        icon_name="dollar-sign"
                        value=metric(|o| format_money(o.metrics.total_revenue))
                    />
                    <StatCard
                        label="Total Orders"
                        icon_name="shopping-cart"
                        value=metric(|o| o.metrics.total_orders.to_string())
                    />
                    <StatCard
                        label="Average Order Value"
                        icon_name="trending-up"
                        value=metric(|o| format_money(o.metrics.average_order_value))
                    />
                    <StatCard
                        label="Total Products"
                        icon_name="package"
                        value=metric(|o| o.metrics.total_products.to_string())
                    />
                </div>

                <div class="dashboard__grid">
                    <Card>
                        <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                            <h3 class="card__title">"Sales Overview"</h3>
                            <Flex gap=FlexGap::Small>
                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    on_click=move |_| series_order.update(|o| {
                                        *o = match o {
                                            SeriesOrder::Chronological => SeriesOrder::FirstSeen,
                                            SeriesOrder::FirstSeen => SeriesOrder::Chronological,
                                        }
                                    })
                                >
                                    {move || match series_order.get() {
                                        SeriesOrder::Chronological => "By date",
                                        SeriesOrder::FirstSeen => "As listed",
                                    }}
                                </Button>
                                {[ChartKind::Line, ChartKind::Bar].into_iter().map(|kind| view! {
                                    <Button
                                        appearance=Signal::derive(move || if chart_kind.get() == kind {
                                            ButtonAppearance::Primary
                                        } else {
                                            ButtonAppearance::Secondary
                                        })
                                        on_click=move |_| chart_kind.set(kind)
                                    >
                                        {kind.label()}
                                    </Button>
                                }).collect_view()}
                            </Flex>
                        </Flex>
                        <SalesChart
                            series=Signal::derive(move || overview.with(|o| o.monthly.clone()))
                            kind=chart_kind
                        />
                    </Card>

                    <Card>
                        <h3 class="card__title">"Product Distribution"</h3>
                        {move || {
                            let categories = overview.with(|o| o.categories.clone());
                            let max = categories.iter().map(|c| c.count).max().unwrap_or(0).max(1);
                            if categories.is_empty() {
                                return view! { <div class="page__empty">"No products"</div> }.into_any();
                            }
                            categories.into_iter().map(|c| {
                                let width = format!("width: {:.0}%;", c.count as f64 * 100.0 / max as f64);
                                view! {
                                    <div class="distribution__row">
                                        <span class="distribution__label">{c.category}</span>
                                        <div class="distribution__track">
                                            <div class="distribution__bar" style=width></div>
                                        </div>
                                        <span class="distribution__count">{c.count}</span>
                                    </div>
                                }
                            }).collect_view().into_any()
                        }}
                    </Card>
                </div>

                <Card>
                    <h3 class="card__title">"Recent Orders"</h3>
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=80.0>"Order"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=180.0>"Customer"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Date"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"Status"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || overview.with(|o| o.recent.clone()).into_iter().map(|order| {
                                let for_click = order.clone();
                                let status_label = order.status_label();
                                view! {
                                    <TableRow
                                        on:click=move |_| open_order(&for_click)
                                        attr:style="cursor: pointer;"
                                    >
                                        <TableCell><TableCellLayout>{format!("#{}", order.order_id)}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout truncate=true>{order.customer_name.clone()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{format_date(order.order_date)}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Badge variant=order_status_variant(order.status)>{status_label}</Badge>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </Card>
            </div>
        </PageFrame>
    }
}
