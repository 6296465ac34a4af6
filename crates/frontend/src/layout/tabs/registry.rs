//! Tab content registry - единственный источник правды для маппинга tab.key → View

use super::tab_labels::ORDER_DETAIL_PREFIX;
use crate::dashboards::SalesOverviewDashboard;
use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_order::ui::details::OrderDetail;
use crate::domain::a002_order::ui::list::OrderList;
use crate::layout::global_context::AppGlobalContext;
use crate::system::settings::SettingsPage;
use contracts::domain::a002_order::OrderId;
use leptos::logging::log;
use leptos::prelude::*;

/// Рендерит контент таба по его ключу.
///
/// # Arguments
/// * `key` - уникальный ключ таба (например "a002_order", "a002_order_detail_15")
/// * `tabs_store` - контекст для закрытия таба из detail-views
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match key {
        "d400_sales_overview" => view! { <SalesOverviewDashboard /> }.into_any(),

        "a001_product" => view! { <ProductList /> }.into_any(),

        "a002_order" => view! { <OrderList /> }.into_any(),

        k if k.starts_with(ORDER_DETAIL_PREFIX) => {
            match k.strip_prefix(ORDER_DETAIL_PREFIX).and_then(OrderId::parse) {
                Some(id) => view! {
                    <OrderDetail
                        id=id
                        on_close=Callback::new(move |_| {
                            tabs_store.close_tab(&key_for_close);
                        })
                    />
                }
                .into_any(),
                None => {
                    log!("Bad order detail tab key: {}", k);
                    view! { <div class="placeholder">{"Order not found"}</div> }.into_any()
                }
            }
        }

        "sys_settings" => view! { <SettingsPage /> }.into_any(),

        _ => {
            log!("Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}
