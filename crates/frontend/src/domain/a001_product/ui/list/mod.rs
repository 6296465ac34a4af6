use crate::domain::a001_product::api::fetch_products;
use crate::shared::components::{stock_status_variant, Badge};
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource::use_remote;
use contracts::domain::a001_product::Product;
use contracts::domain::a002_order::format_money;
use contracts::shared::invalidation::ResourceKey;
use contracts::shared::search::filter_list;
use leptos::prelude::*;
use thaw::*;

/// Инвентарь товаров с поиском по названию, категории и id.
#[component]
pub fn ProductList() -> impl IntoView {
    let products = use_remote(ResourceKey::Products, fetch_products);
    let search_query = RwSignal::new(String::new());

    let filtered = Memo::new(move |_| {
        let query = search_query.get();
        products.with(|s| {
            s.shown()
                .map(|items| filter_list(items, &query))
                .unwrap_or_default()
        })
    });

    view! {
        <PageFrame page_id="a001_product--list".to_string() category=PAGE_CAT_LIST>
            <PageHeader title="Products".to_string()>
                <Badge variant="primary">{move || filtered.with(Vec::len).to_string()}</Badge>
            </PageHeader>

            <div class="page__content">
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <Input value=search_query placeholder="Search products..." attr:style="width: 320px;" />
                </Flex>

                {move || products.with(|s| s.error().map(|err| view! {
                    <div class="alert alert--error">{format!("Failed to load products: {}", err)}</div>
                }))}

                <Show when=move || products.with(|s| s.is_first_load())>
                    <div class="page__loading">"Loading products..."</div>
                </Show>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 720px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=60.0>"ID"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=220.0>"Name"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>"Category"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Price"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=80.0>"Stock"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Status"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || filtered.get()
                                key=|p| p.id
                                children=move |p: Product| {
                                    let status = p.stock_status();
                                    let status_label = status.label();
                                    let id_text = p.id.to_string();
                                    let name = p.name.clone();
                                    let category = p.category_label().to_string();
                                    let price = format_money(p.price);
                                    let stock = p.stock;
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{id_text}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{name}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{category}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{price}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{stock}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge variant=stock_status_variant(status)>{status_label}</Badge>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                <Show when=move || products.with(|s| s.shown().is_some()) && filtered.with(Vec::is_empty)>
                    <div class="page__empty">"No products found"</div>
                </Show>
            </div>
        </PageFrame>
    }
}
