use contracts::domain::a001_product::StockStatus;
use contracts::domain::a002_order::OrderStatus;
use leptos::prelude::*;

/// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
fn variant_class(variant: &str) -> &'static str {
    match variant {
        "primary" => "badge badge--primary",
        "success" => "badge badge--success",
        "warning" => "badge badge--warning",
        "error" => "badge badge--error",
        _ => "badge badge--neutral",
    }
}

#[component]
pub fn Badge(#[prop(optional)] variant: &'static str, children: Children) -> impl IntoView {
    view! { <span class=variant_class(variant)>{children()}</span> }
}

pub fn order_status_variant(status: Option<OrderStatus>) -> &'static str {
    match status {
        Some(OrderStatus::Pending) => "warning",
        Some(OrderStatus::Shipped) => "primary",
        Some(OrderStatus::Delivered) => "success",
        Some(OrderStatus::Cancelled) => "error",
        None => "neutral",
    }
}

pub fn stock_status_variant(status: StockStatus) -> &'static str {
    match status {
        StockStatus::OutOfStock => "error",
        StockStatus::LowStock => "warning",
        StockStatus::InStock => "success",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_status_is_neutral() {
        assert_eq!(variant_class(order_status_variant(None)), "badge badge--neutral");
        assert_eq!(
            variant_class(stock_status_variant(StockStatus::LowStock)),
            "badge badge--warning"
        );
    }
}
