//! Tab labels - единственный источник правды для заголовков табов.

use contracts::domain::a002_order::OrderId;

pub const ORDER_DETAIL_PREFIX: &str = "a002_order_detail_";

/// Заголовок для статических табов. Fallback: пустая строка.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "d400_sales_overview" => "Dashboard",
        "a001_product" => "Products",
        "a002_order" => "Orders",
        "sys_settings" => "Settings",
        _ => "",
    }
}

/// Заголовок для любого ключа, включая detail-табы. Fallback: сам ключ.
pub fn tab_title_for_key(key: &str) -> String {
    if let Some(id) = key.strip_prefix(ORDER_DETAIL_PREFIX).and_then(OrderId::parse) {
        return format!("Order #{}", id);
    }
    match tab_label_for_key(key) {
        "" => key.to_string(),
        label => label.to_string(),
    }
}

pub fn order_detail_key(id: OrderId) -> String {
    format!("{}{}", ORDER_DETAIL_PREFIX, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_titles_carry_the_order_id() {
        let key = order_detail_key(OrderId(15));
        assert_eq!(key, "a002_order_detail_15");
        assert_eq!(tab_title_for_key(&key), "Order #15");
    }

    #[test]
    fn unknown_keys_fall_back_to_the_key() {
        assert_eq!(tab_title_for_key("a002_order"), "Orders");
        assert_eq!(tab_title_for_key("whatever"), "whatever");
        assert_eq!(tab_title_for_key("a002_order_detail_x"), "a002_order_detail_x");
    }
}
