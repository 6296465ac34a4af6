use crate::domain::common::date;
use crate::shared::search::Searchable;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub i64);

impl OrderId {
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Parse an id taken from a tab key or form field; ids start at 1.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<i64>().ok().filter(|v| *v >= 1).map(OrderId)
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(raw))
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

/// Label for an order whose status the backend did not report.
pub const STATUS_UNKNOWN: &str = "Unknown";

pub fn status_label(status: Option<OrderStatus>) -> &'static str {
    status.map(|s| s.label()).unwrap_or(STATUS_UNKNOWN)
}

fn lenient_status<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<OrderStatus>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(OrderStatus::parse))
}

// ============================================================================
// Order (GET /api/orders)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub customer_name: String,
    pub salesperson_name: String,
    #[serde(with = "date")]
    pub order_date: NaiveDate,
    /// Reported by the backend when it tracks fulfilment; `None` means unknown.
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: Option<OrderStatus>,
}

impl Order {
    pub fn status_label(&self) -> &'static str {
        status_label(self.status)
    }
}

impl Searchable for Order {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.customer_name.as_str(), self.salesperson_name.as_str()]
    }

    fn search_id(&self) -> Option<i64> {
        Some(self.order_id.0)
    }
}

/// Find an order in a fetched list by its id.
pub fn find_order(orders: &[Order], id: OrderId) -> Option<&Order> {
    orders.iter().find(|o| o.order_id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::search::filter_list;

    fn order(id: i64, customer: &str, salesperson: &str) -> Order {
        Order {
            order_id: OrderId(id),
            customer_name: customer.into(),
            salesperson_name: salesperson.into(),
            order_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            status: None,
        }
    }

    #[test]
    fn missing_status_is_unknown_not_random() {
        let json = r#"{"order_id":1,"customer_name":"John Doe","salesperson_name":"Alice Williams","order_date":"2024-01-05"}"#;
        let a: Order = serde_json::from_str(json).unwrap();
        let b: Order = serde_json::from_str(json).unwrap();
        assert_eq!(a.status, None);
        assert_eq!(a, b);
        assert_eq!(a.status_label(), "Unknown");
    }

    #[test]
    fn status_is_read_leniently() {
        let json = r#"{"order_id":2,"customer_name":"x","salesperson_name":"y",
                       "order_date":"Fri, 05 Jan 2024 00:00:00 GMT","status":"shipped"}"#;
        let o: Order = serde_json::from_str(json).unwrap();
        assert_eq!(o.status, Some(OrderStatus::Shipped));

        let json = r#"{"order_id":3,"customer_name":"x","salesperson_name":"y",
                       "order_date":"2024-01-05","status":"on hold"}"#;
        let o: Order = serde_json::from_str(json).unwrap();
        assert_eq!(o.status, None);
    }

    #[test]
    fn order_id_parse_rejects_non_positive() {
        assert_eq!(OrderId::parse("42"), Some(OrderId(42)));
        assert_eq!(OrderId::parse("0"), None);
        assert_eq!(OrderId::parse("abc"), None);
    }

    #[test]
    fn search_by_names_and_id() {
        let orders = vec![
            order(15, "John Doe", "Alice Williams"),
            order(21, "Jane Smith", "David Brown"),
        ];
        assert_eq!(filter_list(&orders, "alice").len(), 1);
        assert_eq!(filter_list(&orders, "SMITH")[0].order_id, OrderId(21));
        assert_eq!(filter_list(&orders, "15")[0].order_id, OrderId(15));
        assert_eq!(filter_list(&orders, "").len(), 2);
    }

    #[test]
    fn find_by_id() {
        let orders = vec![order(1, "a", "b"), order(2, "c", "d")];
        assert_eq!(find_order(&orders, OrderId(2)).map(|o| o.customer_name.as_str()), Some("c"));
        assert!(find_order(&orders, OrderId(9)).is_none());
    }
}
