//! Показатели дашборда продаж
//!
//! Everything here is recomputed from the fetched order and product lists on
//! every change; nothing is cached between renders.

use crate::domain::a001_product::Product;
use crate::domain::a002_order::Order;
use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Flat revenue attributed to each order until the API reports real amounts.
pub const REVENUE_PER_ORDER: f64 = 500.0;

pub const RECENT_ORDERS_LIMIT: usize = 5;

// ============================================================================
// Metric cards
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub total_orders: usize,
    pub total_revenue: f64,
    pub average_order_value: f64,
    pub total_products: usize,
}

impl DashboardMetrics {
    pub fn compute(orders: &[Order], products: &[Product]) -> Self {
        let total_orders = orders.len();
        let total_revenue = total_orders as f64 * REVENUE_PER_ORDER;
        let average_order_value = if total_orders == 0 {
            0.0
        } else {
            total_revenue / total_orders as f64
        };

        Self {
            total_orders,
            total_revenue,
            average_order_value,
            total_products: products.len(),
        }
    }
}

// ============================================================================
// Product distribution
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Product counts per category, in the order categories first appear.
pub fn category_distribution(products: &[Product]) -> Vec<CategoryCount> {
    let mut buckets: Vec<CategoryCount> = Vec::new();
    for product in products {
        let label = product.category_label();
        match buckets.iter_mut().find(|b| b.category == label) {
            Some(bucket) => bucket.count += 1,
            None => buckets.push(CategoryCount {
                category: label.to_string(),
                count: 1,
            }),
        }
    }
    buckets
}

// ============================================================================
// Monthly series
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SeriesOrder {
    /// Months in the order they first appear in the order list.
    FirstSeen,
    #[default]
    Chronological,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    /// "Mar 2024"
    pub label: String,
    pub year: i32,
    pub month: u32,
    pub order_count: usize,
    pub revenue: f64,
}

pub fn monthly_series(orders: &[Order], ordering: SeriesOrder) -> Vec<MonthlyPoint> {
    let mut points: Vec<MonthlyPoint> = Vec::new();
    for order in orders {
        let (year, month) = (order.order_date.year(), order.order_date.month());
        match points
            .iter_mut()
            .find(|p| p.year == year && p.month == month)
        {
            Some(point) => point.order_count += 1,
            None => points.push(MonthlyPoint {
                label: order.order_date.format("%b %Y").to_string(),
                year,
                month,
                order_count: 1,
                revenue: 0.0,
            }),
        }
    }

    for point in points.iter_mut() {
        point.revenue = point.order_count as f64 * REVENUE_PER_ORDER;
    }

    if ordering == SeriesOrder::Chronological {
        points.sort_by_key(|p| (p.year, p.month));
    }
    points
}

pub fn recent_orders(orders: &[Order]) -> Vec<Order> {
    orders.iter().take(RECENT_ORDERS_LIMIT).cloned().collect()
}

// ============================================================================
// Whole dashboard
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SalesOverview {
    pub metrics: DashboardMetrics,
    pub categories: Vec<CategoryCount>,
    pub monthly: Vec<MonthlyPoint>,
    pub recent: Vec<Order>,
}

impl SalesOverview {
    pub fn build(orders: &[Order], products: &[Product], ordering: SeriesOrder) -> Self {
        Self {
            metrics: DashboardMetrics::compute(orders, products),
            categories: category_distribution(products),
            monthly: monthly_series(orders, ordering),
            recent: recent_orders(orders),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::ProductId;
    use crate::domain::a002_order::OrderId;
    use chrono::NaiveDate;

    fn order(id: i64, y: i32, m: u32, d: u32) -> Order {
        Order {
            order_id: OrderId(id),
            customer_name: "John Doe".into(),
            salesperson_name: "Alice Williams".into(),
            order_date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            status: None,
        }
    }

    fn product(id: i64, category: Option<&str>) -> Product {
        Product {
            id: ProductId(id),
            name: format!("P{id}"),
            category: category.map(String::from),
            price: 1.0,
            stock: 1,
        }
    }

    #[test]
    fn metrics_for_three_orders() {
        let orders = vec![order(1, 2024, 1, 2), order(2, 2024, 1, 9), order(3, 2024, 2, 1)];
        let products = vec![product(1, Some("A")), product(2, None)];
        let m = DashboardMetrics::compute(&orders, &products);
        assert_eq!(m.total_orders, 3);
        assert_eq!(m.total_revenue, 1500.0);
        assert_eq!(m.average_order_value, 500.0);
        assert_eq!(m.total_products, 2);
    }

    #[test]
    fn average_is_zero_without_orders() {
        let m = DashboardMetrics::compute(&[], &[]);
        assert_eq!(m.total_revenue, 0.0);
        assert_eq!(m.average_order_value, 0.0);
    }

    #[test]
    fn categories_keep_first_seen_order() {
        let products = vec![product(1, Some("A")), product(2, Some("")), product(3, Some("A"))];
        assert_eq!(
            category_distribution(&products),
            vec![
                CategoryCount { category: "A".into(), count: 2 },
                CategoryCount { category: "Uncategorized".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn monthly_series_orderings() {
        let orders = vec![
            order(1, 2024, 3, 15),
            order(2, 2024, 1, 2),
            order(3, 2024, 3, 20),
            order(4, 2023, 12, 31),
        ];

        let first_seen: Vec<(String, usize)> = monthly_series(&orders, SeriesOrder::FirstSeen)
            .into_iter()
            .map(|p| (p.label, p.order_count))
            .collect();
        assert_eq!(
            first_seen,
            vec![
                ("Mar 2024".to_string(), 2),
                ("Jan 2024".to_string(), 1),
                ("Dec 2023".to_string(), 1),
            ]
        );

        let chrono = monthly_series(&orders, SeriesOrder::Chronological);
        let labels: Vec<&str> = chrono.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Dec 2023", "Jan 2024", "Mar 2024"]);
        assert_eq!(chrono[2].revenue, 1000.0);
    }

    #[test]
    fn recent_orders_are_the_first_five() {
        let orders: Vec<Order> = (1..=8).map(|i| order(i, 2024, 1, 1)).collect();
        let ids: Vec<i64> = recent_orders(&orders).iter().map(|o| o.order_id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(recent_orders(&orders[..2]).len(), 2);
    }

    #[test]
    fn overview_combines_everything() {
        let orders = vec![order(1, 2024, 5, 1)];
        let overview = SalesOverview::build(&orders, &[product(1, Some("Tools"))], SeriesOrder::default());
        assert_eq!(overview.metrics.total_orders, 1);
        assert_eq!(overview.categories.len(), 1);
        assert_eq!(overview.monthly[0].label, "May 2024");
        assert_eq!(overview.recent.len(), 1);
    }
}
