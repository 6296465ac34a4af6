pub mod chart;
pub mod metrics;

pub use chart::{ChartKind, ChartPoint, ChartScale};
pub use metrics::{
    category_distribution, monthly_series, recent_orders, CategoryCount, DashboardMetrics,
    MonthlyPoint, SalesOverview, SeriesOrder, RECENT_ORDERS_LIMIT, REVENUE_PER_ORDER,
};
