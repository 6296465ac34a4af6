use crate::shared::search::Searchable;
use serde::{Deserialize, Serialize};

/// Bucket for products without a category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Stock below this count is reported as low.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Product (GET /api/products)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub stock: i64,
}

impl Product {
    /// Category as shown in tables and charts.
    pub fn category_label(&self) -> &str {
        match self.category.as_deref().map(str::trim) {
            Some(c) if !c.is_empty() => c,
            _ => UNCATEGORIZED,
        }
    }

    pub fn stock_status(&self) -> StockStatus {
        StockStatus::from_stock(self.stock)
    }
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.category.as_deref().unwrap_or("")]
    }

    fn search_id(&self) -> Option<i64> {
        Some(self.id.0)
    }
}

// ============================================================================
// Stock status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    pub fn from_stock(stock: i64) -> Self {
        if stock <= 0 {
            StockStatus::OutOfStock
        } else if stock < LOW_STOCK_THRESHOLD {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::InStock => "In Stock",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(category: Option<&str>, stock: i64) -> Product {
        Product {
            id: ProductId(1),
            name: "Widget".into(),
            category: category.map(String::from),
            price: 9.99,
            stock,
        }
    }

    #[test]
    fn stock_thresholds() {
        assert_eq!(StockStatus::from_stock(-3), StockStatus::OutOfStock);
        assert_eq!(StockStatus::from_stock(0), StockStatus::OutOfStock);
        assert_eq!(StockStatus::from_stock(1), StockStatus::LowStock);
        assert_eq!(StockStatus::from_stock(9), StockStatus::LowStock);
        assert_eq!(StockStatus::from_stock(10), StockStatus::InStock);
    }

    #[test]
    fn missing_or_blank_category_is_uncategorized() {
        assert_eq!(product(None, 5).category_label(), UNCATEGORIZED);
        assert_eq!(product(Some(""), 5).category_label(), UNCATEGORIZED);
        assert_eq!(product(Some("Tools"), 5).category_label(), "Tools");
    }

    #[test]
    fn deserializes_backend_payload() {
        let json = r#"[{"id":3,"name":"Gadget","category":null,"price":12.5,"stock":4},
                       {"id":4,"name":"Bolt","price":0.1}]"#;
        let products: Vec<Product> = serde_json::from_str(json).unwrap();
        assert_eq!(products[0].id, ProductId(3));
        assert_eq!(products[0].category, None);
        assert_eq!(products[1].stock, 0);
        assert_eq!(products[1].stock_status(), StockStatus::OutOfStock);
    }

    #[test]
    fn search_covers_name_category_and_id() {
        let p = product(Some("Hardware"), 20);
        assert!(p.matches_filter("hard"));
        assert!(p.matches_filter("widg"));
        assert!(p.matches_filter("1"));
        assert!(!p.matches_filter("gadget"));
    }
}
