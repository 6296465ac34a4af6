use serde::{Deserialize, Serialize};

/// Налог, начисляемый на сумму строк заказа.
pub const TAX_RATE: f64 = 0.10;

// ============================================================================
// Order line (GET /api/orders/{id})
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product: String,
    pub price: f64,
    pub quantity: i64,
    /// Line total as reported by the backend; shown as is.
    #[serde(default)]
    pub total_price: Option<f64>,
}

impl OrderLine {
    /// Value of the "Total" column: the backend's figure, or price × quantity
    /// when it did not send one.
    pub fn line_total(&self) -> f64 {
        self.total_price
            .unwrap_or(self.price * self.quantity as f64)
    }
}

// ============================================================================
// Totals
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

impl OrderTotals {
    /// Totals over `(unit_price, quantity)` pairs. No rounding here, only at display.
    pub fn from_priced<I>(items: I) -> Self
    where
        I: IntoIterator<Item = (f64, i64)>,
    {
        let subtotal: f64 = items
            .into_iter()
            .map(|(price, quantity)| price * quantity as f64)
            .sum();
        Self {
            subtotal,
            tax: subtotal * TAX_RATE,
            total: subtotal * (1.0 + TAX_RATE),
        }
    }

    pub fn from_lines(lines: &[OrderLine]) -> Self {
        Self::from_priced(lines.iter().map(|l| (l.price, l.quantity)))
    }
}

/// Format an amount the way every money column shows it: `$1,234.50`.
pub fn format_money(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!(
        "{}${}.{:02}",
        if negative { "-" } else { "" },
        grouped,
        cents % 100
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(price: f64, quantity: i64) -> OrderLine {
        OrderLine {
            product: "Widget".into(),
            price,
            quantity,
            total_price: Some(price * quantity as f64),
        }
    }

    #[test]
    fn totals_include_ten_percent_tax() {
        let totals = OrderTotals::from_lines(&[line(10.0, 2), line(5.0, 1)]);
        assert!((totals.subtotal - 25.0).abs() < 1e-9);
        assert!((totals.tax - 2.5).abs() < 1e-9);
        assert!((totals.total - 27.5).abs() < 1e-9);
    }

    #[test]
    fn no_lines_means_zero() {
        assert_eq!(OrderTotals::from_lines(&[]), OrderTotals::default());
    }

    #[test]
    fn line_total_is_optional_on_the_wire() {
        let l: OrderLine =
            serde_json::from_str(r#"{"product":"Gadget","price":3.5,"quantity":2}"#).unwrap();
        assert_eq!(l.total_price, None);
        assert_eq!(l.quantity, 2);
        assert_eq!(l.line_total(), 7.0);
    }

    #[test]
    fn reported_line_total_is_shown_as_is() {
        let l: OrderLine = serde_json::from_str(
            r#"{"product":"Gadget","price":3.5,"quantity":2,"total_price":6.3}"#,
        )
        .unwrap();
        assert_eq!(l.line_total(), 6.3);
        assert_eq!(format_money(l.line_total()), "$6.30");
    }

    #[test]
    fn money_formatting() {
        assert_eq!(format_money(27.5), "$27.50");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(1234567.891), "$1,234,567.89");
        assert_eq!(format_money(-12.3), "-$12.30");
    }
}
