//! Состояние формы "Create Order"
//!
//! Field values are kept as the raw strings the inputs produce; they are only
//! parsed by [`CreateOrderForm::validate`].

use super::request::{CreateOrderRequest, OrderItemRequest};
use crate::domain::a001_product::{Product, ProductId};
use crate::domain::a002_order::OrderTotals;
use crate::domain::a003_customer::CustomerId;
use crate::domain::a004_salesperson::SalespersonId;
use crate::domain::common::date::{parse_wire_date, WIRE_DATE_FORMAT};
use crate::usecases::common::FormError;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftLine {
    /// Empty until a product is picked.
    pub product_id: String,
    pub quantity: String,
}

impl Default for DraftLine {
    fn default() -> Self {
        Self {
            product_id: String::new(),
            quantity: "1".to_string(),
        }
    }
}

impl DraftLine {
    fn product(&self) -> Option<ProductId> {
        self.product_id.trim().parse::<i64>().ok().map(ProductId)
    }

    fn quantity(&self) -> Option<i64> {
        self.quantity.trim().parse::<i64>().ok().filter(|q| *q >= 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOrderForm {
    pub customer_id: String,
    pub salesperson_id: String,
    pub order_date: String,
    lines: Vec<DraftLine>,
}

impl CreateOrderForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            customer_id: String::new(),
            salesperson_id: String::new(),
            order_date: today.format(WIRE_DATE_FORMAT).to_string(),
            lines: vec![DraftLine::default()],
        }
    }

    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }

    pub fn lines(&self) -> &[DraftLine] {
        &self.lines
    }

    pub fn add_line(&mut self) {
        self.lines.push(DraftLine::default());
    }

    /// Removes the line unless it is the last one left.
    pub fn remove_line(&mut self, index: usize) -> bool {
        if self.lines.len() <= 1 || index >= self.lines.len() {
            return false;
        }
        self.lines.remove(index);
        true
    }

    pub fn can_remove_lines(&self) -> bool {
        self.lines.len() > 1
    }

    pub fn set_product(&mut self, index: usize, product_id: impl Into<String>) {
        if let Some(line) = self.lines.get_mut(index) {
            line.product_id = product_id.into();
        }
    }

    pub fn set_quantity(&mut self, index: usize, quantity: impl Into<String>) {
        if let Some(line) = self.lines.get_mut(index) {
            line.quantity = quantity.into();
        }
    }

    /// Running totals of the draft against the loaded product prices.
    /// Lines without a known product or a valid quantity count as zero.
    pub fn estimate(&self, products: &[Product]) -> OrderTotals {
        OrderTotals::from_priced(self.lines.iter().filter_map(|line| {
            let id = line.product()?;
            let quantity = line.quantity()?;
            products
                .iter()
                .find(|p| p.id == id)
                .map(|p| (p.price, quantity))
        }))
    }

    pub fn validate(&self) -> Result<CreateOrderRequest, FormError> {
        let customer_id = self
            .customer_id
            .trim()
            .parse::<i64>()
            .map(CustomerId)
            .map_err(|_| FormError::MissingCustomer)?;
        let salesperson_id = self
            .salesperson_id
            .trim()
            .parse::<i64>()
            .map(SalespersonId)
            .map_err(|_| FormError::MissingSalesperson)?;
        let order_date = parse_wire_date(&self.order_date)
            .ok_or_else(|| FormError::InvalidDate(self.order_date.clone()))?;

        let products = self
            .lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let line_no = i + 1;
                let product_id = line
                    .product()
                    .ok_or(FormError::MissingProduct { line: line_no })?;
                let quantity = line
                    .quantity()
                    .ok_or(FormError::InvalidQuantity { line: line_no })?;
                Ok(OrderItemRequest {
                    product_id,
                    quantity,
                })
            })
            .collect::<Result<Vec<_>, FormError>>()?;

        Ok(CreateOrderRequest {
            customer_id,
            salesperson_id,
            order_date,
            products,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn product(id: i64, price: f64) -> Product {
        Product {
            id: ProductId(id),
            name: format!("P{id}"),
            category: None,
            price,
            stock: 50,
        }
    }

    fn filled() -> CreateOrderForm {
        let mut form = CreateOrderForm::new(today());
        form.customer_id = "2".into();
        form.salesperson_id = "3".into();
        form.set_product(0, "10");
        form.set_quantity(0, "2");
        form.add_line();
        form.set_product(1, "11");
        form
    }

    #[test]
    fn new_form_has_one_line_and_today() {
        let form = CreateOrderForm::new(today());
        assert_eq!(form.lines(), &[DraftLine::default()]);
        assert_eq!(form.order_date, "2024-03-15");
        assert!(!form.can_remove_lines());
    }

    #[test]
    fn lines_never_drop_below_one() {
        let mut form = CreateOrderForm::new(today());
        assert!(!form.remove_line(0));
        form.add_line();
        form.add_line();
        assert_eq!(form.lines().len(), 3);
        assert!(form.remove_line(1));
        assert!(form.remove_line(0));
        assert!(!form.remove_line(0));
        assert_eq!(form.lines().len(), 1);
        assert!(!form.remove_line(5));
    }

    #[test]
    fn valid_form_builds_wire_request() {
        let request = filled().validate().unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "customer_id": 2,
                "salesperson_id": 3,
                "order_date": "2024-03-15",
                "products": [
                    {"product_id": 10, "quantity": 2},
                    {"product_id": 11, "quantity": 1}
                ]
            })
        );
    }

    #[test]
    fn validation_paths() {
        let mut form = filled();
        form.customer_id.clear();
        assert_eq!(form.validate(), Err(FormError::MissingCustomer));

        let mut form = filled();
        form.salesperson_id = " ".into();
        assert_eq!(form.validate(), Err(FormError::MissingSalesperson));

        let mut form = filled();
        form.set_product(1, "");
        assert_eq!(form.validate(), Err(FormError::MissingProduct { line: 2 }));

        let mut form = filled();
        form.set_quantity(0, "0");
        assert_eq!(form.validate(), Err(FormError::InvalidQuantity { line: 1 }));

        let mut form = filled();
        form.set_quantity(0, "two");
        assert_eq!(form.validate(), Err(FormError::InvalidQuantity { line: 1 }));

        let mut form = filled();
        form.order_date = "someday".into();
        assert_eq!(form.validate(), Err(FormError::InvalidDate("someday".into())));
    }

    #[test]
    fn estimate_ignores_incomplete_lines() {
        let products = vec![product(10, 10.0), product(11, 5.0)];
        let mut form = filled();
        form.add_line();
        let totals = form.estimate(&products);
        assert!((totals.subtotal - 25.0).abs() < 1e-9);
        assert!((totals.total - 27.5).abs() < 1e-9);

        form.set_product(2, "99");
        assert!((form.estimate(&products).subtotal - 25.0).abs() < 1e-9);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut form = filled();
        let later = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        form.reset(later);
        assert_eq!(form, CreateOrderForm::new(later));
    }
}
