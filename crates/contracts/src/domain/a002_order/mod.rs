pub mod aggregate;
pub mod lines;

pub use aggregate::*;
pub use lines::{format_money, OrderLine, OrderTotals, TAX_RATE};
