pub mod badge;
pub mod stat_card;

pub use badge::{order_status_variant, stock_status_variant, Badge};
pub use stat_card::StatCard;
