pub mod aggregate;

pub use aggregate::{Salesperson, SalespersonId};
