use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SalespersonId(pub i64);

impl SalespersonId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

/// Менеджер по продажам (GET /api/salespeople)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Salesperson {
    pub id: SalespersonId,
    pub name: String,
}

impl Salesperson {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: SalespersonId(id),
            name: name.into(),
        }
    }
}
