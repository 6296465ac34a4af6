//! Invalidation after mutations
//!
//! Each remote resource has a generation counter. A successful mutation bumps
//! the generations of the resources it affects; screens that depend on them
//! re-fetch when the generation they last loaded changes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Remote resource a screen can depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKey {
    Products,
    Orders,
    OrderLines(i64),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvalidationLedger {
    generations: HashMap<ResourceKey, u64>,
    /// Bumped when every resource is stale at once (API base changed).
    epoch: u64,
}

impl InvalidationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self, key: ResourceKey) -> u64 {
        self.generations.get(&key).copied().unwrap_or(0) + self.epoch
    }

    pub fn invalidate(&mut self, key: ResourceKey) -> u64 {
        let generation = self.generations.entry(key).or_insert(0);
        *generation += 1;
        *generation
    }

    pub fn invalidate_all(&mut self, keys: &[ResourceKey]) {
        for key in keys {
            self.invalidate(*key);
        }
    }

    /// Marks every key stale, including per-order keys nobody named yet.
    pub fn invalidate_everything(&mut self) {
        self.epoch += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_keys_start_at_zero() {
        let ledger = InvalidationLedger::new();
        assert_eq!(ledger.generation(ResourceKey::Orders), 0);
    }

    #[test]
    fn invalidation_only_bumps_named_keys() {
        let mut ledger = InvalidationLedger::new();
        ledger.invalidate_all(&[ResourceKey::Orders, ResourceKey::OrderLines(7)]);
        ledger.invalidate(ResourceKey::Orders);

        assert_eq!(ledger.generation(ResourceKey::Orders), 2);
        assert_eq!(ledger.generation(ResourceKey::OrderLines(7)), 1);
        assert_eq!(ledger.generation(ResourceKey::OrderLines(8)), 0);
        assert_eq!(ledger.generation(ResourceKey::Products), 0);
    }

    #[test]
    fn invalidating_everything_moves_open_order_lines_too() {
        let mut ledger = InvalidationLedger::new();
        ledger.invalidate(ResourceKey::OrderLines(3));
        let before = [
            ledger.generation(ResourceKey::Products),
            ledger.generation(ResourceKey::Orders),
            ledger.generation(ResourceKey::OrderLines(3)),
            ledger.generation(ResourceKey::OrderLines(41)),
        ];

        ledger.invalidate_everything();

        let after = [
            ledger.generation(ResourceKey::Products),
            ledger.generation(ResourceKey::Orders),
            ledger.generation(ResourceKey::OrderLines(3)),
            ledger.generation(ResourceKey::OrderLines(41)),
        ];
        for (b, a) in before.iter().zip(after.iter()) {
            assert!(a > b);
        }

        // per-key bumps keep increasing on top of the epoch
        let g = ledger.generation(ResourceKey::OrderLines(3));
        ledger.invalidate(ResourceKey::OrderLines(3));
        assert_eq!(ledger.generation(ResourceKey::OrderLines(3)), g + 1);
    }
}
