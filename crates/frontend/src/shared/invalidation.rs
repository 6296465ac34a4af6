use contracts::shared::invalidation::{InvalidationLedger, ResourceKey};
use leptos::prelude::*;

/// App-wide invalidation ledger. Screens track the generation of the keys
/// they depend on and re-fetch when it moves.
#[derive(Clone, Copy)]
pub struct InvalidationBus {
    ledger: RwSignal<InvalidationLedger>,
}

impl InvalidationBus {
    pub fn new() -> Self {
        Self {
            ledger: RwSignal::new(InvalidationLedger::new()),
        }
    }

    /// Reactive: re-runs the caller only when this key's generation changes.
    pub fn generation(&self, key: ResourceKey) -> Memo<u64> {
        let ledger = self.ledger;
        Memo::new(move |_| ledger.with(|l| l.generation(key)))
    }

    pub fn invalidate_all(&self, keys: &[ResourceKey]) {
        log::debug!("invalidate {:?}", keys);
        self.ledger.update(|l| l.invalidate_all(keys));
    }

    pub fn invalidate_everything(&self) {
        log::debug!("invalidate every resource");
        self.ledger.update(|l| l.invalidate_everything());
    }
}

impl Default for InvalidationBus {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_invalidation() -> InvalidationBus {
    use_context::<InvalidationBus>().expect("InvalidationBus not found in context")
}
