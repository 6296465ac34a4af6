//! Загрузка удалённых ресурсов
//!
//! [`use_remote`] owns a [`ResourceSnapshot`] for the calling screen and
//! fetches on mount and whenever the resource is invalidated. Only the
//! response to the most recent request is applied.

use crate::shared::invalidation::use_invalidation;
use contracts::shared::api_error::ApiError;
use contracts::shared::invalidation::ResourceKey;
use contracts::shared::resource::ResourceSnapshot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

pub fn use_remote<T, F, Fut>(key: ResourceKey, fetcher: F) -> RwSignal<ResourceSnapshot<T>>
where
    T: Send + Sync + 'static,
    F: Fn() -> Fut + Copy + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let snapshot = RwSignal::new(ResourceSnapshot::<T>::new());
    let generation = use_invalidation().generation(key);

    Effect::new(move |_| {
        let generation = generation.get();
        let Some(ticket) = snapshot.try_update(|s| s.begin()) else {
            return;
        };
        log::debug!("fetch {:?} (generation {}, request #{})", key, generation, ticket.value());

        spawn_local(async move {
            let result = fetcher().await;
            if let Err(e) = &result {
                log::error!("Error fetching {:?}: {}", key, e);
            }
            snapshot.try_update(|s| s.resolve(ticket, result));
        });
    });

    snapshot
}
