//! Источник справочника покупателей/менеджеров для формы заказа

use crate::shared::api_utils::get_json;
use crate::shared::storage;
use async_trait::async_trait;
use contracts::domain::a003_customer::Customer;
use contracts::domain::a004_salesperson::Salesperson;
use contracts::domain::common::directory::DIRECTORY_SOURCE_STORAGE_KEY;
use contracts::domain::common::{DirectorySource, FixtureDirectory, PartyDirectory};
use contracts::shared::api_error::ApiError;
use leptos::prelude::*;

/// Reads `GET /api/customers` and `GET /api/salespeople`.
pub struct RemoteDirectory;

#[async_trait(?Send)]
impl PartyDirectory for RemoteDirectory {
    async fn customers(&self) -> Result<Vec<Customer>, ApiError> {
        get_json("/api/customers").await
    }

    async fn salespeople(&self) -> Result<Vec<Salesperson>, ApiError> {
        get_json("/api/salespeople").await
    }
}

#[derive(Clone, Copy)]
pub struct DirectoryService {
    source: RwSignal<DirectorySource>,
}

impl DirectoryService {
    pub fn new() -> Self {
        let source = DirectorySource::parse(storage::load(DIRECTORY_SOURCE_STORAGE_KEY).as_deref());
        Self {
            source: RwSignal::new(source),
        }
    }

    pub fn source(&self) -> ReadSignal<DirectorySource> {
        self.source.read_only()
    }

    pub fn set_source(&self, source: DirectorySource) {
        storage::save(DIRECTORY_SOURCE_STORAGE_KEY, source.as_str());
        self.source.set(source);
    }

    pub fn directory(&self) -> Box<dyn PartyDirectory> {
        match self.source.get_untracked() {
            DirectorySource::Fixture => Box::new(FixtureDirectory),
            DirectorySource::Remote => Box::new(RemoteDirectory),
        }
    }
}

impl Default for DirectoryService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_directory() -> DirectoryService {
    use_context::<DirectoryService>().expect("DirectoryService not found in context")
}
