//! Справочник покупателей и менеджеров
//!
//! The order dialog picks a customer and a salesperson from a
//! [`PartyDirectory`]. The built-in fixture lists are the default; the remote
//! directory (frontend) reads them from the API instead.

use crate::domain::a003_customer::Customer;
use crate::domain::a004_salesperson::Salesperson;
use crate::shared::api_error::ApiError;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// localStorage key holding the selected [`DirectorySource`].
pub const DIRECTORY_SOURCE_STORAGE_KEY: &str = "saleshub_party_directory";

#[async_trait(?Send)]
pub trait PartyDirectory {
    async fn customers(&self) -> Result<Vec<Customer>, ApiError>;
    async fn salespeople(&self) -> Result<Vec<Salesperson>, ApiError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectorySource {
    #[default]
    Fixture,
    Remote,
}

impl DirectorySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectorySource::Fixture => "fixture",
            DirectorySource::Remote => "remote",
        }
    }

    /// Unknown or missing values fall back to the fixture lists.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("remote") => DirectorySource::Remote,
            _ => DirectorySource::Fixture,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DirectorySource::Fixture => "Built-in list",
            DirectorySource::Remote => "Backend (/api/customers, /api/salespeople)",
        }
    }
}

static FIXTURE_CUSTOMERS: Lazy<Vec<Customer>> = Lazy::new(|| {
    vec![
        Customer::new(1, "John Doe"),
        Customer::new(2, "Jane Smith"),
        Customer::new(3, "Bob Johnson"),
    ]
});

static FIXTURE_SALESPEOPLE: Lazy<Vec<Salesperson>> = Lazy::new(|| {
    vec![
        Salesperson::new(1, "Alice Williams"),
        Salesperson::new(2, "David Brown"),
        Salesperson::new(3, "Emily Davis"),
    ]
});

/// Both lists the order dialog needs, loaded together.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PartyLists {
    pub customers: Vec<Customer>,
    pub salespeople: Vec<Salesperson>,
}

/// Load customers, then salespeople. The first failure aborts the load.
pub async fn load_party_lists(directory: &dyn PartyDirectory) -> Result<PartyLists, ApiError> {
    let customers = directory.customers().await?;
    let salespeople = directory.salespeople().await?;
    Ok(PartyLists {
        customers,
        salespeople,
    })
}

/// Fixed lists, never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureDirectory;

#[async_trait(?Send)]
impl PartyDirectory for FixtureDirectory {
    async fn customers(&self) -> Result<Vec<Customer>, ApiError> {
        Ok(FIXTURE_CUSTOMERS.clone())
    }

    async fn salespeople(&self) -> Result<Vec<Salesperson>, ApiError> {
        Ok(FIXTURE_SALESPEOPLE.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::resource::ResourceSnapshot;

    struct Unreachable;

    #[async_trait(?Send)]
    impl PartyDirectory for Unreachable {
        async fn customers(&self) -> Result<Vec<Customer>, ApiError> {
            Err(ApiError::Network("connection refused".into()))
        }

        async fn salespeople(&self) -> Result<Vec<Salesperson>, ApiError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn party_lists_fail_on_first_error() {
        let lists = load_party_lists(&FixtureDirectory).await.unwrap();
        assert_eq!(lists.customers.len(), 3);
        assert_eq!(lists.salespeople[1].name, "David Brown");

        let err = load_party_lists(&Unreachable).await.unwrap_err();
        assert_eq!(err, ApiError::Network("connection refused".into()));
    }

    #[tokio::test]
    async fn reopened_dialog_ignores_slow_response_from_previous_open() {
        let mut snap: ResourceSnapshot<PartyLists> = ResourceSnapshot::new();

        // first open with the remote source; its request hangs
        let remote_open = snap.begin();
        // closed, source switched to fixture, reopened
        let fixture_open = snap.begin();

        let fixture = load_party_lists(&FixtureDirectory).await;
        assert!(snap.resolve(fixture_open, fixture));

        // the remote request finally fails and must not surface
        let remote = load_party_lists(&Unreachable).await;
        assert!(!snap.resolve(remote_open, remote));

        assert_eq!(snap.error(), None);
        let lists = snap.data().unwrap();
        assert_eq!(lists.customers[0].name, "John Doe");
        assert_eq!(lists.salespeople.len(), 3);
    }

    #[tokio::test]
    async fn fixture_lists_are_in_display_order() {
        let dir = FixtureDirectory;
        let customers: Vec<String> = dir
            .customers()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(customers, vec!["John Doe", "Jane Smith", "Bob Johnson"]);

        let salespeople = dir.salespeople().await.unwrap();
        assert_eq!(salespeople.len(), 3);
        assert_eq!(salespeople[0].name, "Alice Williams");
        assert_eq!(salespeople[2].id.value(), 3);
    }

    #[test]
    fn source_parsing_defaults_to_fixture() {
        assert_eq!(DirectorySource::parse(None), DirectorySource::Fixture);
        assert_eq!(DirectorySource::parse(Some("garbage")), DirectorySource::Fixture);
        assert_eq!(DirectorySource::parse(Some("remote")), DirectorySource::Remote);
        assert_eq!(
            DirectorySource::parse(Some(DirectorySource::Remote.as_str())),
            DirectorySource::Remote
        );
    }
}
