//! Общий контракт операций записи
//!
//! A mutation use case knows its endpoint, the request it sends, the
//! notifications it posts and the resources a success makes stale. The
//! frontend submitter drives every dialog through this trait.

use super::UseCaseMetadata;
use crate::shared::api_error::ApiError;
use crate::shared::invalidation::ResourceKey;
use crate::shared::notification::NotificationDraft;
use serde::Serialize;

/// Title of every failed-mutation notification.
pub const FAILURE_TITLE: &str = "Error";

pub trait MutationUseCase: UseCaseMetadata {
    type Request: Serialize;

    /// Path under the API base, e.g. "/api/orders".
    const ENDPOINT: &'static str;

    fn success_title() -> &'static str;
    fn success_description() -> &'static str;

    /// Shown when the server gives no message of its own.
    fn fallback_error() -> &'static str;

    /// Resources a successful request makes stale.
    fn invalidates(request: &Self::Request) -> Vec<ResourceKey>;

    fn success_notification() -> NotificationDraft {
        NotificationDraft::info(Self::success_title(), Self::success_description())
    }

    fn failure_notification(error: &ApiError) -> NotificationDraft {
        NotificationDraft::destructive(FAILURE_TITLE, error.user_message(Self::fallback_error()))
    }

    /// Label of the submit button while the request is in flight.
    fn pending_label() -> &'static str {
        "Processing..."
    }
}
