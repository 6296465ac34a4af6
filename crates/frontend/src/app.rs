use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::directory::DirectoryService;
use crate::shared::invalidation::InvalidationBus;
use crate::shared::toast::ToastService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // App-wide stores, provided once via context.
    provide_context(AppGlobalContext::new());
    provide_context(ToastService::new());
    provide_context(InvalidationBus::new());
    provide_context(DirectoryService::new());

    view! {
        <AppShell />
    }
}
