//! Application Shell - корневые компоненты приложения
//!
//! `AppShell` собирает Shell + Sidebar + табы и хост уведомлений.

use crate::layout::global_context::{use_app_context, Tab as TabData};
use crate::layout::left::Sidebar;
use crate::layout::tabs::{tab_label_for_key, TabPage};
use crate::layout::Shell;
use crate::shared::toast::ToastHost;
use leptos::logging::log;
use leptos::prelude::*;

/// Tab opened when the URL does not name one.
const HOME_TAB: &str = "d400_sales_overview";

/// Инициализирует router integration для синхронизации табов с URL (?active=...).
#[component]
pub fn AppShell() -> impl IntoView {
    let tabs_store = use_app_context();

    tabs_store.init_router_integration();
    if tabs_store.active.get_untracked().is_none() {
        tabs_store.open_tab(HOME_TAB, tab_label_for_key(HOME_TAB));
    }

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            log!("mount tab '{}'", tab.key);
                            view! { <TabPage tab=tab tabs_store=tabs_store /> }
                        }
                    />
                }
                .into_any()
            }
        />
        <ToastHost />
    }
}
