use crate::layout::global_context::{use_app_context, Tab as TabData};
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
fn TabHandle(tab: TabData) -> impl IntoView {
    let tabs_store = use_app_context();

    let key_for_active = tab.key.clone();
    let is_active =
        Memo::new(move |_| tabs_store.active.get().as_deref() == Some(key_for_active.as_str()));

    let key_for_click = tab.key.clone();
    let on_click = move |_| tabs_store.activate_tab(&key_for_click);

    let key_for_close = tab.key.clone();
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        tabs_store.close_tab(&key_for_close);
    };

    let title = tab.title.clone();
    view! {
        <div class="tab" class:active=is_active on:click=on_click title=title>
            <span>{tab.title}</span>
            <button class="tab-close" on:click=on_close title="Close">{icon("x")}</button>
        </div>
    }
}

#[component]
pub fn TabsBar() -> impl IntoView {
    let tabs_store = use_app_context();

    view! {
        <div class="tabs-bar">
            <For
                each=move || tabs_store.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab| view! { <TabHandle tab=tab /> }
            />
        </div>
    }
}
