//! Всплывающие уведомления
//!
//! One [`ToastService`] is provided at the root. `post` schedules the
//! automatic dismissal of exactly the posted entry; [`ToastHost`] renders the
//! queue in the bottom-right corner.

use crate::shared::icons::icon;
use chrono::Utc;
use contracts::shared::notification::{
    Notification, NotificationDraft, NotificationQueue, NOTIFICATION_TTL_MS,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<NotificationQueue>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::new()),
        }
    }

    pub fn post(&self, draft: NotificationDraft) {
        let Some(posted) = self.queue.try_update(|q| q.post(draft, Utc::now())) else {
            return;
        };

        let queue = self.queue;
        spawn_local(async move {
            TimeoutFuture::new(NOTIFICATION_TTL_MS).await;
            queue.try_update(|q| {
                q.dismiss(&posted);
                q.expire_due(Utc::now());
            });
        });
    }

    /// Close button: removes the entry by id, the timer later finds nothing.
    pub fn dismiss(&self, notification: &Notification) {
        self.queue.update(|q| {
            q.dismiss_id(notification.id);
        });
    }

    pub fn active(&self) -> Vec<Notification> {
        self.queue.with(|q| q.active().to_vec())
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not found in context")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toast();

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For
                each=move || toasts.active()
                key=|n| n.id
                children=move |n: Notification| {
                    let class = if n.is_destructive() { "toast toast--destructive" } else { "toast" };
                    let for_close = n.clone();
                    view! {
                        <div class=class>
                            <div class="toast__body">
                                <div class="toast__title">{n.title.clone()}</div>
                                <div class="toast__description">{n.description.clone()}</div>
                            </div>
                            <button
                                class="toast__close"
                                title="Close"
                                on:click=move |_| toasts.dismiss(&for_close)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
