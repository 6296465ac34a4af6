//! Отправка мутаций из диалогов
//!
//! A validation failure posts a notification and sends nothing. A sent
//! request ends in exactly one of: success (dialog callback, notification,
//! invalidation) or failure (destructive notification, dialog stays open).
//! The submitting flag is cleared either way.

use crate::shared::api_utils::post_json;
use crate::shared::invalidation::{use_invalidation, InvalidationBus};
use crate::shared::toast::{use_toast, ToastService};
use contracts::usecases::common::{FormError, MutationUseCase};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct MutationSubmitter {
    submitting: RwSignal<bool>,
    toasts: ToastService,
    bus: InvalidationBus,
}

impl MutationSubmitter {
    pub fn new() -> Self {
        Self {
            submitting: RwSignal::new(false),
            toasts: use_toast(),
            bus: use_invalidation(),
        }
    }

    pub fn submitting(&self) -> Signal<bool> {
        self.submitting.into()
    }

    /// Label for the submit button of use case `U`.
    pub fn button_label<U: MutationUseCase>(&self, idle: &'static str) -> Signal<&'static str> {
        let submitting = self.submitting;
        Signal::derive(move || if submitting.get() { U::pending_label() } else { idle })
    }

    pub fn submit<U>(
        &self,
        validated: Result<U::Request, FormError>,
        on_success: impl FnOnce() + 'static,
    ) where
        U: MutationUseCase + 'static,
        U::Request: 'static,
    {
        if self.submitting.get_untracked() {
            return;
        }

        let request = match validated {
            Ok(request) => request,
            Err(e) => {
                log::debug!("{}: {}", U::full_name(), e);
                self.toasts.post(e.to_notification());
                return;
            }
        };

        let this = *self;
        this.submitting.set(true);
        spawn_local(async move {
            match post_json(U::ENDPOINT, &request).await {
                Ok(()) => {
                    log::info!("{}: POST {} ok", U::full_name(), U::ENDPOINT);
                    on_success();
                    this.toasts.post(U::success_notification());
                    this.bus.invalidate_all(&U::invalidates(&request));
                }
                Err(e) => {
                    log::error!("{}: POST {} failed: {}", U::full_name(), U::ENDPOINT, e);
                    this.toasts.post(U::failure_notification(&e));
                }
            }
            let _ = this.submitting.try_set(false);
        });
    }
}

impl Default for MutationSubmitter {
    fn default() -> Self {
        Self::new()
    }
}
