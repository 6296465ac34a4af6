//! Настройки приложения: адрес API и источник справочника контрагентов.

use crate::shared::api_utils::api_config;
use crate::shared::directory::use_directory;
use crate::shared::invalidation::use_invalidation;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::storage;
use crate::shared::toast::use_toast;
use contracts::domain::common::DirectorySource;
use contracts::shared::api_config::API_BASE_STORAGE_KEY;
use contracts::shared::notification::NotificationDraft;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let toasts = use_toast();
    let bus = use_invalidation();
    let directory = use_directory();

    let resolved = RwSignal::new(api_config());
    let api_base = RwSignal::new(storage::load(API_BASE_STORAGE_KEY).unwrap_or_default());

    let directory_value = RwSignal::new(directory.source().get_untracked().as_str().to_string());
    Effect::new(move |_| {
        let source = DirectorySource::parse(Some(&directory_value.get()));
        if source != directory.source().get_untracked() {
            directory.set_source(source);
            log::info!("party directory source: {}", source.as_str());
        }
    });

    let apply = move || {
        resolved.set(api_config());
        bus.invalidate_everything();
    };

    let on_save = move |_| {
        let value = api_base.get_untracked();
        if value.trim().is_empty() {
            storage::remove(API_BASE_STORAGE_KEY);
        } else {
            storage::save(API_BASE_STORAGE_KEY, value.trim());
        }
        apply();
        toasts.post(NotificationDraft::info(
            "Settings saved",
            format!("API requests now go to {}", resolved.get_untracked().base),
        ));
    };

    let on_clear = move |_| {
        storage::remove(API_BASE_STORAGE_KEY);
        api_base.set(String::new());
        apply();
        toasts.post(NotificationDraft::info(
            "Override cleared",
            format!("API requests now go to {}", resolved.get_untracked().base),
        ));
    };

    view! {
        <PageFrame page_id="sys_settings--system".to_string() category=PAGE_CAT_SYSTEM>
            <PageHeader title="Settings".to_string() />

            <div class="page__content">
                <Card>
                    <h3 class="card__title">"API"</h3>
                    <Flex vertical=true gap=FlexGap::Medium>
                        <div class="form__group">
                            <Label>"Base URL override"</Label>
                            <Input
                                value=api_base
                                placeholder="http://localhost:5001"
                                attr:style="width: 420px;"
                            />
                        </div>
                        <div class="settings__current">
                            <span>"In use: "</span>
                            <code>{move || resolved.get().base}</code>
                            <span class="settings__source">{move || format!(" ({})", resolved.get().source.label())}</span>
                        </div>
                        <Flex gap=FlexGap::Small>
                            <Button appearance=ButtonAppearance::Primary on_click=on_save>
                                "Save"
                            </Button>
                            <Button appearance=ButtonAppearance::Secondary on_click=on_clear>
                                "Clear override"
                            </Button>
                        </Flex>
                    </Flex>
                </Card>

                <Card>
                    <h3 class="card__title">"Customers and salespeople"</h3>
                    <div class="form__group">
                        <Label>"Source"</Label>
                        <Select value=directory_value>
                            {[DirectorySource::Fixture, DirectorySource::Remote].into_iter().map(|s| view! {
                                <option value=s.as_str()>{s.label()}</option>
                            }).collect_view()}
                        </Select>
                    </div>
                </Card>
            </div>
        </PageFrame>
    }
}
