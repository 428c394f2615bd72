use log::info;
use yew::prelude::*;

use crate::consent::settings::CookieSettingsDialog;
use crate::consent::store::{ConsentChoice, ConsentRecord, ConsentStore};
use crate::i18n::translator::Translator;
use crate::services::Services;

/// First-render state, read synchronously so a stored decision never shows
/// the banner, even for one frame.
fn decision_at_mount(store: &ConsentStore) -> Option<ConsentRecord> {
    store.read()
}

/// Bottom banner shown while no valid decision exists, plus the settings
/// dialog any other surface can open through the consent store.
#[function_component(CookieBanner)]
pub fn cookie_banner() -> Html {
    let services = use_context::<Services>().expect("Services not provided");
    let t = use_context::<Translator>().expect("Translator not provided");
    let consent = {
        let store = services.consent.clone();
        use_state(move || decision_at_mount(&store))
    };
    let settings_open = use_state(|| false);

    {
        let consent = consent.clone();
        let settings_open = settings_open.clone();
        use_effect_with_deps(
            move |services: &Services| {
                // Events fired between first render and subscribing are gone, so resync.
                consent.set(services.consent.read());

                let changed = {
                    let consent = consent.clone();
                    services
                        .consent
                        .subscribe_changes(move |record| consent.set(record.clone()))
                };
                let open = services
                    .consent
                    .subscribe_open_settings(move |_| settings_open.set(true));

                move || drop((changed, open))
            },
            services.clone(),
        );
    }

    let accept_all = {
        let store = services.consent.clone();
        Callback::from(move |_: ()| {
            info!("Cookie consent: accept all");
            store.write(ConsentChoice::ACCEPT_ALL);
        })
    };

    let reject_optional = {
        let store = services.consent.clone();
        Callback::from(move |_: ()| {
            info!("Cookie consent: reject optional");
            store.write(ConsentChoice::REJECT_OPTIONAL);
        })
    };

    let save_custom = {
        let store = services.consent.clone();
        let settings_open = settings_open.clone();
        Callback::from(move |choice: ConsentChoice| {
            info!(
                "Cookie consent: custom analytics={} marketing={}",
                choice.analytics, choice.marketing
            );
            store.write(choice);
            settings_open.set(false);
        })
    };

    let reset_decision = {
        let store = services.consent.clone();
        let settings_open = settings_open.clone();
        Callback::from(move |_: ()| {
            info!("Cookie consent: reset decision");
            store.clear();
            settings_open.set(false);
        })
    };

    let open_settings = {
        let settings_open = settings_open.clone();
        Callback::from(move |_: MouseEvent| settings_open.set(true))
    };

    let reject_click = reject_optional.reform(|_: MouseEvent| ());
    let accept_click = accept_all.reform(|_: MouseEvent| ());

    let close_settings = {
        let settings_open = settings_open.clone();
        Callback::from(move |_: ()| settings_open.set(false))
    };

    html! {
        <>
            {
                if consent.is_none() {
                    html! {
                        <div class="cookie-banner" role="region" aria-label={t.t("cookies.title")}>
                            <div class="cookie-banner-card">
                                <div class="cookie-banner-text">
                                    <p class="cookie-banner-title">{t.t("cookies.title")}</p>
                                    <p class="cookie-banner-description">{t.t("cookies.description")}</p>
                                </div>
                                <div class="cookie-banner-actions">
                                    <button type="button" class="button-outline" onclick={reject_click}>
                                        {t.t("cookies.reject")}
                                    </button>
                                    <button type="button" class="button-secondary" onclick={open_settings}>
                                        {t.t("cookies.customize")}
                                    </button>
                                    <button type="button" class="button-primary" onclick={accept_click}>
                                        {t.t("cookies.accept")}
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <CookieSettingsDialog
                open={*settings_open}
                consent={(*consent).clone()}
                on_close={close_settings}
                on_accept_all={accept_all}
                on_reject_optional={reject_optional}
                on_save={save_custom}
                on_reset={reset_decision}
            />

            <style>
                {r#"
                    .cookie-banner {
                        position: fixed;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        z-index: 50;
                        padding: 1rem;
                    }
                    .cookie-banner-card {
                        max-width: 64rem;
                        margin: 0 auto;
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1rem;
                        border-radius: 1rem;
                        border: 1px solid var(--border);
                        background: var(--background);
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.2);
                    }
                    .cookie-banner-title {
                        font-weight: 600;
                        margin: 0 0 0.25rem 0;
                    }
                    .cookie-banner-description {
                        color: var(--muted-foreground);
                        font-size: 0.9rem;
                        margin: 0;
                    }
                    .cookie-banner-actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                    }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use crate::config;
    use crate::storage::{KeyValueStore, MemoryStorage};

    #[test]
    fn returning_visitor_starts_without_a_banner() {
        let storage = MemoryStorage::new();
        storage
            .set(
                config::CONSENT_STORAGE_KEY,
                r#"{"version":1,"decidedAt":"2024-05-01T09:30:00.000Z","necessary":true,"analytics":false,"marketing":false}"#,
            )
            .unwrap();
        let store = ConsentStore::new(Rc::new(storage));

        let seeded = decision_at_mount(&store);
        assert!(seeded.is_some());
        assert_eq!(seeded, store.read());
    }

    #[test]
    fn first_visit_starts_with_the_banner() {
        let store = ConsentStore::new(Rc::new(MemoryStorage::new()));
        assert_eq!(decision_at_mount(&store), None);
    }
}
