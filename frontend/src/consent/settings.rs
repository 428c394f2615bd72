use chrono::{DateTime, Local, TimeZone};
use yew::prelude::*;

use crate::components::dialog::{Dialog, Switch};
use crate::consent::store::{ConsentChoice, ConsentRecord, ConsentStore};
use crate::i18n::translator::{Language, Translator};
use crate::services::Services;

#[derive(Properties, PartialEq)]
pub struct CookieSettingsProps {
    pub open: bool,
    pub consent: Option<ConsentRecord>,
    pub on_close: Callback<()>,
    pub on_accept_all: Callback<()>,
    pub on_reject_optional: Callback<()>,
    pub on_save: Callback<ConsentChoice>,
    pub on_reset: Callback<()>,
}

pub fn format_decided_at<Tz: TimeZone>(at: &DateTime<Tz>, lang: Language) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match lang {
        Language::De => at.format("%d.%m.%Y, %H:%M").to_string(),
        Language::En => at.format("%Y-%m-%d %H:%M").to_string(),
    }
}

/// Toggle positions for a freshly opened dialog: whatever the slot holds now,
/// all optional categories off when there is no valid decision.
pub fn choice_on_open(store: &ConsentStore) -> ConsentChoice {
    store.read().as_ref().map(ConsentChoice::from).unwrap_or_default()
}

#[function_component(CookieSettingsDialog)]
pub fn cookie_settings_dialog(props: &CookieSettingsProps) -> Html {
    let services = use_context::<Services>().expect("Services not provided");
    let t = use_context::<Translator>().expect("Translator not provided");
    let analytics = use_state(|| false);
    let marketing = use_state(|| false);

    // Re-read the slot on every open so another tab's decision shows up here.
    {
        let analytics = analytics.clone();
        let marketing = marketing.clone();
        let store = services.consent.clone();
        use_effect_with_deps(
            move |open| {
                if *open {
                    let latest = choice_on_open(&store);
                    analytics.set(latest.analytics);
                    marketing.set(latest.marketing);
                }
                || ()
            },
            props.open,
        );
    }

    let on_analytics = {
        let analytics = analytics.clone();
        Callback::from(move |on: bool| analytics.set(on))
    };
    let on_marketing = {
        let marketing = marketing.clone();
        Callback::from(move |on: bool| marketing.set(on))
    };

    let save = {
        let on_save = props.on_save.clone();
        let analytics = analytics.clone();
        let marketing = marketing.clone();
        Callback::from(move |_: MouseEvent| {
            on_save.emit(ConsentChoice {
                analytics: *analytics,
                marketing: *marketing,
            })
        })
    };
    let reset = props.on_reset.reform(|_: MouseEvent| ());
    let reject = props.on_reject_optional.reform(|_: MouseEvent| ());
    let accept = props.on_accept_all.reform(|_: MouseEvent| ());

    let last_updated = props
        .consent
        .as_ref()
        .and_then(ConsentRecord::decided_at)
        .map(|at| {
            let date = format_decided_at(&at.with_timezone(&Local), t.language());
            t.t_with("cookies.settings.lastUpdated", &[("date", date.as_str())])
        });

    html! {
        <Dialog
            open={props.open}
            title={t.t("cookies.settings.title")}
            description={Some(AttrValue::from(t.t("cookies.settings.description")))}
            close_label={t.t("common.close")}
            on_close={props.on_close.clone()}
        >
            <Switch
                label={t.t("cookies.settings.necessary.label")}
                help={t.t("cookies.settings.necessary.help")}
                checked={true}
                disabled={true}
            />
            <Switch
                label={t.t("cookies.settings.analytics.label")}
                help={t.t("cookies.settings.analytics.help")}
                checked={*analytics}
                on_toggle={on_analytics}
            />
            <Switch
                label={t.t("cookies.settings.marketing.label")}
                help={t.t("cookies.settings.marketing.help")}
                checked={*marketing}
                on_toggle={on_marketing}
            />

            <div class="dialog-actions">
                <button type="button" class="button-outline" onclick={reset}>
                    {t.t("cookies.settings.resetDecision")}
                </button>
                <div class="dialog-actions-end">
                    <button type="button" class="button-secondary" onclick={reject}>
                        {t.t("cookies.settings.rejectOptional")}
                    </button>
                    <button type="button" class="button-secondary" onclick={accept}>
                        {t.t("cookies.settings.acceptAll")}
                    </button>
                    <button type="button" class="button-primary" onclick={save}>
                        {t.t("common.save")}
                    </button>
                </div>
            </div>

            {
                if let Some(text) = last_updated {
                    html! { <p class="consent-updated">{text}</p> }
                } else {
                    html! {}
                }
            }
        </Dialog>
    }
}
