use yew::prelude::*;

use crate::i18n::translator::{Language, Translator};

#[derive(Properties, PartialEq)]
pub struct LanguageToggleProps {
    pub on_change: Callback<Language>,
}

#[function_component(LanguageToggle)]
pub fn language_toggle(props: &LanguageToggleProps) -> Html {
    let t = use_context::<Translator>().expect("Translator not provided");
    let current = t.language();

    let button = |lang: Language, text: &'static str| {
        let on_change = props.on_change.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            if lang != current {
                on_change.emit(lang);
            }
        });
        html! {
            <button
                type="button"
                class={classes!("language-button", (lang == current).then(|| "active"))}
                aria-pressed={(lang == current).to_string()}
                {onclick}
            >
                {text}
            </button>
        }
    };

    html! {
        <div class="language-toggle" role="group" aria-label={t.t("nav.language")}>
            { button(Language::De, "DE") }
            { button(Language::En, "EN") }
        </div>
    }
}
