use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::i18n::translator::Translator;
use crate::preferences::store::Theme;
use crate::preferences::sync::use_preferences;
use crate::services::Services;

fn theme_icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "☀",
        Theme::Dark => "☾",
        Theme::ContrastLight => "◐",
        Theme::ContrastDark => "◑",
    }
}

fn theme_label(t: &Translator, theme: Theme) -> String {
    t.t(&format!("theme.{}", theme.as_str()))
}

/// One-click theme cycling for the navbar.
#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let services = use_context::<Services>().expect("Services not provided");
    let t = use_context::<Translator>().expect("Translator not provided");
    let theme = use_preferences().theme;

    let onclick = {
        let store = services.preferences.clone();
        Callback::from(move |_: MouseEvent| store.set_theme(theme.next()))
    };

    let label = theme_label(&t, theme);
    html! {
        <button
            type="button"
            class="icon-button"
            aria-label={t.t_with("theme.toggle", &[("label", label.as_str())])}
            title={label}
            {onclick}
        >
            {theme_icon(theme)}
        </button>
    }
}

#[function_component(ThemeSelect)]
pub fn theme_select() -> Html {
    let services = use_context::<Services>().expect("Services not provided");
    let t = use_context::<Translator>().expect("Translator not provided");
    let theme = use_preferences().theme;

    let onchange = {
        let store = services.preferences.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            if let Some(theme) = Theme::ALL.into_iter().find(|candidate| candidate.as_str() == value) {
                store.set_theme(theme);
            }
        })
    };

    html! {
        <select class="select" aria-label={t.t("theme.label")} {onchange}>
            { for Theme::ALL.iter().map(|option| html! {
                <option value={option.as_str()} selected={*option == theme}>
                    {theme_label(&t, *option)}
                </option>
            }) }
        </select>
    }
}
