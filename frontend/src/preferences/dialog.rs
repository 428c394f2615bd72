use std::rc::Rc;

use log::info;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::dialog::{Dialog, Switch};
use crate::i18n::translator::Translator;
use crate::preferences::store::{FontFamily, FontSize, LineHeight, PreferenceStore};
use crate::preferences::sync::use_preferences;
use crate::preferences::theme::ThemeSelect;
use crate::services::Services;

#[derive(Properties, PartialEq)]
struct ChoiceProps {
    id: AttrValue,
    label: String,
    /// (value, display text) pairs
    options: Vec<(&'static str, String)>,
    selected: &'static str,
    on_pick: Callback<String>,
}

#[function_component(Choice)]
fn choice(props: &ChoiceProps) -> Html {
    let onchange = {
        let on_pick = props.on_pick.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_pick.emit(select.value());
        })
    };

    html! {
        <div class="choice-row">
            <label for={props.id.clone()}>{&props.label}</label>
            <select id={props.id.clone()} class="select" {onchange}>
                { for props.options.iter().map(|(value, text)| html! {
                    <option value={*value} selected={*value == props.selected}>{text}</option>
                }) }
            </select>
        </div>
    }
}

fn options<T: Copy>(t: &Translator, group: &str, all: &[T], as_str: fn(T) -> &'static str) -> Vec<(&'static str, String)> {
    all.iter()
        .map(|v| {
            let value = as_str(*v);
            (value, t.t(&format!("a11y.{}.{}", group, value)))
        })
        .collect()
}

fn picker<T: Copy + 'static>(
    store: &Rc<PreferenceStore>,
    all: &'static [T],
    as_str: fn(T) -> &'static str,
    set: fn(&PreferenceStore, T),
) -> Callback<String> {
    let store = store.clone();
    Callback::from(move |value: String| {
        if let Some(v) = all.iter().copied().find(|v| as_str(*v) == value) {
            set(&store, v);
        }
    })
}

fn toggle(store: &Rc<PreferenceStore>, set: fn(&PreferenceStore, bool)) -> Callback<bool> {
    let store = store.clone();
    Callback::from(move |on: bool| set(&store, on))
}

/// Navbar button plus the dialog for font, spacing, motion and focus settings.
#[function_component(AccessibilityDialog)]
pub fn accessibility_dialog() -> Html {
    let services = use_context::<Services>().expect("Services not provided");
    let t = use_context::<Translator>().expect("Translator not provided");
    let prefs = use_preferences();
    let open = use_state(|| false);

    let open_dialog = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(true))
    };
    let close_dialog = {
        let open = open.clone();
        Callback::from(move |_: ()| open.set(false))
    };
    let reset = {
        let store = services.preferences.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Resetting display preferences");
            store.reset();
        })
    };

    let store = &services.preferences;

    html! {
        <>
            <button type="button" class="icon-button" aria-label={t.t("a11y.open")} onclick={open_dialog}>
                {"⚙"}
            </button>
            <Dialog
                open={*open}
                title={t.t("a11y.title")}
                description={Some(AttrValue::from(t.t("a11y.description")))}
                close_label={t.t("common.close")}
                on_close={close_dialog}
            >
                <div class="choice-row">
                    <label>{t.t("theme.label")}</label>
                    <ThemeSelect />
                </div>
                <Choice
                    id="fontSize"
                    label={t.t("a11y.fontSize.label")}
                    options={options(&t, "fontSize", &FontSize::ALL, FontSize::as_str)}
                    selected={prefs.font_size.as_str()}
                    on_pick={picker(store, &FontSize::ALL, FontSize::as_str, PreferenceStore::set_font_size)}
                />
                <Choice
                    id="fontFamily"
                    label={t.t("a11y.fontFamily.label")}
                    options={options(&t, "fontFamily", &FontFamily::ALL, FontFamily::as_str)}
                    selected={prefs.font_family.as_str()}
                    on_pick={picker(store, &FontFamily::ALL, FontFamily::as_str, PreferenceStore::set_font_family)}
                />
                <Choice
                    id="lineHeight"
                    label={t.t("a11y.lineHeight.label")}
                    options={options(&t, "lineHeight", &LineHeight::ALL, LineHeight::as_str)}
                    selected={prefs.line_height.as_str()}
                    on_pick={picker(store, &LineHeight::ALL, LineHeight::as_str, PreferenceStore::set_line_height)}
                />

                <Switch
                    label={t.t("a11y.reducedMotion.label")}
                    help={t.t("a11y.reducedMotion.help")}
                    checked={prefs.reduced_motion}
                    on_toggle={toggle(store, PreferenceStore::set_reduced_motion)}
                />
                <Switch
                    label={t.t("a11y.links.label")}
                    help={t.t("a11y.links.help")}
                    checked={prefs.high_visibility_links}
                    on_toggle={toggle(store, PreferenceStore::set_high_visibility_links)}
                />
                <Switch
                    label={t.t("a11y.focus.label")}
                    help={t.t("a11y.focus.help")}
                    checked={prefs.strong_focus_outline}
                    on_toggle={toggle(store, PreferenceStore::set_strong_focus_outline)}
                />
                <Switch
                    label={t.t("a11y.headings.label")}
                    help={t.t("a11y.headings.help")}
                    checked={prefs.highlight_headings}
                    on_toggle={toggle(store, PreferenceStore::set_highlight_headings)}
                />

                <div class="dialog-actions">
                    <button type="button" class="button-secondary" onclick={reset}>
                        {t.t("common.reset")}
                    </button>
                </div>
            </Dialog>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::translator::{Catalog, Language};
    use crate::storage::MemoryStorage;

    #[test]
    fn option_labels_come_from_the_active_language() {
        let t = Translator::new(Language::De, Rc::new(Catalog::bundled()));
        assert_eq!(
            options(&t, "lineHeight", &LineHeight::ALL, LineHeight::as_str),
            vec![
                ("normal", "Normal".to_string()),
                ("relaxed", "Erweitert".to_string()),
                ("loose", "Weit".to_string()),
            ]
        );
    }

    #[test]
    fn picker_ignores_values_outside_the_enum() {
        let store = Rc::new(PreferenceStore::load(Rc::new(MemoryStorage::new())));
        let pick = picker(&store, &FontSize::ALL, FontSize::as_str, PreferenceStore::set_font_size);

        pick.emit("huge".to_string());
        assert_eq!(store.get().font_size, FontSize::Md);

        pick.emit("lg".to_string());
        assert_eq!(store.get().font_size, FontSize::Lg);
    }

    #[test]
    fn toggles_write_through_to_the_store() {
        let store = Rc::new(PreferenceStore::load(Rc::new(MemoryStorage::new())));
        toggle(&store, PreferenceStore::set_strong_focus_outline).emit(false);
        toggle(&store, PreferenceStore::set_reduced_motion).emit(true);
        let prefs = store.get();
        assert!(!prefs.strong_focus_outline);
        assert!(prefs.reduced_motion);
    }
}
