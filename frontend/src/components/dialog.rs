use log::warn;
use web_sys::HtmlElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DialogProps {
    pub open: bool,
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    pub close_label: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub wide: bool,
    pub children: Children,
}

fn closes_dialog(key: &str) -> bool {
    key == "Escape"
}

/// Moves keyboard focus into an opened panel so Escape and Tab start there.
fn focus_panel(panel: &HtmlElement) {
    if let Err(e) = panel.focus() {
        warn!("Failed to focus dialog: {:?}", e);
    }
}

/// Modal chrome shared by the cookie, accessibility and legal dialogs.
#[function_component(Dialog)]
pub fn dialog(props: &DialogProps) -> Html {
    let panel = use_node_ref();

    {
        let panel = panel.clone();
        use_effect_with_deps(
            move |open| {
                if *open {
                    if let Some(el) = panel.cast::<HtmlElement>() {
                        focus_panel(&el);
                    }
                }
                || ()
            },
            props.open,
        );
    }

    if !props.open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    let on_key = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if closes_dialog(&e.key()) {
                on_close.emit(());
            }
        })
    };

    // Clicks inside the panel must not reach the overlay
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="dialog-overlay" onclick={close.clone()} onkeydown={on_key}>
            <div
                ref={panel}
                class={classes!("dialog-panel", props.wide.then(|| "dialog-wide"))}
                tabindex="-1"
                role="dialog"
                aria-modal="true"
                aria-label={props.title.clone()}
                onclick={stop}
            >
                <div class="dialog-header">
                    <h2 class="dialog-title">{&props.title}</h2>
                    <button type="button" class="dialog-close" aria-label={props.close_label.clone()} onclick={close}>
                        {"×"}
                    </button>
                </div>
                {
                    if let Some(description) = &props.description {
                        html! { <p class="dialog-description">{description}</p> }
                    } else {
                        html! {}
                    }
                }
                <div class="dialog-body">
                    { for props.children.iter() }
                </div>
            </div>
            <style>
                {r#"
                    .dialog-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 60;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(0, 0, 0, 0.55);
                        padding: 1rem;
                    }
                    .dialog-panel {
                        width: 100%;
                        max-width: 36rem;
                        max-height: 85vh;
                        overflow: auto;
                        background: var(--background);
                        color: var(--foreground);
                        border-radius: 1rem;
                        padding: 1.5rem;
                        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.3);
                    }
                    .dialog-panel:focus {
                        outline: none;
                    }
                    .dialog-wide {
                        max-width: 42rem;
                    }
                    .dialog-header {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 0.75rem;
                    }
                    .dialog-title {
                        font-size: 1.25rem;
                        margin: 0;
                    }
                    .dialog-close {
                        background: none;
                        border: none;
                        font-size: 1.5rem;
                        cursor: pointer;
                        color: inherit;
                    }
                    .dialog-description {
                        color: var(--muted-foreground);
                        font-size: 0.9rem;
                    }
                    .dialog-body {
                        margin-top: 1.5rem;
                        display: grid;
                        gap: 1rem;
                    }
                    .a11y-reduced-motion .dialog-overlay,
                    .a11y-reduced-motion .dialog-panel {
                        animation: none;
                        transition: none;
                    }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SwitchProps {
    pub label: AttrValue,
    pub help: AttrValue,
    pub checked: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub on_toggle: Callback<bool>,
}

/// Labelled on/off control with a line of help text.
#[function_component(Switch)]
pub fn switch(props: &SwitchProps) -> Html {
    let onchange = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_toggle.emit(input.checked());
        })
    };

    html! {
        <label class="switch-row">
            <div>
                <span class="switch-label">{&props.label}</span>
                <p class="switch-help">{&props.help}</p>
            </div>
            <input
                type="checkbox"
                role="switch"
                checked={props.checked}
                disabled={props.disabled}
                {onchange}
            />
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_escape_dismisses() {
        assert!(closes_dialog("Escape"));
        assert!(!closes_dialog("Enter"));
        assert!(!closes_dialog("Esc"));
        assert!(!closes_dialog(" "));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn opened_panel_takes_focus() {
        let document = web_sys::window().unwrap().document().unwrap();
        let panel: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
        panel.set_attribute("tabindex", "-1").unwrap();
        document.body().unwrap().append_child(&panel).unwrap();

        focus_panel(&panel);

        let active = document.active_element().unwrap();
        assert!(active.is_same_node(Some(&panel)));
        panel.remove();
    }
}
