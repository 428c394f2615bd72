use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::dialog::Dialog;
use crate::config;
use crate::i18n::translator::Translator;
use crate::services::Services;

#[derive(Properties, PartialEq)]
struct LegalDialogProps {
    /// Prefix under `legal.` in the translation tables.
    section: &'static str,
}

#[function_component(LegalDialog)]
fn legal_dialog(props: &LegalDialogProps) -> Html {
    let t = use_context::<Translator>().expect("Translator not provided");
    let open = use_state(|| false);
    let key = |field: &str| format!("legal.{}.{}", props.section, field);

    let show = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(true))
    };
    let hide = {
        let open = open.clone();
        Callback::from(move |_: ()| open.set(false))
    };

    html! {
        <>
            <button type="button" class="footer-link" onclick={show}>
                {t.t(&key("trigger"))}
            </button>
            <Dialog
                open={*open}
                wide={true}
                title={t.t(&key("title"))}
                description={Some(AttrValue::from(t.t(&key("desc"))))}
                close_label={t.t("common.close")}
                on_close={hide}
            >
                <div class="legal-text">
                    {t.t_with(&key("body"), &[("email", config::contact_email())])}
                </div>
            </Dialog>
        </>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let services = use_context::<Services>().expect("Services not provided");
    let t = use_context::<Translator>().expect("Translator not provided");

    // The banner owns the settings dialog; we only ask for it.
    let manage_cookies = {
        let store = services.consent.clone();
        Callback::from(move |_: MouseEvent| store.request_open_settings())
    };

    let year = Local::now().year().to_string();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <p class="footer-copyright">
                    {t.t_with("footer.copyright", &[("year", year.as_str()), ("brand", config::BRAND)])}
                </p>
                <div class="footer-links">
                    <button type="button" class="footer-link" onclick={manage_cookies}>
                        {t.t("cookies.manage")}
                    </button>
                    <LegalDialog section="impressum" />
                    <LegalDialog section="privacy" />
                    <LegalDialog section="accessibility" />
                </div>
            </div>
            <style>
                {r#"
                    .site-footer {
                        margin-top: 4rem;
                        border-top: 1px solid var(--border);
                    }
                    .footer-content {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 2.5rem 1rem;
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                    }
                    .footer-copyright {
                        color: var(--muted-foreground);
                        font-size: 0.9rem;
                    }
                    .footer-links {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                    }
                    .footer-link {
                        background: none;
                        border: none;
                        padding: 0.5rem 0.75rem;
                        cursor: pointer;
                        color: inherit;
                    }
                    .legal-text {
                        white-space: pre-wrap;
                        font-size: 0.9rem;
                        color: var(--muted-foreground);
                    }
                "#}
            </style>
        </footer>
    }
}
