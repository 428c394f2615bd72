use std::rc::Rc;

use log::info;
use yew::prelude::*;

mod config;
mod events;
mod services;
mod storage;

mod consent {
    pub mod store;
    pub mod settings;
    pub mod banner;
}
mod preferences {
    pub mod store;
    pub mod presentation;
    pub mod sync;
    pub mod theme;
    pub mod dialog;
}
mod i18n {
    pub mod translator;
    pub mod toggle;
    pub mod seo;
}
mod components {
    pub mod dialog;
    pub mod footer;
}
mod pages {
    pub mod home;
    pub mod pricing;
    pub mod faq;
}

use components::footer::Footer;
use consent::banner::CookieBanner;
use i18n::seo::use_seo_sync;
use i18n::toggle::LanguageToggle;
use i18n::translator::{persist_language, Catalog, Language, Translator};
use pages::faq::Faq;
use pages::home::Home;
use pages::pricing::Pricing;
use preferences::dialog::AccessibilityDialog;
use preferences::sync::use_presentation_sync;
use preferences::theme::ThemeToggle;
use services::Services;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_language: Callback<Language>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let t = use_context::<Translator>().expect("Translator not provided");

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <a href="#home" class="nav-logo">{t.t_or("nav.brand", config::BRAND)}</a>
                <div class="nav-right">
                    <a class="nav-link" href="#pricing">{t.t("nav.pricing")}</a>
                    <a class="nav-link" href="#faq">{t.t("nav.faq")}</a>
                    <a class="nav-link" href={config::BOOKING_URL} target="_blank" rel="noreferrer">
                        {t.t("nav.book")}
                    </a>
                    <LanguageToggle on_change={props.on_language.clone()} />
                    <ThemeToggle />
                    <AccessibilityDialog />
                </div>
            </div>
        </nav>
    }
}

/// Everything below the context providers.
#[function_component(Layout)]
fn layout(props: &NavProps) -> Html {
    use_presentation_sync();
    use_seo_sync();
    let t = use_context::<Translator>().expect("Translator not provided");

    html! {
        <div class="site">
            <a class="skip-link" href="#content">{t.t("nav.skip")}</a>
            <Nav on_language={props.on_language.clone()} />
            <main id="content">
                <Home />
                <Pricing />
                <Faq />
            </main>
            <Footer />
            <CookieBanner />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub services: Services,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let services = props.services.clone();
    let translator = {
        let services = services.clone();
        use_state(|| {
            let lang = services.detect_language();
            persist_language(services.storage.as_ref(), lang);
            Translator::new(lang, Rc::new(Catalog::bundled()))
        })
    };

    let on_language = {
        let translator = translator.clone();
        let services = services.clone();
        Callback::from(move |lang: Language| {
            persist_language(services.storage.as_ref(), lang);
            translator.set(translator.with_language(lang));
        })
    };

    html! {
        <ContextProvider<Services> context={services}>
            <ContextProvider<Translator> context={(*translator).clone()}>
                <Layout {on_language} />
            </ContextProvider<Translator>>
        </ContextProvider<Services>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    let services = Services::new(storage::default_storage());
    yew::Renderer::<App>::with_props(AppProps { services }).render();
}
