use yew::prelude::*;

use crate::config;
use crate::i18n::translator::Translator;

#[function_component(Home)]
pub fn home() -> Html {
    let t = use_context::<Translator>().expect("Translator not provided");

    html! {
        <section id="home" class="hero">
            <div class="hero-content">
                <h1>{t.t("hero.title")}</h1>
                <p class="hero-subtitle">{t.t("hero.subtitle")}</p>
                <a
                    class="button-primary hero-cta"
                    href={config::BOOKING_URL}
                    target="_blank"
                    rel="noreferrer"
                >
                    {t.t("hero.cta")}
                </a>
            </div>
            <style>
                {r#"
                    .hero {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 6rem 1rem 4rem;
                    }
                    .hero-content h1 {
                        font-size: clamp(2rem, 5vw, 3.5rem);
                        margin: 0 0 1rem 0;
                    }
                    .hero-subtitle {
                        color: var(--muted-foreground);
                        font-size: 1.15rem;
                        max-width: 40rem;
                    }
                    .hero-cta {
                        display: inline-block;
                        margin-top: 1.5rem;
                        text-decoration: none;
                    }
                    .a11y-highlight-headings h1,
                    .a11y-highlight-headings h2 {
                        outline: 2px dashed var(--accent);
                        outline-offset: 4px;
                    }
                "#}
            </style>
        </section>
    }
}
