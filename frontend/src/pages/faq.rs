use web_sys::MouseEvent;
use yew::prelude::*;

use crate::i18n::translator::Translator;

/// Question ids, in display order. Text lives under `sections.faq.items.<id>`.
pub const FAQ: [&str; 7] = ["q1", "q2", "q3", "q4", "q5", "q6", "q7"];

fn question_key(id: &str) -> String {
    format!("sections.faq.items.{}.q", id)
}

fn answer_key(id: &str) -> String {
    format!("sections.faq.items.{}.a", id)
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then(|| "open"))}>
            <button type="button" class="faq-question" aria-expanded={(*is_open).to_string()} onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon" aria-hidden="true">{if *is_open { "−" } else { "+" }}</span>
            </button>
            if *is_open {
                <div class="faq-answer">
                    { for props.children.iter() }
                </div>
            }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let t = use_context::<Translator>().expect("Translator not provided");

    html! {
        <section id="faq" class="faq-section">
            <h2>{t.t("sections.faq.title")}</h2>
            <p class="section-subtitle">{t.t("sections.faq.subtitle")}</p>

            <div class="faq-list">
                { for FAQ.iter().map(|id| html! {
                    <FaqItem key={*id} question={t.t(&question_key(id))}>
                        <p>{t.t(&answer_key(id))}</p>
                    </FaqItem>
                }) }
            </div>
            <style>
                {r#"
                    .faq-section {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 4rem 1rem;
                    }
                    .section-subtitle {
                        color: var(--muted-foreground);
                    }
                    .faq-list {
                        margin-top: 2rem;
                        border: 1px solid var(--border);
                        border-radius: 1rem;
                        padding: 0 1rem;
                    }
                    .faq-item + .faq-item {
                        border-top: 1px solid var(--border);
                    }
                    .faq-question {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        gap: 1rem;
                        padding: 1rem 0;
                        background: none;
                        border: none;
                        font: inherit;
                        font-weight: 500;
                        color: inherit;
                        text-align: left;
                        cursor: pointer;
                    }
                    .faq-answer {
                        color: var(--muted-foreground);
                        padding-bottom: 1rem;
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use crate::i18n::translator::{Catalog, Language};

    #[test]
    fn every_question_has_text_in_both_languages() {
        let catalog = Rc::new(Catalog::bundled());
        for lang in [Language::En, Language::De] {
            let t = Translator::new(lang, catalog.clone());
            for id in FAQ {
                assert_ne!(t.t(&question_key(id)), question_key(id), "{:?} {}", lang, id);
                assert_ne!(t.t(&answer_key(id)), answer_key(id), "{:?} {}", lang, id);
            }
        }
    }
}
