use yew::prelude::*;

use crate::config;
use crate::i18n::translator::Translator;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanCta {
    /// Opens the booking service in a new tab.
    Booking,
    /// Pre-filled mail to the contact address.
    Email,
}

pub struct Plan {
    pub id: &'static str,
    pub featured: bool,
    pub bullets: &'static [&'static str],
    pub cta_label: &'static str,
    pub cta: PlanCta,
}

impl Plan {
    pub fn title_key(&self) -> String {
        format!("sections.pricing.plans.{}.title", self.id)
    }

    pub fn bullet_keys(&self) -> impl Iterator<Item = String> + '_ {
        self.bullets
            .iter()
            .map(move |b| format!("sections.pricing.plans.{}.bullets.{}", self.id, b))
    }
}

pub const PRICING: [Plan; 2] = [
    Plan {
        id: "bundles",
        featured: true,
        bullets: &["b1", "b2", "b3"],
        cta_label: "cta.freeWelcomeSession",
        cta: PlanCta::Booking,
    },
    Plan {
        id: "business",
        featured: false,
        bullets: &["b1", "b2", "b3", "b4", "b5"],
        cta_label: "cta.requestBusinessPackage",
        cta: PlanCta::Email,
    },
];

pub fn mailto(to: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        to,
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let t = use_context::<Translator>().expect("Translator not provided");

    let business_mail = mailto(
        config::contact_email(),
        &t.t("sections.pricing.businessEmail.subject"),
        &t.t("sections.pricing.businessEmail.body"),
    );

    html! {
        <section id="pricing" class="pricing-section">
            <h2>{t.t("sections.pricing.title")}</h2>
            <p class="section-subtitle">{t.t("sections.pricing.subtitle")}</p>

            <div class="pricing-grid">
                { for PRICING.iter().map(|plan| {
                    let cta = match plan.cta {
                        PlanCta::Booking => html! {
                            <a class="button-primary" href={config::BOOKING_URL} target="_blank" rel="noreferrer">
                                {t.t(plan.cta_label)}
                            </a>
                        },
                        PlanCta::Email => html! {
                            <a class="button-primary" href={business_mail.clone()}>
                                {t.t(plan.cta_label)}
                            </a>
                        },
                    };
                    html! {
                        <div key={plan.id} class={classes!("pricing-card", plan.featured.then(|| "featured"))}>
                            <h3>{t.t(&plan.title_key())}</h3>
                            <ul>
                                { for plan.bullet_keys().map(|key| html! { <li>{t.t(&key)}</li> }) }
                            </ul>
                            <div class="pricing-cta">{cta}</div>
                        </div>
                    }
                }) }
            </div>
            <style>
                {r#"
                    .pricing-section {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 4rem 1rem;
                    }
                    .pricing-grid {
                        margin-top: 2rem;
                        display: grid;
                        gap: 1rem;
                        grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
                    }
                    .pricing-card {
                        border: 1px solid var(--border);
                        border-radius: 1rem;
                        padding: 1.5rem;
                        display: flex;
                        flex-direction: column;
                    }
                    .pricing-card.featured {
                        border-width: 2px;
                        border-color: var(--accent);
                    }
                    .pricing-card h3 {
                        margin: 0;
                        font-size: 1.1rem;
                    }
                    .pricing-card ul {
                        color: var(--muted-foreground);
                        padding-left: 1.25rem;
                        flex: 1;
                    }
                    .pricing-cta {
                        display: flex;
                        justify-content: flex-end;
                    }
                    .pricing-cta a {
                        text-decoration: none;
                    }
                "#}
            </style>
        </section>
    }
}
