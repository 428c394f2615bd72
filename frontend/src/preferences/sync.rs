use yew::prelude::*;

use crate::preferences::presentation;
use crate::preferences::store::Preferences;
use crate::services::Services;

/// Current preferences, re-rendering the caller on every change.
#[hook]
pub fn use_preferences() -> Preferences {
    let services = use_context::<Services>().expect("Services not provided");
    let prefs = use_state(|| services.preferences.get());

    {
        let prefs = prefs.clone();
        use_effect_with_deps(
            move |services: &Services| {
                prefs.set(services.preferences.get());
                let sub = services.preferences.subscribe(move |next| prefs.set(*next));
                move || drop(sub)
            },
            services,
        );
    }

    *prefs
}

/// Keeps the document root classes in line with the preference store.
#[hook]
pub fn use_presentation_sync() {
    let services = use_context::<Services>().expect("Services not provided");

    use_effect_with_deps(
        move |services: &Services| {
            presentation::apply_to_document(&services.preferences.get());
            let sub = services
                .preferences
                .subscribe(|prefs| presentation::apply_to_document(prefs));
            move || drop(sub)
        },
        services,
    );
}
