use leptos::prelude::*;

use crate::interactions::theme::{apply, prefers_dark, Theme};

/// Floating control that flips the page between light and dark. The flag
/// starts from the ambient color-scheme preference and lives only for this
/// page session.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let (theme, set_theme) = signal(Theme::default());

    // adopt the ambient preference once on mount
    Effect::new(move |_| {
        set_theme.set(Theme::from_prefers_dark(prefers_dark()));
    });
    // mirror every change onto the body attribute
    Effect::new(move |_| {
        apply(theme.get());
    });

    view! {
        <button
            class="theme-toggle"
            aria-label="Switch color theme"
            on:click=move |_| set_theme.update(|t| *t = t.toggled())
        >
            <i class=move || theme.get().icon_class()></i>
        </button>
    }
}
