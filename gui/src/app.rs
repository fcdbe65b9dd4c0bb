#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::components::{InterestForm, LocalePicker, Toolbar};
use crate::config::theme::ThemePalette;
use crate::config::AppConfig;
use crate::state::app_state::{AppState, Theme};
use crate::state::locale_context::LocaleContext;

#[component]
pub fn App() -> Element {
    let app_config = use_context::<AppConfig>();

    let config_for_state = app_config.clone();
    let app_state = use_context_provider(|| {
        Signal::new(AppState::with_theme(Theme::from_name(&config_for_state.app.theme)))
    });
    use_context_provider(|| LocaleContext::from_config(&app_config));

    let palette = ThemePalette::for_theme(&app_state.read().current_theme);

    rsx! {
        div {
            class: "app",
            style: "min-height: 100vh; margin: 0; font-family: sans-serif; background-color: {palette.background}; color: {palette.foreground};",
            Toolbar {}
            InterestForm {}
            LocalePicker {}
        }
    }
}
