// Toolbar with the active locale and quick actions
#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::config::theme::ThemePalette;
use crate::state::app_state::AppState;
use crate::state::locale_context::LocaleContext;

#[component]
pub fn Toolbar() -> Element {
    let mut app_state = use_context::<Signal<AppState>>();
    let locale_ctx = use_context::<LocaleContext>();

    let palette = ThemePalette::for_theme(&app_state.read().current_theme);
    let (label, currency) = match locale_ctx.current_option() {
        Some(option) => (option.label, option.currency),
        None => (locale_ctx.current.read().clone(), String::new()),
    };
    let separators = locale_ctx.separators(&locale_ctx.current.read());
    let button_style = format!(
        "margin-left: 8px; padding: 6px 12px; background: {}; color: {}; border: 1px solid {}; border-radius: 4px; cursor: pointer;",
        palette.field_background, palette.foreground, palette.field_border
    );

    rsx! {
        div {
            class: "toolbar",
            style: "display: flex; align-items: center; padding: 8px 16px; border-bottom: 1px solid {palette.field_border};",
            span { style: "font-weight: bold;", "{label}" }
            if !currency.is_empty() {
                span { style: "margin-left: 8px; color: {palette.muted};", "{currency}" }
            }
            span {
                style: "margin-left: 8px; color: {palette.muted};",
                "miles '{separators.thousands}' · decimales '{separators.decimal}'"
            }
            div { style: "flex: 1;" }
            button {
                style: "{button_style}",
                onclick: move |_| app_state.write().toggle_locale_picker(),
                "Cambiar región"
            }
            button {
                style: "{button_style}",
                onclick: move |_| {
                    let next = app_state.read().current_theme.toggled();
                    tracing::debug!(theme = ?next, "Theme toggled");
                    app_state.write().set_theme(next);
                },
                "Tema"
            }
        }
    }
}
