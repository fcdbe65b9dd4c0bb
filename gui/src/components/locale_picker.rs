// Locale picker overlay (command palette style)
#![allow(non_snake_case)]
use dioxus::prelude::*;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use shared::models::LocaleOption;

use crate::config::theme::ThemePalette;
use crate::state::app_state::AppState;
use crate::state::locale_context::LocaleContext;

/// Options whose id or label fuzzy-match `query`, best score first.
/// An empty query keeps every option in its configured order.
pub fn filter_locales(options: &[LocaleOption], query: &str) -> Vec<LocaleOption> {
    let query = query.trim();
    if query.is_empty() {
        return options.to_vec();
    }
    let matcher = SkimMatcherV2::default();
    let mut scored: Vec<(i64, &LocaleOption)> = options
        .iter()
        .filter_map(|option| {
            let haystack = format!("{} {} {}", option.id, option.label, option.currency);
            matcher.fuzzy_match(&haystack, query).map(|score| (score, option))
        })
        .collect();
    // Stable sort keeps configured order among equal scores.
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, option)| option.clone()).collect()
}

/// Index after moving `step` rows through `len` entries, wrapping at both ends.
pub fn wrap_index(current: usize, step: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current as isize + step).rem_euclid(len as isize) as usize
}

/// Sample rendering of a fixed amount, shown next to each option.
fn preview(option: &LocaleOption) -> String {
    engine::format::format_display("1234567.89", option.separators)
}

fn row_style(selected: bool, palette: &ThemePalette) -> String {
    let base = "padding: 8px 12px; cursor: pointer; border-radius: 3px;";
    if selected {
        format!("{} background-color: {};", base, palette.field_border)
    } else {
        base.to_string()
    }
}

fn choose(
    ctx: &mut LocaleContext,
    app_state: &mut Signal<AppState>,
    filter_text: &mut Signal<String>,
    locale: &str,
) {
    tracing::info!(locale = %locale, "Locale selected from picker");
    ctx.select(locale);
    app_state.write().locale_picker_visible = false;
    filter_text.set(String::new());
}

#[component]
pub fn LocalePicker() -> Element {
    let mut app_state = use_context::<Signal<AppState>>();
    let locale_ctx = use_context::<LocaleContext>();

    let mut filter_text = use_signal(String::new);
    let mut selected_index = use_signal(|| 0usize);

    let options = locale_ctx.options.clone();
    let filtered = use_memo(move || filter_locales(&options, &filter_text.read()));

    use_effect(move || {
        let _len = filtered.read().len();
        selected_index.set(0);
    });

    if !app_state.read().locale_picker_visible {
        return None;
    }

    let palette = ThemePalette::for_theme(&app_state.read().current_theme);
    let current_locale = locale_ctx.current.read().clone();

    let mut key_ctx = locale_ctx.clone();
    let handle_keydown = move |evt: KeyboardEvent| {
        let len = filtered.read().len();
        match evt.key() {
            Key::ArrowDown => selected_index.set(wrap_index(selected_index(), 1, len)),
            Key::ArrowUp => selected_index.set(wrap_index(selected_index(), -1, len)),
            Key::Enter => {
                let picked = filtered.read().get(selected_index()).map(|option| option.id.clone());
                if let Some(locale) = picked {
                    choose(&mut key_ctx, &mut app_state, &mut filter_text, &locale);
                }
            }
            Key::Escape => {
                app_state.write().locale_picker_visible = false;
                filter_text.set(String::new());
            }
            _ => {}
        }
    };

    let rows = filtered.read().clone();

    rsx! {
        div {
            class: "locale-picker",
            style: "position: fixed; top: 10%; left: 50%; transform: translateX(-50%); background-color: {palette.field_background}; color: {palette.foreground}; border: 1px solid {palette.field_border}; padding: 15px; z-index: 1000; width: 480px; border-radius: 8px; box-shadow: 0 5px 15px rgba(0,0,0,0.35);",
            onkeydown: handle_keydown,
            input {
                id: "locale-picker-input",
                r#type: "text",
                value: "{filter_text}",
                placeholder: "Search locale, language or currency...",
                autofocus: true,
                style: "width: calc(100% - 20px); padding: 10px; margin-bottom: 10px; background-color: {palette.background}; color: {palette.foreground}; border: 1px solid {palette.field_border}; border-radius: 4px;",
                oninput: move |evt: FormEvent| filter_text.set(evt.value()),
            }
            ul {
                style: "list-style: none; padding: 0; margin: 0; max-height: 320px; overflow-y: auto;",
                if rows.is_empty() {
                    li { style: "padding: 8px; color: {palette.muted};", "No locale matches your search." }
                }
                {rows.into_iter().enumerate().map(|(idx, option)| {
                    let mut row_ctx = locale_ctx.clone();
                    let locale = option.id.clone();
                    let marker = if option.id == current_locale { " ✓" } else { "" };
                    let sample = preview(&option);
                    rsx! {
                        li {
                            key: "{option.id}",
                            style: row_style(idx == selected_index(), &palette),
                            onclick: move |_| choose(&mut row_ctx, &mut app_state, &mut filter_text, &locale),
                            onmouseenter: move |_| selected_index.set(idx),
                            div {
                                style: "display: flex; justify-content: space-between;",
                                span { style: "font-weight: bold;", "{option.label}{marker}" }
                                span { style: "color: {palette.muted};", "{option.id} · {option.currency}" }
                            }
                            div { style: "font-size: 0.9em; color: {palette.muted};", "{sample}" }
                        }
                    }
                })}
            }
        }
    }
}
