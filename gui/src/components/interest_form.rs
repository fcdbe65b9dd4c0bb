// Demo compound-interest calculator built from locale number fields
#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::validation::ValidationError;

use super::number_field::LocaleNumberField;
use crate::config::theme::ThemePalette;
use crate::config::AppConfig;
use crate::services::interest::{evaluate, InterestInputs};
use crate::state::app_state::AppState;
use crate::state::locale_context::LocaleContext;

#[component]
pub fn InterestForm() -> Element {
    let app_config = use_context::<AppConfig>();
    let app_state = use_context::<Signal<AppState>>();
    let locale_ctx = use_context::<LocaleContext>();

    let defaults = app_config.calculator.clone();
    let mut principal = use_signal(|| defaults.principal.clone());
    let mut annual_rate = use_signal(|| defaults.annual_rate.clone());
    let mut years = use_signal(|| defaults.years.clone());

    let palette = ThemePalette::for_theme(&app_state.read().current_theme);
    let locale = locale_ctx.current.read().clone();
    let currency = locale_ctx.current_option().map(|option| option.currency).unwrap_or_default();

    let outcome = evaluate(&InterestInputs {
        principal: principal(),
        annual_rate: annual_rate(),
        years: years(),
    });
    let (final_amount, interest, errors) = match outcome {
        Ok(result) => (
            locale_ctx.resolver.format(&result.final_amount, &locale),
            locale_ctx.resolver.format(&result.interest, &locale),
            Default::default(),
        ),
        Err(errors) => (String::new(), String::new(), errors),
    };

    let field_style = format!(
        "width: 100%; padding: 8px; font-size: 1.1em; background: {}; color: {}; border: 1px solid {}; border-radius: 4px;",
        palette.field_background, palette.foreground, palette.field_border
    );
    let label_style = "display: block; margin-top: 14px; margin-bottom: 4px;";
    let error_style = format!("color: {}; font-size: 0.9em;", palette.error);

    rsx! {
        form {
            class: "interest-form",
            style: "max-width: 420px; margin: 24px auto;",
            prevent_default: "onsubmit",
            onsubmit: move |_| {},
            h2 { "Interés compuesto" }

            label { r#for: "principal", style: label_style, "Capital inicial ({currency})" }
            LocaleNumberField {
                id: "principal",
                name: "principal",
                value: principal(),
                placeholder: "0",
                on_change: move |canonical: String| principal.set(canonical),
            }
            {error_line(&errors.principal, &error_style)}

            label { r#for: "annual-rate", style: label_style, "Tasa anual (%)" }
            LocaleNumberField {
                id: "annual-rate",
                name: "annual_rate",
                value: annual_rate(),
                on_change: move |canonical: String| annual_rate.set(canonical),
            }
            {error_line(&errors.annual_rate, &error_style)}

            label { r#for: "years", style: label_style, "Años" }
            LocaleNumberField {
                id: "years",
                name: "years",
                value: years(),
                on_change: move |canonical: String| years.set(canonical),
            }
            {error_line(&errors.years, &error_style)}

            if !final_amount.is_empty() {
                div {
                    style: "margin-top: 20px; padding: 12px; border: 1px solid {palette.field_border}; border-radius: 4px;",
                    div { "Monto final: " strong { "{final_amount} {currency}" } }
                    div { style: "color: {palette.muted};", "Intereses: {interest} {currency}" }
                }
            }
            style { "{field_css(&field_style)}" }
        }
    }
}

fn error_line(error: &Option<ValidationError>, style: &str) -> Element {
    let message = error.as_ref()?.to_string();
    rsx! { div { style: "{style}", "{message}" } }
}

/// Number fields render a bare input, so their look comes from a stylesheet rule.
fn field_css(field_style: &str) -> String {
    format!(".interest-form input {{ {} }}", field_style)
}
