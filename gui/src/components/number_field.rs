// Locale-aware numeric text input.
//
// The parent owns a canonical string ("1500000.50"); the input shows it with
// the active locale's separators ("1.500.000,50"). Every keystroke is turned
// back into a canonical value, and the cursor is put back after the same
// digit once the reformatted text is on screen.
//
// Input and paste events are captured by a script on the element itself, so
// the text and the caret of one keystroke always travel together. Each event
// carries a sequence number; a DOM write is dropped when the element has seen
// a newer event than the one the write was computed from.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::format::{apply_edit, extract_paste, format_display, get_separators};
use serde::Deserialize;
use shared::models::Separators;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::state::locale_context::{LocaleContext, DEFAULT_LOCALE};

static NEXT_FIELD_ID: AtomicUsize = AtomicUsize::new(0);

/// One snapshot sent by the element script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum FieldEvent {
    /// `caret` is `selectionStart` in UTF-16 units, read in the same event as `value`.
    Input { seq: u64, value: String, caret: Option<usize> },
    Paste { seq: u64, text: String },
}

impl FieldEvent {
    fn seq(&self) -> u64 {
        match self {
            FieldEvent::Input { seq, .. } | FieldEvent::Paste { seq, .. } => *seq,
        }
    }
}

/// New canonical value plus what the element should show.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldUpdate {
    pub canonical: String,
    pub display: String,
    pub cursor: usize,
}

/// Text (and optionally cursor) to write into the element, valid only while
/// the element's latest event is `seq`.
#[derive(Debug, Clone, PartialEq)]
struct DomWrite {
    seq: u64,
    display: String,
    cursor: Option<usize>,
}

/// Result of a keystroke: `raw` is the element text and `caret` its
/// `selectionStart` from the same event. A missing caret means the end.
pub fn edit_update(raw: &str, caret: Option<usize>, separators: Separators) -> FieldUpdate {
    let cursor = match caret {
        Some(offset) => utf16_to_char_offset(raw, offset),
        None => raw.chars().count(),
    };
    let outcome = apply_edit(raw, cursor, separators);
    FieldUpdate {
        display: outcome.display(separators),
        cursor: outcome.cursor(separators),
        canonical: outcome.canonical,
    }
}

/// Result of a paste, with the cursor at the end. `None` leaves the field as is.
pub fn paste_update(text: &str, separators: Separators) -> Option<FieldUpdate> {
    let canonical = extract_paste(text, separators)?;
    let display = format_display(&canonical, separators);
    let cursor = display.chars().count();
    Some(FieldUpdate { canonical, display, cursor })
}

fn handle_event(event: &FieldEvent, separators: Separators) -> Option<FieldUpdate> {
    match event {
        FieldEvent::Input { value, caret, .. } => Some(edit_update(value, *caret, separators)),
        FieldEvent::Paste { text, .. } => paste_update(text, separators),
    }
}

#[component]
pub fn LocaleNumberField(
    value: String,
    on_change: EventHandler<String>,
    /// Overrides the context locale.
    #[props(into)]
    locale: Option<String>,
    /// Canonical value shown formatted while the field is empty.
    #[props(into)]
    placeholder: Option<String>,
    #[props(into)]
    id: Option<String>,
    #[props(into)]
    class: Option<String>,
    #[props(into)]
    name: Option<String>,
    #[props(default)] disabled: bool,
) -> Element {
    let context = try_use_context::<LocaleContext>();
    let active_locale = match (&locale, &context) {
        (Some(locale), _) => locale.clone(),
        (None, Some(ctx)) => ctx.current.read().clone(),
        (None, None) => DEFAULT_LOCALE.to_string(),
    };
    let separators = match &context {
        Some(ctx) => ctx.separators(&active_locale),
        None => get_separators(&active_locale),
    };

    let generated_id = use_hook(|| format!("locale-number-field-{}", NEXT_FIELD_ID.fetch_add(1, Ordering::Relaxed)));
    let field_id = id.clone().unwrap_or(generated_id);

    // Read by the long-lived event loop, which outlives any single render.
    let mut live_separators = use_hook(|| CopyValue::new(separators));
    let mut live_handler = use_hook(|| CopyValue::new(on_change.clone()));
    live_separators.set(separators);
    live_handler.set(on_change.clone());

    // Sequence number of the last element event handled, and the text last
    // written into the element.
    let mut handled_seq = use_hook(|| CopyValue::new(0u64));
    let mut last_written = use_hook(|| CopyValue::new(None::<String>));
    let mut pending = use_signal(|| None::<DomWrite>);

    let write_id = field_id.clone();
    use_effect(move || {
        if let Some(write) = pending() {
            let _ = eval(&write_script(&write_id, &write));
        }
    });

    // Values set from outside (initial value, parent reset, locale switch).
    let display = format_display(&value, separators);
    let sync_id = field_id.clone();
    use_effect(use_reactive((&display,), move |(display,)| {
        if last_written.peek().as_deref() == Some(display.as_str()) {
            return;
        }
        last_written.set(Some(display.clone()));
        let write = DomWrite { seq: *handled_seq.peek(), display, cursor: None };
        let _ = eval(&write_script(&sync_id, &write));
    }));

    let events_id = field_id.clone();
    use_future(move || {
        let events_id = events_id.clone();
        async move {
            let mut events = eval(&event_listener_script(&events_id));
            loop {
                let message = match events.recv().await {
                    Ok(message) => message,
                    Err(e) => {
                        tracing::warn!(error = ?e, field = %events_id, "Field event listener closed");
                        break;
                    }
                };
                let event: FieldEvent = match serde_json::from_value(message) {
                    Ok(event) => event,
                    Err(e) => {
                        tracing::warn!(error = %e, field = %events_id, "Ignoring malformed field event");
                        continue;
                    }
                };

                let seq = event.seq();
                handled_seq.set(seq);
                let separators = *live_separators.read();
                match handle_event(&event, separators) {
                    Some(update) => {
                        tracing::debug!(seq, canonical = %update.canonical, "Field updated");
                        last_written.set(Some(update.display.clone()));
                        live_handler.read().call(update.canonical);
                        pending.set(Some(DomWrite {
                            seq,
                            display: update.display,
                            cursor: Some(update.cursor),
                        }));
                    }
                    None => tracing::debug!(seq, "Paste held no digits, field unchanged"),
                }
            }
        }
    });

    let placeholder_display = placeholder
        .as_deref()
        .map(|p| format_display(p, separators))
        .unwrap_or_default();

    // No `value` attribute: the element text is only written by `write_script`,
    // so a re-render never overwrites a keystroke that is still in flight.
    rsx! {
        input {
            id: "{field_id}",
            r#type: "text",
            inputmode: "decimal",
            autocomplete: "off",
            class: class.clone().unwrap_or_default(),
            name: name.clone().unwrap_or_default(),
            disabled: disabled,
            placeholder: "{placeholder_display}",
        }
    }
}

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Forwards input and paste events with a per-element sequence number. The
/// latest number is kept in `data-seq` for `write_script` to compare against.
fn event_listener_script(field_id: &str) -> String {
    format!(
        "const attach = () => {{ \
            const el = document.getElementById({id}); \
            if (!el) {{ requestAnimationFrame(attach); return; }} \
            if (el.dataset.fieldBound) return; \
            el.dataset.fieldBound = '1'; \
            let seq = 0; \
            const next = () => {{ seq += 1; el.dataset.seq = String(seq); return seq; }}; \
            el.addEventListener('input', () => {{ \
                const n = next(); \
                dioxus.send({{ kind: 'input', seq: n, value: el.value, caret: el.selectionStart }}); \
            }}); \
            el.addEventListener('paste', (e) => {{ \
                e.preventDefault(); \
                const data = e.clipboardData || window.clipboardData; \
                const n = next(); \
                dioxus.send({{ kind: 'paste', seq: n, text: data ? data.getData('text') : '' }}); \
            }}); \
        }}; \
        attach();",
        id = js_string(field_id)
    )
}

/// Runs after the next paint. Skips the write when the element has received
/// an event newer than `write.seq`; that event brings its own write.
fn write_script(field_id: &str, write: &DomWrite) -> String {
    let selection = match write.cursor {
        Some(cursor) => {
            let pos = char_to_utf16_offset(&write.display, cursor);
            format!("if (document.activeElement === el) el.setSelectionRange({pos}, {pos}); ")
        }
        None => String::new(),
    };
    format!(
        "requestAnimationFrame(() => {{ \
            const el = document.getElementById({id}); \
            if (!el) return; \
            if ((el.dataset.seq || '0') !== {seq}) return; \
            if (el.value !== {text}) el.value = {text}; \
            {selection}\
        }});",
        id = js_string(field_id),
        seq = js_string(&write.seq.to_string()),
        text = js_string(&write.display),
        selection = selection
    )
}

/// DOM selection offsets count UTF-16 code units; the edit logic counts chars.
pub fn utf16_to_char_offset(text: &str, utf16_offset: usize) -> usize {
    let mut units = 0;
    for (idx, ch) in text.chars().enumerate() {
        if units >= utf16_offset {
            return idx;
        }
        units += ch.len_utf16();
    }
    text.chars().count()
}

pub fn char_to_utf16_offset(text: &str, char_offset: usize) -> usize {
    text.chars().take(char_offset).map(char::len_utf16).sum()
}
