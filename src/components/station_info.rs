use crate::resolver::{StopSequence, UNKNOWN_STOP};
use chrono::NaiveDateTime;
use leptos::*;

/// Display names are capped at this many words so the fixed panel never wraps.
const MAX_DISPLAY_WORDS: usize = 2;

/// Bottom panel showing the watched train's surrounding stops, the next stop
/// code for the announcement collaborator, and the current time.
#[component]
pub fn StationInfo(
    stops: ReadSignal<Option<StopSequence>>,
    watched_train: ReadSignal<usize>,
    clock: ReadSignal<NaiveDateTime>,
) -> impl IntoView {
    let slot = move |pick: fn(&StopSequence) -> &str| {
        stops.with(|current| {
            current
                .as_ref()
                .map_or_else(|| UNKNOWN_STOP.to_string(), |s| display_name(pick(s)))
        })
    };

    let next_code = move || {
        stops.with(|current| {
            current
                .as_ref()
                .and_then(|s| s.next_code.clone())
                .map_or_else(String::new, |code| format!("Next stop {code}"))
        })
    };

    view! {
        <div class="station-info">
            <div class="station-info-header">
                <span class="train-label">
                    {move || format!("Train {}", watched_train.get() + 1)}
                </span>
                <span class="next-code">{next_code}</span>
                <span class="clock">{move || clock.get().format("%H:%M:%S").to_string()}</span>
            </div>
            <div class="station-info-stops">
                <Stop label="Previous" name=Signal::derive(move || slot(|s| &s.previous))/>
                <Stop
                    label="Current"
                    name=Signal::derive(move || slot(|s| &s.current))
                    highlight=true
                />
                <Stop label="Next" name=Signal::derive(move || slot(|s| &s.next))/>
                <Stop label="Then" name=Signal::derive(move || slot(|s| &s.next_plus_one))/>
                <Stop label="After" name=Signal::derive(move || slot(|s| &s.next_plus_two))/>
            </div>
        </div>
    }
}

#[component]
fn Stop(
    label: &'static str,
    name: Signal<String>,
    #[prop(optional)] highlight: bool,
) -> impl IntoView {
    view! {
        <div class=if highlight { "stop current" } else { "stop" }>
            <span class="stop-label">{label}</span>
            <span class="stop-name">{name}</span>
        </div>
    }
}

/// Compact a station name for the fixed-width display: anything after a
/// comma goes, a trailing " Station" goes, and at most two words remain.
/// Empty input reads as the unknown sentinel.
#[must_use]
pub fn display_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return UNKNOWN_STOP.to_string();
    }

    let cleaned = match trimmed.split_once(',') {
        Some((head, _)) => head.trim(),
        None => trimmed,
    };
    let cleaned = cleaned.strip_suffix(" Station").unwrap_or(cleaned).trim();

    let words: Vec<&str> = cleaned.split_whitespace().collect();
    if words.len() > MAX_DISPLAY_WORDS {
        words[..MAX_DISPLAY_WORDS].join(" ")
    } else {
        cleaned.to_string()
    }
}
