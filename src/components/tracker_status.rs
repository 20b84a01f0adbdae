//! Tracker Status Badge
//!
//! Running/stopped indicator in the header.

use leptos::prelude::*;

use crate::render::TrackerView;

#[component]
pub fn TrackerStatusBadge(tracker: ReadSignal<TrackerView>) -> impl IntoView {
    let indicator_class = move || {
        if tracker.get().active {
            "status-indicator active"
        } else {
            "status-indicator"
        }
    };

    view! {
        <div class="tracker-status-bar">
            <span id="tracker-status" class=indicator_class></span>
            <span class="tracker-label">"Tracker: "</span>
            <span id="tracker-state">{move || tracker.get().text}</span>
        </div>
    }
}
