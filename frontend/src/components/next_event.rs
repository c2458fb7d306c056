use yew::prelude::*;

use crate::events::{self, format_instant, EventView};

#[derive(Properties, PartialEq)]
pub struct NextEventBannerProps {
    pub events: Vec<EventView>,
}

/// Summary of the single soonest event. Display-only.
#[function_component(NextEventBanner)]
pub fn next_event_banner(props: &NextEventBannerProps) -> Html {
    match events::next_upcoming(&props.events) {
        Some(next) => html! {
            <div class="next-event">
                <span class="next-event-label">{ "Next up: " }</span>
                <span class="next-event-title">{ &next.event.title }</span>
                <span class="next-event-time">{ format_instant(&next.instant) }</span>
            </div>
        },
        None => html! {
            <div class="next-event empty">{ "No upcoming events scheduled" }</div>
        },
    }
}
