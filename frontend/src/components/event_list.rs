use yew::prelude::*;

use crate::components::event_card::EventCard;
use crate::events::{self, EventView};

#[derive(Properties, PartialEq)]
pub struct EventListProps {
    pub events: Vec<EventView>,
    pub on_delete: Callback<String>,
}

/// One card per record, in ascending order of display instant.
#[function_component(EventList)]
pub fn event_list(props: &EventListProps) -> Html {
    if props.events.is_empty() {
        return html! {
            <p class="no-events">{ "No events found" }</p>
        };
    }

    let mut sorted = props.events.clone();
    events::sort_by_instant(&mut sorted);

    html! {
        <div class="event-list">
            { for sorted.iter().map(|event| html! {
                <EventCard event={event.clone()} on_delete={props.on_delete.clone()} />
            }) }
        </div>
    }
}
