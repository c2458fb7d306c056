use yew::prelude::*;

use crate::events::{format_instant, EventView};

#[derive(Properties, PartialEq)]
pub struct EventCardProps {
    pub event: EventView,
    pub on_delete: Callback<String>,
}

#[function_component(EventCard)]
pub fn event_card(props: &EventCardProps) -> Html {
    let record = &props.event.event;

    let delete = {
        let on_delete = props.on_delete.clone();
        let id = record.id.clone();
        Callback::from(move |_| on_delete.emit(id.clone()))
    };

    html! {
        <div
            class={classes!("event-card", format!("{}-priority", record.priority))}
            data-id={record.id.clone()}
        >
            <div class="event-content">
                <h3 class="event-title">{ &record.title }</h3>
                <p class="event-time">{ format_instant(&props.event.instant) }</p>
                if let Some(description) = &record.description {
                    <p class="event-description">{ description }</p>
                }
                <p class="event-priority">{ format!("Priority: {}", record.priority) }</p>
                if record.is_recurring {
                    <p class="event-recurring">{ "🔁 Recurring" }</p>
                }
            </div>
            <button class="delete-btn" onclick={delete}>{ "Delete" }</button>
        </div>
    }
}
