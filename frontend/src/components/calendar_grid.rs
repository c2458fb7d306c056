use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, Utc};
use yew::prelude::*;

use shared::models::Priority;

use crate::events::EventView;

const WEEKDAYS: &[&str] = &["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Entry shape consumed by the month grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEntry {
    pub id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    pub color: &'static str,
}

/// Fixed priority-to-color mapping for grid entries.
pub fn priority_color(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "#dc2626",
        Priority::Medium => "#f59e0b",
        Priority::Low => "#16a34a",
        Priority::Unknown => "#2563eb",
    }
}

/// Transform a fetched batch into grid entries.
pub fn calendar_entries(events: &[EventView]) -> Vec<CalendarEntry> {
    events
        .iter()
        .map(|view| CalendarEntry {
            id: view.event.id.clone(),
            title: view.event.title.clone(),
            start: view.instant,
            color: priority_color(view.event.priority),
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct CalendarGridProps {
    pub year: i32,
    pub month: u32,
    pub entries: Vec<CalendarEntry>,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
}

/// Month-grid widget: navigation bar, weekday header, six rows of day
/// cells with the month's entries colored by priority.
#[function_component(CalendarGrid)]
pub fn calendar_grid(props: &CalendarGridProps) -> Html {
    let Some(first) = NaiveDate::from_ymd_opt(props.year, props.month, 1) else {
        return html! {};
    };

    // Pad back to the Sunday on or before the 1st; 6 rows of 7 cover every
    // month layout.
    let start = first - Duration::days(i64::from(first.weekday().num_days_from_sunday()));
    let today = Local::now().date_naive();

    let on_prev = {
        let on_prev = props.on_prev.clone();
        Callback::from(move |_| on_prev.emit(()))
    };
    let on_next = {
        let on_next = props.on_next.clone();
        Callback::from(move |_| on_next.emit(()))
    };

    html! {
        <div class="calendar">
            <div class="calendar-toolbar">
                <button class="btn" onclick={on_prev}>{ "‹" }</button>
                <h2 class="calendar-title">{ first.format("%B %Y").to_string() }</h2>
                <button class="btn" onclick={on_next}>{ "›" }</button>
            </div>
            <div class="calendar-weekdays">
                { for WEEKDAYS.iter().map(|day| html! {
                    <span class="calendar-weekday">{ *day }</span>
                }) }
            </div>
            <div class="calendar-grid">
                { for (0..42).map(|offset| {
                    let day = start + Duration::days(offset);
                    day_cell(props, day, today)
                }) }
            </div>
        </div>
    }
}

fn day_cell(props: &CalendarGridProps, day: NaiveDate, today: NaiveDate) -> Html {
    let mut class = classes!("calendar-day");
    if day.month() != props.month {
        class.push("outside");
    }
    if day == today {
        class.push("today");
    }

    let entries = props
        .entries
        .iter()
        .filter(|entry| entry.start.with_timezone(&Local).date_naive() == day);

    html! {
        <div {class}>
            <span class="day-number">{ day.day() }</span>
            { for entries.map(|entry| html! {
                <div
                    class="calendar-event"
                    style={format!("background-color: {}", entry.color)}
                    title={entry.title.clone()}
                    data-id={entry.id.clone()}
                >
                    { &entry.title }
                </div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::api::EventResponse;

    fn view(priority: Priority) -> EventView {
        EventView::from_response(EventResponse {
            id: "EVT-1".to_string(),
            title: "Standup".to_string(),
            description: None,
            event_time: "2025-03-14T09:30:00Z".to_string(),
            priority,
            is_recurring: false,
            category: None,
        })
        .unwrap()
    }

    #[test]
    fn test_priority_color_mapping() {
        assert_eq!(priority_color(Priority::High), "#dc2626");
        assert_eq!(priority_color(Priority::Medium), "#f59e0b");
        assert_eq!(priority_color(Priority::Low), "#16a34a");
    }

    #[test]
    fn test_unrecognized_priority_defaults_to_blue() {
        assert_eq!(priority_color(Priority::Unknown), "#2563eb");
    }

    #[test]
    fn test_calendar_entries_transform() {
        let entries = calendar_entries(&[view(Priority::High)]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "EVT-1");
        assert_eq!(entries[0].title, "Standup");
        assert_eq!(entries[0].color, "#dc2626");
    }
}
