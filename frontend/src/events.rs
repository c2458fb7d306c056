//! Client-side event logic: the normalized event view, ordering, time-window
//! filtering, and form-to-wire conversion.
//!
//! Everything here is pure and clock-parameterized so the orchestration in
//! the pages can be exercised without a rendering surface.

use chrono::{DateTime, Duration, Local, Months, NaiveDateTime, TimeZone, Utc};
use shared::api::{CreateEventRequest, EventResponse};
use shared::models::Priority;

use crate::error::AppError;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill required fields";

/// An event record with its display instant attached.
///
/// The instant is recomputed from the wire string on every fetch; it is never
/// cached or mutated independently of the record it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct EventView {
    pub event: EventResponse,
    pub instant: DateTime<Utc>,
}

impl EventView {
    /// Attach the parsed instant to a wire record. Records whose timestamp
    /// cannot be parsed are dropped by the caller.
    pub fn from_response(event: EventResponse) -> Option<Self> {
        let instant = parse_event_time(&event.event_time)?;
        Some(EventView { event, instant })
    }
}

/// Parse the backend's `eventTime` string.
///
/// Creation sends an RFC 3339 timestamp with a designator, but the backend
/// echoes events back in naive ISO form, so both are accepted; the naive
/// form is read as UTC (the same instant the client submitted).
pub fn parse_event_time(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
        .map(|naive| naive.and_utc())
}

/// Attach display instants to a fetched batch, dropping records whose
/// timestamp cannot be parsed rather than poisoning the whole list.
pub fn normalize(records: Vec<EventResponse>) -> Vec<EventView> {
    let mut views = Vec::with_capacity(records.len());
    for record in records {
        match parse_event_time(&record.event_time) {
            Some(instant) => views.push(EventView { event: record, instant }),
            None => tracing::warn!(
                id = %record.id,
                event_time = %record.event_time,
                "dropping event with unparseable timestamp"
            ),
        }
    }
    views
}

/// Stable ascending sort by display instant; ties keep their input order.
pub fn sort_by_instant(events: &mut [EventView]) {
    events.sort_by_key(|view| view.instant);
}

/// The single record with the minimum display instant, first-encountered
/// winning ties. `None` on empty input.
pub fn next_upcoming(events: &[EventView]) -> Option<&EventView> {
    events.iter().min_by_key(|view| view.instant)
}

/// Time-window filter selected from the list page's dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFilter {
    Today,
    Week,
    Month,
    #[default]
    All,
}

impl TimeFilter {
    /// Unrecognized control values pass every record through unchanged.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "today" => TimeFilter::Today,
            "week" => TimeFilter::Week,
            "month" => TimeFilter::Month,
            _ => TimeFilter::All,
        }
    }
}

/// The list page's active selection: a server-side category scope or a
/// client-side time window. The two are never composed into one request:
/// a category scopes the fetch, a window filters the full set client-side.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewFilter {
    Category(String),
    Window(TimeFilter),
}

impl Default for ViewFilter {
    fn default() -> Self {
        ViewFilter::Category("all".to_string())
    }
}

impl ViewFilter {
    pub fn category_param(&self) -> Option<&str> {
        match self {
            ViewFilter::Category(category) => Some(category),
            ViewFilter::Window(_) => None,
        }
    }

    pub fn window(&self) -> TimeFilter {
        match self {
            ViewFilter::Category(_) => TimeFilter::All,
            ViewFilter::Window(filter) => *filter,
        }
    }

    pub fn active_category(&self) -> &str {
        match self {
            ViewFilter::Category(category) => category,
            ViewFilter::Window(_) => "all",
        }
    }
}

/// Apply a time-window filter against `now`, computed once by the caller.
///
/// `Today` matches the same calendar day in `now`'s zone; `Week` matches
/// `[now, now + 7 days]` inclusive on both ends; `Month` matches
/// `[now, now + 1 calendar month]` inclusive.
pub fn filter_by_window<Tz: TimeZone>(
    mut events: Vec<EventView>,
    filter: TimeFilter,
    now: &DateTime<Tz>,
) -> Vec<EventView> {
    match filter {
        TimeFilter::Today => {
            let today = now.date_naive();
            events.retain(|view| view.instant.with_timezone(&now.timezone()).date_naive() == today);
        }
        TimeFilter::Week => {
            let end = now.clone() + Duration::days(7);
            events.retain(|view| {
                let at = view.instant.with_timezone(&now.timezone());
                at >= *now && at <= end
            });
        }
        TimeFilter::Month => {
            if let Some(end) = now.clone().checked_add_months(Months::new(1)) {
                events.retain(|view| {
                    let at = view.instant.with_timezone(&now.timezone());
                    at >= *now && at <= end
                });
            }
        }
        TimeFilter::All => {}
    }
    events
}

/// Local display form of an instant, e.g. `Mar 14, 2025, 09:30 AM`.
pub fn format_instant(instant: &DateTime<Utc>) -> String {
    format_instant_in(instant, &Local)
}

fn format_instant_in<Tz: TimeZone>(instant: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    instant
        .with_timezone(tz)
        .format("%b %-d, %Y, %I:%M %p")
        .to_string()
}

/// Parse the value of a `datetime-local` form control.
pub fn parse_form_datetime(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// Convert a local wall-clock form value into the wire timestamp.
///
/// The instant is genuinely converted to UTC before the `Z` designator is
/// attached. `None` for wall-clock values that do not exist in `tz` (DST
/// gaps).
pub fn wire_event_time<Tz: TimeZone>(input: NaiveDateTime, tz: &Tz) -> Option<String> {
    let local = tz.from_local_datetime(&input).earliest()?;
    Some(
        local
            .with_timezone(&Utc)
            .format("%Y-%m-%dT%H:%M:%SZ")
            .to_string(),
    )
}

/// Raw values gathered from the creation form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFormInput {
    pub title: String,
    pub description: String,
    pub date_time: String,
    pub priority: String,
    pub is_recurring: bool,
    pub category: String,
}

/// Validate form input and produce the wire request.
///
/// Rejected input never reaches the network: an empty title or an
/// unparseable event time fails with a validation error first.
pub fn build_event_request<Tz: TimeZone>(
    input: &EventFormInput,
    tz: &Tz,
) -> Result<CreateEventRequest, AppError> {
    let event_time = parse_form_datetime(input.date_time.trim())
        .and_then(|naive| wire_event_time(naive, tz))
        .ok_or_else(|| AppError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()))?;

    let description = input.description.trim();
    let category = input.category.trim();

    let request = CreateEventRequest {
        title: input.title.trim().to_string(),
        description: (!description.is_empty()).then(|| description.to_string()),
        event_time,
        priority: Priority::parse(&input.priority),
        is_recurring: input.is_recurring,
        category: (!category.is_empty()).then(|| category.to_string()),
    };

    validator::Validate::validate(&request)
        .map_err(|_| AppError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()))?;

    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn view(id: &str, title: &str, event_time: &str) -> EventView {
        EventView::from_response(EventResponse {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            event_time: event_time.to_string(),
            priority: Priority::Medium,
            is_recurring: false,
            category: None,
        })
        .unwrap()
    }

    fn utc(raw: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(raw).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_parse_event_time_with_designator() {
        assert_eq!(
            parse_event_time("2025-03-14T09:30:00Z"),
            Some(utc("2025-03-14T09:30:00Z"))
        );
        // Offset forms normalize to the same instant.
        assert_eq!(
            parse_event_time("2025-03-14T11:30:00+02:00"),
            Some(utc("2025-03-14T09:30:00Z"))
        );
    }

    #[test]
    fn test_parse_event_time_naive_fallback() {
        assert_eq!(
            parse_event_time("2025-03-14T09:30:00"),
            Some(utc("2025-03-14T09:30:00Z"))
        );
        assert_eq!(
            parse_event_time("2025-03-14T09:30"),
            Some(utc("2025-03-14T09:30:00Z"))
        );
        assert_eq!(parse_event_time("next tuesday"), None);
    }

    #[test]
    fn test_from_response_drops_unparseable_time() {
        let record = EventResponse {
            id: "EVT-1".to_string(),
            title: "Broken".to_string(),
            description: None,
            event_time: "not a date".to_string(),
            priority: Priority::Low,
            is_recurring: false,
            category: None,
        };
        assert!(EventView::from_response(record).is_none());
    }

    #[test]
    fn test_sort_is_ascending_and_stable() {
        let mut events = vec![
            view("a", "A", "2025-03-14T10:00:00Z"),
            view("b", "B", "2025-03-14T09:00:00Z"),
            view("c", "C", "2025-03-14T09:00:00Z"),
        ];
        sort_by_instant(&mut events);

        let ids: Vec<&str> = events.iter().map(|v| v.event.id.as_str()).collect();
        assert_eq!(ids, ["b", "c", "a"]);
    }

    #[test]
    fn test_next_upcoming_is_stable_minimum() {
        let events = vec![
            view("a", "A", "2025-03-14T10:00:00Z"),
            view("b", "B", "2025-03-14T09:00:00Z"),
            view("c", "C", "2025-03-14T09:00:00Z"),
        ];
        assert_eq!(next_upcoming(&events).unwrap().event.id, "b");
    }

    #[test]
    fn test_next_upcoming_empty() {
        assert!(next_upcoming(&[]).is_none());
    }

    #[test]
    fn test_scenario_two_events_render_order_and_summary() {
        // [{time: T+1, title: A}, {time: T, title: B}] renders [B, A] and
        // summarizes B.
        let mut events = vec![
            view("1", "A", "2025-03-14T10:01:00Z"),
            view("2", "B", "2025-03-14T10:00:00Z"),
        ];
        assert_eq!(next_upcoming(&events).unwrap().event.title, "B");

        sort_by_instant(&mut events);
        let titles: Vec<&str> = events.iter().map(|v| v.event.title.as_str()).collect();
        assert_eq!(titles, ["B", "A"]);
    }

    #[test]
    fn test_time_filter_parse() {
        assert_eq!(TimeFilter::parse("today"), TimeFilter::Today);
        assert_eq!(TimeFilter::parse("week"), TimeFilter::Week);
        assert_eq!(TimeFilter::parse("month"), TimeFilter::Month);
        assert_eq!(TimeFilter::parse("all"), TimeFilter::All);
        assert_eq!(TimeFilter::parse("fortnight"), TimeFilter::All);
    }

    #[test]
    fn test_view_filter_never_composes_category_and_window() {
        let by_category = ViewFilter::Category("work".to_string());
        assert_eq!(by_category.category_param(), Some("work"));
        assert_eq!(by_category.window(), TimeFilter::All);

        let by_window = ViewFilter::Window(TimeFilter::Week);
        assert_eq!(by_window.category_param(), None);
        assert_eq!(by_window.window(), TimeFilter::Week);
        assert_eq!(by_window.active_category(), "all");
    }

    #[test]
    fn test_today_filter_matches_calendar_day_only() {
        let now = utc("2025-03-14T12:00:00Z");
        let events = vec![
            view("yesterday", "Y", "2025-03-13T23:59:00Z"),
            view("early", "E", "2025-03-14T00:00:00Z"),
            view("late", "L", "2025-03-14T23:59:00Z"),
            view("tomorrow", "T", "2025-03-15T00:00:00Z"),
        ];

        let kept = filter_by_window(events, TimeFilter::Today, &now);
        let ids: Vec<&str> = kept.iter().map(|v| v.event.id.as_str()).collect();
        assert_eq!(ids, ["early", "late"]);
    }

    #[test]
    fn test_today_filter_uses_local_calendar_day() {
        // 23:00Z on the 13th is already the 14th at +02:00.
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let now = utc("2025-03-14T12:00:00Z").with_timezone(&tz);
        let events = vec![view("eve", "E", "2025-03-13T23:00:00Z")];

        let kept = filter_by_window(events, TimeFilter::Today, &now);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_week_filter_inclusive_boundaries() {
        let now = utc("2025-03-14T12:00:00Z");
        let events = vec![
            view("past", "P", "2025-03-14T11:59:59Z"),
            view("start", "S", "2025-03-14T12:00:00Z"),
            view("boundary", "B", "2025-03-21T12:00:00Z"),
            view("beyond", "X", "2025-03-21T12:00:01Z"),
        ];

        let kept = filter_by_window(events, TimeFilter::Week, &now);
        let ids: Vec<&str> = kept.iter().map(|v| v.event.id.as_str()).collect();
        assert_eq!(ids, ["start", "boundary"]);
    }

    #[test]
    fn test_month_filter_inclusive_calendar_month() {
        let now = utc("2025-03-14T12:00:00Z");
        let events = vec![
            view("inside", "I", "2025-04-01T00:00:00Z"),
            view("boundary", "B", "2025-04-14T12:00:00Z"),
            view("beyond", "X", "2025-04-14T12:00:01Z"),
        ];

        let kept = filter_by_window(events, TimeFilter::Month, &now);
        let ids: Vec<&str> = kept.iter().map(|v| v.event.id.as_str()).collect();
        assert_eq!(ids, ["inside", "boundary"]);
    }

    #[test]
    fn test_month_filter_clamps_end_of_month() {
        // Jan 31 + 1 calendar month clamps to Feb 28 in a non-leap year.
        let now = utc("2025-01-31T12:00:00Z");
        let events = vec![
            view("clamped", "C", "2025-02-28T12:00:00Z"),
            view("march", "M", "2025-03-01T12:00:00Z"),
        ];

        let kept = filter_by_window(events, TimeFilter::Month, &now);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].event.id, "clamped");
    }

    #[test]
    fn test_all_filter_passes_everything() {
        let now = utc("2025-03-14T12:00:00Z");
        let events = vec![
            view("past", "P", "2001-01-01T00:00:00Z"),
            view("future", "F", "2099-01-01T00:00:00Z"),
        ];
        assert_eq!(filter_by_window(events, TimeFilter::All, &now).len(), 2);
    }

    #[test]
    fn test_format_instant_localizes() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let instant = utc("2025-03-14T09:30:00Z");
        assert_eq!(format_instant_in(&instant, &tz), "Mar 14, 2025, 11:30 AM");
    }

    #[test]
    fn test_wire_event_time_converts_to_utc() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let input = parse_form_datetime("2025-03-14T11:30").unwrap();
        assert_eq!(
            wire_event_time(input, &tz).as_deref(),
            Some("2025-03-14T09:30:00Z")
        );
    }

    #[test]
    fn test_wire_event_time_utc_is_identity() {
        let input = parse_form_datetime("2025-03-14T09:30").unwrap();
        assert_eq!(
            wire_event_time(input, &Utc).as_deref(),
            Some("2025-03-14T09:30:00Z")
        );
    }

    #[test]
    fn test_build_event_request_rejects_empty_title() {
        let input = EventFormInput {
            title: "   ".to_string(),
            date_time: "2025-03-14T09:30".to_string(),
            priority: "HIGH".to_string(),
            ..EventFormInput::default()
        };

        let err = build_event_request(&input, &Utc).unwrap_err();
        assert_eq!(err, AppError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
    }

    #[test]
    fn test_build_event_request_rejects_unparseable_time() {
        let input = EventFormInput {
            title: "Dentist".to_string(),
            date_time: String::new(),
            priority: "HIGH".to_string(),
            ..EventFormInput::default()
        };

        assert!(matches!(
            build_event_request(&input, &Utc),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_build_event_request_produces_wire_record() {
        let input = EventFormInput {
            title: "  Dentist  ".to_string(),
            description: String::new(),
            date_time: "2025-03-14T09:30".to_string(),
            priority: "high".to_string(),
            is_recurring: true,
            category: "health".to_string(),
        };

        let request = build_event_request(&input, &Utc).unwrap();
        assert_eq!(request.title, "Dentist");
        assert_eq!(request.description, None);
        assert_eq!(request.event_time, "2025-03-14T09:30:00Z");
        assert_eq!(request.priority, Priority::High);
        assert!(request.is_recurring);
        assert_eq!(request.category.as_deref(), Some("health"));
    }
}
