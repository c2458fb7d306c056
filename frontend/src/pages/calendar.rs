use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::calendar_grid::{calendar_entries, CalendarEntry, CalendarGrid};
use crate::components::category_filter::CategoryFilter;
use crate::components::toast::use_notifier;
use crate::services::api;
use crate::services::session::use_auth_gate;

/// Calendar mode. Keeps no event cache of its own: every category change
/// triggers a fresh fetch, a transform into grid entries, and a full
/// re-render of the grid.
#[function_component(CalendarPage)]
pub fn calendar_page() -> Html {
    let authenticated = use_auth_gate();
    let notify = use_notifier();
    let category = use_state(|| "all".to_string());
    let entries = use_state(Vec::<CalendarEntry>::new);
    let focus = use_state(|| {
        let now = Local::now();
        (now.year(), now.month())
    });

    {
        let entries = entries.clone();
        let notify = notify.clone();
        use_effect_with(
            (authenticated, (*category).clone()),
            move |(authenticated, category)| {
                if *authenticated {
                    let category = category.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        match api::fetch_events(Some(&category), &notify).await {
                            Ok(events) => entries.set(calendar_entries(&events)),
                            Err(err) => {
                                tracing::error!("failed to load calendar events: {err}")
                            }
                        }
                    });
                }
                || ()
            },
        );
    }

    let on_select = {
        let category = category.clone();
        Callback::from(move |selected: String| category.set(selected))
    };

    let on_prev = {
        let focus = focus.clone();
        Callback::from(move |_| {
            let (year, month) = *focus;
            focus.set(if month == 1 { (year - 1, 12) } else { (year, month - 1) });
        })
    };

    let on_next = {
        let focus = focus.clone();
        Callback::from(move |_| {
            let (year, month) = *focus;
            focus.set(if month == 12 { (year + 1, 1) } else { (year, month + 1) });
        })
    };

    if !authenticated {
        return html! {};
    }

    let (year, month) = *focus;

    html! {
        <div class="container">
            <CategoryFilter active={(*category).clone()} on_select={on_select} />
            <CalendarGrid
                {year}
                {month}
                entries={(*entries).clone()}
                on_prev={on_prev}
                on_next={on_next}
            />
        </div>
    }
}
