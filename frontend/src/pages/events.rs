use std::rc::Rc;

use chrono::Local;
use gloo::timers::callback::Interval;
use web_sys::{HtmlFormElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::category_filter::CategoryFilter;
use crate::components::event_list::EventList;
use crate::components::next_event::NextEventBanner;
use crate::components::toast::use_notifier;
use crate::events::{self, EventFormInput, EventView, TimeFilter, ViewFilter};
use crate::services::api;
use crate::services::session::use_auth_gate;

use super::{checkbox_checked, input_value, select_value, textarea_value};

const REFRESH_INTERVAL_MS: u32 = 10_000;

/// Refresh counter; the interval and successful mutations bump it to re-run
/// the fetch-and-render cycle with the current selection.
struct Tick(u32);

impl Reducible for Tick {
    type Action = ();

    fn reduce(self: Rc<Self>, _action: ()) -> Rc<Self> {
        Rc::new(Tick(self.0.wrapping_add(1)))
    }
}

#[derive(Properties, PartialEq)]
pub struct EventsPageProps {
    /// Category filtering is an optional capability of the page.
    #[prop_or(true)]
    pub category_filters: bool,
}

/// List mode: creation form, filters, card list, periodic refresh.
#[function_component(EventsPage)]
pub fn events_page(props: &EventsPageProps) -> Html {
    let authenticated = use_auth_gate();
    let notify = use_notifier();
    let events = use_state(Vec::<EventView>::new);
    let loading = use_state(|| true);
    let view_filter = use_state(ViewFilter::default);
    let refresh = use_reducer(|| Tick(0));

    let form_ref = use_node_ref();
    let title_ref = use_node_ref();
    let description_ref = use_node_ref();
    let date_time_ref = use_node_ref();
    let priority_ref = use_node_ref();
    let recurring_ref = use_node_ref();
    let category_ref = use_node_ref();

    // Fetch-and-render cycle: runs on entry, on every filter change, and on
    // every refresh tick. "Now" for the window filter is computed once per
    // cycle. A failed cycle is logged; the next tick is an independent try.
    {
        let events = events.clone();
        let loading = loading.clone();
        let notify = notify.clone();
        use_effect_with(
            (authenticated, (*view_filter).clone(), refresh.0),
            move |(authenticated, filter, _)| {
                if *authenticated {
                    let filter = filter.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        match api::fetch_events(filter.category_param(), &notify).await {
                            Ok(fetched) => {
                                let now = Local::now();
                                events.set(events::filter_by_window(
                                    fetched,
                                    filter.window(),
                                    &now,
                                ));
                            }
                            Err(err) => tracing::error!("refresh cycle failed: {err}"),
                        }
                        loading.set(false);
                    });
                }
                || ()
            },
        );
    }

    // Fire-and-forget refresh timer: ticks keep coming whether or not the
    // previous cycle has finished or failed.
    {
        let dispatcher = refresh.dispatcher();
        use_effect_with(authenticated, move |&authenticated| {
            let interval = authenticated
                .then(|| Interval::new(REFRESH_INTERVAL_MS, move || dispatcher.dispatch(())));
            move || drop(interval)
        });
    }

    let on_submit = {
        let notify = notify.clone();
        let dispatcher = refresh.dispatcher();
        let form_ref = form_ref.clone();
        let title_ref = title_ref.clone();
        let description_ref = description_ref.clone();
        let date_time_ref = date_time_ref.clone();
        let priority_ref = priority_ref.clone();
        let recurring_ref = recurring_ref.clone();
        let category_ref = category_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let input = EventFormInput {
                title: input_value(&title_ref),
                description: textarea_value(&description_ref),
                date_time: input_value(&date_time_ref),
                priority: select_value(&priority_ref),
                is_recurring: checkbox_checked(&recurring_ref),
                category: select_value(&category_ref),
            };

            // Rejected input never reaches the network.
            let request = match events::build_event_request(&input, &Local) {
                Ok(request) => request,
                Err(err) => {
                    notify.error(err.message().to_string());
                    return;
                }
            };

            let notify = notify.clone();
            let dispatcher = dispatcher.clone();
            let form_ref = form_ref.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::create_event(&request, &notify).await {
                    Ok(_) => {
                        if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                            form.reset();
                        }
                        dispatcher.dispatch(());
                    }
                    Err(err) => tracing::error!("failed to add event: {err}"),
                }
            });
        })
    };

    let on_delete = {
        let notify = notify.clone();
        let dispatcher = refresh.dispatcher();
        Callback::from(move |id: String| {
            let notify = notify.clone();
            let dispatcher = dispatcher.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::delete_event(&id, &notify).await {
                    // Only a successful reload updates the displayed list;
                    // a failed delete leaves it untouched until the next
                    // refresh.
                    Ok(()) => dispatcher.dispatch(()),
                    Err(err) => tracing::error!("failed to delete event: {err}"),
                }
            });
        })
    };

    let on_time_filter = {
        let view_filter = view_filter.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                view_filter.set(ViewFilter::Window(TimeFilter::parse(&select.value())));
            }
        })
    };

    let on_category = {
        let view_filter = view_filter.clone();
        Callback::from(move |category: String| {
            view_filter.set(ViewFilter::Category(category));
        })
    };

    if !authenticated {
        return html! {};
    }

    html! {
        <div class="container">
            <NextEventBanner events={(*events).clone()} />

            <form ref={form_ref} class="event-form" onsubmit={on_submit}>
                <input ref={title_ref} type="text" name="title" placeholder="Event title" />
                <input ref={date_time_ref} type="datetime-local" name="dateTime" />
                <textarea
                    ref={description_ref}
                    name="description"
                    placeholder="Description (optional)"
                />
                <select ref={priority_ref} name="priority">
                    <option value="HIGH">{ "High" }</option>
                    <option value="MEDIUM" selected={true}>{ "Medium" }</option>
                    <option value="LOW">{ "Low" }</option>
                </select>
                <select ref={category_ref} name="category">
                    <option value="">{ "No category" }</option>
                    <option value="work">{ "Work" }</option>
                    <option value="personal">{ "Personal" }</option>
                    <option value="health">{ "Health" }</option>
                    <option value="other">{ "Other" }</option>
                </select>
                <label class="recurring-label">
                    <input ref={recurring_ref} type="checkbox" name="recurring" />
                    { "Recurring" }
                </label>
                <button type="submit" class="btn btn-primary">{ "Add Event" }</button>
            </form>

            if props.category_filters {
                <CategoryFilter
                    active={view_filter.active_category().to_string()}
                    on_select={on_category}
                />
            }

            <select class="time-filter" onchange={on_time_filter}>
                <option value="all">{ "All" }</option>
                <option value="today">{ "Today" }</option>
                <option value="week">{ "This week" }</option>
                <option value="month">{ "This month" }</option>
            </select>

            if *loading {
                <div class="loading">
                    <div class="spinner"></div>
                </div>
            } else {
                <EventList events={(*events).clone()} on_delete={on_delete} />
            }
        </div>
    }
}
