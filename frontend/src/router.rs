use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{
    calendar::CalendarPage, events::EventsPage, login::LoginPage, not_found::NotFound,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/calendar")]
    Calendar,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <EventsPage /> },
        Route::Calendar => html! { <CalendarPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
