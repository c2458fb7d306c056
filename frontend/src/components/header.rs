use shared::models::Theme;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::services::session::use_session;
use crate::services::theme::ThemeStore;

#[function_component(Header)]
pub fn header() -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("header is rendered under the router");
    // Subscribing to the route keeps the logout button in step with
    // login/logout navigation.
    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    let themes = ThemeStore::default();
    let theme = use_state(|| themes.load());

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = theme.toggled();
            themes.apply(next);
            themes.save(next);
            theme.set(next);
        })
    };

    let logout = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            session.clear();
            navigator.push(&Route::Login);
        })
    };

    let show_logout = session.is_authenticated() && route != Route::Login;

    html! {
        <header class="header">
            <div class="container">
                <h1>{ "Event Reminder" }</h1>
                <nav>
                    <Link<Route> to={Route::Home}>{ "Events" }</Link<Route>>
                    { " | " }
                    <Link<Route> to={Route::Calendar}>{ "Calendar" }</Link<Route>>
                </nav>
                <button class="theme-toggle" onclick={toggle_theme}>
                    { if *theme == Theme::Dark { "☀" } else { "🌙" } }
                </button>
                if show_logout {
                    <button class="logout-btn" onclick={logout}>{ "Logout" }</button>
                }
            </div>
        </header>
    }
}
