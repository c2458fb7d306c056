mod components;
mod error;
mod events;
mod pages;
mod router;
mod services;

use yew::prelude::*;
use yew_router::BrowserRouter;

use crate::components::header::Header;
use crate::components::toast::ToastProvider;
use crate::router::{switch, Route};
use crate::services::session::SessionStore;
use crate::services::theme::ThemeStore;

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <ContextProvider<SessionStore> context={SessionStore::default()}>
                <ToastProvider>
                    <div id="app">
                        <Header />
                        <yew_router::Switch<Route> render={switch} />
                    </div>
                </ToastProvider>
            </ContextProvider<SessionStore>>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize tracing
    tracing_wasm::set_as_global_default();

    let themes = ThemeStore::default();
    themes.apply(themes.load());

    yew::Renderer::<App>::new().render();
}
