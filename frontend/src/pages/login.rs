use shared::api::{LoginRequest, SignupRequest};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::toast::use_notifier;
use crate::router::Route;
use crate::services::api;
use crate::services::session::use_session;

use super::input_value;

/// Login and signup cards with a client-side toggle between them.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("login page is rendered under the router");
    let notify = use_notifier();
    let show_signup = use_state(|| false);

    let login_username_ref = use_node_ref();
    let login_password_ref = use_node_ref();
    let signup_username_ref = use_node_ref();
    let signup_password_ref = use_node_ref();

    let show_signup_card = {
        let show_signup = show_signup.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            show_signup.set(true);
        })
    };

    let show_login_card = {
        let show_signup = show_signup.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            show_signup.set(false);
        })
    };

    let on_login = {
        let username_ref = login_username_ref.clone();
        let password_ref = login_password_ref.clone();
        let navigator = navigator.clone();
        let notify = notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = LoginRequest {
                username: input_value(&username_ref),
                password: input_value(&password_ref),
            };

            let navigator = navigator.clone();
            let notify = notify.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::login(&request).await {
                    Ok(auth) => {
                        session.store_token(&auth.token);
                        navigator.push(&Route::Home);
                    }
                    Err(err) => notify.error(err.message().to_string()),
                }
            });
        })
    };

    let on_signup = {
        let username_ref = signup_username_ref.clone();
        let password_ref = signup_password_ref.clone();
        let show_signup = show_signup.clone();
        let notify = notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = SignupRequest {
                username: input_value(&username_ref),
                password: input_value(&password_ref),
            };

            let show_signup = show_signup.clone();
            let notify = notify.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::signup(&request).await {
                    Ok(_) => {
                        notify.success("Signup successful! Please log in.");
                        show_signup.set(false);
                    }
                    Err(err) => notify.error(err.message().to_string()),
                }
            });
        })
    };

    html! {
        <div class="auth-container">
            <div class={if *show_signup { "auth-card hidden" } else { "auth-card" }}>
                <h2>{ "Log in" }</h2>
                <form onsubmit={on_login}>
                    <input ref={login_username_ref} type="text" placeholder="Username" />
                    <input ref={login_password_ref} type="password" placeholder="Password" />
                    <button type="submit" class="btn btn-primary">{ "Log in" }</button>
                </form>
                <p>
                    { "No account? " }
                    <a href="#" onclick={show_signup_card}>{ "Sign up" }</a>
                </p>
            </div>

            <div class={if *show_signup { "auth-card" } else { "auth-card hidden" }}>
                <h2>{ "Sign up" }</h2>
                <form onsubmit={on_signup}>
                    <input ref={signup_username_ref} type="text" placeholder="Username" />
                    <input ref={signup_password_ref} type="password" placeholder="Password" />
                    <button type="submit" class="btn btn-primary">{ "Sign up" }</button>
                </form>
                <p>
                    { "Already registered? " }
                    <a href="#" onclick={show_login_card}>{ "Log in" }</a>
                </p>
            </div>
        </div>
    }
}
