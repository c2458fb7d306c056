use gloo::storage::{LocalStorage, Storage};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

const AUTH_TOKEN_KEY: &str = "authToken";

/// Explicit store for the opaque session token.
///
/// The token's presence is the sole authentication signal this client
/// consumes; there is no expiry or signature check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStore;

impl SessionStore {
    pub fn token(&self) -> Option<String> {
        LocalStorage::get(AUTH_TOKEN_KEY).ok()
    }

    pub fn store_token(&self, token: &str) {
        if let Err(err) = LocalStorage::set(AUTH_TOKEN_KEY, token) {
            tracing::error!("failed to persist session token: {err}");
        }
    }

    pub fn clear(&self) {
        LocalStorage::delete(AUTH_TOKEN_KEY);
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

#[hook]
pub fn use_session() -> SessionStore {
    use_context::<SessionStore>().expect("session context is mounted at the app root")
}

/// Gate a protected page: unauthenticated visitors are redirected to the
/// login route. Returns whether the page may proceed; a page that gets
/// `false` renders nothing for this cycle.
#[hook]
pub fn use_auth_gate() -> bool {
    let session = use_session();
    let navigator = use_navigator().expect("auth gate runs under the router");
    let authenticated = session.is_authenticated();

    use_effect_with(authenticated, move |&authenticated| {
        if !authenticated {
            navigator.push(&Route::Login);
        }
    });

    authenticated
}
