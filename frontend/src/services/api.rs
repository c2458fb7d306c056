//! Client for the remote event and auth API.
//!
//! Every operation performs exactly one round trip. Event operations take
//! the [`Notifier`] capability and surface each outcome as a toast *and* as
//! the returned result, so callers can react without anything being
//! swallowed or retried.

use gloo_net::http::{Request, Response};
use shared::api::{
    AuthTokenResponse, CreateEventRequest, ErrorResponse, EventResponse, LoginRequest,
    SignupRequest, SignupResponse,
};

use crate::components::toast::Notifier;
use crate::error::AppError;
use crate::events::{self, EventView};

const API_BASE_URL: &str = "http://localhost:8081/api";

pub async fn create_event(
    request: &CreateEventRequest,
    notify: &Notifier,
) -> Result<EventResponse, AppError> {
    let result = post_event(request).await;
    match &result {
        Ok(_) => notify.success("Event added!"),
        Err(err) => notify.error(err.message()),
    }
    result
}

async fn post_event(request: &CreateEventRequest) -> Result<EventResponse, AppError> {
    let response = Request::post(&format!("{API_BASE_URL}/events"))
        .json(request)
        .map_err(|e| AppError::Request(format!("Request failed: {e}")))?
        .send()
        .await
        .map_err(|e| AppError::Request(format!("Request failed: {e}")))?;

    if !response.ok() {
        return Err(AppError::Request(
            error_message(response, "Failed to add event").await,
        ));
    }

    response
        .json()
        .await
        .map_err(|e| AppError::Request(format!("Failed to parse response: {e}")))
}

pub async fn fetch_events(
    category: Option<&str>,
    notify: &Notifier,
) -> Result<Vec<EventView>, AppError> {
    let result = get_events(category).await;
    if let Err(err) = &result {
        notify.error(format!("Error fetching events: {}", err.message()));
    }
    result
}

async fn get_events(category: Option<&str>) -> Result<Vec<EventView>, AppError> {
    let response = Request::get(&events_url(category))
        .send()
        .await
        .map_err(|e| AppError::Request(format!("Request failed: {e}")))?;

    if !response.ok() {
        return Err(AppError::Request(
            error_message(response, "Failed to fetch events").await,
        ));
    }

    let records: Vec<EventResponse> = response
        .json()
        .await
        .map_err(|e| AppError::Request(format!("Failed to parse response: {e}")))?;

    Ok(events::normalize(records))
}

pub async fn delete_event(id: &str, notify: &Notifier) -> Result<(), AppError> {
    let result = send_delete(id).await;
    match &result {
        Ok(()) => notify.success("Event deleted!"),
        Err(err) => notify.error(format!("Error deleting event: {}", err.message())),
    }
    result
}

async fn send_delete(id: &str) -> Result<(), AppError> {
    let response = Request::delete(&format!("{API_BASE_URL}/events/{id}"))
        .send()
        .await
        .map_err(|e| AppError::Request(format!("Request failed: {e}")))?;

    if !response.ok() {
        return Err(AppError::Request(
            error_message(response, "Failed to delete event").await,
        ));
    }

    Ok(())
}

pub async fn login(request: &LoginRequest) -> Result<AuthTokenResponse, AppError> {
    let response = Request::post(&format!("{API_BASE_URL}/login"))
        .json(request)
        .map_err(|e| AppError::Request(format!("Request failed: {e}")))?
        .send()
        .await
        .map_err(|e| AppError::Request(format!("Request failed: {e}")))?;

    if !response.ok() {
        return Err(AppError::Request(
            error_message(response, "Login failed").await,
        ));
    }

    response
        .json()
        .await
        .map_err(|e| AppError::Request(format!("Failed to parse response: {e}")))
}

pub async fn signup(request: &SignupRequest) -> Result<SignupResponse, AppError> {
    let response = Request::post(&format!("{API_BASE_URL}/signup"))
        .json(request)
        .map_err(|e| AppError::Request(format!("Request failed: {e}")))?
        .send()
        .await
        .map_err(|e| AppError::Request(format!("Request failed: {e}")))?;

    if !response.ok() {
        return Err(AppError::Request(
            error_message(response, "Signup failed").await,
        ));
    }

    response
        .json()
        .await
        .map_err(|e| AppError::Request(format!("Failed to parse response: {e}")))
}

/// The `all` sentinel (or no category at all) requests the unfiltered set.
fn events_url(category: Option<&str>) -> String {
    match category.filter(|c| !c.eq_ignore_ascii_case("all")) {
        Some(category) => format!("{API_BASE_URL}/events?category={category}"),
        None => format!("{API_BASE_URL}/events"),
    }
}

/// Prefer the server-supplied `error` message, falling back to a generic
/// per-operation description when the body is not the expected shape.
async fn error_message(response: Response, fallback: &str) -> String {
    match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_url_unfiltered() {
        assert_eq!(events_url(None), "http://localhost:8081/api/events");
    }

    #[test]
    fn test_events_url_all_sentinel_is_unfiltered() {
        assert_eq!(events_url(Some("all")), "http://localhost:8081/api/events");
        assert_eq!(events_url(Some("ALL")), "http://localhost:8081/api/events");
    }

    #[test]
    fn test_events_url_with_category() {
        assert_eq!(
            events_url(Some("work")),
            "http://localhost:8081/api/events?category=work"
        );
    }
}
