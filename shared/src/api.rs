use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Priority;

// ============================================================================
// Event API Types
// ============================================================================

/// Event record as returned by `GET /api/events`.
///
/// `event_time` stays a raw ISO-8601 string here: the backend is loose about
/// the designator, so the client parses it into an instant at the point of
/// use rather than in the wire type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub event_time: String,
    pub priority: Priority,
    pub is_recurring: bool,
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    pub event_time: String,
    pub priority: Priority,
    pub is_recurring: bool,
    pub category: Option<String>,
}

// ============================================================================
// Auth API Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokenResponse {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupResponse {
    pub message: String,
}

// ============================================================================
// Error Types
// ============================================================================

/// Body shape of every non-2xx reply from the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
