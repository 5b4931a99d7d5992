//! Response types for the take-home pay API.
//!
//! This module defines the success bodies returned by each endpoint, the
//! error response structures, and the mapping from engine errors to HTTP
//! statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::content::{DISCLAIMER, LearnPanel, REFERENCE_LINKS, entitlements_for};
use crate::error::EngineError;
use crate::models::{ChartSegment, IncomeRecord, PayBreakdown, PayForm, PositionType};
use crate::session::SessionSnapshot;

/// A pay breakdown ready for display.
///
/// Amounts are rounded to cents here and nowhere earlier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// The rounded breakdown.
    pub breakdown: PayBreakdown,
    /// Pie chart segments.
    pub chart: Vec<ChartSegment>,
    /// Entitlements of the selected position type.
    pub entitlements: Vec<String>,
}

impl CalculationResponse {
    /// Builds the display view of a breakdown for a position type.
    pub fn new(breakdown: &PayBreakdown, position: PositionType) -> Self {
        let breakdown = breakdown.rounded();
        Self {
            chart: breakdown.chart_segments(),
            breakdown,
            entitlements: entitlements_for(position)
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }
}

/// A stored record as returned by the session endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordResponse {
    /// Position in the session's record list.
    pub index: usize,
    /// ISO week the record was first stored in.
    pub week: u32,
    /// The form the record was computed from.
    pub form: PayForm,
    /// The rounded breakdown and its chart.
    #[serde(flatten)]
    pub calculation: CalculationResponse,
}

impl RecordResponse {
    /// Builds the response for the record at `index`.
    pub fn new(index: usize, record: &IncomeRecord) -> Self {
        Self {
            index,
            week: record.week,
            form: record.form.clone(),
            calculation: CalculationResponse::new(&record.breakdown, record.form.position),
        }
    }
}

/// Returned when editing begins: the form to prefill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditResponse {
    /// Position of the record being edited.
    pub index: usize,
    /// The stored form.
    pub form: PayForm,
}

/// Returned after navigating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationResponse {
    /// The session after navigating.
    pub session: SessionSnapshot,
    /// The educational panel for the new section, if it has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panel: Option<LearnPanel>,
}

/// Returned when a session is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCreated {
    /// The new session's id.
    pub session_id: Uuid,
}

/// Entitlements for one position type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementsResponse {
    /// The position type.
    pub position: PositionType,
    /// Display name of the position type.
    pub label: String,
    /// Bullet points.
    pub entitlements: Vec<String>,
}

impl From<PositionType> for EntitlementsResponse {
    fn from(position: PositionType) -> Self {
        Self {
            position,
            label: position.to_string(),
            entitlements: entitlements_for(position)
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }
}

/// A named external resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceLink {
    /// Display name.
    pub name: String,
    /// Address.
    pub url: String,
}

/// The disclaimer and its reference links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisclaimerResponse {
    /// Disclaimer text.
    pub disclaimer: String,
    /// Where to read more.
    pub links: Vec<ReferenceLink>,
}

impl Default for DisclaimerResponse {
    fn default() -> Self {
        Self {
            disclaimer: DISCLAIMER.to_string(),
            links: REFERENCE_LINKS
                .iter()
                .map(|(name, url)| ReferenceLink {
                    name: name.to_string(),
                    url: url.to_string(),
                })
                .collect(),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidTaxTable { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            EngineError::InvalidInput { field, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    message,
                    format!("Correct the '{}' field and resubmit", field),
                ),
            },
            EngineError::RecordNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("RECORD_NOT_FOUND", message),
            },
            EngineError::NoRecordBeingEdited => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "NOT_EDITING",
                    message,
                    "Begin editing a record before submitting an update",
                ),
            },
            EngineError::SessionNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("SESSION_NOT_FOUND", message),
            },
        }
    }
}
