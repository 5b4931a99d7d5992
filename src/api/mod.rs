//! HTTP API module for the take-home pay engine.
//!
//! This module provides the REST endpoints for stateless calculations,
//! per-user sessions with stored records, and the static educational
//! content.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{NavigateRequest, PayFormRequest, TimeField};
pub use response::{
    ApiError, CalculationResponse, DisclaimerResponse, EditResponse, EntitlementsResponse,
    NavigationResponse, RecordResponse, ReferenceLink, SessionCreated,
};
pub use state::{AppState, SessionMap};
