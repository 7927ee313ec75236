//! HTTP API module for the take-home pay engine.
//!
//! This module provides the REST API endpoint for estimating net pay for
//! daily-wage construction work.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, CalculationResponse, DeductionLineView};
pub use state::AppState;
