//! HTTP API module for the SCHADS pay engine.
//!
//! This module provides the REST endpoints: `POST /calculate` prices a batch
//! of shifts and `GET /rates` lists the loaded rate table versions.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{
    ApiError, ApiErrorResponse, CalculationResponse, PayTotals, RateVersion, RatesResponse,
};
pub use state::AppState;
