//! HTTP boundary for the regional telemetry metrics service.
//!
//! The dataset is loaded once by [`server::serve`] and injected into the
//! router state; handlers only read it.

pub mod models;
pub mod routes;
pub mod server;
pub mod state;

pub use routes::build_router;
pub use server::serve;
pub use state::AppState;
