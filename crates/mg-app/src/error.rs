//! Error types for the mg-app service layer.

use mg_core::StationId;
use mg_line::TopologyError;
use mg_network::NetworkError;
use mg_route::RouteError;

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for callers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A station id was not found in the station directory.
    #[error("Unknown station: {0}")]
    UnknownStation(StationId),

    #[error("Topology error: {0}")]
    Topology(#[from] TopologyError),

    #[error("Route error: {0}")]
    Route(#[from] RouteError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),
}

/// Result type for mg-app operations.
pub type AppResult<T> = Result<T, AppError>;
