//! Error types for path queries.

use mg_core::StationId;
use thiserror::Error;

/// Errors raised by shortest-path queries.
///
/// Business-rule violations returned synchronously; never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("source and target must differ")]
    SameSourceAndTarget,

    #[error("no route exists between {source} and {target}")]
    NoRoute {
        source: StationId,
        target: StationId,
    },
}
