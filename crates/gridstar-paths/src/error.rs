//! Error types.
//!
//! Only input and misuse problems are errors. A search that runs out of
//! candidates without reaching the goal is a normal outcome
//! ([`SearchOutcome::Exhausted`](crate::SearchOutcome::Exhausted)), never a
//! [`SearchError`].

use std::fmt;

use gridstar_core::Point;
use thiserror::Error;

/// Failure while building a [`Graph`](crate::Graph) from an edge list.
///
/// Construction is all-or-nothing: when any record is rejected no graph is
/// returned.
#[derive(Error, Debug)]
pub enum GraphError {
    /// An edge record is missing an endpoint field or has a non-integer one.
    #[cfg(feature = "serde")]
    #[error("edge record #{index} is malformed: {source}")]
    MalformedEdge {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    /// The document is not a JSON array of edge records.
    #[cfg(feature = "serde")]
    #[error("edge list is not a JSON array: {0}")]
    Json(#[source] serde_json::Error),
    #[error("failed to read edge list: {0}")]
    Io(#[from] std::io::Error),
}

/// Which endpoint of a search was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EndpointRole {
    Start,
    Goal,
}

impl fmt::Display for EndpointRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Misuse of the [`Stepper`](crate::Stepper).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// `start` was called with a position that is not a vertex of the graph.
    #[error("{role} position {point} is not a vertex of the graph")]
    InvalidEndpoint { role: EndpointRole, point: Point },
    /// A step was requested before any session was started.
    #[error("no search session is active; call start first")]
    NotStarted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_endpoint_names_role_and_point() {
        let err = SearchError::InvalidEndpoint {
            role: EndpointRole::Goal,
            point: Point::new(9, -1),
        };
        assert_eq!(
            err.to_string(),
            "goal position (9, -1) is not a vertex of the graph"
        );
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: GraphError = io.into();
        assert!(matches!(err, GraphError::Io(_)));
        assert!(err.to_string().contains("missing"));
    }
}
