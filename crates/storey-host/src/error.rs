//! Error types for host integration.

use std::error::Error;
use std::fmt;

use storey_core::ElementId;
use storey_layout::{ConfigError, RequestError};

/// Errors reported by a [`LayoutDocument`](crate::LayoutDocument).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostError {
    /// `begin` was called while another transaction was open.
    TransactionAlreadyOpen {
        /// Name of the transaction already open.
        name: String,
    },
    /// A mutating call was made outside a transaction.
    NoTransaction,
    /// The element does not exist or has the wrong kind.
    UnknownElement {
        /// The offending handle.
        id: ElementId,
    },
    /// An element of the same kind already has this name.
    DuplicateName {
        /// The clashing name.
        name: String,
    },
    /// The host refused the operation.
    Rejected {
        /// Host-supplied description.
        reason: String,
    },
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TransactionAlreadyOpen { name } => {
                write!(f, "transaction '{name}' is already open")
            }
            Self::NoTransaction => write!(f, "no open transaction"),
            Self::UnknownElement { id } => write!(f, "unknown element {id}"),
            Self::DuplicateName { name } => write!(f, "name '{name}' is already in use"),
            Self::Rejected { reason } => write!(f, "host rejected operation: {reason}"),
        }
    }
}

impl Error for HostError {}

/// Errors from [`ProjectSetup::run`](crate::ProjectSetup::run).
#[derive(Clone, Debug, PartialEq)]
pub enum SetupError {
    /// The layout configuration is invalid.
    Config(ConfigError),
    /// Strict validation rejected the collected parameters.
    Request(RequestError),
    /// The host failed; the transaction was rolled back.
    Host(HostError),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Request(e) => write!(f, "request: {e}"),
            Self::Host(e) => write!(f, "host: {e}"),
        }
    }
}

impl Error for SetupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Request(e) => Some(e),
            Self::Host(e) => Some(e),
        }
    }
}

impl From<ConfigError> for SetupError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<RequestError> for SetupError {
    fn from(e: RequestError) -> Self {
        Self::Request(e)
    }
}

impl From<HostError> for SetupError {
    fn from(e: HostError) -> Self {
        Self::Host(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_error_chains_source() {
        let err = SetupError::from(HostError::NoTransaction);
        assert_eq!(err.to_string(), "host: no open transaction");
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("no open transaction"));
    }

    #[test]
    fn request_error_converts() {
        match SetupError::from(RequestError::NoLevels) {
            SetupError::Request(RequestError::NoLevels) => {}
            other => panic!("expected Request(NoLevels), got {other:?}"),
        }
    }
}
