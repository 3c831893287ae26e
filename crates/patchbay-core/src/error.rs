//! Error type for patch operations.
//!
//! Most disallowed gestures are not errors: they come back as
//! [`IgnoreReason`](crate::IgnoreReason)s and leave the state untouched. Only
//! failures that point at a programming defect surface as [`PatchError`].

use thiserror::Error;

use crate::jack::JackId;
use crate::signal::AdapterError;

/// Errors that can occur while mutating the patch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatchError {
    /// The signal graph refused an edge between two jacks.
    ///
    /// With correct module definitions this cannot happen, so it is logged
    /// at error level. Nothing is committed.
    #[error("cannot connect {from} to {to}: {cause}")]
    Connect {
        /// Source jack of the attempted wire.
        from: JackId,
        /// Destination jack of the attempted wire.
        to: JackId,
        /// Adapter failure.
        #[source]
        cause: AdapterError,
    },
}

impl PatchError {
    /// The underlying adapter failure.
    pub fn adapter_error(&self) -> &AdapterError {
        match self {
            Self::Connect { cause, .. } => cause,
        }
    }

    /// True if the graph reported a type mismatch.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.adapter_error(), AdapterError::TypeMismatch { .. })
    }
}
