//! Error types for Tether containers.
//!
//! Only conditions a caller can act on are represented here. Index and
//! capacity contract violations are not errors: they panic at the call
//! site with a message naming the offending value.

use std::error::Error;
use std::fmt;

/// Errors surfaced by the fallible (`try_*`) container operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// The allocator could not provide storage for the requested slots.
    AllocationFailed {
        /// Number of slots that were requested.
        requested: usize,
    },
    /// Doubling the capacity would overflow or pass the configured maximum.
    CapacityOverflow {
        /// Capacity at the time growth was attempted.
        capacity: usize,
        /// Largest capacity the container may grow to.
        max_capacity: usize,
    },
    /// A non-growing append was attempted on a full container.
    CapacityExceeded {
        /// The container's current capacity (equal to its length).
        capacity: usize,
    },
    /// An `ArrayConfig` failed validation.
    InvalidConfig {
        /// Description of the rejected setting.
        reason: String,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested } => {
                write!(f, "allocation failed: requested {requested} slots")
            }
            Self::CapacityOverflow {
                capacity,
                max_capacity,
            } => {
                write!(
                    f,
                    "capacity overflow: cannot grow {capacity} slots within limit {max_capacity}"
                )
            }
            Self::CapacityExceeded { capacity } => {
                write!(f, "capacity exceeded: all {capacity} slots are live")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid config: {reason}"),
        }
    }
}

impl Error for ArrayError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_numbers() {
        let err = ArrayError::CapacityExceeded { capacity: 8 };
        assert_eq!(err.to_string(), "capacity exceeded: all 8 slots are live");

        let err = ArrayError::CapacityOverflow {
            capacity: 16,
            max_capacity: 20,
        };
        assert_eq!(
            err.to_string(),
            "capacity overflow: cannot grow 16 slots within limit 20"
        );
    }

    #[test]
    fn allocation_failure_is_an_error() {
        let err: Box<dyn Error> = Box::new(ArrayError::AllocationFailed { requested: 3 });
        assert!(err.source().is_none());
        assert!(err.to_string().contains("3 slots"));
    }
}
