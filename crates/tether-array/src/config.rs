//! Array configuration parameters.

use tether_core::ArrayError;

/// Configuration for a [`ManagedArray`](crate::ManagedArray).
///
/// Validated at construction; the array keeps only what it needs
/// for growth afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Number of slots allocated up front.
    ///
    /// Default: 4.
    pub initial_capacity: usize,

    /// Largest capacity growth may reach.
    ///
    /// Default: [`ArrayConfig::UNBOUNDED`]. When doubling would pass this
    /// limit the capacity is clamped to it; growing an array that is
    /// already at the limit fails with [`ArrayError::CapacityOverflow`].
    pub max_capacity: usize,
}

impl ArrayConfig {
    /// Default initial slot count.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 4;

    /// No limit beyond what the allocator can address.
    pub const UNBOUNDED: usize = isize::MAX as usize;

    /// Create a config with the given initial capacity and no growth limit.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            max_capacity: Self::UNBOUNDED,
        }
    }

    /// Set the growth limit.
    pub fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Check that the settings are consistent.
    pub fn validate(&self) -> Result<(), ArrayError> {
        if self.initial_capacity > self.max_capacity {
            return Err(ArrayError::InvalidConfig {
                reason: format!(
                    "initial_capacity {} exceeds max_capacity {}",
                    self.initial_capacity, self.max_capacity
                ),
            });
        }
        if self.max_capacity > Self::UNBOUNDED {
            return Err(ArrayError::InvalidConfig {
                reason: format!(
                    "max_capacity {} exceeds the addressable limit {}",
                    self.max_capacity,
                    Self::UNBOUNDED
                ),
            });
        }
        Ok(())
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}

/// Next capacity on the doubling schedule.
///
/// An empty allocation grows to one slot. The result is clamped to
/// `max_capacity`; an error is returned only when no growth is possible.
pub(crate) fn doubled_capacity(current: usize, max_capacity: usize) -> Result<usize, ArrayError> {
    if current >= max_capacity {
        return Err(ArrayError::CapacityOverflow {
            capacity: current,
            max_capacity,
        });
    }
    let doubled = current.checked_mul(2).unwrap_or(usize::MAX).max(1);
    Ok(doubled.min(max_capacity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_starts_with_four_slots() {
        let config = ArrayConfig::default();
        assert_eq!(config.initial_capacity, 4);
        assert_eq!(config.max_capacity, ArrayConfig::UNBOUNDED);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn initial_above_max_is_rejected() {
        let config = ArrayConfig::new(10).with_max_capacity(8);
        assert!(matches!(
            config.validate(),
            Err(ArrayError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn max_above_addressable_limit_is_rejected() {
        let config = ArrayConfig::new(0).with_max_capacity(usize::MAX);
        assert!(matches!(
            config.validate(),
            Err(ArrayError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn doubling_schedule() {
        assert_eq!(doubled_capacity(0, 100).unwrap(), 1);
        assert_eq!(doubled_capacity(1, 100).unwrap(), 2);
        assert_eq!(doubled_capacity(4, 100).unwrap(), 8);
    }

    #[test]
    fn doubling_clamps_to_limit() {
        assert_eq!(doubled_capacity(40, 50).unwrap(), 50);
        assert_eq!(
            doubled_capacity(50, 50),
            Err(ArrayError::CapacityOverflow {
                capacity: 50,
                max_capacity: 50
            })
        );
    }

    #[test]
    fn doubling_near_usize_max_does_not_overflow() {
        let big = ArrayConfig::UNBOUNDED - 1;
        assert_eq!(
            doubled_capacity(big, ArrayConfig::UNBOUNDED).unwrap(),
            ArrayConfig::UNBOUNDED
        );
    }
}
