//! Sizing constants and their runtime override.

use crate::error::Error;

/// Number of slots a new table starts with.
pub const BASE_CAPACITY: usize = 16;

/// Occupancy percentage at or above which an insertion grows the table.
pub const MAX_LOAD_PERCENTAGE: usize = 75;

/// Sizing parameters for a [`crate::MaxTable`].
///
/// The defaults are [`BASE_CAPACITY`] and [`MAX_LOAD_PERCENTAGE`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Initial slot count. Must be a non-zero power of two.
    pub base_capacity: usize,
    /// Growth threshold in percent, in `1..=100`.
    pub max_load_percentage: usize,
}

impl Config {
    /// Checks that the table can be built and probed with these values.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.base_capacity.is_power_of_two() {
            return Err(Error::InvalidConfig(
                "base capacity must be a non-zero power of two",
            ));
        }
        if !(1..=100).contains(&self.max_load_percentage) {
            return Err(Error::InvalidConfig(
                "max load percentage must be between 1 and 100",
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_capacity: BASE_CAPACITY,
            max_load_percentage: MAX_LOAD_PERCENTAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_bad_capacity() {
        for base_capacity in [0, 3, 12] {
            let config = Config { base_capacity, ..Config::default() };
            assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
        }
    }

    #[test]
    fn test_rejects_bad_threshold() {
        for max_load_percentage in [0, 101] {
            let config = Config { max_load_percentage, ..Config::default() };
            assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
        }
        let full = Config { max_load_percentage: 100, ..Config::default() };
        assert_eq!(full.validate(), Ok(()));
    }
}
