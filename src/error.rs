//! Error types for the `maxtable` crate

/// Errors that can occur while creating or growing a [`crate::MaxTable`]
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The slot array could not be allocated.
    ///
    /// This happens at creation or while growing. When it happens during
    /// growth, the table keeps its previous slot array and contents.
    #[error("failed to allocate a hash table of {slots} slots")]
    Allocation {
        /// Number of slots that were requested.
        slots: usize,
    },

    /// Doubling the capacity would overflow `usize`.
    #[error("hash table capacity overflow")]
    CapacityOverflow,

    /// A [`crate::Config`] was rejected.
    #[error("invalid hash table configuration: {0}")]
    InvalidConfig(&'static str),
}
