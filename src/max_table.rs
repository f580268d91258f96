//! # MaxTable
//!
//! An open-addressing hash table that maps fixed-width `i32` keys to `i32`
//! scores and only ever keeps the highest score seen for each key.
//!
//! Slots live in a single contiguous `Vec`, each one holding its key inline.
//! Collisions are resolved by linear probing. When a new key would bring the
//! occupancy to the configured percentage, the table doubles its capacity and
//! rehashes every entry into the new array before storing the key.
//!
//! The table has no internal locking. Mutation needs `&mut self`, so sharing
//! it between threads means wrapping it in a `Mutex` or keeping it on one
//! worker.
//!
//! ## Example
//!
//! ```rust
//! use maxtable::MaxTable;
//!
//! let mut table = MaxTable::<2>::new();
//!
//! assert!(table.insert_if_higher(&[1, 2], 10));
//! assert!(!table.insert_if_higher(&[1, 2], 5));
//! assert!(table.insert_if_higher(&[1, 2], 20));
//! assert_eq!(table.len(), 1);
//!
//! // The table grows on its own as entries are added.
//! for i in 0..100 {
//!     table.insert_if_higher(&[i, i], i);
//! }
//! assert!(table.capacity() >= 128);
//!
//! table.destroy();
//! ```

use std::fmt;

use crate::config::Config;
use crate::error::Error;
use crate::hash::hash_key;

/// A slot in the table. Empty slots keep a zeroed key.
#[derive(Copy, Clone)]
struct Slot<const N: usize> {
    key: [i32; N],
    value: i32,
    occupied: bool,
}

impl<const N: usize> Slot<N> {
    const EMPTY: Self = Self {
        key: [0; N],
        value: 0,
        occupied: false,
    };
}

/// A hash table of `[i32; N]` keys that retains the maximum score per key.
///
/// Values can only be inserted or raised; there is no removal, lookup by
/// reference, or iteration.
pub struct MaxTable<const N: usize> {
    slots: Vec<Slot<N>>,
    count: usize,
    config: Config,
}

impl<const N: usize> MaxTable<N> {
    /// Creates an empty table with the default [`Config`].
    ///
    /// # Panics
    ///
    /// Panics if the slot array cannot be allocated.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty table with the default [`Config`], reporting
    /// allocation failure instead of panicking.
    pub fn try_new() -> Result<Self, Error> {
        Self::try_with_config(Config::default())
    }

    /// Creates an empty table with the given sizing parameters.
    ///
    /// # Panics
    ///
    /// Panics if `config` is invalid or the slot array cannot be allocated.
    pub fn with_config(config: Config) -> Self {
        match Self::try_with_config(config) {
            Ok(table) => table,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates an empty table with the given sizing parameters.
    pub fn try_with_config(config: Config) -> Result<Self, Error> {
        config.validate()?;
        let slots = allocate_slots(config.base_capacity)?;
        tracing::trace!(
            capacity = config.base_capacity,
            key_width = N,
            "created hash table"
        );
        Ok(Self {
            slots,
            count: 0,
            config,
        })
    }

    /// Returns the total number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of distinct keys stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if no key has been inserted yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns occupied slots divided by capacity.
    #[inline]
    pub fn load_factor(&self) -> f64 {
        self.count as f64 / self.capacity() as f64
    }

    /// Returns the sizing parameters this table was built with.
    #[inline]
    pub fn config(&self) -> Config {
        self.config
    }

    /// Stores `value` for `key` if the key is new or `value` is strictly
    /// greater than the stored score. Returns whether anything changed.
    ///
    /// May grow and rehash the table.
    ///
    /// # Panics
    ///
    /// Panics if growing the table fails to allocate.
    pub fn insert_if_higher(&mut self, key: &[i32; N], value: i32) -> bool {
        match self.try_insert_if_higher(key, value) {
            Ok(updated) => updated,
            Err(err) => panic!("{err}"),
        }
    }

    /// Like [`MaxTable::insert_if_higher`], but reports allocation failure.
    ///
    /// A new key that would bring the table to its load threshold grows the
    /// table before it is written. If that growth fails, the error is returned
    /// and the table is left exactly as it was, without the new key.
    pub fn try_insert_if_higher(&mut self, key: &[i32; N], value: i32) -> Result<bool, Error> {
        let mut index = probe(&self.slots, key);
        let slot = &mut self.slots[index];
        if slot.occupied {
            if slot.value >= value {
                return Ok(false);
            }
            slot.value = value;
            return Ok(true);
        }

        let entries = self.count + 1;
        if self.over_threshold(entries, self.capacity()) {
            self.grow(entries)?;
            index = probe_empty(&self.slots, key);
        }

        self.slots[index] = Slot {
            key: *key,
            value,
            occupied: true,
        };
        self.count = entries;
        Ok(true)
    }

    /// Consumes the table and releases its storage.
    pub fn destroy(self) {
        tracing::trace!(
            capacity = self.capacity(),
            entries = self.count,
            "destroying hash table"
        );
    }

    #[inline]
    fn over_threshold(&self, entries: usize, capacity: usize) -> bool {
        entries * 100 / capacity >= self.config.max_load_percentage
    }

    /// Doubles the capacity until `entries` fit under the load threshold, then
    /// rehashes every entry in one pass. The current slots are only replaced
    /// once the new array is fully allocated.
    fn grow(&mut self, entries: usize) -> Result<(), Error> {
        let old_capacity = self.capacity();
        let mut new_capacity = old_capacity;
        while self.over_threshold(entries, new_capacity) {
            new_capacity = new_capacity
                .checked_mul(2)
                .ok_or(Error::CapacityOverflow)?;
        }
        let mut slots = allocate_slots(new_capacity)?;

        let mut count = 0;
        for slot in self.slots.iter().filter(|slot| slot.occupied) {
            let index = probe_empty(&slots, &slot.key);
            slots[index] = *slot;
            count += 1;
        }
        debug_assert_eq!(count, self.count);

        tracing::debug!(old_capacity, new_capacity, entries = count, "grew hash table");
        self.slots = slots;
        self.count = count;
        Ok(())
    }
}

impl<const N: usize> Default for MaxTable<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for MaxTable<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaxTable")
            .field("key_width", &N)
            .field("len", &self.count)
            .field("capacity", &self.capacity())
            .field("max_load_percentage", &self.config.max_load_percentage)
            .finish()
    }
}

#[cfg(test)]
thread_local! {
    static FAIL_ALLOCATIONS: std::cell::Cell<bool> = const { std::cell::Cell::new(false) };
}

#[cfg(test)]
fn allocation_disabled() -> bool {
    FAIL_ALLOCATIONS.with(|fail| fail.get())
}

#[cfg(not(test))]
#[inline]
fn allocation_disabled() -> bool {
    false
}

fn allocate_slots<const N: usize>(capacity: usize) -> Result<Vec<Slot<N>>, Error> {
    let mut slots = Vec::new();
    if allocation_disabled() || slots.try_reserve_exact(capacity).is_err() {
        tracing::warn!(slots = capacity, "hash table allocation failed");
        return Err(Error::Allocation { slots: capacity });
    }
    slots.resize(capacity, Slot::EMPTY);
    Ok(slots)
}

#[inline]
fn home<const N: usize>(slots: &[Slot<N>], key: &[i32; N]) -> usize {
    // Capacity is always a power of two.
    hash_key(key) as usize & (slots.len() - 1)
}

/// Finds the slot holding `key`, or the first empty slot on its probe path.
/// At least one slot must be empty or hold `key`.
fn probe<const N: usize>(slots: &[Slot<N>], key: &[i32; N]) -> usize {
    let mask = slots.len() - 1;
    let mut index = home(slots, key);
    loop {
        let slot = &slots[index];
        if !slot.occupied || slot.key == *key {
            return index;
        }
        index = (index + 1) & mask;
    }
}

/// Finds the first empty slot on the probe path of a key known to be absent.
fn probe_empty<const N: usize>(slots: &[Slot<N>], key: &[i32; N]) -> usize {
    let mask = slots.len() - 1;
    let mut index = home(slots, key);
    while slots[index].occupied {
        index = (index + 1) & mask;
    }
    index
}
