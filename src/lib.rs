//! # maxtable
//!
//! This crate provides a hash table for memoizing best-known scores, such as
//! the best value reached from a game state during a search. Keys are
//! fixed-width tuples of `i32`, values are `i32`, and the only mutation is
//! "insert, or raise if higher", so a stored score never goes down.
//!
//! The table uses open addressing with linear probing and doubles its
//! capacity once occupancy reaches [`config::MAX_LOAD_PERCENTAGE`]. Keys are
//! hashed with 64-bit FNV-1a.

pub mod config;
pub mod error;
pub mod hash;
pub mod max_table;

pub use config::Config;
pub use error::Error;
pub use max_table::MaxTable;
